use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A point in time a time-machine request asks about.
///
/// A calendar date is interpreted by the service as midnight local time at
/// the requested location; an instant pins the request to an exact moment.
///
/// ```
/// use darksky::ReportDate;
///
/// let date: ReportDate = "2020-01-01".parse().unwrap();
/// assert_eq!(date.to_string(), "2020-01-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportDate {
    Date(NaiveDate),
    Instant(DateTime<Utc>),
}

/// Error returned when a string is neither a calendar date nor an RFC 3339 instant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date specification '{0}', expected YYYY-MM-DD or an RFC 3339 instant")]
pub struct InvalidReportDate(String);

impl ReportDate {
    /// The identity of this date: the form used to key the result of a
    /// multi-date query and to correlate concurrent responses.
    pub fn id(&self) -> String {
        match self {
            ReportDate::Date(date) => date.format("%Y-%m-%d").to_string(),
            ReportDate::Instant(instant) => instant.to_rfc3339(),
        }
    }

    /// The time segment appended to a time-machine URL. Calendar dates
    /// become a local-time string, instants the UNIX timestamp the API
    /// accepts as an exact-moment form.
    pub fn time_segment(&self) -> String {
        match self {
            ReportDate::Date(date) => format!("{}T00:00:00", date.format("%Y-%m-%d")),
            ReportDate::Instant(instant) => instant.timestamp().to_string(),
        }
    }
}

impl From<NaiveDate> for ReportDate {
    fn from(date: NaiveDate) -> Self {
        ReportDate::Date(date)
    }
}

impl From<DateTime<Utc>> for ReportDate {
    fn from(instant: DateTime<Utc>) -> Self {
        ReportDate::Instant(instant)
    }
}

impl fmt::Display for ReportDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

impl FromStr for ReportDate {
    type Err = InvalidReportDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(ReportDate::Date(date));
        }
        DateTime::parse_from_rfc3339(s)
            .map(|instant| ReportDate::Instant(instant.with_timezone(&Utc)))
            .map_err(|_| InvalidReportDate(s.to_string()))
    }
}
