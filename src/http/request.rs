//! Turning a [`Parameters`] snapshot into the HTTP request(s) that answer it.

use crate::darksky::LatLon;
use crate::parameters::{Parameters, ReportDate};

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.darksky.net";

/// One outbound API request.
///
/// Immutable once constructed. The `id` is the identity of the request: the
/// canonical form of its target date, used to correlate a concurrent
/// response back to the date that asked for it. Requests without a date
/// carry an empty identity, which nothing reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    id: String,
    url: String,
    query: Vec<(String, String)>,
}

impl Request {
    pub fn new(id: impl Into<String>, url: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            query,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Query parameters in their serialization order. The order is fixed per
    /// key so that equal parameters always produce byte-identical requests.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }
}

/// What a [`RequestFactory`] produced for one snapshot: a lone request, or
/// one request per target date of a multi-date historical query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestSet {
    One(Request),
    Many(Vec<Request>),
}

/// Builds the request(s) a parameters snapshot calls for.
pub trait RequestFactory: Send + Sync {
    fn create(&self, parameters: &Parameters) -> RequestSet;
}

/// The default factory, targeting the two Dark Sky endpoint shapes:
/// `/forecast/{key}/{lat},{lon}` for current conditions and
/// `/forecast/{key}/{lat},{lon},{time}` for the time machine.
#[derive(Debug, Clone)]
pub struct DarkSkyRequestFactory {
    base_url: String,
}

impl DarkSkyRequestFactory {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn forecast_url(&self, parameters: &Parameters) -> String {
        let LatLon(latitude, longitude) = parameters.location();
        format!(
            "{}/forecast/{}/{},{}",
            self.base_url,
            parameters.api_key(),
            latitude,
            longitude
        )
    }

    fn time_machine_url(&self, parameters: &Parameters, date: &ReportDate) -> String {
        format!("{},{}", self.forecast_url(parameters), date.time_segment())
    }

    fn query(parameters: &Parameters) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(exclude) = parameters.exclude() {
            let blocks = exclude
                .iter()
                .map(|block| block.as_str())
                .collect::<Vec<_>>()
                .join(",");
            query.push(("exclude".to_string(), blocks));
        }
        if let Some(extend) = parameters.extend() {
            query.push(("extend".to_string(), extend.to_string()));
        }
        if let Some(language) = parameters.language() {
            query.push(("lang".to_string(), language.to_string()));
        }
        if let Some(units) = parameters.units() {
            query.push(("units".to_string(), units.as_str().to_string()));
        }
        query
    }
}

impl Default for DarkSkyRequestFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestFactory for DarkSkyRequestFactory {
    fn create(&self, parameters: &Parameters) -> RequestSet {
        let query = Self::query(parameters);
        match parameters.dates() {
            None | Some([]) => RequestSet::One(Request::new(
                "",
                self.forecast_url(parameters),
                query,
            )),
            Some([date]) => RequestSet::One(Request::new(
                date.id(),
                self.time_machine_url(parameters, date),
                query,
            )),
            Some(dates) => RequestSet::Many(
                dates
                    .iter()
                    .map(|date| {
                        Request::new(
                            date.id(),
                            self.time_machine_url(parameters, date),
                            query.clone(),
                        )
                    })
                    .collect(),
            ),
        }
    }
}
