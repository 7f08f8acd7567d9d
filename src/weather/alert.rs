use serde_json::Value;

/// A view over one severe-weather alert in a response.
///
/// Every accessor distinguishes "key absent" (`None`) from a present value;
/// downstream code branches on that, so absence is never papered over with
/// a default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alert<'a> {
    alert: &'a Value,
}

impl<'a> Alert<'a> {
    pub fn new(alert: &'a Value) -> Self {
        Self { alert }
    }

    /// A detailed description of the alert.
    pub fn description(&self) -> Option<&'a str> {
        self.alert.get("description")?.as_str()
    }

    /// The UNIX time at which the alert will expire.
    pub fn expires(&self) -> Option<i64> {
        self.alert.get("expires")?.as_i64()
    }

    /// The names of the regions covered by the alert.
    pub fn regions(&self) -> Option<Vec<&'a str>> {
        Some(
            self.alert
                .get("regions")?
                .as_array()?
                .iter()
                .filter_map(Value::as_str)
                .collect(),
        )
    }

    /// The severity: `advisory`, `watch` or `warning`.
    pub fn severity(&self) -> Option<&'a str> {
        self.alert.get("severity")?.as_str()
    }

    /// The UNIX time at which the alert was issued.
    pub fn time(&self) -> Option<i64> {
        self.alert.get("time")?.as_i64()
    }

    /// A brief description of the alert.
    pub fn title(&self) -> Option<&'a str> {
        self.alert.get("title")?.as_str()
    }

    /// An HTTP(S) URI with detailed information about the alert.
    pub fn uri(&self) -> Option<&'a str> {
        self.alert.get("uri")?.as_str()
    }
}
