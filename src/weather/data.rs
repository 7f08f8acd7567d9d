//! Read-only views over decoded API responses.

use std::collections::HashMap;

use serde_json::Value;

use crate::weather::alert::Alert;

/// One decoded weather report: the JSON body of a response plus its headers.
///
/// Accessors are pure projections over the body; a section the service
/// omitted (or the caller excluded) reads as `None`. Two instances are equal
/// exactly when body and headers are structurally equal.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherData {
    body: Value,
    headers: HashMap<String, Vec<String>>,
}

impl WeatherData {
    pub fn new(body: Value, headers: HashMap<String, Vec<String>>) -> Self {
        Self { body, headers }
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn headers(&self) -> &HashMap<String, Vec<String>> {
        &self.headers
    }

    /// The latitude the report was issued for.
    pub fn latitude(&self) -> Option<f64> {
        self.body.get("latitude")?.as_f64()
    }

    /// The longitude the report was issued for.
    pub fn longitude(&self) -> Option<f64> {
        self.body.get("longitude")?.as_f64()
    }

    /// The IANA timezone name for the requested location.
    pub fn timezone(&self) -> Option<&str> {
        self.body.get("timezone")?.as_str()
    }

    /// The timezone offset in hours.
    pub fn offset(&self) -> Option<f64> {
        self.body.get("offset")?.as_f64()
    }

    /// Current conditions at the requested location and time.
    pub fn currently(&self) -> Option<&Value> {
        self.body.get("currently")
    }

    /// Minute-by-minute conditions for the next hour.
    pub fn minutely(&self) -> Option<&Value> {
        self.body.get("minutely")
    }

    /// Hour-by-hour conditions.
    pub fn hourly(&self) -> Option<&Value> {
        self.body.get("hourly")
    }

    /// Day-by-day conditions.
    pub fn daily(&self) -> Option<&Value> {
        self.body.get("daily")
    }

    /// Miscellaneous metadata about the request.
    pub fn flags(&self) -> Option<&Value> {
        self.body.get("flags")
    }

    /// Severe weather alerts pertinent to the requested location.
    pub fn alerts(&self) -> Option<Vec<Alert<'_>>> {
        Some(
            self.body
                .get("alerts")?
                .as_array()?
                .iter()
                .map(Alert::new)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers() -> HashMap<String, Vec<String>> {
        HashMap::from([("x-response-time".to_string(), vec!["0.123".to_string()])])
    }

    #[test]
    fn body_and_headers_read_back_unchanged() {
        let data = WeatherData::new(json!({"status": "success"}), headers());

        assert_eq!(data.body(), &json!({"status": "success"}));
        assert_eq!(data.headers(), &headers());
    }

    #[test]
    fn equality_is_structural() {
        let left = WeatherData::new(json!({"status": "success"}), headers());
        let right = WeatherData::new(json!({"status": "success"}), headers());
        let other = WeatherData::new(json!({"status": "failure"}), headers());

        assert_eq!(left, right);
        assert_ne!(left, other);
    }

    #[test]
    fn top_level_fields_are_projected() {
        let data = WeatherData::new(
            json!({
                "latitude": 42.3601,
                "longitude": -71.0589,
                "timezone": "America/New_York",
                "offset": -5.0,
                "currently": {"temperature": 3.2},
                "daily": {"data": []},
            }),
            HashMap::new(),
        );

        assert_eq!(data.latitude(), Some(42.3601));
        assert_eq!(data.longitude(), Some(-71.0589));
        assert_eq!(data.timezone(), Some("America/New_York"));
        assert_eq!(data.offset(), Some(-5.0));
        assert_eq!(data.currently(), Some(&json!({"temperature": 3.2})));
        assert_eq!(data.daily(), Some(&json!({"data": []})));
    }

    #[test]
    fn missing_sections_read_as_absent() {
        let data = WeatherData::new(json!({"timezone": "Europe/Berlin"}), HashMap::new());

        assert_eq!(data.latitude(), None);
        assert_eq!(data.currently(), None);
        assert_eq!(data.minutely(), None);
        assert_eq!(data.hourly(), None);
        assert_eq!(data.flags(), None);
        assert!(data.alerts().is_none());
    }

    #[test]
    fn alerts_wrap_each_array_member() {
        let data = WeatherData::new(
            json!({
                "alerts": [
                    {"title": "Flood Watch for Mason, WA"},
                    {"title": "High Wind Warning"},
                ],
            }),
            HashMap::new(),
        );

        let alerts = data.alerts().expect("expected alerts");
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].title(), Some("Flood Watch for Mason, WA"));
        assert_eq!(alerts[1].title(), Some("High Wind Warning"));
    }
}
