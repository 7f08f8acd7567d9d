//! The main entry point for the Dark Sky API client.
//!
//! A [`DarkSky`] instance carries the API credential and the default request
//! options, and exposes two terminal operations: [`DarkSky::forecast`] for
//! current conditions and [`DarkSky::time_machine`] for historic (or future)
//! conditions at one or more explicit dates.

use bon::bon;

use crate::config::DarkSkyConfig;
use crate::error::DarkSkyError;
use crate::http::api::{Api, WeatherReport};
use crate::http::client::{GzipHttpClient, HttpClient};
use crate::http::request::DarkSkyRequestFactory;
use crate::parameters::{Block, Parameters, ReportDate, Units};
use crate::validation::{Validate, Validator};
use crate::weather::data::WeatherData;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second
/// (index 1). Both values are represented as `f64`.
///
/// # Examples
///
/// ```
/// use darksky::LatLon;
///
/// let boston = LatLon(42.3601, -71.0589);
/// assert_eq!(boston.0, 42.3601); // Latitude
/// assert_eq!(boston.1, -71.0589); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// The Dark Sky API service.
///
/// Construction seeds the per-call defaults (unit system, language, extended
/// blocks); each terminal call may override any of them. Every terminal call
/// snapshots the effective parameters, validates them, and only then touches
/// the network, so usage errors surface before any request is sent.
///
/// The instance holds a shared connection pool and can serve any number of
/// concurrent calls.
pub struct DarkSky {
    api_key: String,
    units: Option<Units>,
    language: Option<String>,
    extend: Option<String>,
    validator: Box<dyn Validate>,
    api: Api,
}

#[bon]
impl DarkSky {
    /// Creates a new `DarkSky` service.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.api_key(…)`: **Required.** The API credential.
    /// * `.units(Units)`: Optional. Default unit system for every request.
    /// * `.language(…)`: Optional. Default language for every request.
    /// * `.extend(…)`: Optional. Default extended-blocks value (the service
    ///   documents `"hourly"`).
    /// * `.base_url(…)`: Optional. Overrides the service endpoint; useful
    ///   for tests against a local mock server.
    /// * `.client(Box<dyn HttpClient>)`: Optional. Substitutes the transport
    ///   implementation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use darksky::{DarkSky, Units};
    ///
    /// let client = DarkSky::builder()
    ///     .api_key("your-api-key")
    ///     .units(Units::Si)
    ///     .language("en")
    ///     .build();
    /// ```
    #[builder]
    pub fn new(
        #[builder(into)] api_key: String,
        units: Option<Units>,
        #[builder(into)] language: Option<String>,
        #[builder(into)] extend: Option<String>,
        #[builder(into)] base_url: Option<String>,
        client: Option<Box<dyn HttpClient>>,
    ) -> Self {
        let factory = match base_url {
            Some(base_url) => DarkSkyRequestFactory::with_base_url(base_url),
            None => DarkSkyRequestFactory::new(),
        };
        let client = client.unwrap_or_else(|| Box::new(GzipHttpClient::new()));
        Self {
            api_key,
            units,
            language,
            extend,
            validator: Box::new(Validator),
            api: Api::new(client, Box::new(factory)),
        }
    }

    /// Creates a service from deserialized configuration values.
    pub fn from_config(config: DarkSkyConfig) -> Self {
        Self::builder()
            .api_key(config.key)
            .maybe_units(config.units)
            .maybe_language(config.language)
            .maybe_extend(config.extend)
            .base_url(config.base_url)
            .build()
    }

    /// Requests the weather forecast for a location.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.location(LatLon)`: **Required.** The coordinate to report on.
    /// * `.units(Units)` / `.language(…)` / `.extend(…)`: Optional. Override
    ///   the instance defaults for this call only.
    /// * `.blocks(Vec<Block>)`: Optional. The response sections the caller
    ///   wants; everything else is excluded from the response.
    ///
    /// # Errors
    ///
    /// Returns [`DarkSkyError::Validation`] before any network traffic when
    /// the effective parameters break a domain rule, and
    /// [`DarkSkyError::Transport`] when the network call fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use darksky::{DarkSky, LatLon, Units};
    ///
    /// # async fn run() -> Result<(), darksky::DarkSkyError> {
    /// let client = DarkSky::builder().api_key("your-api-key").build();
    ///
    /// let forecast = client
    ///     .forecast()
    ///     .location(LatLon(42.3601, -71.0589))
    ///     .units(Units::Si)
    ///     .call()
    ///     .await?;
    ///
    /// println!("timezone: {:?}", forecast.timezone());
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn forecast(
        &self,
        location: LatLon,
        units: Option<Units>,
        #[builder(into)] language: Option<String>,
        #[builder(into)] extend: Option<String>,
        blocks: Option<Vec<Block>>,
    ) -> Result<WeatherData, DarkSkyError> {
        let parameters = self.snapshot(location, units, language, extend, blocks, None);
        self.validator.validate(&parameters)?;
        match self.api.request(&parameters).await? {
            WeatherReport::Single(data) => Ok(data),
            // A forecast snapshot carries no dates, so the factory never fans out.
            WeatherReport::Dated(_) => unreachable!("forecast requests resolve to a single report"),
        }
    }

    /// Requests observed weather for one or more explicit dates.
    ///
    /// With a single date the result is [`WeatherReport::Single`]; with more
    /// than one date every request is dispatched concurrently and the result
    /// is [`WeatherReport::Dated`], keyed by each date's identity
    /// ([`ReportDate::id`]). The batch is all-or-nothing: if any member
    /// fails, the whole call fails.
    ///
    /// This method uses a builder pattern; the arguments of
    /// [`DarkSky::forecast`] apply, plus:
    ///
    /// * `.dates(Vec<ReportDate>)`: **Required.** The dates to report on. An
    ///   empty list degenerates to a forecast request.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chrono::NaiveDate;
    /// use darksky::{DarkSky, LatLon, ReportDate};
    ///
    /// # async fn run() -> Result<(), darksky::DarkSkyError> {
    /// let client = DarkSky::builder().api_key("your-api-key").build();
    ///
    /// let date = ReportDate::from(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    /// let report = client
    ///     .time_machine()
    ///     .location(LatLon(42.3601, -71.0589))
    ///     .dates(vec![date])
    ///     .call()
    ///     .await?;
    ///
    /// println!("{:?}", report.into_single());
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn time_machine(
        &self,
        location: LatLon,
        dates: Vec<ReportDate>,
        units: Option<Units>,
        #[builder(into)] language: Option<String>,
        #[builder(into)] extend: Option<String>,
        blocks: Option<Vec<Block>>,
    ) -> Result<WeatherReport, DarkSkyError> {
        let parameters = self.snapshot(location, units, language, extend, blocks, Some(dates));
        self.validator.validate(&parameters)?;
        Ok(self.api.request(&parameters).await?)
    }

    /// Merges the per-call overrides over the instance defaults into one
    /// immutable snapshot.
    fn snapshot(
        &self,
        location: LatLon,
        units: Option<Units>,
        language: Option<String>,
        extend: Option<String>,
        blocks: Option<Vec<Block>>,
        dates: Option<Vec<ReportDate>>,
    ) -> Parameters {
        let mut parameters = Parameters::new(self.api_key.clone(), location);
        if let Some(units) = units.or(self.units) {
            parameters.set_units(units);
        }
        if let Some(language) = language.or_else(|| self.language.clone()) {
            parameters.set_language(language);
        }
        if let Some(extend) = extend.or_else(|| self.extend.clone()) {
            parameters.set_extend(extend);
        }
        if let Some(blocks) = blocks {
            parameters.set_blocks(&blocks);
        }
        if let Some(dates) = dates {
            parameters.set_dates(dates);
        }
        parameters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DarkSkyError;
    use crate::http::client::RawResponse;
    use crate::http::error::TransportError;
    use crate::http::request::Request;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Records every dispatched request and answers with a body carrying the
    /// request identity, so tests can check both sides of the pipeline.
    #[derive(Clone, Default)]
    struct RecordingClient {
        seen: Arc<Mutex<Vec<Request>>>,
    }

    impl RecordingClient {
        fn seen(&self) -> Vec<Request> {
            self.seen.lock().unwrap().clone()
        }

        fn respond(&self, request: &Request) -> RawResponse {
            self.seen.lock().unwrap().push(request.clone());
            RawResponse {
                body: json!({"id": request.id()}),
                headers: HashMap::new(),
            }
        }
    }

    #[async_trait]
    impl HttpClient for RecordingClient {
        async fn request(&self, request: &Request) -> Result<RawResponse, TransportError> {
            Ok(self.respond(request))
        }

        async fn concurrent_requests(
            &self,
            requests: &[Request],
        ) -> Result<HashMap<String, RawResponse>, TransportError> {
            Ok(requests
                .iter()
                .map(|request| (request.id().to_string(), self.respond(request)))
                .collect())
        }
    }

    fn service(recorder: &RecordingClient) -> DarkSky {
        DarkSky::builder()
            .api_key("secret-key")
            .units(Units::Si)
            .language("de")
            .client(Box::new(recorder.clone()))
            .build()
    }

    fn boston() -> LatLon {
        LatLon(42.3601, -71.0589)
    }

    #[tokio::test]
    async fn call_overrides_win_over_instance_defaults() {
        let recorder = RecordingClient::default();
        let client = service(&recorder);

        client
            .forecast()
            .location(boston())
            .units(Units::Us)
            .call()
            .await
            .unwrap();

        let seen = recorder.seen();
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0].url(),
            "https://api.darksky.net/forecast/secret-key/42.3601,-71.0589"
        );
        let query: Vec<(&str, &str)> = seen[0]
            .query()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(query, [("lang", "de"), ("units", "us")]);
    }

    #[tokio::test]
    async fn a_validation_failure_sends_no_request() {
        let recorder = RecordingClient::default();
        let client = DarkSky::builder()
            .api_key("")
            .client(Box::new(recorder.clone()))
            .build();

        let err = client.forecast().location(boston()).call().await.unwrap_err();

        let DarkSkyError::Validation(err) = err else {
            panic!("expected a validation error");
        };
        assert!(err.messages()[0].contains("API key"));
        assert!(recorder.seen().is_empty());
    }

    #[tokio::test]
    async fn a_single_date_yields_a_single_report() {
        let recorder = RecordingClient::default();
        let client = service(&recorder);

        let report = client
            .time_machine()
            .location(boston())
            .dates(vec!["2020-01-01".parse().unwrap()])
            .call()
            .await
            .unwrap();

        assert!(matches!(report, WeatherReport::Single(_)));
        assert_eq!(recorder.seen().len(), 1);
    }

    #[tokio::test]
    async fn multiple_dates_yield_a_dated_report_keyed_by_identity() {
        let recorder = RecordingClient::default();
        let client = service(&recorder);

        let report = client
            .time_machine()
            .location(boston())
            .dates(vec![
                "2020-01-01".parse().unwrap(),
                "2020-01-02".parse().unwrap(),
            ])
            .call()
            .await
            .unwrap();

        let reports = report.into_dated().expect("expected a dated report");
        assert_eq!(reports.len(), 2);
        for id in ["2020-01-01", "2020-01-02"] {
            assert_eq!(reports[id].body(), &json!({"id": id}));
        }
        assert_eq!(recorder.seen().len(), 2);
    }
}
