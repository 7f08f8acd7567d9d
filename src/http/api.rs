//! The orchestrator: one parameters snapshot in, materialized weather data
//! out, with the single-vs-batch dispatch decision in between.

use std::collections::BTreeMap;

use crate::http::client::HttpClient;
use crate::http::error::TransportError;
use crate::http::request::{RequestFactory, RequestSet};
use crate::parameters::Parameters;
use crate::weather::data::WeatherData;

/// The outcome of one orchestrated call.
///
/// Forecasts and single-date time machines yield `Single`; a multi-date
/// time machine yields `Dated`, keyed by each date's identity so a caller
/// can look up a given date's result regardless of which request finished
/// first. A single-date query never comes back as a one-entry map.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherReport {
    Single(WeatherData),
    Dated(BTreeMap<String, WeatherData>),
}

impl WeatherReport {
    pub fn into_single(self) -> Option<WeatherData> {
        match self {
            WeatherReport::Single(data) => Some(data),
            WeatherReport::Dated(_) => None,
        }
    }

    pub fn into_dated(self) -> Option<BTreeMap<String, WeatherData>> {
        match self {
            WeatherReport::Single(_) => None,
            WeatherReport::Dated(reports) => Some(reports),
        }
    }
}

/// Drives one validated [`Parameters`] snapshot through the request factory
/// and the HTTP client, and wraps the raw responses into [`WeatherData`].
pub struct Api {
    client: Box<dyn HttpClient>,
    factory: Box<dyn RequestFactory>,
}

impl Api {
    pub fn new(client: Box<dyn HttpClient>, factory: Box<dyn RequestFactory>) -> Self {
        Self { client, factory }
    }

    pub async fn request(&self, parameters: &Parameters) -> Result<WeatherReport, TransportError> {
        match self.factory.create(parameters) {
            RequestSet::One(request) => {
                let response = self.client.request(&request).await?;
                Ok(WeatherReport::Single(WeatherData::new(
                    response.body,
                    response.headers,
                )))
            }
            RequestSet::Many(requests) => {
                let responses = self.client.concurrent_requests(&requests).await?;
                let reports = responses
                    .into_iter()
                    .map(|(id, response)| (id, WeatherData::new(response.body, response.headers)))
                    .collect();
                Ok(WeatherReport::Dated(reports))
            }
        }
    }
}
