mod config;
mod darksky;
mod error;
mod http;
mod parameters;
mod validation;
mod weather;

pub use config::DarkSkyConfig;
pub use darksky::{DarkSky, LatLon};
pub use error::DarkSkyError;

pub use http::api::{Api, WeatherReport};
pub use http::client::{GzipHttpClient, HttpClient, RawResponse};
pub use http::error::TransportError;
pub use http::request::{DarkSkyRequestFactory, Request, RequestFactory, RequestSet};

pub use parameters::blocks::{Block, UnknownBlock};
pub use parameters::date::{InvalidReportDate, ReportDate};
pub use parameters::units::{UnknownUnits, Units};
pub use parameters::Parameters;

pub use validation::error::ValidationError;
pub use validation::{Validate, Validator};

pub use weather::alert::Alert;
pub use weather::data::WeatherData;
