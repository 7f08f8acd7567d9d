use serde::{Deserialize, Serialize};

use crate::http::request::DEFAULT_BASE_URL;
use crate::parameters::Units;

/// Configuration values used to seed a [`DarkSky`](crate::DarkSky) instance.
///
/// Only the API credential is required; everything else has a sensible
/// default, so the struct deserializes from the minimal `{"key": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DarkSkyConfig {
    /// The API credential.
    pub key: String,

    /// Default unit system applied to every request.
    #[serde(default)]
    pub units: Option<Units>,

    /// Default language applied to every request.
    #[serde(default)]
    pub language: Option<String>,

    /// Default extended-blocks value applied to every request.
    #[serde(default)]
    pub extend: Option<String>,

    /// Base URL of the weather service.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
