//! Synchronous, side-effect-free validation of request parameters.

pub mod error;

use crate::darksky::LatLon;
use crate::parameters::{language, Parameters};
use error::ValidationError;

/// Checks a [`Parameters`] snapshot against the domain rules of the API.
///
/// Implementations must be pure: no I/O, no mutation of the parameters.
pub trait Validate: Send + Sync {
    fn validate(&self, parameters: &Parameters) -> Result<(), ValidationError>;
}

/// The default rule set.
///
/// All rules are evaluated and their messages aggregated, so a caller sees
/// every violation in one round rather than fixing them one at a time.
/// Rules the type system already guarantees (unit-system membership,
/// well-formed dates, latitude and longitude travelling together) have no
/// runtime counterpart here.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validate for Validator {
    fn validate(&self, parameters: &Parameters) -> Result<(), ValidationError> {
        let mut messages = Vec::new();

        if parameters.api_key().trim().is_empty() {
            messages.push("The API key is required.".to_string());
        }

        let LatLon(latitude, longitude) = parameters.location();
        if !(-90.0..=90.0).contains(&latitude) {
            messages.push(format!(
                "The latitude {latitude} is outside of the valid -90..90 range."
            ));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            messages.push(format!(
                "The longitude {longitude} is outside of the valid -180..180 range."
            ));
        }

        if let Some(code) = parameters.language() {
            if !language::is_supported(code) {
                messages.push(format!("The language '{code}' is not supported."));
            }
        }

        if messages.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(messages))
        }
    }
}
