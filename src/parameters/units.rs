use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The unit systems accepted by the Dark Sky API.
///
/// `Auto` selects units based on the geographic location of the request;
/// the remaining systems are fixed. The serialized form is the lowercase
/// code the API expects (`auto`, `ca`, `uk2`, `us`, `si`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Auto,
    Ca,
    Uk2,
    Us,
    Si,
}

/// Error returned when parsing an unrecognized unit-system code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown unit system '{0}', expected one of: auto, ca, uk2, us, si")]
pub struct UnknownUnits(String);

impl Units {
    pub fn as_str(self) -> &'static str {
        match self {
            Units::Auto => "auto",
            Units::Ca => "ca",
            Units::Uk2 => "uk2",
            Units::Us => "us",
            Units::Si => "si",
        }
    }

    pub const fn all() -> &'static [Units] {
        &[Units::Auto, Units::Ca, Units::Uk2, Units::Us, Units::Si]
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Units {
    type Err = UnknownUnits;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Units::Auto),
            "ca" => Ok(Units::Ca),
            "uk2" => Ok(Units::Uk2),
            "us" => Ok(Units::Us),
            "si" => Ok(Units::Si),
            _ => Err(UnknownUnits(s.to_string())),
        }
    }
}
