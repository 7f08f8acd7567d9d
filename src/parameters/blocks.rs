use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The sections a Dark Sky response is composed of.
///
/// Used with the `exclude` query parameter to ask the service to omit
/// sections the caller is not interested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Block {
    Currently,
    Minutely,
    Hourly,
    Daily,
    Alerts,
    Flags,
}

/// Error returned when parsing an unrecognized response-block name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown response block '{0}'")]
pub struct UnknownBlock(String);

impl Block {
    pub fn as_str(self) -> &'static str {
        match self {
            Block::Currently => "currently",
            Block::Minutely => "minutely",
            Block::Hourly => "hourly",
            Block::Daily => "daily",
            Block::Alerts => "alerts",
            Block::Flags => "flags",
        }
    }

    pub const fn all() -> &'static [Block] {
        &[
            Block::Currently,
            Block::Minutely,
            Block::Hourly,
            Block::Daily,
            Block::Alerts,
            Block::Flags,
        ]
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Block {
    type Err = UnknownBlock;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "currently" => Ok(Block::Currently),
            "minutely" => Ok(Block::Minutely),
            "hourly" => Ok(Block::Hourly),
            "daily" => Ok(Block::Daily),
            "alerts" => Ok(Block::Alerts),
            "flags" => Ok(Block::Flags),
            _ => Err(UnknownBlock(s.to_string())),
        }
    }
}
