//! The request-side data model: the per-call [`Parameters`] snapshot and the
//! value types it is made of.

pub mod blocks;
pub mod date;
pub(crate) mod language;
pub mod units;

pub use blocks::Block;
pub use date::ReportDate;
pub use units::Units;

use crate::darksky::LatLon;

/// An immutable snapshot of everything one API call needs.
///
/// Assembled by the service façade from its seeded defaults plus the
/// per-call overrides, then handed read-only to the validator, the request
/// factory and the orchestrator. The presence of `dates` is what
/// distinguishes a time-machine query from a forecast query.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    api_key: String,
    location: LatLon,
    units: Option<Units>,
    language: Option<String>,
    extend: Option<String>,
    exclude: Option<Vec<Block>>,
    dates: Option<Vec<ReportDate>>,
}

impl Parameters {
    pub fn new(api_key: impl Into<String>, location: LatLon) -> Self {
        Self {
            api_key: api_key.into(),
            location,
            units: None,
            language: None,
            extend: None,
            exclude: None,
            dates: None,
        }
    }

    pub fn set_units(&mut self, units: Units) {
        self.units = Some(units);
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = Some(language.into());
    }

    pub fn set_extend(&mut self, extend: impl Into<String>) {
        self.extend = Some(extend.into());
    }

    /// Records the response blocks the caller asked for by excluding the
    /// complement. Asking for nothing (or for every block) leaves the
    /// response unrestricted.
    pub fn set_blocks(&mut self, blocks: &[Block]) {
        if blocks.is_empty() {
            return;
        }
        let excluded: Vec<Block> = Block::all()
            .iter()
            .copied()
            .filter(|block| !blocks.contains(block))
            .collect();
        self.exclude = (!excluded.is_empty()).then_some(excluded);
    }

    pub fn set_dates(&mut self, dates: Vec<ReportDate>) {
        self.dates = Some(dates);
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn location(&self) -> LatLon {
        self.location
    }

    pub fn units(&self) -> Option<Units> {
        self.units
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn extend(&self) -> Option<&str> {
        self.extend.as_deref()
    }

    pub fn exclude(&self) -> Option<&[Block]> {
        self.exclude.as_deref()
    }

    pub fn dates(&self) -> Option<&[ReportDate]> {
        self.dates.as_deref()
    }
}
