//! Startup reference-data errors. Fatal to the whole run.

use rust_decimal::Decimal;

/// Errors loading the county or abbreviation reference tables.
///
/// Unlike [`ValidationError`], these abort the run before any record is
/// processed — validation cannot proceed without reference data.
///
/// [`ValidationError`]: super::ValidationError
#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    #[error("cannot read reference data at {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("malformed reference data at {path}: {message}")]
    Malformed { path: String, message: String },

    #[error("county reference table at {path} is empty")]
    EmptyTable { path: String },

    #[error("invalid tax rate {rate} for county '{county}': must be within (0, 1)")]
    InvalidRate { county: String, rate: Decimal },
}

impl ReferenceError {
    /// Stable code string for log and report output.
    pub fn code(&self) -> &'static str {
        "reference-data-unavailable"
    }
}
