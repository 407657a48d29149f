//! Temporal consistency: a deed cannot be recorded before it was signed.

use chrono::NaiveDate;
use deed_core::constants::DATE_FORMAT;
use deed_core::errors::ValidationError;
use tracing::debug;

/// Check the signing/recording order of a record's dates.
///
/// Each date that fails to parse as strict ISO `YYYY-MM-DD` contributes its
/// own `malformed-date` failure; the ordering comparison runs only when both
/// dates are valid. An empty result means the check passed.
pub fn check(date_signed: &str, date_recorded: &str) -> Vec<ValidationError> {
    let mut failures = Vec::new();

    let signed = match parse_iso("date_signed", date_signed) {
        Ok(date) => Some(date),
        Err(failure) => {
            failures.push(failure);
            None
        }
    };
    let recorded = match parse_iso("date_recorded", date_recorded) {
        Ok(date) => Some(date),
        Err(failure) => {
            failures.push(failure);
            None
        }
    };

    if let (Some(signed), Some(recorded)) = (signed, recorded) {
        if recorded < signed {
            failures.push(ValidationError::TemporalOrder {
                signed,
                recorded,
                gap_days: (recorded - signed).num_days(),
            });
        } else {
            debug!(%signed, %recorded, "temporal: order check passed");
        }
    }

    failures
}

fn parse_iso(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ValidationError::MalformedDate {
        field,
        value: value.to_string(),
        expected: "YYYY-MM-DD",
    })
}
