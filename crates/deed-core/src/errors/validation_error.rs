//! Per-record validation failures.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::kind::FailureKind;
use super::wordnum_error::WordNumberError;
use crate::models::money::format_usd;

/// A single per-record validation failure.
///
/// One variant per failure kind; each carries the concrete offending values
/// so the rendered message is fully reproducible for fixed input. Per-record
/// failures are collected, never thrown past the orchestrator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing or ill-typed field `{field}`: {reason}")]
    MalformedInput { field: &'static str, reason: String },

    #[error("field `{field}` value '{value}' is not a valid {expected} calendar date")]
    MalformedDate {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("cannot resolve county '{input}' to any known county; known: {}", .known.join(", "))]
    CountyUnresolved { input: String, known: Vec<String> },

    #[error("unparseable written amount: {0}")]
    UnparseableWrittenAmount(#[from] WordNumberError),

    #[error(
        "deed recorded on {recorded} but not signed until {signed} ({} day(s) after recording)",
        .gap_days.abs()
    )]
    TemporalOrder {
        signed: NaiveDate,
        recorded: NaiveDate,
        /// Recorded minus signed, in days. Negative on violation.
        gap_days: i64,
    },

    #[error(
        "amount mismatch: {} (numeric digits) vs {} (written words); discrepancy {}",
        format_usd(*.numeric),
        format_usd(*.written),
        format_usd(*.discrepancy)
    )]
    AmountDiscrepancy {
        numeric: Decimal,
        written: Decimal,
        discrepancy: Decimal,
    },
}

impl ValidationError {
    /// The kind tag callers and reports switch on.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::MalformedInput { .. } => FailureKind::MalformedInput,
            Self::MalformedDate { .. } => FailureKind::MalformedDate,
            Self::CountyUnresolved { .. } => FailureKind::CountyUnresolved,
            Self::UnparseableWrittenAmount(_) => FailureKind::UnparseableWrittenAmount,
            Self::TemporalOrder { .. } => FailureKind::TemporalOrder,
            Self::AmountDiscrepancy { .. } => FailureKind::AmountDiscrepancy,
        }
    }
}
