//! The closed set of per-record failure kinds.

use serde::{Deserialize, Serialize};

/// Tag identifying what class of check a [`ValidationError`] came from.
///
/// Callers switch on this rather than on a type hierarchy; the wire form is
/// the kebab-case string returned by [`FailureKind::as_str`].
///
/// [`ValidationError`]: super::ValidationError
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
    /// A required record field is missing or ill-typed.
    MalformedInput,
    /// A date string does not parse as a strict ISO calendar date.
    MalformedDate,
    /// No abbreviation or fuzzy match cleared the similarity cutoff.
    CountyUnresolved,
    /// The written amount contains unrecognized tokens or invalid structure.
    UnparseableWrittenAmount,
    /// The recording date precedes the signing date.
    TemporalOrder,
    /// Numeric and written amounts differ beyond the tolerance.
    AmountDiscrepancy,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MalformedInput => "malformed-input",
            Self::MalformedDate => "malformed-date",
            Self::CountyUnresolved => "county-unresolved",
            Self::UnparseableWrittenAmount => "unparseable-written-amount",
            Self::TemporalOrder => "temporal-order",
            Self::AmountDiscrepancy => "amount-discrepancy",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
