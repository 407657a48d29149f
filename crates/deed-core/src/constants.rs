//! Shared constants for the deed validation pipeline.

use rust_decimal::Decimal;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Strict ISO-8601 calendar date format expected on record dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Minimum normalized similarity score a fuzzy county candidate must reach.
pub const DEFAULT_SIMILARITY_CUTOFF: f64 = 0.6;

/// Maximum tolerated gap between the numeric and written amounts (one cent).
///
/// The boundary is inclusive: a discrepancy of exactly one cent passes.
pub fn default_amount_tolerance() -> Decimal {
    Decimal::new(1, 2)
}
