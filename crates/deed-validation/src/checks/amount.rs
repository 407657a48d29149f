//! Amount consistency: numeric digits vs written words.

use deed_core::errors::ValidationError;
use rust_decimal::Decimal;
use tracing::debug;

use crate::wordnum;

/// Cross-check the numeric amount against the written-word amount.
///
/// The written phrase is parsed exactly; a parse failure is this check's
/// failure. The tolerance boundary is inclusive: a discrepancy of exactly
/// `tolerance` passes, anything strictly greater fails. All arithmetic is
/// decimal, so representation error cannot produce spurious failures.
pub fn check(
    numeric: Decimal,
    written: &str,
    tolerance: Decimal,
) -> Result<(), ValidationError> {
    let parsed = wordnum::parse(written)?;
    let discrepancy = (numeric - parsed).abs();

    if discrepancy > tolerance {
        return Err(ValidationError::AmountDiscrepancy {
            numeric,
            written: parsed,
            discrepancy,
        });
    }

    debug!(%numeric, %parsed, "amount: consistency check passed");
    Ok(())
}
