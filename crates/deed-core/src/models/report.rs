//! Validation outcomes and the per-record report.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::format_usd;
use crate::errors::{FailureKind, ValidationError};

/// Accumulates the failures found while validating one record.
///
/// Created fresh per record. A record is accepted if and only if the outcome
/// holds zero failures; insertion order is check-invocation order and is
/// preserved into the report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationOutcome {
    failures: Vec<ValidationError>,
}

impl ValidationOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, failure: ValidationError) {
        self.failures.push(failure);
    }

    pub fn extend(&mut self, failures: impl IntoIterator<Item = ValidationError>) {
        self.failures.extend(failures);
    }

    pub fn is_accepted(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[ValidationError] {
        &self.failures
    }

    pub fn into_failures(self) -> Vec<ValidationError> {
        self.failures
    }
}

/// One failure entry in a report: kind tag plus rendered message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl From<&ValidationError> for ValidationFailure {
    fn from(error: &ValidationError) -> Self {
        Self {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

/// The complete, typed result of validating one record.
///
/// `county_canonical` and `tax_rate` are present whenever enrichment
/// succeeded, even if the record was rejected by another check.
/// `closing_cost` is present only on acceptance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub doc_id: Option<String>,
    pub accepted: bool,
    /// First failure's kind; the top-level rejection reason.
    pub primary_reason: Option<FailureKind>,
    pub county_canonical: Option<String>,
    pub tax_rate: Option<Decimal>,
    pub closing_cost: Option<Decimal>,
    pub failures: Vec<ValidationFailure>,
}

impl ValidationReport {
    fn label(&self) -> &str {
        self.doc_id.as_deref().unwrap_or("<record>")
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.accepted {
            writeln!(f, "{}: ACCEPTED", self.label())?;
            if let (Some(cost), Some(county), Some(rate)) =
                (self.closing_cost, &self.county_canonical, self.tax_rate)
            {
                let pct = (rate * Decimal::from(100)).normalize();
                writeln!(
                    f,
                    "  closing cost {} ({county} @ {pct}% tax rate)",
                    format_usd(cost)
                )?;
            }
        } else {
            let reason = self
                .primary_reason
                .map(FailureKind::as_str)
                .unwrap_or("unknown");
            writeln!(f, "{}: REJECTED ({reason})", self.label())?;
            if let Some(county) = &self.county_canonical {
                writeln!(f, "  county resolved to {county}")?;
            }
            for failure in &self.failures {
                writeln!(f, "  [{}] {}", failure.kind, failure.message)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_accepts_only_when_empty() {
        let mut outcome = ValidationOutcome::new();
        assert!(outcome.is_accepted());

        outcome.push(ValidationError::MalformedInput {
            field: "county",
            reason: "field is absent".to_string(),
        });
        assert!(!outcome.is_accepted());
        assert_eq!(outcome.failures().len(), 1);
    }

    #[test]
    fn accepted_rendering_carries_cost_and_rate() {
        let report = ValidationReport {
            doc_id: Some("DEED-0042".to_string()),
            accepted: true,
            primary_reason: None,
            county_canonical: Some("Santa Clara".to_string()),
            tax_rate: Some("0.011".parse().unwrap()),
            closing_cost: Some("13750".parse().unwrap()),
            failures: Vec::new(),
        };
        let text = report.to_string();
        assert!(text.contains("DEED-0042: ACCEPTED"));
        assert!(text.contains("$13,750.00"));
        assert!(text.contains("Santa Clara @ 1.1% tax rate"));
    }

    #[test]
    fn rejected_rendering_lists_every_failure() {
        let error = ValidationError::MalformedDate {
            field: "date_signed",
            value: "01/15/2024".to_string(),
            expected: "YYYY-MM-DD",
        };
        let report = ValidationReport {
            doc_id: None,
            accepted: false,
            primary_reason: Some(error.kind()),
            county_canonical: None,
            tax_rate: None,
            closing_cost: None,
            failures: vec![ValidationFailure::from(&error)],
        };
        let text = report.to_string();
        assert!(text.contains("<record>: REJECTED (malformed-date)"));
        assert!(text.contains("[malformed-date] field `date_signed` value '01/15/2024'"));
    }
}
