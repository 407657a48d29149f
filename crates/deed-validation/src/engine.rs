//! ValidationEngine: runs every check over one record, aggregates all
//! failures rather than stopping at the first, and computes closing costs
//! only for clean records.

use deed_core::config::ReferenceData;
use deed_core::constants::{default_amount_tolerance, DEFAULT_SIMILARITY_CUTOFF};
use deed_core::models::{
    EnrichedRecord, RawRecord, StructuredRecord, ValidationFailure, ValidationOutcome,
    ValidationReport,
};
use rust_decimal::Decimal;
use tracing::debug;

use crate::checks::{amount, county::CountyResolver, temporal};

/// Configuration for the validation engine.
///
/// Both values are pinned policy; changing either changes which records are
/// accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationConfig {
    /// Minimum similarity score a fuzzy county candidate must reach.
    pub similarity_cutoff: f64,
    /// Maximum tolerated numeric-vs-written discrepancy (inclusive).
    pub amount_tolerance: Decimal,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            similarity_cutoff: DEFAULT_SIMILARITY_CUTOFF,
            amount_tolerance: default_amount_tolerance(),
        }
    }
}

/// The validation orchestrator.
///
/// Constructed once from the immutable reference data; validating a record
/// takes `&self` and shares nothing mutable, so one engine can serve any
/// number of independent records.
pub struct ValidationEngine {
    resolver: CountyResolver,
    config: ValidationConfig,
}

impl ValidationEngine {
    pub fn new(reference: ReferenceData) -> Self {
        Self::with_config(reference, ValidationConfig::default())
    }

    pub fn with_config(reference: ReferenceData, config: ValidationConfig) -> Self {
        let resolver = CountyResolver::new(&reference, config.similarity_cutoff);
        Self { resolver, config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a record as it arrived from the extraction step.
    ///
    /// A failed shape check reports its `malformed-input` failures and runs
    /// no business checks; field values cannot be trusted at that point.
    pub fn validate_raw(&self, raw: RawRecord) -> ValidationReport {
        let doc_id = raw.doc_id.clone();
        match StructuredRecord::from_raw(raw) {
            Ok(record) => self.validate(&record),
            Err(failures) => {
                debug!(
                    failures = failures.len(),
                    "shape check failed, business checks skipped"
                );
                let mut outcome = ValidationOutcome::new();
                outcome.extend(failures);
                build_report(doc_id, None, outcome)
            }
        }
    }

    /// Validate a shape-checked record.
    pub fn validate(&self, record: &StructuredRecord) -> ValidationReport {
        let mut outcome = ValidationOutcome::new();

        // County first: its enrichment feeds the cost computation.
        let enriched = match self.resolver.resolve(&record.county_raw) {
            Ok(resolved) => Some(EnrichedRecord {
                record: record.clone(),
                county_canonical: resolved.canonical_name,
                tax_rate: resolved.tax_rate,
            }),
            Err(failure) => {
                outcome.push(failure);
                None
            }
        };

        // The remaining checks always run, even after a failure, so the
        // report lists everything wrong with the record in one pass.
        outcome.extend(temporal::check(&record.date_signed, &record.date_recorded));
        if let Err(failure) = amount::check(
            record.amount_numeric,
            &record.amount_written,
            self.config.amount_tolerance,
        ) {
            outcome.push(failure);
        }

        debug!(
            accepted = outcome.is_accepted(),
            failures = outcome.failures().len(),
            "validation complete"
        );
        build_report(record.doc_id.clone(), enriched, outcome)
    }
}

fn build_report(
    doc_id: Option<String>,
    enriched: Option<EnrichedRecord>,
    outcome: ValidationOutcome,
) -> ValidationReport {
    let accepted = outcome.is_accepted();
    // Acceptance implies a successful enrichment: an unresolved county is
    // itself a failure, so a clean outcome always has a tax rate to use.
    let closing_cost = if accepted {
        enriched.as_ref().map(EnrichedRecord::closing_cost)
    } else {
        None
    };

    ValidationReport {
        doc_id,
        accepted,
        primary_reason: outcome.failures().first().map(|f| f.kind()),
        county_canonical: enriched.as_ref().map(|e| e.county_canonical.clone()),
        tax_rate: enriched.map(|e| e.tax_rate),
        closing_cost,
        failures: outcome.failures().iter().map(ValidationFailure::from).collect(),
    }
}
