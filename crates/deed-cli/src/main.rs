//! `deed` binary: validate structured deed records against reference data.
//!
//! Exit codes: 0 when every record was accepted, 1 when any record was
//! rejected, 2 when the reference data could not be loaded.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use deed_core::config::ReferenceData;
use deed_core::errors::ValidationError;
use deed_core::models::{RawRecord, ValidationFailure, ValidationReport};
use deed_validation::ValidationEngine;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "deed",
    version,
    about = "Deterministic validation for extracted deed records"
)]
struct Cli {
    /// Record JSON files produced by the extraction step.
    #[arg(required = true)]
    records: Vec<PathBuf>,

    /// County reference table: JSON object of canonical name to tax rate.
    #[arg(long, default_value = "counties.json")]
    counties: PathBuf,

    /// Abbreviation table; the built-in defaults apply when omitted.
    #[arg(long)]
    abbreviations: Option<PathBuf>,

    /// Output machine-readable JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    deed_core::tracing::init_tracing();
    let cli = Cli::parse();

    // Reference data is the one fatal dependency: without it no record can
    // be validated, so abort before touching any record.
    let reference = match ReferenceData::load(&cli.counties, cli.abbreviations.as_deref()) {
        Ok(reference) => reference,
        Err(e) => {
            error!(code = e.code(), "{e}");
            eprintln!("fatal: {e}");
            return ExitCode::from(2);
        }
    };
    let engine = ValidationEngine::new(reference);

    let mut all_accepted = true;
    for path in &cli.records {
        let report = match read_record(path) {
            Ok(raw) => engine.validate_raw(raw),
            Err(failure) => unreadable_report(path, failure),
        };
        info!(
            record = %path.display(),
            accepted = report.accepted,
            "record validated"
        );
        all_accepted &= report.accepted;

        if cli.json {
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    error!(record = %path.display(), "cannot serialize report: {e}");
                    all_accepted = false;
                }
            }
        } else {
            print!("{report}");
        }
    }

    if all_accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

/// Read one record file. Failures here are per-record, not fatal: the
/// rejection report names the file and the run continues.
fn read_record(path: &Path) -> Result<RawRecord, ValidationError> {
    let text = std::fs::read_to_string(path).map_err(|e| ValidationError::MalformedInput {
        field: "record",
        reason: format!("cannot read {}: {e}", path.display()),
    })?;
    serde_json::from_str(&text).map_err(|e| ValidationError::MalformedInput {
        field: "record",
        reason: format!("invalid JSON in {}: {e}", path.display()),
    })
}

fn unreadable_report(path: &Path, failure: ValidationError) -> ValidationReport {
    ValidationReport {
        doc_id: Some(path.display().to_string()),
        accepted: false,
        primary_reason: Some(failure.kind()),
        county_canonical: None,
        tax_rate: None,
        closing_cost: None,
        failures: vec![ValidationFailure::from(&failure)],
    }
}
