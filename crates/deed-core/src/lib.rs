//! # deed-core
//!
//! Foundation crate for the deed validation pipeline.
//! Defines all shared types, errors, reference data, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::{AbbreviationTable, CountyEntry, CountyTable, ReferenceData};
pub use errors::{FailureKind, ReferenceError, ValidationError, WordNumberError};
pub use models::{
    EnrichedRecord, RawRecord, StructuredRecord, ValidationOutcome, ValidationReport,
};
