//! Data models: records, outcomes, and reports.

pub mod money;
pub mod record;
pub mod report;

pub use record::{EnrichedRecord, RawRecord, StructuredRecord};
pub use report::{ValidationFailure, ValidationOutcome, ValidationReport};
