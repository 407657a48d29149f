//! # deed-validation
//!
//! Deterministic validation and enrichment for structured deed records.
//! No AI judgment anywhere in the decision path: every check is a pure
//! computation over in-memory data, and every rejection carries a precise,
//! reproducible reason.
//!
//! ## Checks
//! 1. **County** — abbreviation expansion, normalized exact match, fuzzy
//!    fallback against the reference table; enriches with the tax rate
//! 2. **Temporal** — a deed cannot be recorded before it was signed
//! 3. **Amount** — the numeric figure must agree with the written words
//!
//! [`ValidationEngine`] runs all checks over one record, collects every
//! failure rather than stopping at the first, and computes closing costs
//! only when the record is clean.

pub mod checks;
pub mod engine;
pub mod similarity;
pub mod wordnum;

pub use engine::{ValidationConfig, ValidationEngine};
