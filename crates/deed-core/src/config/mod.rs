//! Reference data: the county table and abbreviation table.
//!
//! Both are loaded once at startup, validated, and never mutated afterwards.
//! Sharing them across concurrent validations needs no locking.

pub mod defaults;
pub mod reference;

pub use reference::{AbbreviationTable, CountyEntry, CountyTable, ReferenceData};
