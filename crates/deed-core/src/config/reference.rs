//! Loading and validation of the reference tables.

use std::collections::BTreeMap;
use std::path::Path;

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use super::defaults;
use crate::errors::ReferenceError;

/// One county in the reference table.
#[derive(Debug, Clone, PartialEq)]
pub struct CountyEntry {
    /// Authoritative spelling, unique within the table.
    pub canonical_name: String,
    /// Decimal fraction applied to the amount for closing costs.
    pub tax_rate: Decimal,
}

/// The county reference table.
///
/// Entries are held sorted by canonical name so iteration order, and with it
/// the fuzzy-match tie-break, is deterministic across runs.
#[derive(Debug, Clone, PartialEq)]
pub struct CountyTable {
    entries: Vec<CountyEntry>,
}

impl CountyTable {
    /// Parse the `{ "canonical_name": <tax_rate>, ... }` JSON form.
    ///
    /// `origin` names the source in error messages (a path, or `<string>`).
    pub fn from_json_str(json: &str, origin: &str) -> Result<Self, ReferenceError> {
        let map: BTreeMap<String, Decimal> =
            serde_json::from_str(json).map_err(|e| ReferenceError::Malformed {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        if map.is_empty() {
            return Err(ReferenceError::EmptyTable {
                path: origin.to_string(),
            });
        }

        for (county, rate) in &map {
            if *rate <= Decimal::ZERO || *rate >= Decimal::ONE {
                return Err(ReferenceError::InvalidRate {
                    county: county.clone(),
                    rate: *rate,
                });
            }
        }

        // BTreeMap iteration is already lexical by canonical name.
        let entries = map
            .into_iter()
            .map(|(canonical_name, tax_rate)| CountyEntry {
                canonical_name,
                tax_rate,
            })
            .collect();
        Ok(Self { entries })
    }

    pub fn load(path: &Path) -> Result<Self, ReferenceError> {
        let json = std::fs::read_to_string(path).map_err(|e| ReferenceError::Unreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&json, &path.display().to_string())
    }

    /// Entries in deterministic (lexical) order.
    pub fn entries(&self) -> &[CountyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Token expansions applied during county normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct AbbreviationTable {
    map: FxHashMap<String, String>,
}

impl Default for AbbreviationTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AbbreviationTable {
    /// The built-in table (see [`defaults::BUILTIN_ABBREVIATIONS`]).
    pub fn builtin() -> Self {
        let map = defaults::BUILTIN_ABBREVIATIONS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { map }
    }

    /// Parse the `{ "s.": "santa", ... }` JSON form, replacing the built-ins.
    /// Keys are normalized to lowercase to match tokenized input.
    pub fn from_json_str(json: &str, origin: &str) -> Result<Self, ReferenceError> {
        let raw: BTreeMap<String, String> =
            serde_json::from_str(json).map_err(|e| ReferenceError::Malformed {
                path: origin.to_string(),
                message: e.to_string(),
            })?;
        let map = raw
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();
        Ok(Self { map })
    }

    pub fn load(path: &Path) -> Result<Self, ReferenceError> {
        let json = std::fs::read_to_string(path).map_err(|e| ReferenceError::Unreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&json, &path.display().to_string())
    }

    /// Expansion for a lowercased token, if the table has one.
    pub fn expand(&self, token: &str) -> Option<&str> {
        self.map.get(token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// The immutable startup context handed to the validation engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    pub counties: CountyTable,
    pub abbreviations: AbbreviationTable,
}

impl ReferenceData {
    pub fn new(counties: CountyTable, abbreviations: AbbreviationTable) -> Self {
        Self {
            counties,
            abbreviations,
        }
    }

    /// Load the county table, and the abbreviation table when a path is
    /// given (built-ins otherwise). The only I/O the pipeline performs.
    pub fn load(
        counties_path: &Path,
        abbreviations_path: Option<&Path>,
    ) -> Result<Self, ReferenceError> {
        let counties = CountyTable::load(counties_path)?;
        let abbreviations = match abbreviations_path {
            Some(path) => AbbreviationTable::load(path)?,
            None => AbbreviationTable::builtin(),
        };
        tracing::debug!(
            counties = counties.len(),
            abbreviations = abbreviations.len(),
            "reference data loaded"
        );
        Ok(Self::new(counties, abbreviations))
    }
}
