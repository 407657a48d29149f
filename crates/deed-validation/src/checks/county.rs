//! County resolution: abbreviation expansion, normalized exact match, and
//! fuzzy fallback against the reference table.

use deed_core::config::{AbbreviationTable, CountyEntry, ReferenceData};
use deed_core::errors::ValidationError;
use rust_decimal::Decimal;
use tracing::debug;

use crate::similarity;

/// Which path produced a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMethod {
    /// The normalized, abbreviation-expanded input equaled a canonical name.
    ExactNormalized,
    /// Best fuzzy candidate at or above the similarity cutoff.
    Fuzzy,
}

/// A successful county resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCounty {
    pub canonical_name: String,
    pub tax_rate: Decimal,
    pub method: MatchMethod,
    /// Similarity score of the winning candidate (1.0 on the exact path).
    pub score: f64,
}

/// Resolves raw county strings against the reference table.
///
/// Owns a normalized copy of every canonical name, computed once at
/// construction with the same normalization applied to inputs. Entries keep
/// the table's lexical order, so a fuzzy-score tie deterministically keeps
/// the earliest candidate.
pub struct CountyResolver {
    entries: Vec<CountyEntry>,
    normalized: Vec<String>,
    abbreviations: AbbreviationTable,
    cutoff: f64,
}

impl CountyResolver {
    pub fn new(reference: &ReferenceData, cutoff: f64) -> Self {
        let entries = reference.counties.entries().to_vec();
        let abbreviations = reference.abbreviations.clone();
        let normalized = entries
            .iter()
            .map(|e| normalize(&e.canonical_name, &abbreviations))
            .collect();
        Self {
            entries,
            normalized,
            abbreviations,
            cutoff,
        }
    }

    /// Resolve a raw county string, exact path first, fuzzy second.
    pub fn resolve(&self, raw: &str) -> Result<ResolvedCounty, ValidationError> {
        let needle = normalize(raw, &self.abbreviations);

        if let Some(idx) = self.normalized.iter().position(|name| *name == needle) {
            let entry = &self.entries[idx];
            debug!(
                input = raw,
                canonical = %entry.canonical_name,
                "county: exact match (normalized)"
            );
            return Ok(ResolvedCounty {
                canonical_name: entry.canonical_name.clone(),
                tax_rate: entry.tax_rate,
                method: MatchMethod::ExactNormalized,
                score: 1.0,
            });
        }

        // Only a strictly better score replaces the candidate, keeping the
        // first entry in table order on ties.
        let mut best: Option<(usize, f64)> = None;
        for (idx, name) in self.normalized.iter().enumerate() {
            let score = similarity::ratio(&needle, name);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((idx, score));
            }
        }

        if let Some((idx, score)) = best {
            if score >= self.cutoff {
                let entry = &self.entries[idx];
                debug!(
                    input = raw,
                    canonical = %entry.canonical_name,
                    score,
                    "county: fuzzy match"
                );
                return Ok(ResolvedCounty {
                    canonical_name: entry.canonical_name.clone(),
                    tax_rate: entry.tax_rate,
                    method: MatchMethod::Fuzzy,
                    score,
                });
            }
        }

        Err(ValidationError::CountyUnresolved {
            input: raw.to_string(),
            known: self
                .entries
                .iter()
                .map(|e| e.canonical_name.clone())
                .collect(),
        })
    }
}

/// Lowercase, collapse whitespace, expand abbreviation-table tokens.
fn normalize(name: &str, abbreviations: &AbbreviationTable) -> String {
    name.to_lowercase()
        .split_whitespace()
        .map(|token| abbreviations.expand(token).unwrap_or(token).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use deed_core::config::{CountyTable, ReferenceData};
    use deed_core::constants::DEFAULT_SIMILARITY_CUTOFF;
    use deed_core::errors::FailureKind;

    fn resolver() -> CountyResolver {
        let counties = CountyTable::from_json_str(
            r#"{
  "Alameda": 0.012,
  "San Francisco": 0.068,
  "San Mateo": 0.012,
  "Santa Clara": 0.011,
  "Santa Cruz": 0.011
}"#,
            "<string>",
        )
        .unwrap();
        let reference = ReferenceData::new(counties, AbbreviationTable::builtin());
        CountyResolver::new(&reference, DEFAULT_SIMILARITY_CUTOFF)
    }

    #[test]
    fn canonical_names_resolve_exactly_whatever_the_casing() {
        let resolver = resolver();
        for input in ["Santa Clara", "santa clara", "SANTA  CLARA", "  santa clara  "] {
            let resolved = resolver.resolve(input).unwrap();
            assert_eq!(resolved.canonical_name, "Santa Clara");
            assert_eq!(resolved.method, MatchMethod::ExactNormalized);
        }
    }

    #[test]
    fn abbreviation_expansion_hits_the_exact_path() {
        let resolved = resolver().resolve("S. Clara").unwrap();
        assert_eq!(resolved.canonical_name, "Santa Clara");
        assert_eq!(resolved.method, MatchMethod::ExactNormalized);
        assert_eq!(resolved.tax_rate, "0.011".parse().unwrap());
    }

    #[test]
    fn typos_resolve_through_the_fuzzy_path() {
        let resolved = resolver().resolve("Sants Clarra").unwrap();
        assert_eq!(resolved.canonical_name, "Santa Clara");
        assert_eq!(resolved.method, MatchMethod::Fuzzy);
        assert!(resolved.score >= DEFAULT_SIMILARITY_CUTOFF);
        assert!(resolved.score < 1.0);
    }

    #[test]
    fn unknown_county_carries_the_input_and_known_names() {
        let err = resolver().resolve("Atlantis").unwrap_err();
        assert_eq!(err.kind(), FailureKind::CountyUnresolved);
        match err {
            ValidationError::CountyUnresolved { input, known } => {
                assert_eq!(input, "Atlantis");
                assert_eq!(known.len(), 5);
                assert_eq!(known[0], "Alameda");
            }
            other => panic!("expected CountyUnresolved, got {other:?}"),
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        let resolver = resolver();
        let first = resolver.resolve("Sants Clarra").unwrap();
        let second = resolver.resolve("Sants Clarra").unwrap();
        assert_eq!(first, second);
    }
}
