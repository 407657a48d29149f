//! Tests for reference-data loading.

use deed_core::config::{AbbreviationTable, CountyTable, ReferenceData};
use deed_core::errors::ReferenceError;

/// Helper: create a temporary directory.
fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

#[test]
fn loads_county_table_from_file() {
    let dir = tempdir();
    let path = dir.path().join("counties.json");
    std::fs::write(
        &path,
        r#"{
  "Alameda": 0.012,
  "Santa Clara": 0.011,
  "Santa Cruz": 0.011
}"#,
    )
    .unwrap();

    let table = CountyTable::load(&path).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.entries()[1].canonical_name, "Santa Clara");
    assert_eq!(table.entries()[1].tax_rate, "0.011".parse().unwrap());
}

#[test]
fn missing_county_file_is_unreadable() {
    let dir = tempdir();
    let err = CountyTable::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ReferenceError::Unreadable { .. }));
    assert_eq!(err.code(), "reference-data-unavailable");
}

#[test]
fn malformed_county_json_is_typed() {
    let dir = tempdir();
    let path = dir.path().join("counties.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = CountyTable::load(&path).unwrap_err();
    assert!(matches!(err, ReferenceError::Malformed { .. }));
}

#[test]
fn non_numeric_rate_is_malformed() {
    let err = CountyTable::from_json_str(r#"{"Santa Clara": "eleven"}"#, "<string>").unwrap_err();
    assert!(matches!(err, ReferenceError::Malformed { .. }));
}

#[test]
fn reference_data_defaults_abbreviations_without_path() {
    let dir = tempdir();
    let counties = dir.path().join("counties.json");
    std::fs::write(&counties, r#"{"Santa Clara": 0.011}"#).unwrap();

    let reference = ReferenceData::load(&counties, None).unwrap();
    assert_eq!(reference.abbreviations.expand("s."), Some("santa"));
    assert_eq!(reference.counties.len(), 1);
}

#[test]
fn reference_data_loads_custom_abbreviations() {
    let dir = tempdir();
    let counties = dir.path().join("counties.json");
    let abbrevs = dir.path().join("abbreviations.json");
    std::fs::write(&counties, r#"{"East Baton Rouge": 0.01}"#).unwrap();
    std::fs::write(&abbrevs, r#"{"e.": "east"}"#).unwrap();

    let reference = ReferenceData::load(&counties, Some(&abbrevs)).unwrap();
    assert_eq!(reference.abbreviations.expand("e."), Some("east"));
    // A custom table replaces the built-ins wholesale.
    assert_eq!(reference.abbreviations.expand("s."), None);
}

#[test]
fn loaded_tables_are_order_stable() {
    let json = r#"{"Santa Cruz": 0.011, "Alameda": 0.012, "San Mateo": 0.012}"#;
    let first = CountyTable::from_json_str(json, "<string>").unwrap();
    let second = CountyTable::from_json_str(json, "<string>").unwrap();
    assert_eq!(first, second);

    let table = AbbreviationTable::builtin();
    let again = AbbreviationTable::builtin();
    assert_eq!(table, again);
}
