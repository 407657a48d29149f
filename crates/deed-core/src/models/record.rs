//! Record types: the extraction wire schema and its validated forms.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Output of the external extraction step, exactly as it arrives.
///
/// Every field is optional: the extraction collaborator is a black box and
/// the shape check, not deserialization, decides what is missing. Metadata
/// fields (`doc_id`, `grantor`, ...) are carried for reporting but never
/// validated beyond presence of the required five.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub doc_id: Option<String>,
    pub county: Option<String>,
    pub state: Option<String>,
    pub date_signed: Option<String>,
    pub date_recorded: Option<String>,
    pub grantor: Option<String>,
    pub grantee: Option<String>,
    pub amount_numeric: Option<Decimal>,
    pub amount_words: Option<String>,
    pub apn: Option<String>,
    pub status: Option<String>,
}

/// A shape-validated record, read-only to the checks.
///
/// Dates stay textual here: parsing them is the temporal check's job, so a
/// bad date surfaces as a `malformed-date` failure rather than a shape error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredRecord {
    pub county_raw: String,
    pub date_signed: String,
    pub date_recorded: String,
    pub amount_numeric: Decimal,
    pub amount_written: String,
    pub doc_id: Option<String>,
    pub state: Option<String>,
    pub grantor: Option<String>,
    pub grantee: Option<String>,
    pub apn: Option<String>,
    pub status: Option<String>,
}

impl StructuredRecord {
    /// Shape-check a raw record, collecting one `malformed-input` failure per
    /// missing required field. Business checks run only on an `Ok` result.
    pub fn from_raw(raw: RawRecord) -> Result<Self, Vec<ValidationError>> {
        let mut failures = Vec::new();

        let county_raw = require(raw.county, "county", &mut failures);
        let date_signed = require(raw.date_signed, "date_signed", &mut failures);
        let date_recorded = require(raw.date_recorded, "date_recorded", &mut failures);
        let amount_numeric = require(raw.amount_numeric, "amount_numeric", &mut failures);
        let amount_written = require(raw.amount_words, "amount_words", &mut failures);

        match (
            county_raw,
            date_signed,
            date_recorded,
            amount_numeric,
            amount_written,
        ) {
            (
                Some(county_raw),
                Some(date_signed),
                Some(date_recorded),
                Some(amount_numeric),
                Some(amount_written),
            ) => Ok(Self {
                county_raw,
                date_signed,
                date_recorded,
                amount_numeric,
                amount_written,
                doc_id: raw.doc_id,
                state: raw.state,
                grantor: raw.grantor,
                grantee: raw.grantee,
                apn: raw.apn,
                status: raw.status,
            }),
            _ => Err(failures),
        }
    }
}

fn require<T>(
    value: Option<T>,
    field: &'static str,
    failures: &mut Vec<ValidationError>,
) -> Option<T> {
    if value.is_none() {
        failures.push(ValidationError::MalformedInput {
            field,
            reason: "field is absent".to_string(),
        });
    }
    value
}

/// A structured record plus its county enrichment.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecord {
    pub record: StructuredRecord,
    pub county_canonical: String,
    pub tax_rate: Decimal,
}

impl EnrichedRecord {
    /// Closing cost: `amount_numeric * tax_rate`, rounded to cents.
    pub fn closing_cost(&self) -> Decimal {
        (self.record.amount_numeric * self.tax_rate).round_dp(2)
    }
}
