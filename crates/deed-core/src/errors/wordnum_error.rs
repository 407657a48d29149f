//! Written-amount parse errors.

/// Errors from parsing an English number phrase.
///
/// All variants surface under the `unparseable-written-amount` failure kind;
/// a parse problem is never silently treated as zero.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordNumberError {
    #[error("unrecognized token '{token}' in written amount '{phrase}'")]
    UnknownToken { token: String, phrase: String },

    #[error("scale word '{scale}' has no leading quantity in written amount '{phrase}'")]
    DanglingScale { scale: String, phrase: String },

    #[error("written amount '{phrase}' contains no number words")]
    Empty { phrase: String },
}
