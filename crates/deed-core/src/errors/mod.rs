//! Error handling for the deed validation pipeline.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod kind;
pub mod reference_error;
pub mod validation_error;
pub mod wordnum_error;

pub use kind::FailureKind;
pub use reference_error::ReferenceError;
pub use validation_error::ValidationError;
pub use wordnum_error::WordNumberError;
