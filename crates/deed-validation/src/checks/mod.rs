//! The three business checks, one module per check.

pub mod amount;
pub mod county;
pub mod temporal;

pub use county::{CountyResolver, MatchMethod, ResolvedCounty};
