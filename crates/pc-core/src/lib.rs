//! Core types for probcalc.
//!
//! - [`Error`] / [`Result`]: the single domain-error taxonomy returned by every
//!   probability function
//! - [`validate`]: parameter guards shared by the distribution modules
//! - [`Calculation`]: serializable record of one calculation, used by front ends

pub mod error;
pub mod types;
pub mod validate;

pub use error::{Error, Result};
pub use types::{Calculation, Outcome};

/// Crate version, shared by every workspace member.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
