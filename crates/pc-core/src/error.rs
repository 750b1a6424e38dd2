//! Error types for probcalc

use thiserror::Error;

/// probcalc error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A parameter violates the mathematical precondition of the function it
    /// was passed to (σ ≤ 0, λ ≤ 0, p outside its interval, negative counts, ...).
    #[error("Domain error: {name} must be {constraint}, got {value}")]
    Domain {
        /// Parameter name as it appears in the formula (`"sigma"`, `"k"`, ...)
        name: &'static str,
        /// Offending value
        value: f64,
        /// Human-readable precondition, e.g. `"finite and > 0"`
        constraint: &'static str,
    },
}

impl Error {
    /// Build a [`Error::Domain`] for parameter `name`.
    pub fn domain(name: &'static str, value: f64, constraint: &'static str) -> Self {
        Error::Domain { name, value, constraint }
    }

    /// Name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            Error::Domain { name, .. } => *name,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_parameter_and_value() {
        let e = Error::domain("sigma", -1.0, "finite and > 0");
        assert_eq!(e.to_string(), "Domain error: sigma must be finite and > 0, got -1");
        assert_eq!(e.parameter(), "sigma");
    }
}
