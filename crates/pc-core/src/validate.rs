//! Parameter guards shared by every distribution module.
//!
//! Each guard returns the value unchanged on success so call sites can bind
//! the validated parameter in one line.

use crate::{Error, Result};

/// Require a finite, strictly positive real (σ, λ).
#[inline]
pub fn positive(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::domain(name, value, "finite and > 0"));
    }
    Ok(value)
}

/// Require a probability in the closed interval `[0, 1]`.
#[inline]
pub fn probability(name: &'static str, value: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&value) {
        return Err(Error::domain(name, value, "in [0, 1]"));
    }
    Ok(value)
}

/// Require a probability in the open interval `(0, 1)` (quantile arguments).
#[inline]
pub fn open_probability(name: &'static str, value: f64) -> Result<f64> {
    if !(value > 0.0 && value < 1.0) {
        return Err(Error::domain(name, value, "in (0, 1)"));
    }
    Ok(value)
}

/// Require a count `>= 0` (`k`, or `n` in the combinatorics helpers).
#[inline]
pub fn non_negative(name: &'static str, value: i64) -> Result<i64> {
    if value < 0 {
        return Err(Error::domain(name, value as f64, ">= 0"));
    }
    Ok(value)
}

/// Require a count `>= 1` (number of trials).
#[inline]
pub fn at_least_one(name: &'static str, value: i64) -> Result<i64> {
    if value < 1 {
        return Err(Error::domain(name, value as f64, ">= 1"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive() {
        assert_eq!(positive("sigma", 2.0).unwrap(), 2.0);
        assert!(positive("sigma", 0.0).is_err());
        assert!(positive("sigma", -1.0).is_err());
        assert!(positive("sigma", f64::NAN).is_err());
        assert!(positive("sigma", f64::INFINITY).is_err());
    }

    #[test]
    fn test_probability_bounds() {
        assert!(probability("p", 0.0).is_ok());
        assert!(probability("p", 1.0).is_ok());
        assert!(probability("p", -0.1).is_err());
        assert!(probability("p", f64::NAN).is_err());

        assert!(open_probability("p", 0.0).is_err());
        assert!(open_probability("p", 1.0).is_err());
        assert!(open_probability("p", 0.5).is_ok());
        assert!(open_probability("p", f64::NAN).is_err());
    }

    #[test]
    fn test_count_guards_report_parameter() {
        let err = non_negative("k", -1).unwrap_err();
        assert_eq!(
            err,
            Error::Domain { name: "k", value: -1.0, constraint: ">= 0" }
        );
        assert_eq!(non_negative("k", 0).unwrap(), 0);

        let err = at_least_one("n", 0).unwrap_err();
        assert_eq!(
            err,
            Error::Domain { name: "n", value: 0.0, constraint: ">= 1" }
        );
        assert_eq!(at_least_one("n", 3).unwrap(), 3);
    }
}
