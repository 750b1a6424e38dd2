//! Probability calculations for probcalc.
//!
//! Pure functions over plain numeric parameters; every fallible call returns
//! [`pc_core::Result`] and fails only with [`pc_core::Error::Domain`].
//!
//! Discrete:
//! - [`combinatorics`]: exact `factorial` / `choose` and their log-space forms
//! - [`binomial`], [`poisson`]: pmf, cdf, sf and moments
//!
//! Continuous:
//! - [`normal`]: pdf, cdf, sf, ppf, z-score, confidence interval and moments
//! - [`exponential`]: pdf, cdf, sf, ppf and moments
//!
//! [`math`] holds the numeric primitives both halves share, including the
//! inverse standard normal CDF.

pub mod math;
pub mod combinatorics;
pub mod binomial;
pub mod poisson;
pub mod normal;
pub mod exponential;
