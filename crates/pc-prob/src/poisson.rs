//! Poisson distribution utilities.

use pc_core::validate::{non_negative, positive};
use pc_core::Result;

use crate::combinatorics::{factorial, ln_factorial, to_f64};

/// Largest `k` whose factorial is representable as an `f64` (170! ≈ 7.3e306).
const MAX_EXACT_FACTORIAL: i64 = 170;

/// PMF of a Poisson distribution at count `k` with rate `lambda`.
///
/// `P(X = k) = λ^k · e^(−λ) / k!`
pub fn pmf(lambda: f64, k: i64) -> Result<f64> {
    let lambda = positive("lambda", lambda)?;
    let k = non_negative("k", k)?;

    // Far tail of a small rate: underflows long before k! finishes.
    if k > 1000 && lambda < 10.0 {
        return Ok(0.0);
    }

    if k <= MAX_EXACT_FACTORIAL {
        let numerator = lambda.powf(k as f64) * (-lambda).exp();
        if numerator.is_finite() && numerator >= f64::MIN_POSITIVE {
            return Ok(numerator / to_f64(&factorial(k)?));
        }
    }

    tracing::trace!(lambda, k, "poisson pmf: log-space evaluation");
    let ln_pmf = k as f64 * lambda.ln() - lambda - ln_factorial(k)?;
    Ok(ln_pmf.exp())
}

/// CDF of a Poisson distribution, `P(X <= k)`.
///
/// Sums [`pmf`] for `i = 0..=k` in ascending order; `k < 0` yields `0.0`.
pub fn cdf(lambda: f64, k: i64) -> Result<f64> {
    let lambda = positive("lambda", lambda)?;
    if k < 0 {
        return Ok(0.0);
    }
    let mut sum = 0.0;
    for i in 0..=k {
        sum += pmf(lambda, i)?;
    }
    Ok(sum.min(1.0))
}

/// Survival function `P(X > k) = 1 - cdf(lambda, k)`.
pub fn sf(lambda: f64, k: i64) -> Result<f64> {
    Ok((1.0 - cdf(lambda, k)?).max(0.0))
}

/// Mean `λ`.
pub fn mean(lambda: f64) -> Result<f64> {
    positive("lambda", lambda)
}

/// Variance `λ`.
pub fn variance(lambda: f64) -> Result<f64> {
    positive("lambda", lambda)
}

/// Standard deviation `sqrt(λ)`.
pub fn std(lambda: f64) -> Result<f64> {
    Ok(positive("lambda", lambda)?.sqrt())
}
