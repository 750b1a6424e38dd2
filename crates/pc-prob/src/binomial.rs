//! Binomial distribution utilities.

use pc_core::validate::{at_least_one, non_negative, probability};
use pc_core::Result;

use crate::combinatorics::{choose, ln_choose, to_f64};

/// `ln(f64::MAX)`; larger log-coefficients overflow as an `f64`.
const LN_F64_MAX: f64 = 709.782_712_893_384;

fn validate_n_p(n: i64, p: f64) -> Result<(i64, f64)> {
    Ok((at_least_one("n", n)?, probability("p", p)?))
}

/// PMF of a Binomial distribution `Binom(n, p)` at count `k`.
///
/// `k > n` is an unreachable outcome and yields `0.0`; `k < 0` is a domain
/// error.
pub fn pmf(n: i64, k: i64, p: f64) -> Result<f64> {
    let n = at_least_one("n", n)?;
    let k = non_negative("k", k)?;
    if k > n {
        return Ok(0.0);
    }
    let p = probability("p", p)?;

    // Exact boundaries: no 0^0 and no rounding noise.
    if p == 0.0 {
        return Ok(if k == 0 { 1.0 } else { 0.0 });
    }
    if p == 1.0 {
        return Ok(if k == n { 1.0 } else { 0.0 });
    }

    // The exact coefficient is only formed when it can fit in an f64.
    let ln_coef = ln_choose(n, k)?;
    if ln_coef < LN_F64_MAX {
        let coef = to_f64(&choose(n, k)?);
        let powers = p.powf(k as f64) * (1.0 - p).powf((n - k) as f64);
        if coef.is_finite() && powers >= f64::MIN_POSITIVE {
            return Ok(coef * powers);
        }
    }

    tracing::trace!(n, k, p, "binomial pmf: log-space evaluation");
    let ln_pmf = ln_coef + k as f64 * p.ln() + (n - k) as f64 * (-p).ln_1p();
    Ok(ln_pmf.exp())
}

/// CDF of a Binomial distribution, `P(X <= k)`.
///
/// Sums [`pmf`] for `i = 0..=k` in ascending order. `k < 0` yields `0.0`;
/// `k >= n` yields exactly `1.0`.
pub fn cdf(n: i64, k: i64, p: f64) -> Result<f64> {
    let (n, p) = validate_n_p(n, p)?;
    if k < 0 {
        return Ok(0.0);
    }
    if k >= n {
        return Ok(1.0);
    }
    let mut sum = 0.0;
    for i in 0..=k {
        sum += pmf(n, i, p)?;
    }
    Ok(sum.min(1.0))
}

/// Survival function `P(X > k) = 1 - cdf(n, k, p)`.
pub fn sf(n: i64, k: i64, p: f64) -> Result<f64> {
    Ok((1.0 - cdf(n, k, p)?).max(0.0))
}

/// Mean `n·p`.
pub fn mean(n: i64, p: f64) -> Result<f64> {
    let (n, p) = validate_n_p(n, p)?;
    Ok(n as f64 * p)
}

/// Variance `n·p·(1-p)`.
pub fn variance(n: i64, p: f64) -> Result<f64> {
    let (n, p) = validate_n_p(n, p)?;
    Ok(n as f64 * p * (1.0 - p))
}

/// Standard deviation `sqrt(n·p·(1-p))`.
pub fn std(n: i64, p: f64) -> Result<f64> {
    Ok(variance(n, p)?.sqrt())
}
