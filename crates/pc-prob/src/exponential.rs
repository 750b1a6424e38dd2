//! Exponential distribution utilities.

use pc_core::validate::{open_probability, positive};
use pc_core::Result;

/// Log-PDF of an Exponential distribution at `x` with rate `rate`.
///
/// Support: `x >= 0`.
pub fn logpdf(x: f64, rate: f64) -> Result<f64> {
    let rate = positive("lambda", rate)?;
    if x < 0.0 {
        return Ok(f64::NEG_INFINITY);
    }
    Ok(rate.ln() - rate * x)
}

/// PDF `λ·e^(−λx)` for `x >= 0`, `0` otherwise.
pub fn pdf(x: f64, rate: f64) -> Result<f64> {
    let rate = positive("lambda", rate)?;
    if x < 0.0 {
        return Ok(0.0);
    }
    Ok(rate * (-rate * x).exp())
}

/// CDF `1 − e^(−λx)` for `x >= 0`, `0` otherwise.
pub fn cdf(x: f64, rate: f64) -> Result<f64> {
    let rate = positive("lambda", rate)?;
    if x <= 0.0 {
        return Ok(0.0);
    }
    Ok(-(-rate * x).exp_m1())
}

/// Survival function `e^(−λx)` for `x >= 0`, `1` otherwise.
pub fn sf(x: f64, rate: f64) -> Result<f64> {
    let rate = positive("lambda", rate)?;
    if x <= 0.0 {
        return Ok(1.0);
    }
    Ok((-rate * x).exp())
}

/// Percent-point function `−ln(1 − p) / λ`.
pub fn ppf(p: f64, rate: f64) -> Result<f64> {
    let p = open_probability("p", p)?;
    let rate = positive("lambda", rate)?;
    Ok(-(-p).ln_1p() / rate)
}

/// Mean `1/λ`.
pub fn mean(rate: f64) -> Result<f64> {
    Ok(positive("lambda", rate)?.recip())
}

/// Variance `1/λ²`.
pub fn variance(rate: f64) -> Result<f64> {
    let rate = positive("lambda", rate)?;
    Ok((rate * rate).recip())
}

/// Standard deviation `1/λ`.
pub fn std(rate: f64) -> Result<f64> {
    mean(rate)
}
