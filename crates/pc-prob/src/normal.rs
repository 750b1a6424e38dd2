//! Normal distribution utilities.

use pc_core::validate::{open_probability, positive};
use pc_core::Result;

use crate::math::{inverse_standard_normal_cdf, standard_normal_cdf, standard_normal_sf};

/// `ln(sqrt(2π)) = 0.5*ln(2π)`.
const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_7;

/// Log-PDF of a Normal distribution `N(mu, sigma)` at `x`.
///
/// `log p(x) = -0.5 * ((x-mu)/sigma)^2 - ln(sigma) - ln(sqrt(2π))`
pub fn logpdf(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    let z = z_score(x, mu, sigma)?;
    Ok(-0.5 * z * z - sigma.ln() - LN_SQRT_2PI)
}

/// PDF of a Normal distribution `N(mu, sigma)` at `x`.
///
/// `p(x) = 1/(σ√(2π)) · exp(-(x-μ)²/(2σ²))`
pub fn pdf(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    Ok(logpdf(x, mu, sigma)?.exp())
}

/// CDF `P(X <= x)` via the standard normal `Φ((x - mu) / sigma)`.
pub fn cdf(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    Ok(standard_normal_cdf(z_score(x, mu, sigma)?))
}

/// Survival function `P(X > x)`.
pub fn sf(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    Ok(standard_normal_sf(z_score(x, mu, sigma)?))
}

/// Percent-point function (inverse CDF): the `x` with `cdf(x, mu, sigma) = p`.
pub fn ppf(p: f64, mu: f64, sigma: f64) -> Result<f64> {
    let p = open_probability("p", p)?;
    let sigma = positive("sigma", sigma)?;
    Ok(mu + sigma * inverse_standard_normal_cdf(p))
}

/// Standardized distance of `x` from the mean, `(x - mu) / sigma`.
pub fn z_score(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    let sigma = positive("sigma", sigma)?;
    Ok((x - mu) / sigma)
}

/// Symmetric interval `(lower, upper)` holding `confidence` of the mass.
///
/// `lower = ppf(α)`, `upper = ppf(1 - α)` with `α = (1 - confidence) / 2`.
pub fn confidence_interval(confidence: f64, mu: f64, sigma: f64) -> Result<(f64, f64)> {
    let confidence = open_probability("confidence", confidence)?;
    let alpha = (1.0 - confidence) / 2.0;
    Ok((ppf(alpha, mu, sigma)?, ppf(1.0 - alpha, mu, sigma)?))
}

/// Mean `μ`.
pub fn mean(mu: f64, sigma: f64) -> Result<f64> {
    positive("sigma", sigma)?;
    Ok(mu)
}

/// Variance `σ²`.
pub fn variance(_mu: f64, sigma: f64) -> Result<f64> {
    let sigma = positive("sigma", sigma)?;
    Ok(sigma * sigma)
}

/// Standard deviation `σ`.
pub fn std(_mu: f64, sigma: f64) -> Result<f64> {
    positive("sigma", sigma)
}
