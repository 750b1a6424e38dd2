//! Exact and log-space combinatorics.
//!
//! [`factorial`] and [`choose`] are exact big-integer results; the `ln_*`
//! variants feed the log-space evaluation paths of the discrete distributions.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
use pc_core::validate::non_negative;
use pc_core::{Error, Result};
use statrs::function::gamma::ln_gamma;

/// Exact factorial `n!`.
pub fn factorial(n: i64) -> Result<BigUint> {
    let n = non_negative("n", n)? as u64;
    Ok((2..=n).fold(BigUint::one(), |acc, i| acc * i))
}

/// Exact binomial coefficient `C(n, k)`.
///
/// Multiplies `min(k, n-k)` falling factors, dividing exactly at each step
/// (`acc * (n-i) / (i+1)` is always an integer), so no full factorial is
/// formed and the result is exact for every `n` in range.
pub fn choose(n: i64, k: i64) -> Result<BigUint> {
    let n = non_negative("n", n)? as u64;
    let k = non_negative("k", k)? as u64;
    if k > n {
        return Err(Error::domain("k", k as f64, "<= n"));
    }
    let k = k.min(n - k);
    let mut acc = BigUint::one();
    for i in 0..k {
        acc *= n - i;
        acc /= i + 1;
    }
    Ok(acc)
}

/// `ln(n!)` via `ln Γ(n + 1)`.
pub fn ln_factorial(n: i64) -> Result<f64> {
    let n = non_negative("n", n)?;
    Ok(ln_gamma(n as f64 + 1.0))
}

/// `ln C(n, k)` with the same domain as [`choose`].
pub fn ln_choose(n: i64, k: i64) -> Result<f64> {
    let n = non_negative("n", n)?;
    let k = non_negative("k", k)?;
    if k > n {
        return Err(Error::domain("k", k as f64, "<= n"));
    }
    // ln(n choose k) = ln Γ(n+1) - ln Γ(k+1) - ln Γ(n-k+1)
    Ok(ln_gamma(n as f64 + 1.0) - ln_gamma(k as f64 + 1.0) - ln_gamma((n - k) as f64 + 1.0))
}

/// Lossy conversion to `f64`; values past `f64::MAX` become `+inf`.
pub fn to_f64(v: &BigUint) -> f64 {
    v.to_f64().unwrap_or(f64::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_factorial_small() {
        assert_eq!(factorial(0).unwrap(), BigUint::from(1u32));
        assert_eq!(factorial(1).unwrap(), BigUint::from(1u32));
        assert_eq!(factorial(5).unwrap(), BigUint::from(120u32));
        assert_eq!(factorial(20).unwrap(), BigUint::from(2_432_902_008_176_640_000u64));
    }

    #[test]
    fn test_factorial_past_u64_is_exact() {
        // 25! = 15511210043330985984000000
        let expected: BigUint = "15511210043330985984000000".parse().unwrap();
        assert_eq!(factorial(25).unwrap(), expected);
    }

    #[test]
    fn test_factorial_negative() {
        assert!(matches!(factorial(-1), Err(Error::Domain { name: "n", .. })));
    }

    #[test]
    fn test_choose_known_values() {
        assert_eq!(choose(5, 0).unwrap(), BigUint::from(1u32));
        assert_eq!(choose(5, 2).unwrap(), BigUint::from(10u32));
        assert_eq!(choose(5, 5).unwrap(), BigUint::from(1u32));
        assert_eq!(choose(10, 3).unwrap(), BigUint::from(120u32));
        assert_eq!(choose(20, 10).unwrap(), BigUint::from(184_756u32));
    }

    #[test]
    fn test_choose_large_n_small_k() {
        // Well beyond the 170! limit of a double-precision factorial.
        let n: i64 = 1_000_000_000_000;
        let expected = BigUint::from(n as u64) * BigUint::from((n - 1) as u64) / BigUint::from(2u32);
        assert_eq!(choose(n, 2).unwrap(), expected);
        assert_eq!(choose(i64::MAX, 1).unwrap(), BigUint::from(i64::MAX as u64));
    }

    #[test]
    fn test_choose_matches_factorial_ratio() {
        let n = 40;
        for k in 0..=n {
            let ratio = factorial(n).unwrap() / (factorial(k).unwrap() * factorial(n - k).unwrap());
            assert_eq!(choose(n, k).unwrap(), ratio, "k={}", k);
        }
    }

    #[test]
    fn test_choose_invalid() {
        assert!(choose(-1, 0).is_err());
        assert!(choose(5, -1).is_err());
        assert!(matches!(choose(3, 5), Err(Error::Domain { name: "k", .. })));
    }

    #[test]
    fn test_ln_variants_match_exact() {
        assert_relative_eq!(ln_factorial(10).unwrap(), 3_628_800f64.ln(), epsilon = 1e-10);
        assert_relative_eq!(ln_choose(10, 3).unwrap(), 120f64.ln(), epsilon = 1e-10);
        assert!(ln_choose(3, 5).is_err());
        assert!(ln_factorial(-2).is_err());
    }

    #[test]
    fn test_to_f64_saturates() {
        assert_eq!(to_f64(&BigUint::from(252u32)), 252.0);
        assert_eq!(to_f64(&factorial(200).unwrap()), f64::INFINITY);
    }
}
