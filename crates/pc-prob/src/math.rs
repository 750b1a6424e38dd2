//! Small numerically-stable math utilities used across probability code.

use std::f64::consts::{FRAC_1_SQRT_2, PI};

use statrs::function::erf::erfc;

/// Standard normal CDF `Φ(z) = ½(1 + erf(z/√2))`.
///
/// Evaluated as `½·erfc(−z/√2)`, which is the same identity but does not lose
/// the lower tail to cancellation.
#[inline]
pub fn standard_normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z * FRAC_1_SQRT_2)
}

/// Standard normal survival function `1 − Φ(z)`.
#[inline]
pub fn standard_normal_sf(z: f64) -> f64 {
    0.5 * erfc(z * FRAC_1_SQRT_2)
}

// Acklam's rational approximation coefficients.
const A: [f64; 6] = [
    -3.969_683_028_665_376e1,
    2.209_460_984_245_205e2,
    -2.759_285_104_469_687e2,
    1.383_577_518_672_690e2,
    -3.066_479_806_614_716e1,
    2.506_628_277_459_239,
];
const B: [f64; 5] = [
    -5.447_609_879_822_406e1,
    1.615_858_368_580_409e2,
    -1.556_989_798_598_866e2,
    6.680_131_188_771_972e1,
    -1.328_068_155_288_572e1,
];
const C: [f64; 6] = [
    -7.784_894_002_430_293e-3,
    -3.223_964_580_411_365e-1,
    -2.400_758_277_161_838,
    -2.549_732_539_343_734,
    4.374_664_141_464_968,
    2.938_163_982_698_783,
];
const D: [f64; 4] = [
    7.784_695_709_041_462e-3,
    3.224_671_290_700_398e-1,
    2.445_134_137_142_996,
    3.754_408_661_907_416,
];

/// Split point between the central and tail regions.
const P_LOW: f64 = 0.024_25;

/// Tail branch of Acklam's approximation for `q = sqrt(-2 ln p)`.
#[inline]
fn acklam_tail(q: f64) -> f64 {
    (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
        / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
}

/// Inverse of the standard normal CDF, `Φ⁻¹(p)`.
///
/// Acklam's rational approximation (relative error < 1.15e-9) followed by one
/// Halley step against [`standard_normal_cdf`], which brings the result to
/// full double precision. Returns `-inf` / `+inf` at `p = 0` / `p = 1` and NaN
/// outside `[0, 1]`; callers validate `p` first.
pub fn inverse_standard_normal_cdf(p: f64) -> f64 {
    if !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }

    let x = if p < P_LOW {
        acklam_tail((-2.0 * p.ln()).sqrt())
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        -acklam_tail((-2.0 * (-p).ln_1p()).sqrt())
    };

    // Halley refinement.
    let e = standard_normal_cdf(x) - p;
    let u = e * (2.0 * PI).sqrt() * (0.5 * x * x).exp();
    let refined = x - u / (1.0 + 0.5 * x * u);
    if refined.is_finite() { refined } else { x }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_standard_normal_cdf_known_values() {
        assert_eq!(standard_normal_cdf(0.0), 0.5);
        assert_abs_diff_eq!(standard_normal_cdf(1.0), 0.841_344_746_068_542_9, epsilon = 1e-14);
        assert_abs_diff_eq!(standard_normal_cdf(-1.96), 0.024_997_895_148_220_4, epsilon = 1e-14);
    }

    #[test]
    fn test_cdf_and_sf_are_complementary() {
        let zs: [f64; 7] = [-6.0, -2.5, -0.3, 0.0, 0.3, 2.5, 6.0];
        for z in zs {
            let total = standard_normal_cdf(z) + standard_normal_sf(z);
            assert_abs_diff_eq!(total, 1.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_inverse_known_quantiles() {
        assert_abs_diff_eq!(inverse_standard_normal_cdf(0.5), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(inverse_standard_normal_cdf(0.975), 1.959_963_984_540_054, epsilon = 1e-12);
        assert_abs_diff_eq!(inverse_standard_normal_cdf(0.025), -1.959_963_984_540_054, epsilon = 1e-12);
        assert_abs_diff_eq!(inverse_standard_normal_cdf(0.995), 2.575_829_303_548_901, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_round_trips_across_regions() {
        // Covers the lower tail, the central region and the upper tail.
        let ps: [f64; 9] = [1e-12, 1e-6, 0.01, 0.024_25, 0.2, 0.5, 0.8, 0.99, 1.0 - 1e-9];
        for p in ps {
            let x = inverse_standard_normal_cdf(p);
            assert!(x.is_finite(), "p={} produced {}", p, x);
            let back = standard_normal_cdf(x);
            assert!(((back - p) / p).abs() < 1e-9, "p={}: cdf(ppf(p))={}", p, back);
        }
    }

    #[test]
    fn test_inverse_edges() {
        assert_eq!(inverse_standard_normal_cdf(0.0), f64::NEG_INFINITY);
        assert_eq!(inverse_standard_normal_cdf(1.0), f64::INFINITY);
        assert!(inverse_standard_normal_cdf(-0.1).is_nan());
        assert!(inverse_standard_normal_cdf(f64::NAN).is_nan());
    }
}
