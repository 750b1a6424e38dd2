//! Static dispatch table: (distribution, function) → collector, computation, formula.

use anyhow::{Result, bail};
use pc_core::{Calculation, Outcome};
use pc_prob::{binomial, exponential, normal, poisson};

/// Distribution selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dist {
    Binomial,
    Poisson,
    Normal,
    Exponential,
}

impl Dist {
    pub fn name(self) -> &'static str {
        match self {
            Dist::Binomial => "binomial",
            Dist::Poisson => "poisson",
            Dist::Normal => "normal",
            Dist::Exponential => "exponential",
        }
    }
}

/// Raw numeric flags as parsed from the command line.
#[derive(Debug, Default, Clone, Copy)]
pub struct Inputs {
    pub n: Option<i64>,
    pub k: Option<i64>,
    pub p: Option<f64>,
    pub lambda: Option<f64>,
    pub x: Option<f64>,
    pub mu: Option<f64>,
    pub sigma: Option<f64>,
    pub confidence: Option<f64>,
}

/// Inputs after the collector has checked every required flag is present.
#[derive(Debug, Default, Clone, Copy)]
struct Values {
    n: i64,
    k: i64,
    p: f64,
    lambda: f64,
    x: f64,
    mu: f64,
    sigma: f64,
    confidence: f64,
}

#[derive(Debug, Clone, Copy)]
enum Param {
    N,
    K,
    P,
    Lambda,
    X,
    Mu,
    Sigma,
    Confidence,
}

impl Param {
    fn name(self) -> &'static str {
        match self {
            Param::N => "n",
            Param::K => "k",
            Param::P => "p",
            Param::Lambda => "lambda",
            Param::X => "x",
            Param::Mu => "mu",
            Param::Sigma => "sigma",
            Param::Confidence => "confidence",
        }
    }

    /// Copy the flag into `values`; `None` if the flag was not given.
    fn take(self, inputs: &Inputs, values: &mut Values) -> Option<f64> {
        match self {
            Param::N => inputs.n.map(|v| {
                values.n = v;
                v as f64
            }),
            Param::K => inputs.k.map(|v| {
                values.k = v;
                v as f64
            }),
            Param::P => inputs.p.inspect(|&v| values.p = v),
            Param::Lambda => inputs.lambda.inspect(|&v| values.lambda = v),
            Param::X => inputs.x.inspect(|&v| values.x = v),
            Param::Mu => inputs.mu.inspect(|&v| values.mu = v),
            Param::Sigma => inputs.sigma.inspect(|&v| values.sigma = v),
            Param::Confidence => inputs.confidence.inspect(|&v| values.confidence = v),
        }
    }
}

struct Entry {
    dist: Dist,
    function: &'static str,
    params: &'static [Param],
    compute: fn(&Values) -> pc_core::Result<Outcome>,
    formula: fn(&Values) -> String,
}

use Param::*;

const BINOM_NKP: &[Param] = &[N, K, P];
const BINOM_NP: &[Param] = &[N, P];
const POIS_LK: &[Param] = &[Lambda, K];
const POIS_L: &[Param] = &[Lambda];
const NORM_X: &[Param] = &[X, Mu, Sigma];
const NORM_P: &[Param] = &[P, Mu, Sigma];
const NORM_C: &[Param] = &[Confidence, Mu, Sigma];
const NORM_M: &[Param] = &[Mu, Sigma];
const EXP_X: &[Param] = &[X, Lambda];
const EXP_P: &[Param] = &[P, Lambda];
const EXP_L: &[Param] = &[Lambda];

fn binomial_terms(v: &Values) -> String {
    format!("C({},{}) × {}^{} × {}^{}", v.n, v.k, v.p, v.k, 1.0 - v.p, v.n - v.k)
}

static TABLE: &[Entry] = &[
    // ── Binomial ────────────────────────────────────────────────────────
    Entry {
        dist: Dist::Binomial,
        function: "pmf",
        params: BINOM_NKP,
        compute: |v| binomial::pmf(v.n, v.k, v.p).map(Outcome::from),
        formula: binomial_terms,
    },
    Entry {
        dist: Dist::Binomial,
        function: "cdf",
        params: BINOM_NKP,
        compute: |v| binomial::cdf(v.n, v.k, v.p).map(Outcome::from),
        formula: |v| {
            format!("Σ(i=0..{}) C({},i) × {}^i × {}^({}-i)", v.k.min(v.n), v.n, v.p, 1.0 - v.p, v.n)
        },
    },
    Entry {
        dist: Dist::Binomial,
        function: "sf",
        params: BINOM_NKP,
        compute: |v| binomial::sf(v.n, v.k, v.p).map(Outcome::from),
        formula: |v| {
            format!("1 - Σ(i=0..{}) C({},i) × {}^i × {}^({}-i)", v.k.min(v.n), v.n, v.p, 1.0 - v.p, v.n)
        },
    },
    Entry {
        dist: Dist::Binomial,
        function: "mean",
        params: BINOM_NP,
        compute: |v| binomial::mean(v.n, v.p).map(Outcome::from),
        formula: |v| format!("n × p = {} × {}", v.n, v.p),
    },
    Entry {
        dist: Dist::Binomial,
        function: "variance",
        params: BINOM_NP,
        compute: |v| binomial::variance(v.n, v.p).map(Outcome::from),
        formula: |v| format!("n × p × (1 - p) = {} × {} × {}", v.n, v.p, 1.0 - v.p),
    },
    Entry {
        dist: Dist::Binomial,
        function: "std",
        params: BINOM_NP,
        compute: |v| binomial::std(v.n, v.p).map(Outcome::from),
        formula: |v| format!("√(n × p × (1 - p)) = √({} × {} × {})", v.n, v.p, 1.0 - v.p),
    },
    // ── Poisson ─────────────────────────────────────────────────────────
    Entry {
        dist: Dist::Poisson,
        function: "pmf",
        params: POIS_LK,
        compute: |v| poisson::pmf(v.lambda, v.k).map(Outcome::from),
        formula: |v| format!("(e^-{} × {}^{}) / {}!", v.lambda, v.lambda, v.k, v.k),
    },
    Entry {
        dist: Dist::Poisson,
        function: "cdf",
        params: POIS_LK,
        compute: |v| poisson::cdf(v.lambda, v.k).map(Outcome::from),
        formula: |v| format!("Σ(i=0..{}) (e^-{} × {}^i) / i!", v.k, v.lambda, v.lambda),
    },
    Entry {
        dist: Dist::Poisson,
        function: "sf",
        params: POIS_LK,
        compute: |v| poisson::sf(v.lambda, v.k).map(Outcome::from),
        formula: |v| format!("1 - Σ(i=0..{}) (e^-{} × {}^i) / i!", v.k, v.lambda, v.lambda),
    },
    Entry {
        dist: Dist::Poisson,
        function: "mean",
        params: POIS_L,
        compute: |v| poisson::mean(v.lambda).map(Outcome::from),
        formula: |v| format!("λ = {}", v.lambda),
    },
    Entry {
        dist: Dist::Poisson,
        function: "variance",
        params: POIS_L,
        compute: |v| poisson::variance(v.lambda).map(Outcome::from),
        formula: |v| format!("λ = {}", v.lambda),
    },
    Entry {
        dist: Dist::Poisson,
        function: "std",
        params: POIS_L,
        compute: |v| poisson::std(v.lambda).map(Outcome::from),
        formula: |v| format!("√λ = √{}", v.lambda),
    },
    // ── Normal ──────────────────────────────────────────────────────────
    Entry {
        dist: Dist::Normal,
        function: "pdf",
        params: NORM_X,
        compute: |v| normal::pdf(v.x, v.mu, v.sigma).map(Outcome::from),
        formula: |v| {
            format!("(1 / ({} × √(2π))) × e^(-({} - {})² / (2 × {}²))", v.sigma, v.x, v.mu, v.sigma)
        },
    },
    Entry {
        dist: Dist::Normal,
        function: "cdf",
        params: NORM_X,
        compute: |v| normal::cdf(v.x, v.mu, v.sigma).map(Outcome::from),
        formula: |v| {
            let z = (v.x - v.mu) / v.sigma;
            format!("Φ(z)  where  z = ({} - {}) / {} = {:.2}", v.x, v.mu, v.sigma, z)
        },
    },
    Entry {
        dist: Dist::Normal,
        function: "sf",
        params: NORM_X,
        compute: |v| normal::sf(v.x, v.mu, v.sigma).map(Outcome::from),
        formula: |v| {
            let z = (v.x - v.mu) / v.sigma;
            format!("1 - Φ(z)  where  z = ({} - {}) / {} = {:.2}", v.x, v.mu, v.sigma, z)
        },
    },
    Entry {
        dist: Dist::Normal,
        function: "ppf",
        params: NORM_P,
        compute: |v| normal::ppf(v.p, v.mu, v.sigma).map(Outcome::from),
        formula: |v| format!("{} + {} × Φ⁻¹({})", v.mu, v.sigma, v.p),
    },
    Entry {
        dist: Dist::Normal,
        function: "z-score",
        params: NORM_X,
        compute: |v| normal::z_score(v.x, v.mu, v.sigma).map(Outcome::from),
        formula: |v| format!("({} - {}) / {}", v.x, v.mu, v.sigma),
    },
    Entry {
        dist: Dist::Normal,
        function: "interval",
        params: NORM_C,
        compute: |v| normal::confidence_interval(v.confidence, v.mu, v.sigma).map(Outcome::from),
        formula: |v| {
            let alpha = (1.0 - v.confidence) / 2.0;
            format!("{} ± {} × Φ⁻¹({})  where  α = (1 - {}) / 2", v.mu, v.sigma, 1.0 - alpha, v.confidence)
        },
    },
    Entry {
        dist: Dist::Normal,
        function: "mean",
        params: NORM_M,
        compute: |v| normal::mean(v.mu, v.sigma).map(Outcome::from),
        formula: |v| format!("μ = {}", v.mu),
    },
    Entry {
        dist: Dist::Normal,
        function: "variance",
        params: NORM_M,
        compute: |v| normal::variance(v.mu, v.sigma).map(Outcome::from),
        formula: |v| format!("σ² = {}²", v.sigma),
    },
    Entry {
        dist: Dist::Normal,
        function: "std",
        params: NORM_M,
        compute: |v| normal::std(v.mu, v.sigma).map(Outcome::from),
        formula: |v| format!("σ = {}", v.sigma),
    },
    // ── Exponential ─────────────────────────────────────────────────────
    Entry {
        dist: Dist::Exponential,
        function: "pdf",
        params: EXP_X,
        compute: |v| exponential::pdf(v.x, v.lambda).map(Outcome::from),
        formula: |v| format!("{} × e^(-{} × {})", v.lambda, v.lambda, v.x),
    },
    Entry {
        dist: Dist::Exponential,
        function: "cdf",
        params: EXP_X,
        compute: |v| exponential::cdf(v.x, v.lambda).map(Outcome::from),
        formula: |v| format!("1 - e^(-{} × {})", v.lambda, v.x),
    },
    Entry {
        dist: Dist::Exponential,
        function: "sf",
        params: EXP_X,
        compute: |v| exponential::sf(v.x, v.lambda).map(Outcome::from),
        formula: |v| format!("e^(-{} × {})", v.lambda, v.x),
    },
    Entry {
        dist: Dist::Exponential,
        function: "ppf",
        params: EXP_P,
        compute: |v| exponential::ppf(v.p, v.lambda).map(Outcome::from),
        formula: |v| format!("-ln(1 - {}) / {}", v.p, v.lambda),
    },
    Entry {
        dist: Dist::Exponential,
        function: "mean",
        params: EXP_L,
        compute: |v| exponential::mean(v.lambda).map(Outcome::from),
        formula: |v| format!("1 / λ = 1 / {}", v.lambda),
    },
    Entry {
        dist: Dist::Exponential,
        function: "variance",
        params: EXP_L,
        compute: |v| exponential::variance(v.lambda).map(Outcome::from),
        formula: |v| format!("1 / λ² = 1 / {}²", v.lambda),
    },
    Entry {
        dist: Dist::Exponential,
        function: "std",
        params: EXP_L,
        compute: |v| exponential::std(v.lambda).map(Outcome::from),
        formula: |v| format!("1 / λ = 1 / {}", v.lambda),
    },
];

fn lookup(dist: Dist, function: &str) -> Result<&'static Entry> {
    match TABLE.iter().find(|e| e.dist == dist && e.function == function) {
        Some(e) => Ok(e),
        None => bail!(
            "{} has no function '{}' (available: {})",
            dist.name(),
            function,
            functions(dist).collect::<Vec<_>>().join(", ")
        ),
    }
}

/// Collect the flags `entry` needs, failing on the first missing one.
fn collect(entry: &Entry, inputs: &Inputs) -> Result<(Values, Vec<(String, f64)>)> {
    let mut values = Values::default();
    let mut params = Vec::with_capacity(entry.params.len());
    for &param in entry.params {
        match param.take(inputs, &mut values) {
            Some(v) => params.push((param.name().to_string(), v)),
            None => bail!(
                "{} {} requires --{}",
                entry.dist.name(),
                entry.function,
                param.name()
            ),
        }
    }
    Ok((values, params))
}

/// Run one calculation through the table.
pub fn run(dist: Dist, function: &str, inputs: &Inputs) -> Result<Calculation> {
    let entry = lookup(dist, function)?;
    let (values, params) = collect(entry, inputs)?;
    tracing::debug!(distribution = dist.name(), function, ?params, "dispatching");

    let outcome = (entry.compute)(&values)?;
    let formula = (entry.formula)(&values);
    Ok(Calculation::new(dist.name(), entry.function, params, outcome, formula))
}

/// Function names registered for `dist`, in table order.
pub fn functions(dist: Dist) -> impl Iterator<Item = &'static str> {
    TABLE.iter().filter(move |e| e.dist == dist).map(|e| e.function)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_distribution_has_entries() {
        for dist in [Dist::Binomial, Dist::Poisson, Dist::Normal, Dist::Exponential] {
            assert!(functions(dist).count() >= 5, "{:?}", dist);
        }
        assert_eq!(functions(Dist::Normal).filter(|f| *f == "interval").count(), 1);
    }

    #[test]
    fn test_binomial_pmf_through_table() {
        let inputs = Inputs { n: Some(10), k: Some(3), p: Some(0.5), ..Default::default() };
        let calc = run(Dist::Binomial, "pmf", &inputs).unwrap();
        assert_eq!(calc.result, Outcome::Value(0.117_187_5));
        assert_eq!(calc.param("k"), Some(3.0));
        assert_eq!(calc.formula, "C(10,3) × 0.5^3 × 0.5^7");
    }

    #[test]
    fn test_interval_returns_pair() {
        let inputs =
            Inputs { confidence: Some(0.95), mu: Some(0.0), sigma: Some(1.0), ..Default::default() };
        let calc = run(Dist::Normal, "interval", &inputs).unwrap();
        match calc.result {
            Outcome::Interval { lower, upper } => {
                assert!((lower + 1.959_963_984_540_054).abs() < 1e-9);
                assert!((upper - 1.959_963_984_540_054).abs() < 1e-9);
            }
            other => panic!("expected interval, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_flag_is_reported() {
        let inputs = Inputs { n: Some(10), p: Some(0.5), ..Default::default() };
        let err = run(Dist::Binomial, "pmf", &inputs).unwrap_err();
        assert!(err.to_string().contains("--k"), "{}", err);
    }

    #[test]
    fn test_domain_error_propagates() {
        let inputs = Inputs { x: Some(0.0), mu: Some(0.0), sigma: Some(-1.0), ..Default::default() };
        let err = run(Dist::Normal, "pdf", &inputs).unwrap_err();
        let domain = err.downcast_ref::<pc_core::Error>().expect("domain error");
        assert_eq!(domain.parameter(), "sigma");
    }

    #[test]
    fn test_unknown_function() {
        assert!(run(Dist::Poisson, "ppf", &Inputs::default()).is_err());
    }
}
