//! Common data types for probcalc

use serde::{Deserialize, Serialize};

/// Outcome of a single library call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outcome {
    /// Scalar result (probability, density, quantile or moment)
    Value(f64),
    /// Two-sided interval `(lower, upper)`
    Interval {
        /// Lower bound
        lower: f64,
        /// Upper bound
        upper: f64,
    },
}

impl From<f64> for Outcome {
    fn from(v: f64) -> Self {
        Outcome::Value(v)
    }
}

impl From<(f64, f64)> for Outcome {
    fn from((lower, upper): (f64, f64)) -> Self {
        Outcome::Interval { lower, upper }
    }
}

/// Record of one calculation: what was asked, what came back, and the formula
/// that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    /// Distribution name (`"binomial"`, `"normal"`, ...)
    pub distribution: String,

    /// Function name (`"pmf"`, `"ppf"`, ...)
    pub function: String,

    /// Input parameters, in the order they appear in the formula
    pub params: Vec<(String, f64)>,

    /// Returned value
    pub result: Outcome,

    /// Plain-text restatement of the formula with the inputs substituted
    pub formula: String,
}

impl Calculation {
    /// Create a new calculation record
    pub fn new(
        distribution: &str,
        function: &str,
        params: Vec<(String, f64)>,
        result: impl Into<Outcome>,
        formula: String,
    ) -> Self {
        Self {
            distribution: distribution.to_string(),
            function: function.to_string(),
            params,
            result: result.into(),
            formula,
        }
    }

    /// Look up an input parameter by name.
    pub fn param(&self, name: &str) -> Option<f64> {
        self.params.iter().find(|(n, _)| n == name).map(|(_, v)| *v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculation_param_lookup() {
        let c = Calculation::new(
            "poisson",
            "pmf",
            vec![("lambda".into(), 4.0), ("k".into(), 2.0)],
            0.1465,
            "e^-4 × 4^2 / 2!".into(),
        );
        assert_eq!(c.param("lambda"), Some(4.0));
        assert_eq!(c.param("k"), Some(2.0));
        assert_eq!(c.param("sigma"), None);
    }

    #[test]
    fn test_outcome_serializes_untagged() {
        let v = serde_json::to_value(Outcome::Value(0.5)).unwrap();
        assert_eq!(v, serde_json::json!(0.5));

        let v = serde_json::to_value(Outcome::from((-1.0, 1.0))).unwrap();
        assert_eq!(v, serde_json::json!({ "lower": -1.0, "upper": 1.0 }));
    }
}
