//! Valuation configuration.
//!
//! Settings shared by the yield solver and the curve bootstrapper. Every
//! field has a default, so a partial JSON document is a valid configuration.
//!
//! ```rust
//! use bondcurve_core::config::ValuationConfig;
//!
//! let config = ValuationConfig::from_json_str(r#"{ "max_iterations": 50 }"#).unwrap();
//! assert_eq!(config.max_iterations, 50);
//! assert_eq!(config.solver_tolerance, 1e-10);
//! ```

use serde::{Deserialize, Serialize};

use crate::daycounts::DayCountConvention;
use crate::error::{CoreError, CoreResult};

/// Solver and bracketing settings for valuation routines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationConfig {
    /// Convergence tolerance on the price residual.
    #[serde(default = "default_solver_tolerance")]
    pub solver_tolerance: f64,

    /// Maximum iterations per root-find.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Search interval for yield-to-maturity solving.
    #[serde(default = "default_yield_bracket")]
    pub yield_bracket: (f64, f64),

    /// Search interval for each bootstrapped zero rate.
    #[serde(default = "default_bootstrap_bracket")]
    pub bootstrap_bracket: (f64, f64),

    /// Day count used for all time measurement.
    #[serde(default)]
    pub day_count: DayCountConvention,
}

fn default_solver_tolerance() -> f64 {
    1e-10
}

fn default_max_iterations() -> u32 {
    100
}

fn default_yield_bracket() -> (f64, f64) {
    (-0.5, 1.0)
}

fn default_bootstrap_bracket() -> (f64, f64) {
    (-0.9, 2.0)
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            solver_tolerance: default_solver_tolerance(),
            max_iterations: default_max_iterations(),
            yield_bracket: default_yield_bracket(),
            bootstrap_bracket: default_bootstrap_bracket(),
            day_count: DayCountConvention::default(),
        }
    }
}

impl ValuationConfig {
    /// Parses and validates a configuration from JSON.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CoreError::config_error(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the solver tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.solver_tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the yield search interval.
    #[must_use]
    pub fn with_yield_bracket(mut self, lower: f64, upper: f64) -> Self {
        self.yield_bracket = (lower, upper);
        self
    }

    /// Sets the bootstrap search interval.
    #[must_use]
    pub fn with_bootstrap_bracket(mut self, lower: f64, upper: f64) -> Self {
        self.bootstrap_bracket = (lower, upper);
        self
    }

    /// Checks that every setting is usable.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.solver_tolerance > 0.0 && self.solver_tolerance <= 1e-4) {
            return Err(CoreError::config_error(
                "solver_tolerance must be between 0 and 1e-4",
            ));
        }

        if self.max_iterations == 0 || self.max_iterations > 10_000 {
            return Err(CoreError::config_error(
                "max_iterations must be between 1 and 10000",
            ));
        }

        for (name, (lower, upper)) in [
            ("yield_bracket", self.yield_bracket),
            ("bootstrap_bracket", self.bootstrap_bracket),
        ] {
            if !(lower.is_finite() && upper.is_finite() && lower < upper) {
                return Err(CoreError::config_error(format!(
                    "{name} must be a finite interval with lower < upper, got ({lower}, {upper})"
                )));
            }
            if lower <= -1.0 {
                return Err(CoreError::config_error(format!(
                    "{name} lower bound must exceed -1, got {lower}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ValuationConfig::default();
        assert_eq!(config.solver_tolerance, 1e-10);
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.yield_bracket, (-0.5, 1.0));
        assert_eq!(config.bootstrap_bracket, (-0.9, 2.0));
        assert_eq!(config.day_count, DayCountConvention::Act365Fixed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = ValuationConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ValuationConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config =
            ValuationConfig::from_json_str(r#"{ "yield_bracket": [-0.2, 0.8] }"#).unwrap();
        assert_eq!(config.yield_bracket, (-0.2, 0.8));
        assert_eq!(config.max_iterations, 100);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(ValuationConfig::from_json_str(r#"{ "max_iterations": 0 }"#).is_err());
        assert!(ValuationConfig::from_json_str(r#"{ "solver_tolerance": -1.0 }"#).is_err());
        assert!(ValuationConfig::from_json_str(r#"{ "bootstrap_bracket": [1.0, 0.5] }"#).is_err());
        assert!(ValuationConfig::from_json_str(r#"{ "yield_bracket": [-1.5, 0.5] }"#).is_err());
        assert!(ValuationConfig::from_json_str("not json").is_err());
    }

    #[test]
    fn test_builder_methods() {
        let config = ValuationConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(200);
        assert_eq!(config.solver_tolerance, 1e-8);
        assert_eq!(config.max_iterations, 200);
    }
}
