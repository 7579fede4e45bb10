//! Yield-to-maturity solver.
//!
//! Finds the flat, discretely compounded yield whose present value of the
//! future cash flows equals a dirty price. Newton-Raphson with the analytic
//! derivative runs first, with Brent's method on the bracket as fallback.
//!
//! # Example
//!
//! ```rust
//! use bondcurve_bonds::pricing::YieldSolver;
//! use bondcurve_core::types::{CashFlow, Date};
//!
//! let trade = Date::from_ymd(2014, 1, 1).unwrap();
//! let flows = [CashFlow::principal(Date::from_ymd(2015, 1, 1).unwrap(), 100.0)];
//!
//! let result = YieldSolver::new().solve(&flows, 98.0, trade, 1.0).unwrap();
//! assert!((result.yield_value - (100.0 / 98.0 - 1.0)).abs() < 1e-10);
//! ```

use log::{debug, warn};

use bondcurve_core::config::ValuationConfig;
use bondcurve_core::discounting::{present_value, present_value_derivative, year_fraction};
use bondcurve_core::types::{CashFlow, Compounding, Date};
use bondcurve_math::solvers::{hybrid, SolverConfig};

use crate::error::{BondError, BondResult};

/// Times the upper yield bound is doubled while looking for a sign change.
const MAX_BRACKET_EXPANSIONS: u32 = 6;

/// Result of a yield calculation.
#[derive(Debug, Clone, Copy)]
pub struct YieldResult {
    /// The calculated yield (as a decimal, e.g., 0.05 for 5%).
    pub yield_value: f64,
    /// Number of iterations to converge.
    pub iterations: u32,
    /// Final price residual.
    pub residual: f64,
}

/// Yield-to-maturity solver.
#[derive(Debug, Clone, Default)]
pub struct YieldSolver {
    config: ValuationConfig,
}

impl YieldSolver {
    /// Creates a solver with the default valuation settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver with the given valuation settings.
    #[must_use]
    pub fn with_config(config: ValuationConfig) -> Self {
        Self { config }
    }

    /// Returns the valuation settings.
    #[must_use]
    pub fn config(&self) -> &ValuationConfig {
        &self.config
    }

    /// Solves for the yield that prices `cash_flows` at `price` on `trade_date`.
    ///
    /// `period` is the compounding period in years. Only flows dated strictly
    /// after the trade date contribute.
    ///
    /// # Errors
    ///
    /// - `BondError::InvalidPrice` for a non-finite price
    /// - `BondError::NonConvergence` for a non-positive price, when no
    ///   yield in the bracket reproduces the price, or when the solver runs
    ///   out of iterations
    /// - `BondError::NoFutureCashFlows` when nothing is left to discount
    /// - `BondError::Core` when the valuation settings are invalid
    pub fn solve(
        &self,
        cash_flows: &[CashFlow],
        price: f64,
        trade_date: Date,
        period: f64,
    ) -> BondResult<YieldResult> {
        self.config.validate()?;

        if !price.is_finite() {
            return Err(BondError::invalid_price(format!("price must be finite, got {price}")));
        }
        if price <= 0.0 {
            return Err(BondError::non_convergence(format!(
                "no yield reproduces non-positive price {price}"
            )));
        }

        let cf_data: Vec<(f64, f64)> = cash_flows
            .iter()
            .filter(|cf| cf.date() > trade_date)
            .map(|cf| (year_fraction(trade_date, cf.date()), cf.amount()))
            .collect();

        if cf_data.is_empty() {
            return Err(BondError::no_future_cash_flows(trade_date));
        }

        let objective = |y: f64| pv_at_yield(&cf_data, y, period) - price;
        let derivative = |y: f64| pv_derivative(&cf_data, y, period);

        let (lower, upper) = self.bracket(&objective)?;
        let guess = initial_guess(&cf_data, price).clamp(lower, upper);

        let solver_config =
            SolverConfig::new(self.config.solver_tolerance, self.config.max_iterations);

        match hybrid(objective, derivative, guess, (lower, upper), &solver_config) {
            Ok(result) => {
                debug!(
                    "Solved yield {:.10} for price {price} in {} iterations",
                    result.root, result.iterations
                );
                Ok(YieldResult {
                    yield_value: result.root,
                    iterations: result.iterations,
                    residual: result.residual,
                })
            }
            Err(e) => {
                warn!("Yield solve failed for price {price} on {trade_date}: {e}");
                Err(BondError::non_convergence(e.to_string()))
            }
        }
    }

    /// Finds a bracket `[lower, upper]` over which the objective changes sign.
    ///
    /// The price falls as the yield rises, so only the upper bound is widened.
    fn bracket<F>(&self, objective: &F) -> BondResult<(f64, f64)>
    where
        F: Fn(f64) -> f64,
    {
        let (lower, mut upper) = self.config.yield_bracket;

        let f_lower = objective(lower);
        if !f_lower.is_finite() || f_lower < 0.0 {
            return Err(BondError::non_convergence(format!(
                "price exceeds the value at the lowest yield {lower}"
            )));
        }

        for _ in 0..=MAX_BRACKET_EXPANSIONS {
            let f_upper = objective(upper);
            if f_upper.is_finite() && f_upper <= 0.0 {
                return Ok((lower, upper));
            }
            upper = if upper > 0.0 { upper * 2.0 } else { 1.0 };
        }

        Err(BondError::non_convergence(format!(
            "price is below the value at yield {upper}"
        )))
    }
}

/// Annualised growth from price to total remaining cash.
fn initial_guess(cf_data: &[(f64, f64)], price: f64) -> f64 {
    let total: f64 = cf_data.iter().map(|(_, amount)| amount).sum();
    let years = cf_data.last().map_or(1.0, |(t, _)| *t).max(1.0 / 365.0);
    (total / price).powf(1.0 / years) - 1.0
}

fn pv_at_yield(cf_data: &[(f64, f64)], yield_rate: f64, period: f64) -> f64 {
    cf_data
        .iter()
        .map(|&(t, amount)| present_value(amount, yield_rate, t, period, Compounding::Discrete))
        .sum()
}

fn pv_derivative(cf_data: &[(f64, f64)], yield_rate: f64, period: f64) -> f64 {
    cf_data
        .iter()
        .map(|&(t, amount)| {
            present_value_derivative(amount, yield_rate, t, period, Compounding::Discrete)
        })
        .sum()
}
