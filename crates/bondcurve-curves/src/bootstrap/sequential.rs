//! Sequential bootstrap algorithm.
//!
//! Solves one zero rate per instrument in ascending maturity order. Flows
//! before an instrument's maturity discount off the knots already solved;
//! flows between the last solved knot and the maturity interpolate toward
//! the candidate knot being solved.

use log::{debug, warn};

use bondcurve_core::{CashFlow, Date, ValuationConfig};
use bondcurve_math::solvers::{hybrid_numerical, SolverConfig};

use crate::curves::{ZeroCurve, ZeroCurveBuilder};
use crate::error::{CurveError, CurveResult};
use crate::instruments::CurveInstrument;
use crate::par::ParCurve;

/// Sequential bootstrapper over a par curve.
///
/// # Example
///
/// ```rust,ignore
/// let par = ParCurve::new(&bonds, &prices, trade_date)?;
/// let zeros = SequentialBootstrapper::new(&par)
///     .with_config(ValuationConfig::default().with_tolerance(1e-12))
///     .bootstrap()?;
/// ```
pub struct SequentialBootstrapper<'p, 'a, I: CurveInstrument + ?Sized> {
    par_curve: &'p ParCurve<'a, I>,
    config: ValuationConfig,
}

impl<'p, 'a, I: CurveInstrument + ?Sized> SequentialBootstrapper<'p, 'a, I> {
    /// Creates a bootstrapper with default settings.
    #[must_use]
    pub fn new(par_curve: &'p ParCurve<'a, I>) -> Self {
        Self {
            par_curve,
            config: ValuationConfig::default(),
        }
    }

    /// Sets the solver tolerance, iteration budget, and rate bracket.
    #[must_use]
    pub fn with_config(mut self, config: ValuationConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs the bootstrap.
    ///
    /// # Errors
    ///
    /// - [`CurveError::Core`] if the configuration is invalid
    /// - [`CurveError::InvalidInstrument`] if an instrument has no flows after the trade date
    /// - [`CurveError::NonConvergence`] if a knot cannot be bracketed or solved
    pub fn bootstrap(&self) -> CurveResult<ZeroCurve> {
        self.config.validate()?;

        let trade_date = self.par_curve.trade_date();
        let solver = SolverConfig::new(self.config.solver_tolerance, self.config.max_iterations);
        let (lower, upper) = self.config.bootstrap_bracket;

        let mut builder = ZeroCurveBuilder::new();

        for ((instrument, &price), &par_rate) in self
            .par_curve
            .instruments()
            .iter()
            .zip(self.par_curve.prices())
            .zip(self.par_curve.rates())
        {
            let maturity = instrument.maturity();
            let flows: Vec<CashFlow> = instrument
                .cash_flows()
                .iter()
                .filter(|cf| cf.date() > trade_date)
                .copied()
                .collect();
            if maturity <= trade_date || flows.is_empty() {
                return Err(CurveError::invalid_instrument(format!(
                    "{} has no cash flows after {trade_date}",
                    instrument.description()
                )));
            }

            let objective = |rate: f64| {
                trial_price(&builder, maturity, rate, &flows, trade_date)
                    .map_or(f64::NAN, |model| model - price)
            };

            let guess = if par_rate.is_finite() {
                par_rate.clamp(lower, upper)
            } else {
                0.5 * (lower + upper)
            };

            let result = hybrid_numerical(objective, guess, (lower, upper), &solver)
                .map_err(|e| {
                    warn!(
                        "bootstrap failed for {} at price {price}: {e}",
                        instrument.description()
                    );
                    CurveError::non_convergence(instrument.description(), e.to_string())
                })?;

            debug!(
                "bootstrapped {maturity} -> {:.10} in {} iterations (par {par_rate:.10})",
                result.root, result.iterations
            );

            builder = builder.add_rate(maturity, result.root);
        }

        builder.build()
    }
}

/// Prices `flows` on the solved knots extended with a candidate knot.
fn trial_price(
    solved: &ZeroCurveBuilder,
    maturity: Date,
    rate: f64,
    flows: &[CashFlow],
    trade_date: Date,
) -> CurveResult<f64> {
    let curve = solved.clone().add_rate(maturity, rate).build()?;
    flows.iter().try_fold(0.0, |total, cf| -> CurveResult<f64> {
        Ok(total + cf.amount() * curve.discount_factor(trade_date, cf.date())?)
    })
}
