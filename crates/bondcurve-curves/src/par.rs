//! Par curve of traded instruments.

use bondcurve_core::{Date, ValuationConfig};
use bondcurve_math::interpolation::{Interpolator, LinearInterpolator};
use bondcurve_math::MathError;

use crate::bootstrap::SequentialBootstrapper;
use crate::curves::ZeroCurve;
use crate::error::{CurveError, CurveResult};
use crate::instruments::CurveInstrument;

/// Yields to maturity of quoted instruments, keyed by instrument maturity.
///
/// Instruments are borrowed, not owned. On construction they are sorted by
/// maturity together with their prices, and each yield is solved once.
/// `par_rate` interpolates exactly like [`ZeroCurve::zero_rate`].
pub struct ParCurve<'a, I: CurveInstrument + ?Sized> {
    trade_date: Date,
    instruments: Vec<&'a I>,
    prices: Vec<f64>,
    maturities: Vec<Date>,
    rates: Vec<f64>,
    interpolator: LinearInterpolator,
}

impl<'a, I: CurveInstrument + ?Sized> ParCurve<'a, I> {
    /// Builds a par curve from instruments and their dirty prices on `trade_date`.
    ///
    /// # Errors
    ///
    /// - [`CurveError::LengthMismatch`] if instrument and price counts differ
    /// - [`CurveError::EmptyCurve`] if there are no instruments
    /// - [`CurveError::NonMonotonicMaturities`] if two instruments share a maturity
    /// - any error from solving an instrument's yield
    pub fn new(
        instruments: impl IntoIterator<Item = &'a I>,
        prices: &[f64],
        trade_date: Date,
    ) -> CurveResult<Self> {
        let instruments: Vec<&'a I> = instruments.into_iter().collect();
        if instruments.len() != prices.len() {
            return Err(CurveError::length_mismatch(instruments.len(), prices.len()));
        }
        if instruments.is_empty() {
            return Err(CurveError::EmptyCurve);
        }

        let mut quoted: Vec<(&'a I, f64)> =
            instruments.into_iter().zip(prices.iter().copied()).collect();
        quoted.sort_by_key(|(inst, _)| inst.maturity());

        let maturities: Vec<Date> = quoted.iter().map(|(inst, _)| inst.maturity()).collect();
        if let Some(i) = maturities.windows(2).position(|w| w[1] <= w[0]) {
            return Err(CurveError::NonMonotonicMaturities {
                index: i + 1,
                prev: maturities[i],
                current: maturities[i + 1],
            });
        }

        let rates = quoted
            .iter()
            .map(|(inst, price)| inst.yield_to_maturity(*price, trade_date))
            .collect::<CurveResult<Vec<f64>>>()?;

        let first = maturities[0];
        let xs = maturities.iter().map(|m| first.days_between(m) as f64).collect();
        let interpolator = LinearInterpolator::new(xs, rates.clone())
            .map_err(|e| CurveError::invalid_input(e.to_string()))?
            .with_flat_below();

        let (instruments, prices) = quoted.into_iter().unzip();

        Ok(Self {
            trade_date,
            instruments,
            prices,
            maturities,
            rates,
            interpolator,
        })
    }

    /// Returns the trade date the yields were solved on.
    #[must_use]
    pub fn trade_date(&self) -> Date {
        self.trade_date
    }

    /// Returns the instruments in maturity order.
    #[must_use]
    pub fn instruments(&self) -> &[&'a I] {
        &self.instruments
    }

    /// Returns the prices in maturity order.
    #[must_use]
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// Returns the instrument maturities.
    #[must_use]
    pub fn maturities(&self) -> &[Date] {
        &self.maturities
    }

    /// Returns the par rates (instrument yields).
    #[must_use]
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    /// Returns the number of instruments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    /// Always false; a par curve has at least one instrument.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// Par rate at `maturity`: flat below the first instrument, linear in
    /// calendar days between instruments, an error past the last.
    pub fn par_rate(&self, maturity: Date) -> CurveResult<f64> {
        let x = self.maturities[0].days_between(&maturity) as f64;
        self.interpolator.interpolate(x).map_err(|e| match e {
            MathError::ExtrapolationNotAllowed { .. } => CurveError::maturity_out_of_range(
                maturity,
                self.maturities[self.maturities.len() - 1],
            ),
            other => CurveError::invalid_input(other.to_string()),
        })
    }

    /// Bootstraps a zero curve with default settings.
    pub fn bootstrap(&self) -> CurveResult<ZeroCurve> {
        SequentialBootstrapper::new(self).bootstrap()
    }

    /// Bootstraps a zero curve with explicit solver settings.
    pub fn bootstrap_with_config(&self, config: &ValuationConfig) -> CurveResult<ZeroCurve> {
        SequentialBootstrapper::new(self)
            .with_config(config.clone())
            .bootstrap()
    }
}

impl<I: CurveInstrument + ?Sized> std::fmt::Debug for ParCurve<'_, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParCurve")
            .field("trade_date", &self.trade_date)
            .field("maturities", &self.maturities)
            .field("prices", &self.prices)
            .field("rates", &self.rates)
            .finish_non_exhaustive()
    }
}
