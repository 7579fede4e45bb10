//! Forward rate curve over dated intervals.

use serde::{Deserialize, Serialize};

use bondcurve_core::discounting::year_fraction;
use bondcurve_core::Date;

use crate::curves::ZeroCurve;
use crate::error::{CurveError, CurveResult};

/// Supplies forward rates on a time grid.
///
/// This is the only view of a curve that path simulators need.
pub trait ForwardRateSource {
    /// Returns one forward rate per grid date.
    ///
    /// # Errors
    ///
    /// [`CurveError::UnsortedGrid`] if the grid is not strictly increasing,
    /// [`CurveError::MaturityOutOfRange`] if a date lies past the curve.
    fn forward_rates(&self, time_grid: &[Date]) -> CurveResult<Vec<f64>>;
}

/// Annually compounded forward rates, each applying over a `(start, end)` interval.
///
/// Intervals are ordered by start date. They need not be contiguous to be
/// queried, but [`spot_curve`](Self::spot_curve) requires every interval to
/// end where the next begins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ForwardCurveData", into = "ForwardCurveData")]
pub struct ForwardCurve {
    intervals: Vec<(Date, Date)>,
    rates: Vec<f64>,
}

impl ForwardCurve {
    /// Creates a forward curve.
    ///
    /// # Errors
    ///
    /// - [`CurveError::LengthMismatch`] if the inputs differ in length
    /// - [`CurveError::EmptyCurve`] if there are no intervals
    /// - [`CurveError::InvalidInput`] if an interval does not end after it starts
    /// - [`CurveError::NonMonotonicMaturities`] if start dates are not strictly ascending
    pub fn new(intervals: Vec<(Date, Date)>, rates: Vec<f64>) -> CurveResult<Self> {
        if intervals.len() != rates.len() {
            return Err(CurveError::length_mismatch(intervals.len(), rates.len()));
        }
        if intervals.is_empty() {
            return Err(CurveError::EmptyCurve);
        }
        if let Some((start, end)) = intervals.iter().find(|(s, e)| e <= s) {
            return Err(CurveError::invalid_input(format!(
                "forward interval ({start}, {end}) must end after it starts"
            )));
        }
        if let Some(i) = intervals.windows(2).position(|w| w[1].0 <= w[0].0) {
            return Err(CurveError::NonMonotonicMaturities {
                index: i + 1,
                prev: intervals[i].0,
                current: intervals[i + 1].0,
            });
        }

        Ok(Self { intervals, rates })
    }

    /// Returns the `(start, end)` intervals.
    #[must_use]
    pub fn intervals(&self) -> &[(Date, Date)] {
        &self.intervals
    }

    /// Returns the forward rates.
    #[must_use]
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    /// Returns the number of intervals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Always false; a curve has at least one interval.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Forward rate in force on `date`.
    ///
    /// Piecewise flat: the rate of the latest interval starting on or before
    /// `date`, the first rate before the curve starts.
    pub fn forward_rate(&self, date: Date) -> CurveResult<f64> {
        let last_end = self.intervals[self.intervals.len() - 1].1;
        if date > last_end {
            return Err(CurveError::maturity_out_of_range(date, last_end));
        }
        let idx = self
            .intervals
            .partition_point(|(start, _)| *start <= date)
            .saturating_sub(1);
        Ok(self.rates[idx])
    }

    /// Inverts the forward curve into a zero curve as seen from `trade_date`.
    ///
    /// The first zero rate equals the first forward. Each later knot satisfies
    /// `(1+r_n)^{t_n} = (1+r_{n-1})^{t_{n-1}} (1+f_n)^{Δ_n}`, with knots on the
    /// interval end dates.
    ///
    /// # Errors
    ///
    /// [`CurveError::DiscontinuousCurve`] if an interval does not end exactly
    /// where the next one starts.
    pub fn spot_curve(&self, trade_date: Date) -> CurveResult<ZeroCurve> {
        if let Some(i) = self.intervals.windows(2).position(|w| w[0].1 != w[1].0) {
            return Err(CurveError::DiscontinuousCurve {
                index: i,
                end: self.intervals[i].1,
                next_start: self.intervals[i + 1].0,
            });
        }

        let mut maturities = Vec::with_capacity(self.len());
        let mut rates = Vec::with_capacity(self.len());

        let mut prev_end = self.intervals[0].1;
        let mut prev_rate = self.rates[0];
        maturities.push(prev_end);
        rates.push(prev_rate);

        for (&(start, end), &fwd) in self.intervals.iter().zip(&self.rates).skip(1) {
            let t_prev = year_fraction(trade_date, prev_end);
            let delta = year_fraction(start, end);
            let growth = (1.0 + prev_rate).powf(t_prev) * (1.0 + fwd).powf(delta);
            let spot = growth.powf(1.0 / (t_prev + delta)) - 1.0;

            maturities.push(end);
            rates.push(spot);
            prev_end = end;
            prev_rate = spot;
        }

        ZeroCurve::new(maturities, rates)
    }
}

impl ForwardRateSource for ForwardCurve {
    fn forward_rates(&self, time_grid: &[Date]) -> CurveResult<Vec<f64>> {
        if let Some(i) = time_grid.windows(2).position(|w| w[1] <= w[0]) {
            return Err(CurveError::UnsortedGrid { index: i + 1 });
        }
        time_grid.iter().map(|d| self.forward_rate(*d)).collect()
    }
}

#[derive(Serialize, Deserialize)]
struct ForwardCurveData {
    intervals: Vec<(Date, Date)>,
    rates: Vec<f64>,
}

impl TryFrom<ForwardCurveData> for ForwardCurve {
    type Error = CurveError;

    fn try_from(data: ForwardCurveData) -> Result<Self, Self::Error> {
        Self::new(data.intervals, data.rates)
    }
}

impl From<ForwardCurve> for ForwardCurveData {
    fn from(curve: ForwardCurve) -> Self {
        Self {
            intervals: curve.intervals,
            rates: curve.rates,
        }
    }
}

/// Builder that accumulates forward intervals and freezes them into a [`ForwardCurve`].
#[derive(Debug, Clone, Default)]
pub struct ForwardCurveBuilder {
    points: Vec<((Date, Date), f64)>,
}

impl ForwardCurveBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a forward rate over `(start, end)`.
    #[must_use]
    pub fn add_rate(mut self, start: Date, end: Date, rate: f64) -> Self {
        self.points.push(((start, end), rate));
        self
    }

    /// Sorts the intervals by start date and freezes them into a curve.
    pub fn build(mut self) -> CurveResult<ForwardCurve> {
        self.points.sort_by_key(|((start, _), _)| *start);
        let (intervals, rates): (Vec<_>, Vec<_>) = self.points.into_iter().unzip();
        ForwardCurve::new(intervals, rates)
    }
}
