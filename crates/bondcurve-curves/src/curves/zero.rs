//! Zero-coupon yield curve.

use serde::{Deserialize, Serialize};

use bondcurve_core::discounting::{discount_factor, year_fraction};
use bondcurve_core::Date;
use bondcurve_math::interpolation::{Interpolator, LinearInterpolator};
use bondcurve_math::MathError;

use crate::curves::ForwardCurve;
use crate::error::{CurveError, CurveResult};

/// A zero-coupon (spot) rate curve on dated knots.
///
/// Rates are annually compounded. Between knots the rate is linear in
/// calendar days; before the first knot the first rate is held flat; past
/// the last knot every query fails with [`CurveError::MaturityOutOfRange`].
///
/// # Example
///
/// ```rust
/// use bondcurve_core::Date;
/// use bondcurve_curves::curves::ZeroCurve;
///
/// let curve = ZeroCurve::parse(&["2014-04-01", "2014-07-01"], &[0.01, 0.02]).unwrap();
///
/// let early = Date::parse("2014-02-01").unwrap();
/// assert_eq!(curve.zero_rate(early).unwrap(), 0.01);
///
/// let late = Date::parse("2015-01-01").unwrap();
/// assert!(curve.zero_rate(late).is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ZeroCurveData", into = "ZeroCurveData")]
pub struct ZeroCurve {
    maturities: Vec<Date>,
    rates: Vec<f64>,
    interpolator: LinearInterpolator,
}

impl ZeroCurve {
    /// Creates a curve from strictly ascending maturities and their rates.
    ///
    /// # Errors
    ///
    /// - [`CurveError::LengthMismatch`] if the inputs differ in length
    /// - [`CurveError::EmptyCurve`] if there are no points
    /// - [`CurveError::NonMonotonicMaturities`] if maturities are not strictly ascending
    pub fn new(maturities: Vec<Date>, rates: Vec<f64>) -> CurveResult<Self> {
        if maturities.len() != rates.len() {
            return Err(CurveError::length_mismatch(maturities.len(), rates.len()));
        }
        let Some(&first) = maturities.first() else {
            return Err(CurveError::EmptyCurve);
        };
        check_ascending(&maturities)?;

        let xs = maturities
            .iter()
            .map(|m| first.days_between(m) as f64)
            .collect();
        let interpolator = LinearInterpolator::new(xs, rates.clone())
            .map_err(|e| CurveError::invalid_input(e.to_string()))?
            .with_flat_below();

        Ok(Self {
            maturities,
            rates,
            interpolator,
        })
    }

    /// Creates a curve from `YYYY-MM-DD` maturity strings.
    pub fn parse(maturities: &[&str], rates: &[f64]) -> CurveResult<Self> {
        let dates = maturities
            .iter()
            .map(|s| Date::parse(s))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(dates, rates.to_vec())
    }

    /// Returns the knot maturities.
    #[must_use]
    pub fn maturities(&self) -> &[Date] {
        &self.maturities
    }

    /// Returns the knot rates.
    #[must_use]
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    /// Returns the number of knots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.maturities.len()
    }

    /// Always false; a curve has at least one knot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.maturities.is_empty()
    }

    /// Returns the last maturity covered by the curve.
    #[must_use]
    pub fn max_maturity(&self) -> Date {
        self.maturities[self.maturities.len() - 1]
    }

    /// Zero rate at `maturity`.
    pub fn zero_rate(&self, maturity: Date) -> CurveResult<f64> {
        let x = self.maturities[0].days_between(&maturity) as f64;
        self.interpolator.interpolate(x).map_err(|e| match e {
            MathError::ExtrapolationNotAllowed { .. } => {
                CurveError::maturity_out_of_range(maturity, self.max_maturity())
            }
            other => CurveError::invalid_input(other.to_string()),
        })
    }

    /// Discount factor `1 / (1 + r)^t` from `trade_date` to `maturity`.
    pub fn discount_factor(&self, trade_date: Date, maturity: Date) -> CurveResult<f64> {
        let rate = self.zero_rate(maturity)?;
        Ok(discount_factor(year_fraction(trade_date, maturity), rate))
    }

    /// Derives the implied forward curve as seen from `trade_date`.
    ///
    /// The first interval runs from `trade_date` to the first knot at the
    /// first zero rate. Each later interval `(m_i, m_{i+1})` carries the rate
    /// `f` with `(1+f)^Δ = (1+r_{i+1})^{t_{i+1}} / (1+r_i)^{t_i}`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidInput`] unless `trade_date` precedes the first knot.
    pub fn forward_curve(&self, trade_date: Date) -> CurveResult<ForwardCurve> {
        let first = self.maturities[0];
        if trade_date >= first {
            return Err(CurveError::invalid_input(format!(
                "trade date {trade_date} must precede the first curve point {first}"
            )));
        }

        let mut intervals = Vec::with_capacity(self.len());
        let mut forwards = Vec::with_capacity(self.len());
        intervals.push((trade_date, first));
        forwards.push(self.rates[0]);

        for (m, r) in self.maturities.windows(2).zip(self.rates.windows(2)) {
            let t_prev = year_fraction(trade_date, m[0]);
            let t_next = year_fraction(trade_date, m[1]);
            let delta = year_fraction(m[0], m[1]);
            let growth = (1.0 + r[1]).powf(t_next) / (1.0 + r[0]).powf(t_prev);
            intervals.push((m[0], m[1]));
            forwards.push(growth.powf(1.0 / delta) - 1.0);
        }

        ForwardCurve::new(intervals, forwards)
    }
}

impl PartialEq for ZeroCurve {
    fn eq(&self, other: &Self) -> bool {
        self.maturities == other.maturities && self.rates == other.rates
    }
}

fn check_ascending(maturities: &[Date]) -> CurveResult<()> {
    match maturities.windows(2).position(|w| w[1] <= w[0]) {
        Some(i) => Err(CurveError::NonMonotonicMaturities {
            index: i + 1,
            prev: maturities[i],
            current: maturities[i + 1],
        }),
        None => Ok(()),
    }
}

#[derive(Serialize, Deserialize)]
struct ZeroCurveData {
    maturities: Vec<Date>,
    rates: Vec<f64>,
}

impl TryFrom<ZeroCurveData> for ZeroCurve {
    type Error = CurveError;

    fn try_from(data: ZeroCurveData) -> Result<Self, Self::Error> {
        Self::new(data.maturities, data.rates)
    }
}

impl From<ZeroCurve> for ZeroCurveData {
    fn from(curve: ZeroCurve) -> Self {
        Self {
            maturities: curve.maturities,
            rates: curve.rates,
        }
    }
}

/// Builder that accumulates knots and freezes them into a [`ZeroCurve`].
///
/// Points may be added in any order; `build` sorts them.
#[derive(Debug, Clone, Default)]
pub struct ZeroCurveBuilder {
    points: Vec<(Date, f64)>,
}

impl ZeroCurveBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from the knots of an existing curve.
    #[must_use]
    pub fn from_curve(curve: &ZeroCurve) -> Self {
        Self {
            points: curve
                .maturities
                .iter()
                .copied()
                .zip(curve.rates.iter().copied())
                .collect(),
        }
    }

    /// Adds a knot.
    #[must_use]
    pub fn add_rate(mut self, maturity: Date, rate: f64) -> Self {
        self.points.push((maturity, rate));
        self
    }

    /// Adds several knots.
    #[must_use]
    pub fn add_rates(mut self, rates: impl IntoIterator<Item = (Date, f64)>) -> Self {
        self.points.extend(rates);
        self
    }

    /// Returns the number of knots added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if no knots have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sorts the knots and freezes them into a curve.
    ///
    /// # Errors
    ///
    /// [`CurveError::EmptyCurve`] without knots, and
    /// [`CurveError::NonMonotonicMaturities`] if two knots share a maturity.
    pub fn build(mut self) -> CurveResult<ZeroCurve> {
        if self.points.is_empty() {
            return Err(CurveError::EmptyCurve);
        }

        self.points.sort_by_key(|(date, _)| *date);

        let (maturities, rates): (Vec<_>, Vec<_>) = self.points.into_iter().unzip();

        ZeroCurve::new(maturities, rates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn date(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    fn sample_curve() -> ZeroCurve {
        ZeroCurve::parse(
            &["2014-04-01", "2014-07-01", "2015-01-01", "2016-01-01"],
            &[0.012, 0.018, 0.021, 0.027],
        )
        .unwrap()
    }

    #[test]
    fn test_exact_knots() {
        let curve = sample_curve();
        for (m, r) in curve.maturities().iter().zip(curve.rates()) {
            assert_eq!(curve.zero_rate(*m).unwrap(), *r);
        }
    }

    #[test]
    fn test_midpoint() {
        let curve = ZeroCurve::parse(&["2014-01-01", "2014-01-31"], &[0.01, 0.03]).unwrap();
        assert_relative_eq!(curve.zero_rate(date("2014-01-16")).unwrap(), 0.02);
    }

    #[test]
    fn test_knots_and_midpoints_exact_for_awkward_rates() {
        let curve = ZeroCurve::parse(&["2014-04-01", "2015-01-01"], &[0.1098, 0.0234]).unwrap();
        assert_eq!(curve.zero_rate(date("2015-01-01")).unwrap(), 0.0234);
        assert_eq!(curve.zero_rate(date("2014-04-01")).unwrap(), 0.1098);

        let curve = ZeroCurve::parse(&["2014-01-01", "2014-01-31"], &[0.0536, 0.1221]).unwrap();
        assert_eq!(curve.zero_rate(date("2014-01-16")).unwrap(), 0.08785);
    }

    #[test]
    fn test_flat_below_error_above() {
        let curve = sample_curve();
        assert_eq!(curve.zero_rate(date("2000-01-01")).unwrap(), 0.012);
        assert_eq!(
            curve.zero_rate(date("2016-01-02")),
            Err(CurveError::maturity_out_of_range(
                date("2016-01-02"),
                date("2016-01-01")
            ))
        );
    }

    #[test]
    fn test_single_knot() {
        let curve = ZeroCurve::parse(&["2015-01-01"], &[0.03]).unwrap();
        assert_eq!(curve.zero_rate(date("2014-06-01")).unwrap(), 0.03);
        assert_eq!(curve.zero_rate(date("2015-01-01")).unwrap(), 0.03);
        assert!(curve.zero_rate(date("2015-01-02")).is_err());
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            ZeroCurve::parse(&["2014-04-01", "2014-07-01"], &[0.01]),
            Err(CurveError::length_mismatch(2, 1))
        );
        assert_eq!(ZeroCurve::new(vec![], vec![]), Err(CurveError::EmptyCurve));
        assert!(matches!(
            ZeroCurve::parse(&["2014-07-01", "2014-04-01"], &[0.01, 0.02]),
            Err(CurveError::NonMonotonicMaturities { index: 1, .. })
        ));
        assert!(matches!(
            ZeroCurve::parse(&["2014-13-01"], &[0.01]),
            Err(CurveError::Core(_))
        ));
    }

    #[test]
    fn test_discount_factor() {
        let curve = ZeroCurve::parse(&["2015-01-01", "2016-01-01"], &[0.05, 0.05]).unwrap();
        let df = curve
            .discount_factor(date("2014-01-01"), date("2015-01-01"))
            .unwrap();
        assert_relative_eq!(df, 1.0 / 1.05, epsilon = 1e-14);
    }

    #[test]
    fn test_forward_curve_shape() {
        let trade = date("2014-01-01");
        let curve = sample_curve();
        let fwd = curve.forward_curve(trade).unwrap();

        assert_eq!(fwd.len(), curve.len());
        assert_eq!(fwd.intervals()[0], (trade, date("2014-04-01")));
        assert_eq!(fwd.rates()[0], 0.012);
        // Upward sloping zeros imply forwards above the longer zero rate
        assert!(fwd.rates()[3] > 0.027);
    }

    #[test]
    fn test_forward_curve_requires_trade_before_first_knot() {
        let curve = sample_curve();
        assert!(curve.forward_curve(date("2014-04-01")).is_err());
    }

    #[test]
    fn test_round_trip_through_forwards() {
        let trade = date("2014-01-01");
        let curve = sample_curve();
        let spot = curve.forward_curve(trade).unwrap().spot_curve(trade).unwrap();

        assert_eq!(spot.maturities(), curve.maturities());
        for (a, b) in spot.rates().iter().zip(curve.rates()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_builder_sorts_and_refreezes() {
        let curve = ZeroCurveBuilder::new()
            .add_rate(date("2015-01-01"), 0.02)
            .add_rate(date("2014-07-01"), 0.01)
            .build()
            .unwrap();
        assert_eq!(curve.maturities()[0], date("2014-07-01"));

        let extended = ZeroCurveBuilder::from_curve(&curve)
            .add_rate(date("2016-01-01"), 0.03)
            .build()
            .unwrap();
        assert_eq!(extended.len(), 3);
        assert_eq!(curve.len(), 2);
        assert_eq!(extended.zero_rate(date("2016-01-01")).unwrap(), 0.03);
    }

    #[test]
    fn test_builder_rejects_duplicates() {
        let result = ZeroCurveBuilder::new()
            .add_rate(date("2015-01-01"), 0.02)
            .add_rate(date("2015-01-01"), 0.03)
            .build();
        assert!(matches!(
            result,
            Err(CurveError::NonMonotonicMaturities { .. })
        ));
        assert_eq!(ZeroCurveBuilder::new().build(), Err(CurveError::EmptyCurve));
    }

    #[test]
    fn test_serde() {
        let curve = sample_curve();
        let json = serde_json::to_string(&curve).unwrap();
        let parsed: ZeroCurve = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, curve);
        assert_eq!(parsed.zero_rate(date("2015-01-01")).unwrap(), 0.021);

        let bad = r#"{"maturities":["2015-01-01"],"rates":[0.01,0.02]}"#;
        assert!(serde_json::from_str::<ZeroCurve>(bad).is_err());
    }

    proptest! {
        #[test]
        fn prop_interpolated_rate_between_knots(
            r0 in -0.02f64..0.15,
            r1 in -0.02f64..0.15,
            offset in 0i64..=365,
        ) {
            let start = date("2014-01-01");
            let end = date("2015-01-01");
            let curve = ZeroCurve::new(vec![start, end], vec![r0, r1]).unwrap();
            let r = curve.zero_rate(start.add_days(offset)).unwrap();
            prop_assert!(r >= r0.min(r1) - 1e-15 && r <= r0.max(r1) + 1e-15);
        }

        #[test]
        fn prop_knot_rates_returned_exactly(
            bps in proptest::collection::vec(-100i32..1500, 2..8),
            gaps in proptest::collection::vec(1i64..200, 8),
        ) {
            let rates: Vec<f64> = bps.iter().map(|&bp| f64::from(bp) / 10_000.0).collect();
            let maturities: Vec<Date> = gaps[..rates.len()]
                .iter()
                .scan(date("2014-01-01"), |d, &gap| {
                    *d = d.add_days(gap);
                    Some(*d)
                })
                .collect();
            let curve = ZeroCurve::new(maturities.clone(), rates.clone()).unwrap();
            for (m, r) in maturities.iter().zip(&rates) {
                prop_assert_eq!(curve.zero_rate(*m).unwrap(), *r);
            }
        }

        #[test]
        fn prop_forward_round_trip(
            rates in proptest::collection::vec(0.0f64..0.12, 1..6),
        ) {
            let trade = date("2014-01-01");
            let maturities: Vec<Date> = (0..rates.len())
                .map(|i| trade.add_months(6 * (i as i32 + 1)).unwrap())
                .collect();
            let curve = ZeroCurve::new(maturities, rates.clone()).unwrap();
            let spot = curve.forward_curve(trade).unwrap().spot_curve(trade).unwrap();
            for (a, b) in spot.rates().iter().zip(&rates) {
                prop_assert!((a - b).abs() < 1e-10);
            }
        }
    }
}
