//! Fixed-rate coupon bond.

use bondcurve_core::config::ValuationConfig;
use bondcurve_core::daycounts::DayCountConvention;
use bondcurve_core::discounting::{cumulative_present_value, present_value, year_fraction};
use bondcurve_core::types::{CashFlow, Compounding, Date, Frequency};
use bondcurve_curves::curves::ZeroCurve;

use crate::cashflows::{CashFlowSchedule, ScheduleConfig};
use crate::error::{BondError, BondResult};
use crate::pricing::YieldSolver;

/// A fixed-rate bond with a precomputed cash flow schedule.
///
/// Bonds are immutable once built. Every analytic is a pure function of the
/// bond terms and the market inputs passed in. Prices are per the bond's par
/// value and are dirty unless the method name says otherwise.
///
/// # Example
///
/// ```rust
/// use bondcurve_bonds::instruments::BondBuilder;
/// use bondcurve_core::types::Date;
///
/// let bond = BondBuilder::new()
///     .maturity_date("2016-01-01")
///     .issue_date("2014-01-01")
///     .frequency(0.5)
///     .coupon(4.0)
///     .build()
///     .unwrap();
///
/// let trade = Date::parse("2014-01-01").unwrap();
/// let price = bond.price(0.04, trade);
/// let ytm = bond.yield_from_price(price, trade).unwrap();
/// assert!((ytm - 0.04).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Bond {
    maturity_date: Date,
    issue_date: Date,
    first_pay_date: Option<Date>,
    frequency: Frequency,
    /// Decimal (0.05 = 5%).
    coupon_rate: f64,
    day_count: DayCountConvention,
    par_value: f64,
    cash_flows: Vec<CashFlow>,
}

impl Bond {
    /// Creates a bond from `YYYY-MM-DD` dates, a frequency in years per
    /// payment, and a coupon in percent, with par 100.
    ///
    /// # Errors
    ///
    /// Returns `BondError::ScheduleConstruction` if the terms do not describe a
    /// valid schedule.
    pub fn new(
        maturity_date: &str,
        issue_date: &str,
        frequency: f64,
        coupon: f64,
    ) -> BondResult<Self> {
        BondBuilder::new()
            .maturity_date(maturity_date)
            .issue_date(issue_date)
            .frequency(frequency)
            .coupon(coupon)
            .build()
    }

    /// Returns the maturity date.
    #[must_use]
    pub fn maturity_date(&self) -> Date {
        self.maturity_date
    }

    /// Returns the issue date.
    #[must_use]
    pub fn issue_date(&self) -> Date {
        self.issue_date
    }

    /// Returns the irregular first payment date, if any.
    #[must_use]
    pub fn first_pay_date(&self) -> Option<Date> {
        self.first_pay_date
    }

    /// Returns the payment frequency.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the coupon rate as a decimal.
    #[must_use]
    pub fn coupon_rate(&self) -> f64 {
        self.coupon_rate
    }

    /// Returns the day count convention.
    #[must_use]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Returns the par value.
    #[must_use]
    pub fn par_value(&self) -> f64 {
        self.par_value
    }

    /// Returns true for a single-payment bond.
    #[must_use]
    pub fn is_bullet(&self) -> bool {
        self.frequency.is_bullet()
    }

    /// Returns all cash flows in ascending date order.
    #[must_use]
    pub fn cash_flows(&self) -> &[CashFlow] {
        &self.cash_flows
    }

    /// Returns the cash flows dated strictly after `trade_date`.
    #[must_use]
    pub fn future_cash_flows(&self, trade_date: Date) -> &[CashFlow] {
        let start = self.cash_flows.partition_point(|cf| cf.date() <= trade_date);
        &self.cash_flows[start..]
    }

    /// Dirty price at a flat, discretely compounded yield.
    #[must_use]
    pub fn price(&self, yield_rate: f64, trade_date: Date) -> f64 {
        self.price_with_compounding(yield_rate, trade_date, Compounding::Discrete)
    }

    /// Dirty price at a flat yield under the given compounding.
    #[must_use]
    pub fn price_with_compounding(
        &self,
        yield_rate: f64,
        trade_date: Date,
        compounding: Compounding,
    ) -> f64 {
        cumulative_present_value(
            trade_date,
            yield_rate,
            &self.cash_flows,
            self.frequency.compounding_period(),
            compounding,
        )
    }

    /// Dirty price at a flat yield; same as [`Bond::price`].
    #[must_use]
    pub fn dirty_price(&self, yield_rate: f64, trade_date: Date) -> f64 {
        self.price(yield_rate, trade_date)
    }

    /// Clean price at a flat yield.
    ///
    /// # Errors
    ///
    /// Returns `BondError::NoFutureCashFlows` if the bond has matured.
    pub fn clean_price(&self, yield_rate: f64, trade_date: Date) -> BondResult<f64> {
        self.clean_from_dirty(self.price(yield_rate, trade_date), trade_date)
    }

    /// Interest accrued since the last payment.
    ///
    /// Measured back from the next flow: `(frequency - t) / frequency` of that
    /// flow's amount, where `t` is the time to the flow. Bullet bonds accrue
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns `BondError::NoFutureCashFlows` if no flow is dated after
    /// `trade_date`.
    pub fn accrued_interest(&self, trade_date: Date) -> BondResult<f64> {
        let next = self
            .future_cash_flows(trade_date)
            .first()
            .ok_or_else(|| BondError::no_future_cash_flows(trade_date))?;

        if self.is_bullet() {
            return Ok(0.0);
        }

        let period = self.frequency.years();
        let t = year_fraction(trade_date, next.date());
        Ok((period - t) / period * next.amount())
    }

    /// Converts a dirty price to a clean price.
    ///
    /// # Errors
    ///
    /// Returns `BondError::NoFutureCashFlows` if the bond has matured.
    pub fn clean_from_dirty(&self, dirty_price: f64, trade_date: Date) -> BondResult<f64> {
        Ok(dirty_price - self.accrued_interest(trade_date)?)
    }

    /// Converts a clean price to a dirty price.
    ///
    /// # Errors
    ///
    /// Returns `BondError::NoFutureCashFlows` if the bond has matured.
    pub fn dirty_from_clean(&self, clean_price: f64, trade_date: Date) -> BondResult<f64> {
        Ok(clean_price + self.accrued_interest(trade_date)?)
    }

    /// Yield to maturity implied by a dirty price, with default solver settings.
    ///
    /// # Errors
    ///
    /// See [`YieldSolver::solve`].
    pub fn yield_from_price(&self, price: f64, trade_date: Date) -> BondResult<f64> {
        self.yield_from_price_with_config(price, trade_date, &ValuationConfig::default())
    }

    /// Yield to maturity implied by a dirty price.
    ///
    /// # Errors
    ///
    /// See [`YieldSolver::solve`].
    pub fn yield_from_price_with_config(
        &self,
        price: f64,
        trade_date: Date,
        config: &ValuationConfig,
    ) -> BondResult<f64> {
        let result = YieldSolver::with_config(config.clone()).solve(
            &self.cash_flows,
            price,
            trade_date,
            self.frequency.compounding_period(),
        )?;
        Ok(result.yield_value)
    }

    /// Time-weighted share of discretely discounted value.
    ///
    /// `Σ t * PV(flow) / price` over future flows at the given yield.
    ///
    /// # Errors
    ///
    /// Returns `BondError::NoFutureCashFlows` if the bond has matured.
    pub fn modified_duration(&self, yield_rate: f64, trade_date: Date) -> BondResult<f64> {
        self.weighted_time(yield_rate, trade_date, Compounding::Discrete)
    }

    /// Time-weighted share of continuously discounted value.
    ///
    /// `Σ t * PV_continuous(flow) / price`, where `price` is the discrete
    /// dirty price at the same yield.
    ///
    /// # Errors
    ///
    /// Returns `BondError::NoFutureCashFlows` if the bond has matured.
    pub fn macaulay_duration(&self, yield_rate: f64, trade_date: Date) -> BondResult<f64> {
        self.weighted_time(yield_rate, trade_date, Compounding::Continuous)
    }

    fn weighted_time(
        &self,
        yield_rate: f64,
        trade_date: Date,
        compounding: Compounding,
    ) -> BondResult<f64> {
        let flows = self.future_cash_flows(trade_date);
        if flows.is_empty() {
            return Err(BondError::no_future_cash_flows(trade_date));
        }

        let period = self.frequency.compounding_period();
        let price = self.price(yield_rate, trade_date);

        let weighted: f64 = flows
            .iter()
            .map(|cf| {
                let t = year_fraction(trade_date, cf.date());
                t * present_value(cf.amount(), yield_rate, t, period, compounding)
            })
            .sum();

        Ok(weighted / price)
    }

    /// Dirty price off a zero curve.
    ///
    /// Discounts every flow, including those on or before the trade date,
    /// with the curve's discount factor.
    ///
    /// # Errors
    ///
    /// Returns `BondError::Curve` if a flow lies beyond the curve's last knot.
    pub fn price_from_zero_curve(&self, curve: &ZeroCurve, trade_date: Date) -> BondResult<f64> {
        self.cash_flows.iter().try_fold(0.0, |total, cf| -> BondResult<f64> {
            Ok(total + curve.discount_factor(trade_date, cf.date())? * cf.amount())
        })
    }
}

/// Builder for [`Bond`].
///
/// Dates are `YYYY-MM-DD` strings, parsed at build time. The coupon is given
/// in percent. Defaults: semi-annual payments, zero coupon, par 100.
#[derive(Debug, Clone)]
pub struct BondBuilder {
    maturity_date: Option<String>,
    issue_date: Option<String>,
    first_pay_date: Option<String>,
    frequency: f64,
    coupon: f64,
    par_value: f64,
}

impl Default for BondBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BondBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            maturity_date: None,
            issue_date: None,
            first_pay_date: None,
            frequency: 0.5,
            coupon: 0.0,
            par_value: 100.0,
        }
    }

    /// Sets the maturity date.
    #[must_use]
    pub fn maturity_date(mut self, date: impl Into<String>) -> Self {
        self.maturity_date = Some(date.into());
        self
    }

    /// Sets the issue date.
    #[must_use]
    pub fn issue_date(mut self, date: impl Into<String>) -> Self {
        self.issue_date = Some(date.into());
        self
    }

    /// Sets an irregular first payment date.
    #[must_use]
    pub fn first_pay_date(mut self, date: impl Into<String>) -> Self {
        self.first_pay_date = Some(date.into());
        self
    }

    /// Sets the frequency in years per payment (0 for a bullet).
    #[must_use]
    pub fn frequency(mut self, years: f64) -> Self {
        self.frequency = years;
        self
    }

    /// Sets the coupon in percent (5 for 5%).
    #[must_use]
    pub fn coupon(mut self, percent: f64) -> Self {
        self.coupon = percent;
        self
    }

    /// Sets the par value.
    #[must_use]
    pub fn par_value(mut self, value: f64) -> Self {
        self.par_value = value;
        self
    }

    /// Builds the bond and its cash flow schedule.
    ///
    /// # Errors
    ///
    /// Returns `BondError::MissingField` if a date is missing, or
    /// `BondError::ScheduleConstruction` if a date is malformed or the terms
    /// do not describe a valid schedule.
    pub fn build(self) -> BondResult<Bond> {
        let maturity_date = parse_date(
            self.maturity_date
                .as_deref()
                .ok_or_else(|| BondError::missing_field("maturity_date"))?,
        )?;
        let issue_date = parse_date(
            self.issue_date
                .as_deref()
                .ok_or_else(|| BondError::missing_field("issue_date"))?,
        )?;
        let first_pay_date = self.first_pay_date.as_deref().map(parse_date).transpose()?;

        let frequency =
            Frequency::from_years(self.frequency).map_err(|e| BondError::schedule(e.to_string()))?;
        let coupon_rate = self.coupon / 100.0;

        let mut config = ScheduleConfig::new(issue_date, maturity_date, frequency)
            .with_coupon_rate(coupon_rate)
            .with_par_value(self.par_value);
        if let Some(first) = first_pay_date {
            config = config.with_first_pay_date(first);
        }

        let cash_flows = CashFlowSchedule::generate(&config)?.into_flows();

        Ok(Bond {
            maturity_date,
            issue_date,
            first_pay_date,
            frequency,
            coupon_rate,
            day_count: DayCountConvention::default(),
            par_value: self.par_value,
            cash_flows,
        })
    }
}

fn parse_date(s: &str) -> BondResult<Date> {
    Date::parse(s).map_err(|e| BondError::schedule(e.to_string()))
}
