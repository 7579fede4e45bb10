//! Coupon schedule generation for fixed-rate bonds.
//!
//! Payment dates step forward from an anchor by a whole number of months.
//! Each date is computed from the anchor directly, so a schedule anchored on
//! the 31st keeps returning to month end instead of drifting.
//!
//! # Example
//!
//! ```rust
//! use bondcurve_bonds::cashflows::{CashFlowSchedule, ScheduleConfig};
//! use bondcurve_core::types::{Date, Frequency};
//!
//! let config = ScheduleConfig::new(
//!     Date::from_ymd(2014, 1, 1).unwrap(),
//!     Date::from_ymd(2016, 1, 1).unwrap(),
//!     Frequency::semi_annual(),
//! )
//! .with_coupon_rate(0.04);
//!
//! let schedule = CashFlowSchedule::generate(&config).unwrap();
//! assert_eq!(schedule.len(), 4);
//! assert_eq!(schedule.flows()[3].amount(), 102.0);
//! ```

use serde::{Deserialize, Serialize};

use bondcurve_core::types::{CashFlow, Date, Frequency};

use crate::error::{BondError, BondResult};

/// Terms needed to lay out a coupon schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Issue date; the anchor when there is no first payment date
    pub issue_date: Date,
    /// Maturity date; the last flow is paid here
    pub maturity_date: Date,
    /// Payment frequency (bullet for a single terminal flow)
    pub frequency: Frequency,
    /// Annual coupon rate as a decimal
    pub coupon_rate: f64,
    /// Redemption amount paid at maturity
    pub par_value: f64,
    /// Irregular first payment date
    pub first_pay_date: Option<Date>,
}

impl ScheduleConfig {
    /// Creates a zero-coupon schedule configuration with par 100.
    #[must_use]
    pub fn new(issue_date: Date, maturity_date: Date, frequency: Frequency) -> Self {
        Self {
            issue_date,
            maturity_date,
            frequency,
            coupon_rate: 0.0,
            par_value: 100.0,
            first_pay_date: None,
        }
    }

    /// Sets the annual coupon rate (decimal).
    #[must_use]
    pub fn with_coupon_rate(mut self, coupon_rate: f64) -> Self {
        self.coupon_rate = coupon_rate;
        self
    }

    /// Sets the par value.
    #[must_use]
    pub fn with_par_value(mut self, par_value: f64) -> Self {
        self.par_value = par_value;
        self
    }

    /// Sets an irregular first payment date.
    #[must_use]
    pub fn with_first_pay_date(mut self, date: Date) -> Self {
        self.first_pay_date = Some(date);
        self
    }

    /// Coupon paid on each scheduled date.
    #[must_use]
    pub fn coupon_amount(&self) -> f64 {
        self.coupon_rate * self.par_value * self.frequency.years()
    }

    fn validate(&self) -> BondResult<()> {
        if self.maturity_date <= self.issue_date {
            return Err(BondError::schedule(format!(
                "maturity {} must be after issue {}",
                self.maturity_date, self.issue_date
            )));
        }
        if !self.coupon_rate.is_finite() || self.coupon_rate < 0.0 {
            return Err(BondError::schedule(format!(
                "coupon rate must be non-negative, got {}",
                self.coupon_rate
            )));
        }
        if !self.par_value.is_finite() || self.par_value <= 0.0 {
            return Err(BondError::schedule(format!(
                "par value must be positive, got {}",
                self.par_value
            )));
        }
        if let Some(first) = self.first_pay_date {
            if self.frequency.is_bullet() {
                return Err(BondError::schedule(
                    "a bullet bond cannot have a first payment date",
                ));
            }
            if first <= self.issue_date || first >= self.maturity_date {
                return Err(BondError::schedule(format!(
                    "first payment date {first} must fall between issue {} and maturity {}",
                    self.issue_date, self.maturity_date
                )));
            }
        }
        Ok(())
    }
}

/// An ordered, immutable sequence of bond cash flows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSchedule {
    flows: Vec<CashFlow>,
}

impl CashFlowSchedule {
    /// Generates the cash flows described by `config`.
    ///
    /// A bullet schedule is a single principal flow at maturity. Otherwise a
    /// coupon of `coupon_rate * par * frequency` is paid on every step from
    /// the anchor that falls before maturity, and the maturity flow carries
    /// the last coupon plus par. A first payment date becomes a stub flow and
    /// replaces the issue date as the anchor.
    ///
    /// # Errors
    ///
    /// Returns `BondError::ScheduleConstruction` if maturity is not after
    /// issue, the coupon or par is invalid, or the first payment date falls
    /// outside (issue, maturity).
    pub fn generate(config: &ScheduleConfig) -> BondResult<Self> {
        config.validate()?;

        let maturity = config.maturity_date;
        let Some(months) = config.frequency.months_per_period() else {
            return Ok(Self {
                flows: vec![CashFlow::principal(maturity, config.par_value)],
            });
        };

        let coupon = config.coupon_amount();
        let mut flows = Vec::new();

        let anchor = match config.first_pay_date {
            Some(first) => {
                flows.push(CashFlow::stub(first, coupon));
                first
            }
            None => config.issue_date,
        };

        let step = months as i32;
        let mut k = 1;
        loop {
            let date = anchor
                .add_months(k * step)
                .map_err(|e| BondError::schedule(e.to_string()))?;
            if date >= maturity {
                break;
            }
            flows.push(CashFlow::coupon(date, coupon));
            k += 1;
        }

        flows.push(CashFlow::final_payment(maturity, coupon, config.par_value));

        Ok(Self { flows })
    }

    /// Returns the cash flows in ascending date order.
    #[must_use]
    pub fn flows(&self) -> &[CashFlow] {
        &self.flows
    }

    /// Consumes the schedule, returning its flows.
    #[must_use]
    pub fn into_flows(self) -> Vec<CashFlow> {
        self.flows
    }

    /// Returns the number of flows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// Returns true if the schedule has no flows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bondcurve_core::types::CashFlowKind;

    fn date(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    #[test]
    fn test_semi_annual_schedule() {
        let config = ScheduleConfig::new(
            date("2014-01-01"),
            date("2016-01-01"),
            Frequency::semi_annual(),
        )
        .with_coupon_rate(0.05);

        let schedule = CashFlowSchedule::generate(&config).unwrap();
        let dates: Vec<String> =
            schedule.flows().iter().map(|cf| cf.date().to_string()).collect();
        assert_eq!(
            dates,
            vec!["2014-07-01", "2015-01-01", "2015-07-01", "2016-01-01"]
        );

        assert_eq!(schedule.flows()[0].amount(), 2.5);
        assert_eq!(schedule.flows()[3].amount(), 102.5);
        assert_eq!(schedule.flows()[3].kind(), CashFlowKind::CouponAndPrincipal);
    }

    #[test]
    fn test_bullet_schedule() {
        let config = ScheduleConfig::new(
            date("2014-01-01"),
            date("2014-07-01"),
            Frequency::bullet(),
        )
        .with_par_value(101.5);

        let schedule = CashFlowSchedule::generate(&config).unwrap();
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.flows()[0].amount(), 101.5);
        assert_eq!(schedule.flows()[0].kind(), CashFlowKind::Principal);
    }

    #[test]
    fn test_bullet_ignores_coupon() {
        let config = ScheduleConfig::new(
            date("2014-01-01"),
            date("2015-01-01"),
            Frequency::bullet(),
        )
        .with_coupon_rate(0.05);

        let schedule = CashFlowSchedule::generate(&config).unwrap();
        assert_eq!(schedule.flows()[0].amount(), 100.0);
    }

    #[test]
    fn test_first_pay_date_stub() {
        let config = ScheduleConfig::new(
            date("2014-01-01"),
            date("2016-01-01"),
            Frequency::semi_annual(),
        )
        .with_coupon_rate(0.04)
        .with_first_pay_date(date("2014-03-01"));

        let schedule = CashFlowSchedule::generate(&config).unwrap();
        let flows = schedule.flows();
        assert_eq!(flows.len(), 5);
        assert_eq!(flows[0].kind(), CashFlowKind::Stub);
        assert_eq!(flows[0].date(), date("2014-03-01"));
        assert_eq!(flows[0].amount(), 2.0);
        assert_eq!(flows[1].date(), date("2014-09-01"));
        assert_eq!(flows[3].date(), date("2015-09-01"));
        assert_eq!(flows[4].date(), date("2016-01-01"));
        assert_eq!(flows[4].amount(), 102.0);
    }

    #[test]
    fn test_month_end_anchor_does_not_drift() {
        let config = ScheduleConfig::new(
            date("2014-01-31"),
            date("2014-05-31"),
            Frequency::from_years(1.0 / 12.0).unwrap(),
        );

        let schedule = CashFlowSchedule::generate(&config).unwrap();
        let dates: Vec<Date> = schedule.flows().iter().map(CashFlow::date).collect();
        assert_eq!(
            dates,
            vec![
                date("2014-02-28"),
                date("2014-03-31"),
                date("2014-04-30"),
                date("2014-05-31"),
            ]
        );
    }

    #[test]
    fn test_short_last_period() {
        let config = ScheduleConfig::new(
            date("2014-01-01"),
            date("2015-03-01"),
            Frequency::semi_annual(),
        )
        .with_coupon_rate(0.02);

        let schedule = CashFlowSchedule::generate(&config).unwrap();
        let flows = schedule.flows();
        assert_eq!(flows.len(), 3);
        assert_eq!(flows[1].date(), date("2015-01-01"));
        assert_eq!(flows[2].date(), date("2015-03-01"));
        assert_eq!(flows[2].amount(), 101.0);
    }

    #[test]
    fn test_flows_strictly_ascending() {
        let config = ScheduleConfig::new(
            date("2014-01-01"),
            date("2024-01-01"),
            Frequency::quarterly(),
        )
        .with_coupon_rate(0.03)
        .with_first_pay_date(date("2014-02-15"));

        let schedule = CashFlowSchedule::generate(&config).unwrap();
        assert!(schedule.flows().windows(2).all(|w| w[0].date() < w[1].date()));
        assert_eq!(schedule.flows().last().unwrap().date(), date("2024-01-01"));
    }

    #[test]
    fn test_rejects_maturity_before_issue() {
        let config = ScheduleConfig::new(
            date("2014-01-01"),
            date("2014-01-01"),
            Frequency::annual(),
        );
        assert!(matches!(
            CashFlowSchedule::generate(&config),
            Err(BondError::ScheduleConstruction { .. })
        ));
    }

    #[test]
    fn test_rejects_first_pay_date_outside_life() {
        let base = ScheduleConfig::new(
            date("2014-01-01"),
            date("2016-01-01"),
            Frequency::semi_annual(),
        );

        for first in ["2014-01-01", "2013-12-01", "2016-01-01", "2017-01-01"] {
            let config = base.clone().with_first_pay_date(date(first));
            assert!(CashFlowSchedule::generate(&config).is_err(), "{first}");
        }
    }

    #[test]
    fn test_rejects_bullet_with_first_pay_date() {
        let config = ScheduleConfig::new(
            date("2014-01-01"),
            date("2016-01-01"),
            Frequency::bullet(),
        )
        .with_first_pay_date(date("2014-06-01"));
        assert!(CashFlowSchedule::generate(&config).is_err());
    }

    #[test]
    fn test_rejects_negative_coupon() {
        let config = ScheduleConfig::new(
            date("2014-01-01"),
            date("2016-01-01"),
            Frequency::annual(),
        )
        .with_coupon_rate(-0.01);
        assert!(CashFlowSchedule::generate(&config).is_err());
    }
}
