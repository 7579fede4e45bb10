//! Instruments that can be placed on a par curve.
//!
//! Anything that knows its maturity, its dated cash flows, and how to turn a
//! market price into a yield can be bootstrapped. Bonds implement
//! [`CurveInstrument`] in `bondcurve-bonds`.

use bondcurve_core::{CashFlow, Date};

use crate::error::CurveResult;

/// A priced instrument usable for par curve construction and bootstrapping.
pub trait CurveInstrument: Send + Sync {
    /// Final maturity; the par curve knot for this instrument.
    fn maturity(&self) -> Date;

    /// All scheduled cash flows in ascending date order.
    fn cash_flows(&self) -> &[CashFlow];

    /// Yield to maturity implied by a dirty price on the trade date.
    fn yield_to_maturity(&self, price: f64, trade_date: Date) -> CurveResult<f64>;

    /// Human-readable label used in logs and errors.
    fn description(&self) -> String {
        format!("instrument maturing {}", self.maturity())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Zero-coupon instrument for curve unit tests.

    use bondcurve_core::discounting::year_fraction;
    use bondcurve_core::{CashFlow, Date};

    use super::CurveInstrument;
    use crate::error::{CurveError, CurveResult};

    /// Pays `face` at maturity, yields compound annually.
    pub(crate) struct ZeroCoupon {
        maturity: Date,
        flows: Vec<CashFlow>,
    }

    impl ZeroCoupon {
        pub(crate) fn new(maturity: &str) -> Self {
            let maturity = Date::parse(maturity).unwrap();
            Self {
                maturity,
                flows: vec![CashFlow::principal(maturity, 100.0)],
            }
        }
    }

    impl CurveInstrument for ZeroCoupon {
        fn maturity(&self) -> Date {
            self.maturity
        }

        fn cash_flows(&self) -> &[CashFlow] {
            &self.flows
        }

        fn yield_to_maturity(&self, price: f64, trade_date: Date) -> CurveResult<f64> {
            if price <= 0.0 {
                return Err(CurveError::invalid_instrument("price must be positive"));
            }
            let t = year_fraction(trade_date, self.maturity);
            Ok((100.0 / price).powf(1.0 / t) - 1.0)
        }
    }
}
