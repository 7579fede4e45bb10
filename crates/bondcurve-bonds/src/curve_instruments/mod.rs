//! Bonds as par curve instruments.
//!
//! [`Bond`] implements the `CurveInstrument` trait from `bondcurve-curves`,
//! so quoted bonds can be placed on a [`ParCurve`](bondcurve_curves::par::ParCurve)
//! and bootstrapped into a zero curve.
//!
//! # Example
//!
//! ```rust
//! use bondcurve_bonds::instruments::Bond;
//! use bondcurve_core::types::Date;
//! use bondcurve_curves::par::ParCurve;
//!
//! let trade = Date::parse("2014-01-01").unwrap();
//! let bonds = [
//!     Bond::new("2015-01-01", "2014-01-01", 1.0, 9.0).unwrap(),
//!     Bond::new("2016-01-01", "2014-01-01", 1.0, 9.95).unwrap(),
//! ];
//!
//! let par = ParCurve::new(&bonds, &[100.0, 100.0], trade).unwrap();
//! let zero = par.bootstrap().unwrap();
//! assert!((zero.rates()[0] - 0.09).abs() < 1e-9);
//! ```

use bondcurve_core::types::{CashFlow, Date};
use bondcurve_curves::instruments::CurveInstrument;
use bondcurve_curves::{CurveError, CurveResult};

use crate::error::BondError;
use crate::instruments::Bond;

impl CurveInstrument for Bond {
    fn maturity(&self) -> Date {
        self.maturity_date()
    }

    fn cash_flows(&self) -> &[CashFlow] {
        Bond::cash_flows(self)
    }

    fn yield_to_maturity(&self, price: f64, trade_date: Date) -> CurveResult<f64> {
        self.yield_from_price(price, trade_date)
            .map_err(|e| into_curve_error(e, &self.description()))
    }

    fn description(&self) -> String {
        format!(
            "{:.4}% {} bond maturing {}",
            self.coupon_rate() * 100.0,
            self.frequency(),
            self.maturity_date()
        )
    }
}

fn into_curve_error(err: BondError, instrument: &str) -> CurveError {
    match err {
        BondError::Curve(e) => e,
        BondError::Core(e) => CurveError::Core(e),
        BondError::NonConvergence { reason } => CurveError::non_convergence(instrument, reason),
        other => CurveError::invalid_instrument(format!("{instrument}: {other}")),
    }
}
