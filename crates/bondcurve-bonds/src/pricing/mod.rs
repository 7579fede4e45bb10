//! Bond pricing calculations.
//!
//! - [`YieldSolver`]: yield-to-maturity from a dirty price
//! - [`price_bonds`]: prices a set of bonds off one zero curve
//! - [`solve_yields`]: yields for a set of quoted bonds

mod parallel;
mod yield_solver;

pub use parallel::maybe_parallel_map;
pub use yield_solver::{YieldResult, YieldSolver};

use bondcurve_core::config::ValuationConfig;
use bondcurve_core::types::Date;
use bondcurve_curves::curves::ZeroCurve;
use bondcurve_curves::CurveError;

use crate::error::BondResult;
use crate::instruments::Bond;

/// Prices every bond off `curve`, one result per bond in input order.
///
/// Bonds are independent, so with the `parallel` feature large sets are
/// priced on the rayon pool.
#[must_use]
pub fn price_bonds(bonds: &[Bond], curve: &ZeroCurve, trade_date: Date) -> Vec<BondResult<f64>> {
    maybe_parallel_map(bonds, |bond| bond.price_from_zero_curve(curve, trade_date))
}

/// Solves the yield of each bond at its quoted dirty price.
///
/// # Errors
///
/// Returns `BondError::Curve` with a length mismatch if `bonds` and `prices`
/// differ in length. Per-bond failures are reported in the returned vector.
pub fn solve_yields(
    bonds: &[Bond],
    prices: &[f64],
    trade_date: Date,
    config: &ValuationConfig,
) -> BondResult<Vec<BondResult<f64>>> {
    if bonds.len() != prices.len() {
        return Err(CurveError::length_mismatch(bonds.len(), prices.len()).into());
    }

    let quotes: Vec<(&Bond, f64)> = bonds.iter().zip(prices.iter().copied()).collect();
    Ok(maybe_parallel_map(&quotes, |(bond, price)| {
        bond.yield_from_price_with_config(*price, trade_date, config)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BondError;
    use approx::assert_relative_eq;

    fn date(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    fn bonds() -> Vec<Bond> {
        vec![
            Bond::new("2015-01-01", "2014-01-01", 1.0, 3.0).unwrap(),
            Bond::new("2016-01-01", "2014-01-01", 0.5, 4.0).unwrap(),
            Bond::new("2019-01-01", "2014-01-01", 0.5, 5.0).unwrap(),
        ]
    }

    #[test]
    fn test_price_bonds_in_order() {
        let trade = date("2014-01-01");
        let curve = ZeroCurve::parse(&["2014-06-01", "2020-01-01"], &[0.02, 0.04]).unwrap();
        let bonds = bonds();

        let prices = price_bonds(&bonds, &curve, trade);
        assert_eq!(prices.len(), 3);
        for (bond, price) in bonds.iter().zip(&prices) {
            let expected = bond.price_from_zero_curve(&curve, trade).unwrap();
            assert_relative_eq!(*price.as_ref().unwrap(), expected);
        }
    }

    #[test]
    fn test_price_bonds_reports_each_failure() {
        let trade = date("2014-01-01");
        let curve = ZeroCurve::parse(&["2014-06-01", "2016-01-01"], &[0.02, 0.03]).unwrap();

        let prices = price_bonds(&bonds(), &curve, trade);
        assert!(prices[0].is_ok());
        assert!(prices[1].is_ok());
        assert!(matches!(prices[2], Err(BondError::Curve(_))));
    }

    #[test]
    fn test_solve_yields() {
        let trade = date("2014-01-01");
        let bonds = bonds();
        let prices: Vec<f64> = bonds.iter().map(|b| b.price(0.035, trade)).collect();

        let yields = solve_yields(&bonds, &prices, trade, &ValuationConfig::default()).unwrap();
        for y in yields {
            assert_relative_eq!(y.unwrap(), 0.035, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_solve_yields_length_mismatch() {
        let trade = date("2014-01-01");
        let result = solve_yields(&bonds(), &[100.0], trade, &ValuationConfig::default());
        assert!(matches!(
            result,
            Err(BondError::Curve(CurveError::LengthMismatch { left: 3, right: 1 }))
        ));
    }
}
