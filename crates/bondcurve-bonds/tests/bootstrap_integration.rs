//! Integration test: bootstrap zero curves from quoted bonds.
//!
//! All scenarios trade on 2014-01-01 with bonds issued the same day, so every
//! cash flow is in the future and `price_from_zero_curve` must give back the
//! quoted dirty price.
//!
//! | Bond            | Coupon | Frequency  | Price |
//! |-----------------|--------|------------|-------|
//! | 2014-04-01 zero | -      | bullet     | 99.7  |
//! | 2014-07-01 zero | -      | bullet     | 99.1  |
//! | 2015-01-01 zero | -      | bullet     | 98.0  |
//! | 2016-01-01      | 2.0%   | semiannual | 99.5  |
//! | 2017-01-01      | 2.0%   | semiannual | 99.0  |
//! | 2019-01-01      | 2.5%   | semiannual | 99.0  |
//! | 2024-01-01      | 3.0%   | semiannual | 100.1 |

use approx::assert_relative_eq;
use bondcurve_bonds::prelude::*;
use bondcurve_core::config::ValuationConfig;
use bondcurve_core::types::Date;
use bondcurve_curves::curves::ForwardRateSource;
use bondcurve_curves::par::ParCurve;
use bondcurve_curves::CurveError;

const ISSUE: &str = "2014-01-01";

fn trade_date() -> Date {
    Date::parse(ISSUE).unwrap()
}

fn bullet(maturity: &str, par: f64) -> Bond {
    BondBuilder::new()
        .maturity_date(maturity)
        .issue_date(ISSUE)
        .frequency(0.0)
        .par_value(par)
        .build()
        .unwrap()
}

fn coupon_bond(maturity: &str, frequency: f64, coupon: f64) -> Bond {
    Bond::new(maturity, ISSUE, frequency, coupon).unwrap()
}

fn treasury_style_bonds() -> (Vec<Bond>, Vec<f64>) {
    let bonds = vec![
        bullet("2014-04-01", 100.0),
        bullet("2014-07-01", 100.0),
        bullet("2015-01-01", 100.0),
        coupon_bond("2016-01-01", 0.5, 2.0),
        coupon_bond("2017-01-01", 0.5, 2.0),
        coupon_bond("2019-01-01", 0.5, 2.5),
        coupon_bond("2024-01-01", 0.5, 3.0),
    ];
    let prices = vec![99.7, 99.1, 98.0, 99.5, 99.0, 99.0, 100.1];
    (bonds, prices)
}

#[test]
fn test_zero_coupon_bootstrap_reprices_inputs() {
    let trade = trade_date();
    let bonds = vec![
        bullet("2014-04-01", 100.0),
        bullet("2014-07-01", 100.0),
        bullet("2015-01-01", 100.0),
    ];
    let prices = [99.7, 99.1, 98.0];

    let par = ParCurve::new(&bonds, &prices, trade).unwrap();
    let zero = par.bootstrap().unwrap();

    for (bond, price) in bonds.iter().zip(prices) {
        let repriced = bond.price_from_zero_curve(&zero, trade).unwrap();
        assert_relative_eq!(repriced, price, epsilon = 1e-8);
    }

    // A single-flow instrument's zero rate is its yield
    for (zero_rate, par_rate) in zero.rates().iter().zip(par.rates()) {
        assert_relative_eq!(*zero_rate, *par_rate, epsilon = 1e-9);
    }
}

#[test]
fn test_mixed_bootstrap() {
    let trade = trade_date();
    let (bonds, prices) = treasury_style_bonds();

    let par = ParCurve::new(&bonds, &prices, trade).unwrap();
    let zero = par.bootstrap().unwrap();

    let expected = [
        0.012_259_492_235_517,
        0.018_398_541_285_298,
        0.020_408_163_265_306,
        0.022_730_360_789_578,
        0.023_628_512_997_394,
        0.027_510_911_445_542,
        0.030_468_026_831_662,
    ];
    assert_eq!(zero.len(), expected.len());
    for (rate, want) in zero.rates().iter().zip(expected) {
        assert_relative_eq!(*rate, want, epsilon = 1e-8);
    }

    for (bond, price) in bonds.iter().zip(&prices) {
        let repriced = bond.price_from_zero_curve(&zero, trade).unwrap();
        assert_relative_eq!(repriced, *price, epsilon = 1e-8);
    }
}

#[test]
fn test_par_curve_sorts_by_maturity() {
    let trade = trade_date();
    let (mut bonds, mut prices) = treasury_style_bonds();
    bonds.reverse();
    prices.reverse();

    let par = ParCurve::new(&bonds, &prices, trade).unwrap();
    assert!(par.maturities().windows(2).all(|w| w[0] < w[1]));
    assert_relative_eq!(par.prices()[0], 99.7);
    assert_relative_eq!(
        par.par_rate(Date::parse("2014-04-01").unwrap()).unwrap(),
        par.rates()[0]
    );

    let zero = par.bootstrap().unwrap();
    assert_relative_eq!(zero.rates()[6], 0.030_468_026_831_662, epsilon = 1e-8);
}

#[test]
fn test_bootstrap_with_non_par_redemptions() {
    let trade = trade_date();
    let bonds = vec![
        bullet("2014-07-01", 101.5),
        bullet("2015-01-01", 104.0),
        coupon_bond("2015-07-01", 0.5, 5.0),
    ];
    let prices = [100.0, 100.0, 100.0];

    let zero = ParCurve::new(&bonds, &prices, trade).unwrap().bootstrap().unwrap();

    assert_relative_eq!(zero.rates()[0], 0.030_479_262_655_319, epsilon = 1e-8);
    assert_relative_eq!(zero.rates()[1], 0.04, epsilon = 1e-8);
    assert_relative_eq!(zero.rates()[2], 0.051_124_450_530_139, epsilon = 1e-8);
}

#[test]
fn test_par_bonds_to_forwards_and_back() {
    let trade = trade_date();
    let bonds = vec![
        coupon_bond("2015-01-01", 1.0, 9.0),
        coupon_bond("2016-01-01", 1.0, 9.95),
        coupon_bond("2017-01-01", 1.0, 10.85),
    ];

    let zero = ParCurve::new(&bonds, &[100.0, 100.0, 100.0], trade)
        .unwrap()
        .bootstrap()
        .unwrap();
    assert_relative_eq!(zero.rates()[0], 0.09, epsilon = 1e-9);
    assert_relative_eq!(zero.rates()[1], 0.099_977_054_508_057, epsilon = 1e-8);
    assert_relative_eq!(zero.rates()[2], 0.109_775_810_909_246, epsilon = 1e-8);

    let forwards = zero.forward_curve(trade).unwrap();
    assert_eq!(forwards.intervals()[0], (trade, Date::parse("2015-01-01").unwrap()));
    assert_relative_eq!(forwards.rates()[0], 0.09, epsilon = 1e-9);
    assert_relative_eq!(forwards.rates()[1], 0.110_045_431_600_202, epsilon = 1e-8);
    assert_relative_eq!(forwards.rates()[2], 0.129_581_223_496_802, epsilon = 1e-8);

    let grid = [
        Date::parse("2014-06-01").unwrap(),
        Date::parse("2015-06-01").unwrap(),
        Date::parse("2016-06-01").unwrap(),
    ];
    let sampled = forwards.forward_rates(&grid).unwrap();
    for (got, want) in sampled.iter().zip(forwards.rates()) {
        assert_relative_eq!(*got, *want);
    }

    let spot = forwards.spot_curve(trade).unwrap();
    for (a, b) in spot.rates().iter().zip(zero.rates()) {
        assert_relative_eq!(*a, *b, epsilon = 1e-10);
    }
}

#[test]
fn test_unreachable_quote_is_non_convergence() {
    let trade = trade_date();
    let bonds = vec![bullet("2014-07-01", 100.0), bullet("2015-01-01", 100.0)];
    let par = ParCurve::new(&bonds, &[99.0, 98.0], trade).unwrap();

    // The second knot needs a rate near 2%, outside this bracket
    let config = ValuationConfig::default().with_bootstrap_bracket(0.5, 1.0);
    let result = par.bootstrap_with_config(&config);
    assert!(matches!(result, Err(CurveError::NonConvergence { .. })));
}

#[test]
fn test_curve_rejects_unpriceable_bond() {
    let trade = trade_date();
    let bonds = vec![bullet("2015-01-01", 100.0)];
    let result = ParCurve::new(&bonds, &[-5.0], trade);
    assert!(matches!(result, Err(CurveError::NonConvergence { .. })));
}
