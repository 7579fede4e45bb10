//! Discounting and compounding primitives.
//!
//! Time is measured from the trade date in ACT/365 Fixed years. A flat
//! yield discounts either discretely, compounding once per period of
//! `period` years, or continuously.

use crate::daycounts::{Act365Fixed, DayCount};
use crate::types::{CashFlow, Compounding, Date};

/// Year fraction from `trade_date` to `date` on an ACT/365 Fixed basis.
#[must_use]
pub fn year_fraction(trade_date: Date, date: Date) -> f64 {
    Act365Fixed.year_fraction(trade_date, date)
}

/// Annually compounded discount factor `1 / (1 + rate)^t`.
#[must_use]
pub fn discount_factor(t: f64, rate: f64) -> f64 {
    1.0 / (1.0 + rate).powf(t)
}

/// Present value of a single amount received `t` years from now.
///
/// Discrete: `CF / (1 + y*f)^(t/f)`, continuous: `CF * e^(-y*t)`.
#[must_use]
pub fn present_value(
    amount: f64,
    yield_rate: f64,
    t: f64,
    period: f64,
    compounding: Compounding,
) -> f64 {
    match compounding {
        Compounding::Discrete => amount / (1.0 + yield_rate * period).powf(t / period),
        Compounding::Continuous => amount * (-yield_rate * t).exp(),
    }
}

/// Derivative of [`present_value`] with respect to the yield.
#[must_use]
pub fn present_value_derivative(
    amount: f64,
    yield_rate: f64,
    t: f64,
    period: f64,
    compounding: Compounding,
) -> f64 {
    match compounding {
        Compounding::Discrete => {
            let base = 1.0 + yield_rate * period;
            -t * amount / base.powf(t / period + 1.0)
        }
        Compounding::Continuous => -t * amount * (-yield_rate * t).exp(),
    }
}

/// Sum of present values of the flows dated strictly after `trade_date`.
///
/// This is the dirty price of a schedule at a flat yield.
#[must_use]
pub fn cumulative_present_value(
    trade_date: Date,
    yield_rate: f64,
    flows: &[CashFlow],
    period: f64,
    compounding: Compounding,
) -> f64 {
    flows
        .iter()
        .filter(|cf| cf.date() > trade_date)
        .map(|cf| {
            let t = year_fraction(trade_date, cf.date());
            present_value(cf.amount(), yield_rate, t, period, compounding)
        })
        .sum()
}
