//! Actual/365 Fixed day count convention.

use super::DayCount;
use crate::types::Date;

/// Actual/365 Fixed day count convention.
///
/// The day count is the actual number of days between dates.
/// The year basis is always 365 days (ignoring leap years).
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{365}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl Act365Fixed {
    /// Days in the year basis.
    pub const BASIS: f64 = 365.0;
}

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        start.days_between(&end) as f64 / Self::BASIS
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_act365_fixed() {
        let dc = Act365Fixed;
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 1, 1).unwrap();

        // Leap year still divides by 365
        assert_eq!(dc.day_count(start, end), 366);
        assert_relative_eq!(dc.year_fraction(start, end), 366.0 / 365.0);
    }

    #[test]
    fn test_negative_period() {
        let dc = Act365Fixed;
        let start = Date::from_ymd(2014, 7, 1).unwrap();
        let end = Date::from_ymd(2014, 1, 1).unwrap();
        assert!(dc.year_fraction(start, end) < 0.0);
    }
}
