//! Day count conventions for fixed income calculations.
//!
//! All time measurement in bondcurve uses [`Act365Fixed`]: actual calendar
//! days divided by 365, with no leap-year adjustment. The trait is kept so a
//! convention can be passed around as a value.
//!
//! ```rust
//! use bondcurve_core::daycounts::{Act365Fixed, DayCount};
//! use bondcurve_core::types::Date;
//!
//! let start = Date::from_ymd(2014, 1, 1).unwrap();
//! let end = Date::from_ymd(2015, 1, 1).unwrap();
//! assert_eq!(Act365Fixed.year_fraction(start, end), 1.0);
//! ```

mod act365;

pub use act365::Act365Fixed;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Date;

/// Trait for day count conventions.
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Negative if `end` is before `start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the day count between two dates.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Enumeration of supported day count conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DayCountConvention {
    /// Actual/365 Fixed
    #[default]
    Act365Fixed,
}

impl DayCountConvention {
    /// Creates a boxed day count implementation for this convention.
    #[must_use]
    pub fn to_day_count(&self) -> Box<dyn DayCount> {
        match self {
            DayCountConvention::Act365Fixed => Box::new(Act365Fixed),
        }
    }

    /// Returns the convention name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.to_day_count().name()
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
