//! Payment frequency and compounding types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Payment frequency expressed as years per payment.
///
/// `0.5` pays every six months, `1.0` annually. A frequency of `0`
/// denotes a bullet instrument with a single terminal payment.
///
/// # Example
///
/// ```rust
/// use bondcurve_core::types::Frequency;
///
/// let semi = Frequency::from_years(0.5).unwrap();
/// assert_eq!(semi.months_per_period(), Some(6));
/// assert!(Frequency::bullet().is_bullet());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Frequency(f64);

impl Frequency {
    /// Annual payments.
    #[must_use]
    pub fn annual() -> Self {
        Frequency(1.0)
    }

    /// Semi-annual payments.
    #[must_use]
    pub fn semi_annual() -> Self {
        Frequency(0.5)
    }

    /// Quarterly payments.
    #[must_use]
    pub fn quarterly() -> Self {
        Frequency(0.25)
    }

    /// Single payment at maturity.
    #[must_use]
    pub fn bullet() -> Self {
        Frequency(0.0)
    }

    /// Creates a frequency from a number of years per payment.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidInput` if the value is negative, not finite,
    /// or does not correspond to a whole number of months.
    pub fn from_years(years: f64) -> CoreResult<Self> {
        if !years.is_finite() || years < 0.0 {
            return Err(CoreError::invalid_input(format!(
                "frequency must be a non-negative number of years, got {years}"
            )));
        }
        let months = years * 12.0;
        if years > 0.0 && ((months - months.round()).abs() > 1e-9 || months.round() < 1.0) {
            return Err(CoreError::invalid_input(format!(
                "frequency {years} does not span a whole number of months"
            )));
        }
        Ok(Frequency(years))
    }

    /// Returns the years per payment.
    #[must_use]
    pub fn years(&self) -> f64 {
        self.0
    }

    /// Returns true for a single-payment instrument.
    #[must_use]
    pub fn is_bullet(&self) -> bool {
        self.0 == 0.0
    }

    /// Returns the number of months per period, or None for a bullet.
    #[must_use]
    pub fn months_per_period(&self) -> Option<u32> {
        if self.is_bullet() {
            None
        } else {
            Some((self.0 * 12.0).round() as u32)
        }
    }

    /// Returns the compounding period in years used when discounting at a flat yield.
    ///
    /// Bullet instruments compound annually.
    #[must_use]
    pub fn compounding_period(&self) -> f64 {
        if self.is_bullet() {
            1.0
        } else {
            self.0
        }
    }
}

impl TryFrom<f64> for Frequency {
    type Error = CoreError;

    fn try_from(years: f64) -> Result<Self, Self::Error> {
        Self::from_years(years)
    }
}

impl From<Frequency> for f64 {
    fn from(freq: Frequency) -> Self {
        freq.0
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.months_per_period() {
            None => write!(f, "Bullet"),
            Some(12) => write!(f, "Annual"),
            Some(6) => write!(f, "Semi-Annual"),
            Some(3) => write!(f, "Quarterly"),
            Some(1) => write!(f, "Monthly"),
            Some(m) => write!(f, "Every {m} months"),
        }
    }
}

/// Interest compounding convention for flat-yield discounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Compounding {
    /// Discrete compounding once per payment period
    #[default]
    Discrete,
    /// Continuous compounding (e^-yt)
    Continuous,
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compounding::Discrete => write!(f, "Discrete"),
            Compounding::Continuous => write!(f, "Continuous"),
        }
    }
}
