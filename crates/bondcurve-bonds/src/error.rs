//! Error types for bond operations.

use bondcurve_core::{CoreError, Date};
use bondcurve_curves::CurveError;
use thiserror::Error;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond construction and analytics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// The coupon schedule could not be built from the bond terms.
    #[error("Schedule construction failed: {reason}")]
    ScheduleConstruction {
        /// Description of what's invalid.
        reason: String,
    },

    /// Missing required field.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// Yield solving did not converge.
    #[error("Yield calculation failed to converge: {reason}")]
    NonConvergence {
        /// Description of the failure.
        reason: String,
    },

    /// Every cash flow is on or before the trade date.
    #[error("No cash flows remain after trade date {trade_date}")]
    NoFutureCashFlows {
        /// The trade date.
        trade_date: Date,
    },

    /// Invalid price.
    #[error("Invalid price: {reason}")]
    InvalidPrice {
        /// Description of what's invalid.
        reason: String,
    },

    /// Curve error.
    #[error("Curve error: {0}")]
    Curve(#[from] CurveError),

    /// Core library error.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

impl BondError {
    /// Creates a schedule construction error.
    #[must_use]
    pub fn schedule(reason: impl Into<String>) -> Self {
        Self::ScheduleConstruction {
            reason: reason.into(),
        }
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates a non-convergence error.
    #[must_use]
    pub fn non_convergence(reason: impl Into<String>) -> Self {
        Self::NonConvergence {
            reason: reason.into(),
        }
    }

    /// Creates a no-future-cash-flows error.
    #[must_use]
    pub fn no_future_cash_flows(trade_date: Date) -> Self {
        Self::NoFutureCashFlows { trade_date }
    }

    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(reason: impl Into<String>) -> Self {
        Self::InvalidPrice {
            reason: reason.into(),
        }
    }
}
