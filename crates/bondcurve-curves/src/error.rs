//! Error types for curve operations.

use bondcurve_core::{CoreError, Date};
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Errors that can occur during curve construction, querying, and bootstrapping.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Parallel inputs have different lengths.
    #[error("Length mismatch: {left} maturities vs {right} values")]
    LengthMismatch {
        /// Number of maturities or instruments.
        left: usize,
        /// Number of rates or prices.
        right: usize,
    },

    /// Query beyond the last knot of the curve.
    #[error("Maturity {requested} is beyond the last curve point {last}")]
    MaturityOutOfRange {
        /// The requested maturity.
        requested: Date,
        /// The last maturity covered by the curve.
        last: Date,
    },

    /// Forward intervals do not join end to start.
    #[error("Discontinuous curve at interval {index}: {end} does not meet next start {next_start}")]
    DiscontinuousCurve {
        /// Index of the interval whose end does not meet the next start.
        index: usize,
        /// End of the interval.
        end: Date,
        /// Start of the following interval.
        next_start: Date,
    },

    /// A root-find did not converge.
    #[error("Failed to converge for {instrument}: {reason}")]
    NonConvergence {
        /// Description of the instrument being solved.
        instrument: String,
        /// Underlying solver failure.
        reason: String,
    },

    /// Maturities are not strictly increasing.
    #[error("Non-monotonic maturities at index {index}: {prev} >= {current}")]
    NonMonotonicMaturities {
        /// Index of the offending maturity.
        index: usize,
        /// Previous maturity.
        prev: Date,
        /// Current maturity.
        current: Date,
    },

    /// Curve has no points.
    #[error("Curve has no points")]
    EmptyCurve,

    /// Query grid is not strictly increasing.
    #[error("Time grid is not strictly increasing at index {index}")]
    UnsortedGrid {
        /// Index of the first out-of-order grid point.
        index: usize,
    },

    /// Instrument cannot be used for curve construction.
    #[error("Invalid instrument: {reason}")]
    InvalidInstrument {
        /// Description of the problem.
        reason: String,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// Error from the core crate.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CurveError {
    /// Creates a length mismatch error.
    #[must_use]
    pub fn length_mismatch(left: usize, right: usize) -> Self {
        Self::LengthMismatch { left, right }
    }

    /// Creates a maturity out of range error.
    #[must_use]
    pub fn maturity_out_of_range(requested: Date, last: Date) -> Self {
        Self::MaturityOutOfRange { requested, last }
    }

    /// Creates a non-convergence error.
    #[must_use]
    pub fn non_convergence(instrument: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::NonConvergence {
            instrument: instrument.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid instrument error.
    #[must_use]
    pub fn invalid_instrument(reason: impl Into<String>) -> Self {
        Self::InvalidInstrument {
            reason: reason.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
