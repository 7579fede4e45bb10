//! # Bondcurve Math
//!
//! Numerical building blocks for the bondcurve valuation library.
//!
//! - **Solvers**: A bracketed hybrid Newton/Brent root finder with bounded
//!   iterations
//! - **Interpolation**: Linear knot interpolation with configurable behaviour
//!   outside the knot range

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod interpolation;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{Interpolator, LinearInterpolator};
    pub use crate::solvers::{brent, hybrid, hybrid_numerical, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
