//! Term structure representations.
//!
//! - [`ZeroCurve`]: spot rates on dated knots, with [`ZeroCurveBuilder`]
//! - [`ForwardCurve`]: forward rates over dated intervals, with [`ForwardCurveBuilder`]
//!
//! The two convert into each other through annual compounding identities.

mod forward;
mod zero;

pub use forward::{ForwardCurve, ForwardCurveBuilder, ForwardRateSource};
pub use zero::{ZeroCurve, ZeroCurveBuilder};
