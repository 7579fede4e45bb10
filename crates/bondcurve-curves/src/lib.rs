//! # Bondcurve Curves
//!
//! Interest-rate term structures for the bondcurve valuation library.
//!
//! - **Zero curves**: spot rates on dated knots, flat below the first knot
//!   and undefined past the last
//! - **Forward curves**: forward rates over dated intervals, convertible to and
//!   from zero curves
//! - **Par curves**: yields of quoted instruments by maturity
//! - **Bootstrap**: sequential construction of a zero curve from a par curve
//!
//! ## Quick Start
//!
//! ```rust
//! use bondcurve_core::Date;
//! use bondcurve_curves::prelude::*;
//!
//! let curve = ZeroCurveBuilder::new()
//!     .add_rate(Date::parse("2015-01-01").unwrap(), 0.02)
//!     .add_rate(Date::parse("2014-07-01").unwrap(), 0.015)
//!     .build()
//!     .unwrap();
//!
//! let trade = Date::parse("2014-01-01").unwrap();
//! let df = curve.discount_factor(trade, Date::parse("2015-01-01").unwrap()).unwrap();
//! assert!((df - 1.0 / 1.02).abs() < 1e-12);
//!
//! let forwards = curve.forward_curve(trade).unwrap();
//! assert_eq!(forwards.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_errors_doc)]

pub mod bootstrap;
pub mod curves;
pub mod error;
pub mod instruments;
pub mod par;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bootstrap::SequentialBootstrapper;
    pub use crate::curves::{
        ForwardCurve, ForwardCurveBuilder, ForwardRateSource, ZeroCurve, ZeroCurveBuilder,
    };
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::instruments::CurveInstrument;
    pub use crate::par::ParCurve;
}

pub use error::{CurveError, CurveResult};
