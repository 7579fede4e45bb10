//! # Bondcurve
//!
//! Fixed income valuation: coupon schedules, bond price and yield
//! analytics, zero/forward/par curves, and sequential bootstrapping.
//!
//! This crate re-exports the member crates and gathers the everyday types
//! in [`prelude`].
//!
//! ## Example
//!
//! ```rust
//! use bondcurve::prelude::*;
//!
//! let trade = Date::parse("2014-01-01").unwrap();
//! let bonds = [
//!     Bond::new("2015-01-01", "2014-01-01", 1.0, 9.0).unwrap(),
//!     Bond::new("2016-01-01", "2014-01-01", 1.0, 9.95).unwrap(),
//!     Bond::new("2017-01-01", "2014-01-01", 1.0, 10.85).unwrap(),
//! ];
//!
//! let par = ParCurve::new(&bonds, &[100.0, 100.0, 100.0], trade).unwrap();
//! let zero = par.bootstrap().unwrap();
//!
//! for bond in &bonds {
//!     let price = bond.price_from_zero_curve(&zero, trade).unwrap();
//!     assert!((price - 100.0).abs() < 1e-8);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use bondcurve_bonds;
pub use bondcurve_core;
pub use bondcurve_curves;
pub use bondcurve_math;

/// Everyday types from every member crate.
pub mod prelude {
    pub use bondcurve_bonds::prelude::*;
    pub use bondcurve_core::prelude::*;
    pub use bondcurve_curves::prelude::*;
}
