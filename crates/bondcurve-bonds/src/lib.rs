//! # Bondcurve Bonds
//!
//! Fixed-rate bond analytics for the bondcurve valuation library.
//!
//! This crate provides:
//!
//! - **Cash Flows**: Coupon schedules with an optional irregular first payment
//! - **Instruments**: [`Bond`](instruments::Bond) with its builder
//! - **Pricing**: Flat-yield and zero-curve prices, accrued interest,
//!   clean/dirty conversion, yield-to-maturity
//! - **Risk**: Modified and Macaulay durations
//! - **Curve instruments**: bonds as inputs to par curves and bootstrapping
//!
//! ## Example
//!
//! ```rust
//! use bondcurve_bonds::prelude::*;
//! use bondcurve_core::types::Date;
//!
//! let bond = BondBuilder::new()
//!     .maturity_date("2024-01-01")
//!     .issue_date("2014-01-01")
//!     .frequency(1.0)
//!     .coupon(5.0)
//!     .build()
//!     .unwrap();
//!
//! let trade = Date::parse("2014-01-01").unwrap();
//! let price = bond.price(0.05, trade);
//! assert!((price - 100.0).abs() < 0.05);
//!
//! let ytm = bond.yield_from_price(price, trade).unwrap();
//! assert!((ytm - 0.05).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]

pub mod cashflows;
pub mod curve_instruments;
pub mod error;
pub mod instruments;
pub mod pricing;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cashflows::{CashFlowSchedule, ScheduleConfig};
    pub use crate::error::{BondError, BondResult};
    pub use crate::instruments::{Bond, BondBuilder};
    pub use crate::pricing::{price_bonds, solve_yields, YieldResult, YieldSolver};
}

pub use error::{BondError, BondResult};
