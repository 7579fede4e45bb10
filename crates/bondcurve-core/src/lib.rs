//! # Bondcurve Core
//!
//! Core types and primitives for the bondcurve fixed income valuation library.
//!
//! This crate provides the foundational building blocks used throughout bondcurve:
//!
//! - **Types**: `Date`, `CashFlow`, `Frequency`
//! - **Day Count**: ACT/365 Fixed year fractions
//! - **Discounting**: Discount factors and discrete/continuous present values
//! - **Configuration**: Solver and bracketing settings shared by yield and bootstrap solvers
//!
//! ## Example
//!
//! ```rust
//! use bondcurve_core::prelude::*;
//!
//! let trade = Date::parse("2014-01-01").unwrap();
//! let pay = Date::parse("2015-01-01").unwrap();
//!
//! let t = year_fraction(trade, pay);
//! let pv = present_value(105.0, 0.05, t, 1.0, Compounding::Discrete);
//! assert!((pv - 100.0).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::similar_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod config;
pub mod daycounts;
pub mod discounting;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::ValuationConfig;
    pub use crate::daycounts::{Act365Fixed, DayCount, DayCountConvention};
    pub use crate::discounting::{
        cumulative_present_value, discount_factor, present_value, present_value_derivative,
        year_fraction,
    };
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{CashFlow, CashFlowKind, Compounding, Date, Frequency};
}

// Re-export commonly used types at crate root
pub use config::ValuationConfig;
pub use error::{CoreError, CoreResult};
pub use types::{CashFlow, CashFlowKind, Compounding, Date, Frequency};
