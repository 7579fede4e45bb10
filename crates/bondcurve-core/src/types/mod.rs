//! Domain types for fixed income analytics.
//!
//! - [`Date`]: Calendar date for financial calculations
//! - [`CashFlow`]: Dated cash flow amount
//! - [`Frequency`]: Payment frequency in years per payment
//! - [`Compounding`]: Flat-yield compounding convention

mod cashflow;
mod date;
mod frequency;

pub use cashflow::{CashFlow, CashFlowKind};
pub use date::Date;
pub use frequency::{Compounding, Frequency};
