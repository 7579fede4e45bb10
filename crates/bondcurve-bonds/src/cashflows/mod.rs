//! Cash flow generation for bonds.

mod schedule;

pub use schedule::{CashFlowSchedule, ScheduleConfig};
