//! Cash flow type for bond analytics.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// Kind of cash flow.
///
/// Metadata only: the amount of a flow never depends on its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashFlowKind {
    /// Regular coupon payment
    Coupon,
    /// Irregular first coupon, paid on the first payment date
    Stub,
    /// Combined coupon and principal (final payment)
    CouponAndPrincipal,
    /// Principal only (bullet redemption)
    Principal,
}

impl fmt::Display for CashFlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CashFlowKind::Coupon => "Coupon",
            CashFlowKind::Stub => "Stub",
            CashFlowKind::CouponAndPrincipal => "Coupon+Principal",
            CashFlowKind::Principal => "Principal",
        };
        write!(f, "{name}")
    }
}

/// A dated cash flow.
///
/// # Example
///
/// ```rust
/// use bondcurve_core::types::{CashFlow, Date};
///
/// let cf = CashFlow::final_payment(Date::from_ymd(2024, 1, 1).unwrap(), 5.0, 100.0);
/// assert_eq!(cf.amount(), 105.0);
/// assert!(cf.is_principal());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    date: Date,
    amount: f64,
    kind: CashFlowKind,
}

impl CashFlow {
    /// Creates a new cash flow.
    #[must_use]
    pub fn new(date: Date, amount: f64, kind: CashFlowKind) -> Self {
        Self { date, amount, kind }
    }

    /// Creates a regular coupon cash flow.
    #[must_use]
    pub fn coupon(date: Date, amount: f64) -> Self {
        Self::new(date, amount, CashFlowKind::Coupon)
    }

    /// Creates a stub (irregular first) coupon cash flow.
    #[must_use]
    pub fn stub(date: Date, amount: f64) -> Self {
        Self::new(date, amount, CashFlowKind::Stub)
    }

    /// Creates a principal-only cash flow.
    #[must_use]
    pub fn principal(date: Date, amount: f64) -> Self {
        Self::new(date, amount, CashFlowKind::Principal)
    }

    /// Creates a final cash flow (coupon + principal).
    #[must_use]
    pub fn final_payment(date: Date, coupon: f64, principal: f64) -> Self {
        Self::new(date, coupon + principal, CashFlowKind::CouponAndPrincipal)
    }

    /// Returns the payment date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the cash flow amount.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the cash flow kind.
    #[must_use]
    pub fn kind(&self) -> CashFlowKind {
        self.kind
    }

    /// Returns true if this includes principal repayment.
    #[must_use]
    pub fn is_principal(&self) -> bool {
        matches!(
            self.kind,
            CashFlowKind::Principal | CashFlowKind::CouponAndPrincipal
        )
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.date, self.amount, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cashflow_creation() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        let cf = CashFlow::coupon(date, 2.5);

        assert_eq!(cf.amount(), 2.5);
        assert_eq!(cf.date(), date);
        assert!(!cf.is_principal());
    }

    #[test]
    fn test_final_payment() {
        let date = Date::from_ymd(2030, 6, 15).unwrap();
        let cf = CashFlow::final_payment(date, 2.5, 100.0);

        assert_eq!(cf.amount(), 102.5);
        assert_eq!(cf.kind(), CashFlowKind::CouponAndPrincipal);
        assert!(cf.is_principal());
    }

    #[test]
    fn test_display() {
        let cf = CashFlow::stub(Date::from_ymd(2014, 3, 1).unwrap(), 1.25);
        assert_eq!(cf.to_string(), "2014-03-01: 1.25 (Stub)");
    }
}
