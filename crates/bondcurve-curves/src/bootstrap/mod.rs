//! Curve bootstrapping.
//!
//! Turns a [`ParCurve`](crate::par::ParCurve) of priced instruments into a
//! [`ZeroCurve`](crate::curves::ZeroCurve) one maturity at a time.

mod sequential;

pub use sequential::SequentialBootstrapper;
