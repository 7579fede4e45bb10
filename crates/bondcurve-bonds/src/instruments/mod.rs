//! Bond instrument types.

mod bond;

pub use bond::{Bond, BondBuilder};
