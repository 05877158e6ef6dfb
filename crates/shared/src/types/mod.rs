//! Common types used across the application.

pub mod amount;
pub mod id;

pub use amount::parse_amount_or_zero;
pub use id::*;
