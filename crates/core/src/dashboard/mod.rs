//! Dashboard figures.
//!
//! Headline numbers shown at a glance: how many accounts and entries exist,
//! and whether the journal's debits and credits agree.

pub mod types;

pub use types::LedgerSummary;
