//! Ledger data store.
//!
//! This crate provides:
//! - An in-memory store for the chart of accounts, evidence records and
//!   journal entries
//! - JSON snapshot load/save
//! - The [`neraca_core::reports::LedgerSource`] implementation reports read through

pub mod error;
pub mod memory;
pub mod snapshot;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use snapshot::Snapshot;
