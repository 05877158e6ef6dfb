//! Core bookkeeping logic for Neraca.
//!
//! This crate contains pure business logic with ZERO storage or transport
//! dependencies. Data arrives as immutable snapshots from a [`LedgerSource`]
//! and leaves as report-ready aggregates.
//!
//! # Modules
//!
//! - `ledger` - Chart of accounts, journal entries, validation, balance table
//! - `reports` - Trial balance, income statement and balance sheet derivation
//! - `dashboard` - Headline ledger figures
//!
//! [`LedgerSource`]: reports::LedgerSource

pub mod dashboard;
pub mod ledger;
pub mod reports;
