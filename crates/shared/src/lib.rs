//! Shared types and configuration for Neraca.
//!
//! This crate provides common building blocks used across all other crates:
//! - Typed identifiers for accounts, journal entries and evidence records
//! - Lenient parse-or-zero handling for monetary amounts
//! - Configuration management

pub mod config;
pub mod types;

pub use config::{AppConfig, ReportsConfig, StoreConfig, UnmatchedPolicy};
pub use types::{AccountNumber, EntryId, EvidenceId, parse_amount_or_zero};
