//! Double-entry bookkeeping records and balance aggregation.
//!
//! This module implements:
//! - Chart-of-accounts entries and their grouping
//! - Journal entries and transaction evidence records
//! - Entry-time validation rules
//! - The per-account balance table (trial balance)

pub mod account;
pub mod balance;
pub mod entry;
pub mod error;
pub mod evidence;
pub mod validation;

#[cfg(test)]
mod balance_props;

pub use account::{Account, AccountGroup, AccountSection, NormalBalance};
pub use balance::{
    AccountBalance, BalanceTable, UnmatchedReference, compute_trial_balance, saturating_sum,
    within_tolerance,
};
pub use entry::{JournalEntry, JournalEntryInput};
pub use error::LedgerError;
pub use evidence::{EvidenceInput, TransactionEvidence};
pub use validation::{
    validate_account, validate_entry_amounts, validate_evidence, validate_journal_entry,
};
