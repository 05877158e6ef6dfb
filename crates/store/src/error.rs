//! Store error types.

use neraca_core::ledger::LedgerError;
use neraca_shared::types::{AccountNumber, EntryId, EvidenceId};
use thiserror::Error;

/// Error types for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Record failed entry-time validation.
    #[error(transparent)]
    Validation(#[from] LedgerError),

    /// Account number already exists in the chart.
    #[error("Account number '{0}' already exists")]
    DuplicateAccount(AccountNumber),

    /// Account not found.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountNumber),

    /// An update tried to change an account's number.
    #[error("Account number cannot be changed (expected '{expected}', got '{got}')")]
    AccountNumberImmutable {
        /// Number of the account being updated.
        expected: AccountNumber,
        /// Number found in the update payload.
        got: AccountNumber,
    },

    /// Journal entry not found.
    #[error("Journal entry not found: {0}")]
    EntryNotFound(EntryId),

    /// Evidence record not found.
    #[error("Evidence record not found: {0}")]
    EvidenceNotFound(EvidenceId),

    /// Snapshot file could not be read or written.
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot file is not valid JSON.
    #[error("Snapshot format error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(err) => err.error_code(),
            Self::DuplicateAccount(_) => "DUPLICATE_ACCOUNT",
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::AccountNumberImmutable { .. } => "ACCOUNT_NUMBER_IMMUTABLE",
            Self::EntryNotFound(_) => "ENTRY_NOT_FOUND",
            Self::EvidenceNotFound(_) => "EVIDENCE_NOT_FOUND",
            Self::Io(_) => "SNAPSHOT_IO_ERROR",
            Self::Json(_) => "SNAPSHOT_FORMAT_ERROR",
        }
    }

    /// Returns true if the error means a record does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::AccountNotFound(_) | Self::EntryNotFound(_) | Self::EvidenceNotFound(_)
        )
    }
}
