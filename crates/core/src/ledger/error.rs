//! Ledger error types.
//!
//! These are entry-time validation errors, raised before a record reaches
//! the store. Aggregation itself never fails.

use neraca_shared::types::AccountNumber;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while validating ledger records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    // ========== Journal Entry Errors ==========
    /// Neither debit nor credit was filled in.
    #[error("Entry must specify a debit or a credit amount")]
    MissingAmount,

    /// Both debit and credit were filled in.
    #[error("Entry must specify either debit or credit, not both (debit: {debit}, credit: {credit})")]
    BothSidesFilled {
        /// Debit amount supplied.
        debit: Decimal,
        /// Credit amount supplied.
        credit: Decimal,
    },

    /// An amount was negative.
    #[error("Entry amount cannot be negative: {0}")]
    NegativeAmount(Decimal),

    /// Entry references an account that is not in the chart.
    #[error("Account not found: {0}")]
    UnknownAccount(AccountNumber),

    // ========== Record Errors ==========
    /// Account number is empty.
    #[error("Account number is required")]
    BlankAccountNumber,

    /// Account name is empty.
    #[error("Account name is required")]
    BlankAccountName,

    /// Evidence number is empty.
    #[error("Evidence number is required")]
    BlankEvidenceNumber,
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingAmount => "MISSING_AMOUNT",
            Self::BothSidesFilled { .. } => "BOTH_SIDES_FILLED",
            Self::NegativeAmount(_) => "NEGATIVE_AMOUNT",
            Self::UnknownAccount(_) => "UNKNOWN_ACCOUNT",
            Self::BlankAccountNumber => "BLANK_ACCOUNT_NUMBER",
            Self::BlankAccountName => "BLANK_ACCOUNT_NAME",
            Self::BlankEvidenceNumber => "BLANK_EVIDENCE_NUMBER",
        }
    }
}
