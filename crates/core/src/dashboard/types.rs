//! Dashboard data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{Account, JournalEntry, saturating_sum, within_tolerance};

/// Headline ledger figures.
///
/// Unlike the trial balance, debit and credit totals here run over every
/// journal entry, including ones whose account is not in the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// Accounts in the chart.
    pub total_accounts: usize,
    /// Journal entries recorded.
    pub total_entries: usize,
    /// Sum of all debit amounts.
    pub total_debit: Decimal,
    /// Sum of all credit amounts.
    pub total_credit: Decimal,
    /// Total debit minus total credit.
    pub difference: Decimal,
    /// Whether debits and credits agree within the tolerance.
    pub is_balanced: bool,
}

impl LedgerSummary {
    /// Summarizes a ledger snapshot.
    #[must_use]
    pub fn from_snapshot(
        accounts: &[Account],
        entries: &[JournalEntry],
        tolerance: Decimal,
    ) -> Self {
        let total_debit = saturating_sum(entries.iter().map(|e| e.debit_amount));
        let total_credit = saturating_sum(entries.iter().map(|e| e.credit_amount));
        let difference = total_debit.saturating_sub(total_credit);

        Self {
            total_accounts: accounts.len(),
            total_entries: entries.len(),
            total_debit,
            total_credit,
            difference,
            is_balanced: within_tolerance(difference, tolerance),
        }
    }
}
