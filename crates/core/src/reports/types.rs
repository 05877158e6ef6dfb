//! Report data types.

use neraca_shared::types::AccountNumber;
use neraca_shared::{ReportsConfig, UnmatchedPolicy};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{
    AccountBalance, AccountGroup, BalanceTable, UnmatchedReference, within_tolerance,
};

/// Options controlling report generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Maximum debit/credit difference still reported as balanced.
    pub balance_tolerance: Decimal,
    /// Handling of entries that reference unknown accounts.
    pub unmatched_policy: UnmatchedPolicy,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::from(&ReportsConfig::default())
    }
}

impl From<&ReportsConfig> for ReportOptions {
    fn from(config: &ReportsConfig) -> Self {
        Self {
            balance_tolerance: config.balance_tolerance,
            unmatched_policy: config.unmatched_policy,
        }
    }
}

/// Trial balance totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceTotals {
    /// Total debit.
    pub total_debit: Decimal,
    /// Total credit.
    pub total_credit: Decimal,
    /// Total debit minus total credit.
    pub difference: Decimal,
    /// Whether debits equal credits within the configured tolerance.
    pub is_balanced: bool,
}

/// Trial balance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceReport {
    /// Account balances, in chart order.
    pub accounts: Vec<AccountBalance>,
    /// Totals.
    pub totals: TrialBalanceTotals,
    /// Entries left out because their account is not in the chart.
    pub unmatched: Vec<UnmatchedReference>,
    /// Accounts whose totals were clamped to the representable range.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overflowed: Vec<AccountNumber>,
}

impl TrialBalanceReport {
    /// Builds the report view of a balance table.
    #[must_use]
    pub fn from_table(table: &BalanceTable, tolerance: Decimal) -> Self {
        Self {
            accounts: table.rows().to_vec(),
            totals: TrialBalanceTotals {
                total_debit: table.total_debit(),
                total_credit: table.total_credit(),
                difference: table.difference(),
                is_balanced: table.is_balanced(tolerance),
            },
            unmatched: table.unmatched().to_vec(),
            overflowed: table.overflowed().to_vec(),
        }
    }
}

/// Income statement (laba rugi).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatement {
    /// Revenue accounts with a positive balance.
    pub revenues: Vec<AccountBalance>,
    /// Expense accounts with a positive balance.
    pub expenses: Vec<AccountBalance>,
    /// Sum of listed revenues.
    pub total_revenue: Decimal,
    /// Sum of listed expenses.
    pub total_expense: Decimal,
    /// Revenue minus expense.
    pub net_income: Decimal,
}

impl IncomeStatement {
    /// Returns true for a profit (or break-even), false for a loss.
    #[must_use]
    pub fn is_profit(&self) -> bool {
        self.net_income >= Decimal::ZERO
    }
}

/// Accounts of one group within a balance sheet section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetSubsection {
    /// Group the accounts belong to.
    pub group: AccountGroup,
    /// Subsection total.
    pub total: Decimal,
    /// Accounts, in chart order.
    pub accounts: Vec<AccountBalance>,
}

/// Balance sheet section (assets, liabilities, equity).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetSection {
    /// Section total.
    pub total: Decimal,
    /// Accounts in this section, in chart order.
    pub accounts: Vec<AccountBalance>,
    /// Per-group breakdown (current vs fixed assets, etc.).
    pub subsections: Vec<BalanceSheetSubsection>,
}

/// Balance sheet (neraca).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Assets section.
    pub assets: BalanceSheetSection,
    /// Liabilities section.
    pub liabilities: BalanceSheetSection,
    /// Equity section, before net income.
    pub equity: BalanceSheetSection,
    /// Total assets.
    pub total_assets: Decimal,
    /// Total liabilities.
    pub total_liabilities: Decimal,
    /// Total of listed equity accounts.
    pub total_equity_before_income: Decimal,
    /// Net income carried in from the income statement.
    pub net_income: Decimal,
    /// Equity including net income.
    pub total_equity: Decimal,
    /// Liabilities plus equity.
    pub liabilities_and_equity: Decimal,
}

impl BalanceSheet {
    /// Assets minus (liabilities + equity).
    #[must_use]
    pub fn identity_difference(&self) -> Decimal {
        self.total_assets.saturating_sub(self.liabilities_and_equity)
    }

    /// Returns true if assets equal liabilities plus equity within `tolerance`.
    ///
    /// Informational only: ledger data is not guaranteed to balance.
    #[must_use]
    pub fn satisfies_identity(&self, tolerance: Decimal) -> bool {
        within_tolerance(self.identity_difference(), tolerance)
    }
}

/// All three statements derived from one balance table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialReports {
    /// Trial balance (neraca saldo).
    pub trial_balance: TrialBalanceReport,
    /// Income statement.
    pub income_statement: IncomeStatement,
    /// Balance sheet.
    pub balance_sheet: BalanceSheet,
}
