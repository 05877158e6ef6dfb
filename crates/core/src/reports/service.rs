//! Report generation service.

use neraca_shared::UnmatchedPolicy;
use neraca_shared::types::AccountNumber;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::error::ReportError;
use super::types::{
    BalanceSheet, BalanceSheetSection, BalanceSheetSubsection, FinancialReports, IncomeStatement,
    ReportOptions, TrialBalanceReport,
};
use crate::ledger::{
    Account, AccountBalance, AccountGroup, BalanceTable, JournalEntry, compute_trial_balance,
    saturating_sum,
};

const ASSET_GROUPS: [AccountGroup; 2] = [AccountGroup::CurrentAsset, AccountGroup::FixedAsset];
const LIABILITY_GROUPS: [AccountGroup; 2] = [
    AccountGroup::CurrentLiability,
    AccountGroup::LongTermLiability,
];
const EQUITY_GROUPS: [AccountGroup; 1] = [AccountGroup::Equity];

/// Derives the income statement from a balance table.
///
/// Only Revenue and Expense accounts with a strictly positive balance are
/// listed; zero and negative balances are left out of both the lists and the
/// totals. Lists keep chart order.
#[must_use]
pub fn compute_income_statement(table: &BalanceTable) -> IncomeStatement {
    let revenues = positive_rows(table, &[AccountGroup::Revenue]);
    let expenses = positive_rows(table, &[AccountGroup::Expense]);

    let total_revenue = sum_balances(&revenues);
    let total_expense = sum_balances(&expenses);

    IncomeStatement {
        revenues,
        expenses,
        total_revenue,
        total_expense,
        net_income: total_revenue.saturating_sub(total_expense),
    }
}

/// Derives the balance sheet from a balance table and the period's net income.
///
/// Asset, liability and equity accounts are listed only with a strictly
/// positive balance. Net income is folded into equity. The accounting
/// identity is not checked here.
#[must_use]
pub fn compute_balance_sheet(table: &BalanceTable, net_income: Decimal) -> BalanceSheet {
    let assets = build_section(table, &ASSET_GROUPS);
    let liabilities = build_section(table, &LIABILITY_GROUPS);
    let equity = build_section(table, &EQUITY_GROUPS);

    let total_assets = assets.total;
    let total_liabilities = liabilities.total;
    let total_equity_before_income = equity.total;
    let total_equity = total_equity_before_income.saturating_add(net_income);

    BalanceSheet {
        assets,
        liabilities,
        equity,
        total_assets,
        total_liabilities,
        total_equity_before_income,
        net_income,
        total_equity,
        liabilities_and_equity: total_liabilities.saturating_add(total_equity),
    }
}

fn positive_rows(table: &BalanceTable, groups: &[AccountGroup]) -> Vec<AccountBalance> {
    table
        .rows_in(groups)
        .filter(|row| row.is_positive())
        .cloned()
        .collect()
}

fn sum_balances(rows: &[AccountBalance]) -> Decimal {
    saturating_sum(rows.iter().map(|row| row.net_balance))
}

fn build_section(table: &BalanceTable, groups: &[AccountGroup]) -> BalanceSheetSection {
    let accounts = positive_rows(table, groups);

    let subsections = groups
        .iter()
        .filter_map(|&group| {
            let members: Vec<AccountBalance> = accounts
                .iter()
                .filter(|row| row.group == group)
                .cloned()
                .collect();
            (!members.is_empty()).then(|| BalanceSheetSubsection {
                group,
                total: sum_balances(&members),
                accounts: members,
            })
        })
        .collect();

    BalanceSheetSection {
        total: sum_balances(&accounts),
        accounts,
        subsections,
    }
}

/// Computes all three statements from one shared balance table.
#[must_use]
pub fn generate_reports(accounts: &[Account], entries: &[JournalEntry]) -> FinancialReports {
    ReportService::generate(accounts, entries)
}

/// Service for generating financial reports.
pub struct ReportService;

impl ReportService {
    /// Generates all reports with default options.
    ///
    /// Never fails: unmatched entries are collected as warnings.
    #[must_use]
    pub fn generate(accounts: &[Account], entries: &[JournalEntry]) -> FinancialReports {
        let table = compute_trial_balance(accounts, entries);
        Self::from_table(&table, &ReportOptions::default())
    }

    /// Generates all reports, applying the configured unmatched-entry policy.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::UnmatchedReferences`] only when the policy is
    /// `reject` and at least one entry references an unknown account.
    pub fn generate_with(
        accounts: &[Account],
        entries: &[JournalEntry],
        options: &ReportOptions,
    ) -> Result<FinancialReports, ReportError> {
        let mut table = compute_trial_balance(accounts, entries);
        Self::apply_unmatched_policy(&mut table, options.unmatched_policy)?;
        Ok(Self::from_table(&table, options))
    }

    /// Derives all three statements from an already computed table.
    #[must_use]
    pub fn from_table(table: &BalanceTable, options: &ReportOptions) -> FinancialReports {
        let income_statement = compute_income_statement(table);
        let balance_sheet = compute_balance_sheet(table, income_statement.net_income);

        debug!(
            net_income = %income_statement.net_income,
            total_assets = %balance_sheet.total_assets,
            liabilities_and_equity = %balance_sheet.liabilities_and_equity,
            "Generated financial reports"
        );

        FinancialReports {
            trial_balance: TrialBalanceReport::from_table(table, options.balance_tolerance),
            income_statement,
            balance_sheet,
        }
    }

    fn apply_unmatched_policy(
        table: &mut BalanceTable,
        policy: UnmatchedPolicy,
    ) -> Result<(), ReportError> {
        if table.unmatched().is_empty() {
            return Ok(());
        }

        match policy {
            UnmatchedPolicy::Ignore => {
                table.clear_unmatched();
                Ok(())
            }
            UnmatchedPolicy::Collect => {
                warn!(
                    count = table.unmatched().len(),
                    "Journal entries reference unknown accounts and were left out"
                );
                Ok(())
            }
            UnmatchedPolicy::Reject => {
                let mut account_numbers: Vec<AccountNumber> = Vec::new();
                for reference in table.unmatched() {
                    if !account_numbers.contains(&reference.account_number) {
                        account_numbers.push(reference.account_number.clone());
                    }
                }
                Err(ReportError::UnmatchedReferences {
                    count: table.unmatched().len(),
                    account_numbers,
                })
            }
        }
    }
}
