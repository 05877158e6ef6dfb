//! Per-account balance aggregation.
//!
//! Folds journal entries against the chart of accounts into one
//! [`AccountBalance`] per account. Every report is derived from this table.

use std::collections::HashMap;

use neraca_shared::types::{AccountNumber, EntryId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::account::{Account, AccountGroup, NormalBalance};
use super::entry::JournalEntry;

/// Accumulated totals for one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBalance {
    /// Account number.
    pub account_number: AccountNumber,
    /// Account name.
    pub name: String,
    /// Account group.
    pub group: AccountGroup,
    /// Normal balance side.
    pub normal_balance: NormalBalance,
    /// Sum of debit amounts posted to the account.
    pub total_debit: Decimal,
    /// Sum of credit amounts posted to the account.
    pub total_credit: Decimal,
    /// Signed balance on the account's normal side.
    pub net_balance: Decimal,
}

impl AccountBalance {
    /// Creates a zero balance row for an account.
    #[must_use]
    pub fn opening(account: &Account) -> Self {
        Self {
            account_number: account.account_number.clone(),
            name: account.name.clone(),
            group: account.group,
            normal_balance: account.normal_balance,
            total_debit: Decimal::ZERO,
            total_credit: Decimal::ZERO,
            net_balance: Decimal::ZERO,
        }
    }

    /// Posts a debit and a credit amount to the account.
    ///
    /// Totals saturate at the `Decimal` range. Returns false if either total
    /// had to be clamped.
    pub fn post(&mut self, debit: Decimal, credit: Decimal) -> bool {
        let exact = self.total_debit.checked_add(debit).is_some()
            && self.total_credit.checked_add(credit).is_some();

        self.total_debit = self.total_debit.saturating_add(debit);
        self.total_credit = self.total_credit.saturating_add(credit);
        self.net_balance = self.normal_balance.net(self.total_debit, self.total_credit);
        exact
    }

    /// Returns true if the net balance is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.net_balance > Decimal::ZERO
    }
}

/// A journal entry that was left out because its account is not in the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmatchedReference {
    /// The skipped entry.
    pub entry_id: EntryId,
    /// The account number it referenced.
    pub account_number: AccountNumber,
    /// Its debit amount.
    pub debit: Decimal,
    /// Its credit amount.
    pub credit: Decimal,
}

/// One balance row per chart-of-accounts entry, in chart order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BalanceTable {
    rows: Vec<AccountBalance>,
    #[serde(skip)]
    index: HashMap<AccountNumber, usize>,
    total_debit: Decimal,
    total_credit: Decimal,
    unmatched: Vec<UnmatchedReference>,
    overflowed: Vec<AccountNumber>,
}

impl BalanceTable {
    /// Returns the balance rows in chart order.
    #[must_use]
    pub fn rows(&self) -> &[AccountBalance] {
        &self.rows
    }

    /// Looks up an account's balance.
    #[must_use]
    pub fn get(&self, account_number: &AccountNumber) -> Option<&AccountBalance> {
        self.index.get(account_number).map(|&i| &self.rows[i])
    }

    /// Number of accounts in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the chart was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of `total_debit` across all accounts.
    #[must_use]
    pub fn total_debit(&self) -> Decimal {
        self.total_debit
    }

    /// Sum of `total_credit` across all accounts.
    #[must_use]
    pub fn total_credit(&self) -> Decimal {
        self.total_credit
    }

    /// Total debits minus total credits.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        self.total_debit.saturating_sub(self.total_credit)
    }

    /// Returns true if debits and credits agree within `tolerance`.
    #[must_use]
    pub fn is_balanced(&self, tolerance: Decimal) -> bool {
        within_tolerance(self.difference(), tolerance)
    }

    /// Entries skipped because their account is not in the chart.
    #[must_use]
    pub fn unmatched(&self) -> &[UnmatchedReference] {
        &self.unmatched
    }

    /// Accounts whose totals exceeded the `Decimal` range and were clamped.
    #[must_use]
    pub fn overflowed(&self) -> &[AccountNumber] {
        &self.overflowed
    }

    /// Forgets the unmatched-entry warnings.
    pub fn clear_unmatched(&mut self) {
        self.unmatched.clear();
    }

    /// Iterates over rows of the given groups, in chart order.
    pub fn rows_in<'a>(
        &'a self,
        groups: &'a [AccountGroup],
    ) -> impl Iterator<Item = &'a AccountBalance> + 'a {
        self.rows.iter().filter(move |row| groups.contains(&row.group))
    }
}

/// Sums amounts, clamping at the `Decimal` range instead of overflowing.
#[must_use]
pub fn saturating_sum(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts
        .into_iter()
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Returns true if `difference` is zero or strictly within `tolerance`.
#[must_use]
pub fn within_tolerance(difference: Decimal, tolerance: Decimal) -> bool {
    difference.is_zero() || difference.abs() < tolerance
}

/// Computes per-account balances from the chart of accounts and journal entries.
///
/// - One row per account, in chart order, starting from zero.
/// - Each entry adds its debit and credit to its account's totals; entry
///   order does not matter.
/// - Entries whose account number is not in the chart are skipped and
///   recorded in [`BalanceTable::unmatched`].
/// - If the chart repeats an account number, the first occurrence wins.
/// - Totals beyond the `Decimal` range are clamped and the account is
///   recorded in [`BalanceTable::overflowed`]; aggregation never fails.
#[must_use]
pub fn compute_trial_balance(accounts: &[Account], entries: &[JournalEntry]) -> BalanceTable {
    let mut table = BalanceTable {
        rows: Vec::with_capacity(accounts.len()),
        index: HashMap::with_capacity(accounts.len()),
        ..BalanceTable::default()
    };

    for account in accounts {
        if table.index.contains_key(&account.account_number) {
            warn!(
                account_number = %account.account_number,
                "Duplicate account number in chart, keeping first occurrence"
            );
            continue;
        }
        table
            .index
            .insert(account.account_number.clone(), table.rows.len());
        table.rows.push(AccountBalance::opening(account));
    }

    for entry in entries {
        match table.index.get(&entry.account_number) {
            Some(&i) => {
                let row = &mut table.rows[i];
                if !row.post(entry.debit_amount, entry.credit_amount)
                    && !table.overflowed.contains(&row.account_number)
                {
                    warn!(
                        account_number = %row.account_number,
                        "Account totals exceed the representable range and were clamped"
                    );
                    table.overflowed.push(row.account_number.clone());
                }
            }
            None => table.unmatched.push(UnmatchedReference {
                entry_id: entry.id,
                account_number: entry.account_number.clone(),
                debit: entry.debit_amount,
                credit: entry.credit_amount,
            }),
        }
    }

    table.total_debit = saturating_sum(table.rows.iter().map(|r| r.total_debit));
    table.total_credit = saturating_sum(table.rows.iter().map(|r| r.total_credit));

    debug!(
        accounts = table.rows.len(),
        entries = entries.len(),
        unmatched = table.unmatched.len(),
        total_debit = %table.total_debit,
        total_credit = %table.total_credit,
        "Computed balance table"
    );

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::entry::JournalEntryInput;
    use rust_decimal_macros::dec;

    fn chart() -> Vec<Account> {
        vec![
            Account::new("101", "Cash", AccountGroup::CurrentAsset, NormalBalance::Debit),
            Account::new("401", "Sales", AccountGroup::Revenue, NormalBalance::Credit),
            Account::new("501", "Rent", AccountGroup::Expense, NormalBalance::Debit),
        ]
    }

    fn entry(input: JournalEntryInput) -> JournalEntry {
        JournalEntry::from_input(EntryId::new(), input)
    }

    #[test]
    fn test_empty_chart_gives_empty_table() {
        let entries = vec![entry(JournalEntryInput::debit("101", dec!(10)))];
        let table = compute_trial_balance(&[], &entries);

        assert!(table.is_empty());
        assert_eq!(table.total_debit(), Decimal::ZERO);
        assert_eq!(table.unmatched().len(), 1);
    }

    #[test]
    fn test_no_entries_gives_zero_balances() {
        let table = compute_trial_balance(&chart(), &[]);

        assert_eq!(table.len(), 3);
        for row in table.rows() {
            assert_eq!(row.total_debit, Decimal::ZERO);
            assert_eq!(row.total_credit, Decimal::ZERO);
            assert_eq!(row.net_balance, Decimal::ZERO);
        }
        assert!(table.is_balanced(Decimal::ZERO));
    }

    #[test]
    fn test_sign_convention() {
        let accounts = vec![
            Account::new("D", "Debit side", AccountGroup::CurrentAsset, NormalBalance::Debit),
            Account::new("C", "Credit side", AccountGroup::CurrentAsset, NormalBalance::Credit),
        ];
        let entries = vec![
            entry(JournalEntryInput::debit("D", dec!(1000))),
            entry(JournalEntryInput::credit("D", dec!(300))),
            entry(JournalEntryInput::debit("C", dec!(1000))),
            entry(JournalEntryInput::credit("C", dec!(300))),
        ];
        let table = compute_trial_balance(&accounts, &entries);

        assert_eq!(table.get(&"D".into()).unwrap().net_balance, dec!(700));
        assert_eq!(table.get(&"C".into()).unwrap().net_balance, dec!(-700));
    }

    #[test]
    fn test_preserves_chart_order() {
        let table = compute_trial_balance(&chart(), &[]);
        let numbers: Vec<&str> = table.rows().iter().map(|r| r.account_number.as_str()).collect();
        assert_eq!(numbers, vec!["101", "401", "501"]);
    }

    #[test]
    fn test_unmatched_entries_are_skipped() {
        let entries = vec![
            entry(JournalEntryInput::debit("101", dec!(100))),
            entry(JournalEntryInput::credit("401", dec!(100))),
        ];
        let baseline = compute_trial_balance(&chart(), &entries);

        let stray = entry(JournalEntryInput::debit("999", dec!(5000)));
        let mut with_stray = entries.clone();
        with_stray.push(stray.clone());
        let table = compute_trial_balance(&chart(), &with_stray);

        assert_eq!(table.total_debit(), baseline.total_debit());
        assert_eq!(table.total_credit(), baseline.total_credit());
        assert_eq!(table.rows(), baseline.rows());
        assert_eq!(
            table.unmatched(),
            &[UnmatchedReference {
                entry_id: stray.id,
                account_number: "999".into(),
                debit: dec!(5000),
                credit: Decimal::ZERO,
            }]
        );
    }

    #[test]
    fn test_totals_beyond_decimal_range_are_clamped() {
        let huge = neraca_shared::parse_amount_or_zero("50000000000000000000000000000");
        assert_eq!(huge, dec!(50000000000000000000000000000));

        let entries = vec![
            entry(JournalEntryInput::debit("101", huge)),
            entry(JournalEntryInput::debit("101", huge)),
            entry(JournalEntryInput::credit("401", huge)),
        ];
        let table = compute_trial_balance(&chart(), &entries);

        let cash = table.get(&"101".into()).unwrap();
        assert_eq!(cash.total_debit, Decimal::MAX);
        assert_eq!(cash.net_balance, Decimal::MAX);
        assert_eq!(table.total_debit(), Decimal::MAX);
        assert_eq!(table.total_credit(), huge);
        assert_eq!(table.overflowed(), &[AccountNumber::from("101")]);
        assert!(!table.is_balanced(dec!(1000)));
    }

    #[test]
    fn test_saturating_sum() {
        assert_eq!(saturating_sum(Vec::<Decimal>::new()), Decimal::ZERO);
        assert_eq!(saturating_sum([dec!(1.5), dec!(2.5)]), dec!(4));
        assert_eq!(saturating_sum([Decimal::MAX, dec!(1)]), Decimal::MAX);
        assert_eq!(saturating_sum([Decimal::MIN, dec!(-1)]), Decimal::MIN);
    }

    #[test]
    fn test_clear_unmatched() {
        let entries = vec![entry(JournalEntryInput::debit("999", dec!(1)))];
        let mut table = compute_trial_balance(&chart(), &entries);
        assert_eq!(table.unmatched().len(), 1);

        table.clear_unmatched();
        assert!(table.unmatched().is_empty());
    }

    #[test]
    fn test_duplicate_account_keeps_first() {
        let mut accounts = chart();
        accounts.push(Account::new(
            "101",
            "Cash again",
            AccountGroup::FixedAsset,
            NormalBalance::Credit,
        ));
        let entries = vec![entry(JournalEntryInput::debit("101", dec!(40)))];
        let table = compute_trial_balance(&accounts, &entries);

        assert_eq!(table.len(), 3);
        let cash = table.get(&"101".into()).unwrap();
        assert_eq!(cash.name, "Cash");
        assert_eq!(cash.net_balance, dec!(40));
    }

    #[test]
    fn test_entry_account_number_is_trimmed() {
        let entries = vec![entry(JournalEntryInput::debit(" 101 ", dec!(10)))];
        let table = compute_trial_balance(&chart(), &entries);
        assert_eq!(table.get(&"101".into()).unwrap().total_debit, dec!(10));
        assert!(table.unmatched().is_empty());
    }

    #[test]
    fn test_balanced_within_tolerance() {
        let entries = vec![
            entry(JournalEntryInput::debit("101", dec!(10500))),
            entry(JournalEntryInput::credit("401", dec!(10000))),
        ];
        let table = compute_trial_balance(&chart(), &entries);

        assert_eq!(table.difference(), dec!(500));
        assert!(table.is_balanced(dec!(1000)));
        assert!(!table.is_balanced(dec!(500)));
        assert!(!table.is_balanced(Decimal::ZERO));
    }

    #[test]
    fn test_rows_in_groups() {
        let table = compute_trial_balance(&chart(), &[]);
        let names: Vec<&str> = table
            .rows_in(&[AccountGroup::Expense, AccountGroup::CurrentAsset])
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Cash", "Rent"]);
    }
}
