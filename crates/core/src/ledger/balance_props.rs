//! Property-based tests for balance aggregation.

use neraca_shared::types::EntryId;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::account::{Account, AccountGroup, NormalBalance};
use super::balance::compute_trial_balance;
use super::entry::JournalEntry;

/// Strategy for non-negative amounts with two decimal places.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn group_strategy() -> impl Strategy<Value = AccountGroup> {
    prop::sample::select(AccountGroup::ALL.to_vec())
}

fn side_strategy() -> impl Strategy<Value = NormalBalance> {
    prop_oneof![Just(NormalBalance::Debit), Just(NormalBalance::Credit)]
}

/// A chart of `1..=8` accounts numbered `100..`.
fn chart_strategy() -> impl Strategy<Value = Vec<Account>> {
    prop::collection::vec((group_strategy(), side_strategy()), 1..=8).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (group, side))| {
                Account::new(format!("{}", 100 + i), format!("Account {i}"), group, side)
            })
            .collect()
    })
}

/// Entries against account numbers `100..110`, so some miss an 8-account chart.
fn entries_strategy() -> impl Strategy<Value = Vec<JournalEntry>> {
    prop::collection::vec((0usize..10, any::<bool>(), amount_strategy()), 0..40).prop_map(
        |lines| {
            lines
                .into_iter()
                .map(|(account, is_debit, amount)| {
                    let (debit, credit) = if is_debit {
                        (amount, Decimal::ZERO)
                    } else {
                        (Decimal::ZERO, amount)
                    };
                    JournalEntry {
                        id: EntryId::new(),
                        date: None,
                        evidence_number: String::new(),
                        description: String::new(),
                        account_number: format!("{}", 100 + account).into(),
                        account_name: String::new(),
                        debit_amount: debit,
                        credit_amount: credit,
                    }
                })
                .collect()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Reversing or rotating the entries never changes any balance.
    #[test]
    fn prop_entry_order_does_not_matter(
        accounts in chart_strategy(),
        entries in entries_strategy(),
        rotate in 0usize..40,
    ) {
        let forward = compute_trial_balance(&accounts, &entries);

        let mut reversed = entries.clone();
        reversed.reverse();
        let backward = compute_trial_balance(&accounts, &reversed);

        let mut rotated = entries.clone();
        if !rotated.is_empty() {
            let by = rotate % rotated.len();
            rotated.rotate_left(by);
        }
        let shifted = compute_trial_balance(&accounts, &rotated);

        prop_assert_eq!(forward.rows(), backward.rows());
        prop_assert_eq!(forward.rows(), shifted.rows());
        prop_assert_eq!(forward.total_debit(), shifted.total_debit());
        prop_assert_eq!(forward.total_credit(), shifted.total_credit());
    }

    /// Any permutation of the entries gives the same table.
    #[test]
    fn prop_any_permutation_gives_same_table(
        (accounts, entries, shuffled) in (chart_strategy(), entries_strategy())
            .prop_flat_map(|(accounts, entries)| {
                let shuffled = Just(entries.clone()).prop_shuffle();
                (Just(accounts), Just(entries), shuffled)
            }),
    ) {
        let original = compute_trial_balance(&accounts, &entries);
        let permuted = compute_trial_balance(&accounts, &shuffled);

        prop_assert_eq!(original.rows(), permuted.rows());
        prop_assert_eq!(original.total_debit(), permuted.total_debit());
        prop_assert_eq!(original.total_credit(), permuted.total_credit());
        prop_assert_eq!(original.unmatched().len(), permuted.unmatched().len());
    }

    /// With no entries every account is zero.
    #[test]
    fn prop_no_entries_all_zero(accounts in chart_strategy()) {
        let table = compute_trial_balance(&accounts, &[]);

        prop_assert_eq!(table.len(), accounts.len());
        for row in table.rows() {
            prop_assert_eq!(row.total_debit, Decimal::ZERO);
            prop_assert_eq!(row.total_credit, Decimal::ZERO);
            prop_assert_eq!(row.net_balance, Decimal::ZERO);
        }
    }

    /// Grand totals equal the sum over matched entries; unmatched entries are
    /// reported but never counted.
    #[test]
    fn prop_totals_cover_only_matched_entries(
        accounts in chart_strategy(),
        entries in entries_strategy(),
    ) {
        let table = compute_trial_balance(&accounts, &entries);

        let (matched, unmatched): (Vec<_>, Vec<_>) = entries
            .iter()
            .partition(|e| table.get(&e.account_number).is_some());

        let expected_debit: Decimal = matched.iter().map(|e| e.debit_amount).sum();
        let expected_credit: Decimal = matched.iter().map(|e| e.credit_amount).sum();

        prop_assert_eq!(table.total_debit(), expected_debit);
        prop_assert_eq!(table.total_credit(), expected_credit);
        prop_assert_eq!(table.unmatched().len(), unmatched.len());
    }

    /// Net balance follows the normal-balance sign convention for every row.
    #[test]
    fn prop_net_balance_sign_convention(
        accounts in chart_strategy(),
        entries in entries_strategy(),
    ) {
        let table = compute_trial_balance(&accounts, &entries);

        for row in table.rows() {
            let expected = match row.normal_balance {
                NormalBalance::Debit => row.total_debit - row.total_credit,
                NormalBalance::Credit => row.total_credit - row.total_debit,
            };
            prop_assert_eq!(row.net_balance, expected);
        }
    }

    /// Balanced double-entry pairs always give a balanced table.
    #[test]
    fn prop_paired_entries_balance(
        accounts in chart_strategy(),
        pairs in prop::collection::vec((0usize..8, 0usize..8, amount_strategy()), 0..20),
    ) {
        let n = accounts.len();
        let mut entries = Vec::new();
        for (from, to, amount) in pairs {
            let debit_account = accounts[from % n].account_number.clone();
            let credit_account = accounts[to % n].account_number.clone();
            entries.push(JournalEntry {
                id: EntryId::new(),
                date: None,
                evidence_number: String::new(),
                description: String::new(),
                account_number: debit_account,
                account_name: String::new(),
                debit_amount: amount,
                credit_amount: Decimal::ZERO,
            });
            entries.push(JournalEntry {
                id: EntryId::new(),
                date: None,
                evidence_number: String::new(),
                description: String::new(),
                account_number: credit_account,
                account_name: String::new(),
                debit_amount: Decimal::ZERO,
                credit_amount: amount,
            });
        }

        let table = compute_trial_balance(&accounts, &entries);
        prop_assert!(table.is_balanced(Decimal::ZERO));
        prop_assert!(table.unmatched().is_empty());
    }
}
