//! Chart-of-accounts domain types.

use neraca_shared::types::AccountNumber;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Side on which an account's balance normally sits.
///
/// In double-entry bookkeeping:
/// - Debit-normal accounts grow with debits (assets, expenses)
/// - Credit-normal accounts grow with credits (liabilities, equity, revenue)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalBalance {
    /// Debit-normal account.
    #[serde(alias = "Debit", alias = "Debet", alias = "debet")]
    Debit,
    /// Credit-normal account.
    #[serde(alias = "Credit", alias = "Kredit", alias = "kredit")]
    Credit,
}

impl NormalBalance {
    /// Calculates the signed net balance from accumulated totals.
    ///
    /// - Debit-normal: `debit - credit`
    /// - Credit-normal: `credit - debit`
    ///
    /// Saturates at the `Decimal` range instead of overflowing.
    #[must_use]
    pub fn net(self, total_debit: Decimal, total_credit: Decimal) -> Decimal {
        match self {
            Self::Debit => total_debit.saturating_sub(total_credit),
            Self::Credit => total_credit.saturating_sub(total_debit),
        }
    }
}

/// Top-level statement section an account group rolls up into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountSection {
    /// Balance sheet: assets.
    Asset,
    /// Balance sheet: liabilities.
    Liability,
    /// Balance sheet: owner's equity.
    Equity,
    /// Income statement: revenue.
    Revenue,
    /// Income statement: expenses.
    Expense,
}

/// Fixed grouping of chart-of-accounts entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountGroup {
    /// Cash, receivables and other short-lived assets.
    #[serde(alias = "Aset Lancar")]
    CurrentAsset,
    /// Equipment, buildings and other long-lived assets.
    #[serde(alias = "Aset Tetap")]
    FixedAsset,
    /// Obligations due within the year.
    #[serde(alias = "Liabilitas Jangka Pendek")]
    CurrentLiability,
    /// Obligations due after the year.
    #[serde(alias = "Liabilitas Jangka Panjang")]
    LongTermLiability,
    /// Owner's capital and retained earnings.
    #[serde(alias = "Ekuitas")]
    Equity,
    /// Income earned.
    #[serde(alias = "Pendapatan")]
    Revenue,
    /// Costs incurred.
    #[serde(alias = "Beban")]
    Expense,
}

impl AccountGroup {
    /// Every group, in statement order.
    pub const ALL: [Self; 7] = [
        Self::CurrentAsset,
        Self::FixedAsset,
        Self::CurrentLiability,
        Self::LongTermLiability,
        Self::Equity,
        Self::Revenue,
        Self::Expense,
    ];

    /// Returns the statement section this group belongs to.
    #[must_use]
    pub fn section(self) -> AccountSection {
        match self {
            Self::CurrentAsset | Self::FixedAsset => AccountSection::Asset,
            Self::CurrentLiability | Self::LongTermLiability => AccountSection::Liability,
            Self::Equity => AccountSection::Equity,
            Self::Revenue => AccountSection::Revenue,
            Self::Expense => AccountSection::Expense,
        }
    }

    /// Returns true if the group is reported on the balance sheet.
    #[must_use]
    pub fn is_balance_sheet(self) -> bool {
        matches!(
            self.section(),
            AccountSection::Asset | AccountSection::Liability | AccountSection::Equity
        )
    }

    /// Conventional normal balance side for accounts in this group.
    #[must_use]
    pub fn default_normal_balance(self) -> NormalBalance {
        match self.section() {
            AccountSection::Asset | AccountSection::Expense => NormalBalance::Debit,
            AccountSection::Liability | AccountSection::Equity | AccountSection::Revenue => {
                NormalBalance::Credit
            }
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::CurrentAsset => "Current Asset",
            Self::FixedAsset => "Fixed Asset",
            Self::CurrentLiability => "Current Liability",
            Self::LongTermLiability => "Long-Term Liability",
            Self::Equity => "Equity",
            Self::Revenue => "Revenue",
            Self::Expense => "Expense",
        }
    }
}

impl std::fmt::Display for AccountGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A chart-of-accounts entry.
///
/// The account number is the stable key: journal entries reference accounts
/// by it, and it must not change once the account exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account number.
    #[serde(alias = "nomor_akun")]
    pub account_number: AccountNumber,
    /// Display name.
    #[serde(alias = "nama_akun")]
    pub name: String,
    /// Group the account is reported under.
    #[serde(alias = "kelompok_akun")]
    pub group: AccountGroup,
    /// Side that increases the account's balance.
    #[serde(alias = "posisi_saldo_normal")]
    pub normal_balance: NormalBalance,
}

impl Account {
    /// Creates a new account.
    #[must_use]
    pub fn new(
        account_number: impl Into<AccountNumber>,
        name: impl Into<String>,
        group: AccountGroup,
        normal_balance: NormalBalance,
    ) -> Self {
        Self {
            account_number: account_number.into(),
            name: name.into(),
            group,
            normal_balance,
        }
    }
}
