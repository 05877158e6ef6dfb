//! General-ledger journal entry types.

use chrono::NaiveDate;
use neraca_shared::types::{AccountNumber, EntryId, amount::deserialize_lenient};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// One posted debit-or-credit line.
///
/// Amounts are normalized with parse-or-zero on the way in, so a snapshot
/// holding `""`, `null` or a missing `credit_amount` still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Record identifier.
    #[serde(default)]
    pub id: EntryId,
    /// Transaction date.
    #[serde(default, alias = "tanggal", deserialize_with = "deserialize_date")]
    pub date: Option<NaiveDate>,
    /// Free-text evidence reference. Not enforced as a foreign key.
    #[serde(default, alias = "no_bukti")]
    pub evidence_number: String,
    /// Description of the transaction.
    #[serde(default, alias = "deskripsi")]
    pub description: String,
    /// Account the line posts to.
    #[serde(default, alias = "no_akun")]
    pub account_number: AccountNumber,
    /// Account name captured when the entry was recorded.
    #[serde(default, alias = "nama_akun")]
    pub account_name: String,
    /// Debit amount (zero for credit lines).
    #[serde(default, alias = "debet", deserialize_with = "deserialize_lenient")]
    pub debit_amount: Decimal,
    /// Credit amount (zero for debit lines).
    #[serde(default, alias = "kredit", deserialize_with = "deserialize_lenient")]
    pub credit_amount: Decimal,
}

impl JournalEntry {
    /// Builds an entry from creation input.
    #[must_use]
    pub fn from_input(id: EntryId, input: JournalEntryInput) -> Self {
        Self {
            id,
            date: input.date,
            evidence_number: input.evidence_number,
            description: input.description,
            account_number: input.account_number,
            account_name: input.account_name.unwrap_or_default(),
            debit_amount: input.debit_amount,
            credit_amount: input.credit_amount,
        }
    }

    /// Returns true if this is a debit line.
    #[must_use]
    pub fn is_debit(&self) -> bool {
        !self.debit_amount.is_zero()
    }

    /// Returns the signed amount (positive for debit, negative for credit).
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        self.debit_amount.saturating_sub(self.credit_amount)
    }
}

/// Input for recording a journal entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JournalEntryInput {
    /// Transaction date.
    #[serde(default, alias = "tanggal", deserialize_with = "deserialize_date")]
    pub date: Option<NaiveDate>,
    /// Evidence reference.
    #[serde(default, alias = "no_bukti")]
    pub evidence_number: String,
    /// Description.
    #[serde(default, alias = "deskripsi")]
    pub description: String,
    /// Account to post to.
    #[serde(default, alias = "no_akun")]
    pub account_number: AccountNumber,
    /// Account name; filled in from the chart when absent.
    #[serde(default, alias = "nama_akun")]
    pub account_name: Option<String>,
    /// Debit amount.
    #[serde(default, alias = "debet", deserialize_with = "deserialize_lenient")]
    pub debit_amount: Decimal,
    /// Credit amount.
    #[serde(default, alias = "kredit", deserialize_with = "deserialize_lenient")]
    pub credit_amount: Decimal,
}

impl JournalEntryInput {
    /// Creates a debit line input.
    #[must_use]
    pub fn debit(account_number: impl Into<AccountNumber>, amount: Decimal) -> Self {
        Self {
            account_number: account_number.into(),
            debit_amount: amount,
            ..Self::default()
        }
    }

    /// Creates a credit line input.
    #[must_use]
    pub fn credit(account_number: impl Into<AccountNumber>, amount: Decimal) -> Self {
        Self {
            account_number: account_number.into(),
            credit_amount: amount,
            ..Self::default()
        }
    }

    /// Sets the transaction date.
    #[must_use]
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the evidence reference.
    #[must_use]
    pub fn evidence(mut self, evidence_number: impl Into<String>) -> Self {
        self.evidence_number = evidence_number.into();
        self
    }
}

/// Accepts `YYYY-MM-DD` or a timestamp starting with it; anything else is `None`.
pub(crate) fn deserialize_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let serde_json::Value::String(raw) = serde_json::Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    Ok(raw
        .trim()
        .get(..10)
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()))
}
