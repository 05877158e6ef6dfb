//! Transaction evidence records.
//!
//! Evidence records document where a transaction came from (receipt,
//! invoice, bank slip). They are kept for record keeping only; journal
//! entries refer to them by free-text evidence number.

use chrono::NaiveDate;
use neraca_shared::types::EvidenceId;
use serde::{Deserialize, Serialize};

use super::entry::deserialize_date;

/// A supporting document record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionEvidence {
    /// Record identifier.
    #[serde(default)]
    pub id: EvidenceId,
    /// Evidence number printed on the document.
    #[serde(alias = "nomor_bukti")]
    pub evidence_number: String,
    /// Date on the document.
    #[serde(
        default,
        alias = "tanggal_transaksi",
        deserialize_with = "deserialize_date"
    )]
    pub transaction_date: Option<NaiveDate>,
    /// Description.
    #[serde(default, alias = "deskripsi")]
    pub description: String,
    /// External reference (counterparty document, bank reference).
    #[serde(default, alias = "referensi")]
    pub reference: String,
}

/// Input for recording or replacing an evidence record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvidenceInput {
    /// Evidence number.
    #[serde(alias = "nomor_bukti")]
    pub evidence_number: String,
    /// Date on the document.
    #[serde(
        default,
        alias = "tanggal_transaksi",
        deserialize_with = "deserialize_date"
    )]
    pub transaction_date: Option<NaiveDate>,
    /// Description.
    #[serde(default, alias = "deskripsi")]
    pub description: String,
    /// External reference.
    #[serde(default, alias = "referensi")]
    pub reference: String,
}

impl TransactionEvidence {
    /// Builds a record from input.
    #[must_use]
    pub fn from_input(id: EvidenceId, input: EvidenceInput) -> Self {
        Self {
            id,
            evidence_number: input.evidence_number.trim().to_string(),
            transaction_date: input.transaction_date,
            description: input.description,
            reference: input.reference,
        }
    }
}
