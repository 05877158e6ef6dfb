//! JSON snapshot of the whole ledger.

use std::path::Path;

use neraca_core::ledger::{Account, JournalEntry, TransactionEvidence};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StoreError;

/// Everything the store holds, as written to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Chart of accounts, in chart order.
    #[serde(default, alias = "akun")]
    pub accounts: Vec<Account>,
    /// Transaction evidence records.
    #[serde(default, alias = "bukti_transaksi")]
    pub evidence: Vec<TransactionEvidence>,
    /// General-ledger journal entries.
    #[serde(default, alias = "jurnal_umum")]
    pub journal_entries: Vec<JournalEntry>,
}

impl Snapshot {
    /// Reads a snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await?;
        let snapshot: Self = serde_json::from_str(&raw)?;

        debug!(
            path = %path.display(),
            accounts = snapshot.accounts.len(),
            evidence = snapshot.evidence.len(),
            entries = snapshot.journal_entries.len(),
            "Loaded snapshot"
        );

        Ok(snapshot)
    }

    /// Writes the snapshot as pretty-printed JSON, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, raw).await?;

        debug!(path = %path.display(), "Saved snapshot");
        Ok(())
    }
}
