//! In-memory ledger store.
//!
//! Holds the chart of accounts, evidence records and journal entries behind
//! one `RwLock`. Every read returns an owned copy, so report generation works
//! on a consistent snapshot while writers continue.

use std::path::Path;

use neraca_core::ledger::{
    Account, EvidenceInput, JournalEntry, JournalEntryInput, LedgerError, TransactionEvidence,
    validate_account, validate_evidence, validate_journal_entry,
};
use neraca_core::reports::{LedgerSource, ReportError};
use neraca_shared::StoreConfig;
use neraca_shared::types::{AccountNumber, EntryId, EvidenceId};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::error::StoreError;
use crate::snapshot::Snapshot;

/// In-memory store for CRUD operations on ledger records.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<Snapshot>,
    require_known_account: bool,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(config: &StoreConfig) -> Self {
        Self::from_snapshot(Snapshot::default(), config)
    }

    /// Creates a store holding an existing snapshot.
    ///
    /// Snapshot contents are taken as-is; validation applies to later writes.
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot, config: &StoreConfig) -> Self {
        Self {
            state: RwLock::new(snapshot),
            require_known_account: config.require_known_account,
        }
    }

    /// Creates a store from the snapshot file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub async fn open(path: impl AsRef<Path>, config: &StoreConfig) -> Result<Self, StoreError> {
        let snapshot = Snapshot::load(path).await?;
        Ok(Self::from_snapshot(snapshot, config))
    }

    /// Returns a copy of everything in the store.
    pub async fn snapshot(&self) -> Snapshot {
        self.state.read().await.clone()
    }

    /// Writes the current contents to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let snapshot = self.snapshot().await;
        snapshot.save(path).await
    }

    // ========================================================================
    // Chart of accounts
    // ========================================================================

    /// Adds an account to the end of the chart.
    ///
    /// # Errors
    ///
    /// Returns an error if the account is invalid or its number already exists.
    pub async fn create_account(&self, account: Account) -> Result<Account, StoreError> {
        validate_account(&account)?;

        let mut state = self.state.write().await;
        if state
            .accounts
            .iter()
            .any(|a| a.account_number == account.account_number)
        {
            return Err(StoreError::DuplicateAccount(account.account_number));
        }

        state.accounts.push(account.clone());
        info!(
            account_number = %account.account_number,
            group = %account.group,
            "Account created"
        );
        Ok(account)
    }

    /// Looks up an account by number.
    ///
    /// # Errors
    ///
    /// Returns an error if the account does not exist.
    pub async fn get_account(&self, account_number: &AccountNumber) -> Result<Account, StoreError> {
        let state = self.state.read().await;
        state
            .accounts
            .iter()
            .find(|a| &a.account_number == account_number)
            .cloned()
            .ok_or_else(|| StoreError::AccountNotFound(account_number.clone()))
    }

    /// Lists the chart of accounts in chart order.
    pub async fn list_accounts(&self) -> Vec<Account> {
        self.state.read().await.accounts.clone()
    }

    /// Replaces an account's name, group and normal side.
    ///
    /// The account number is the key and cannot change; a payload carrying a
    /// different number is rejected. Existing journal entries keep the
    /// account name they were recorded with.
    ///
    /// # Errors
    ///
    /// Returns an error if the account does not exist, the number differs, or
    /// the account is invalid.
    pub async fn update_account(
        &self,
        account_number: &AccountNumber,
        account: Account,
    ) -> Result<Account, StoreError> {
        if &account.account_number != account_number {
            return Err(StoreError::AccountNumberImmutable {
                expected: account_number.clone(),
                got: account.account_number,
            });
        }
        validate_account(&account)?;

        let mut state = self.state.write().await;
        let slot = state
            .accounts
            .iter_mut()
            .find(|a| &a.account_number == account_number)
            .ok_or_else(|| StoreError::AccountNotFound(account_number.clone()))?;
        *slot = account.clone();

        info!(account_number = %account_number, "Account updated");
        Ok(account)
    }

    /// Removes an account from the chart.
    ///
    /// Journal entries posted to it are kept and become unmatched.
    ///
    /// # Errors
    ///
    /// Returns an error if the account does not exist.
    pub async fn delete_account(&self, account_number: &AccountNumber) -> Result<Account, StoreError> {
        let mut state = self.state.write().await;
        let position = state
            .accounts
            .iter()
            .position(|a| &a.account_number == account_number)
            .ok_or_else(|| StoreError::AccountNotFound(account_number.clone()))?;
        let removed = state.accounts.remove(position);

        let orphaned = state
            .journal_entries
            .iter()
            .filter(|e| &e.account_number == account_number)
            .count();
        if orphaned > 0 {
            warn!(
                account_number = %account_number,
                orphaned,
                "Deleted account still has journal entries"
            );
        }

        info!(account_number = %account_number, "Account deleted");
        Ok(removed)
    }

    // ========================================================================
    // Evidence records
    // ========================================================================

    /// Records a new evidence document.
    ///
    /// # Errors
    ///
    /// Returns an error if the evidence number is blank.
    pub async fn create_evidence(
        &self,
        input: EvidenceInput,
    ) -> Result<TransactionEvidence, StoreError> {
        let evidence = TransactionEvidence::from_input(EvidenceId::new(), input);
        validate_evidence(&evidence)?;

        self.state.write().await.evidence.push(evidence.clone());
        info!(
            evidence_id = %evidence.id,
            evidence_number = %evidence.evidence_number,
            "Evidence recorded"
        );
        Ok(evidence)
    }

    /// Looks up an evidence record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not exist.
    pub async fn get_evidence(&self, id: EvidenceId) -> Result<TransactionEvidence, StoreError> {
        let state = self.state.read().await;
        state
            .evidence
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(StoreError::EvidenceNotFound(id))
    }

    /// Lists evidence records in insertion order.
    pub async fn list_evidence(&self) -> Vec<TransactionEvidence> {
        self.state.read().await.evidence.clone()
    }

    /// Replaces an evidence record's contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not exist or the input is invalid.
    pub async fn update_evidence(
        &self,
        id: EvidenceId,
        input: EvidenceInput,
    ) -> Result<TransactionEvidence, StoreError> {
        let evidence = TransactionEvidence::from_input(id, input);
        validate_evidence(&evidence)?;

        let mut state = self.state.write().await;
        let slot = state
            .evidence
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::EvidenceNotFound(id))?;
        *slot = evidence.clone();

        info!(evidence_id = %id, "Evidence updated");
        Ok(evidence)
    }

    /// Removes an evidence record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not exist.
    pub async fn delete_evidence(&self, id: EvidenceId) -> Result<TransactionEvidence, StoreError> {
        let mut state = self.state.write().await;
        let position = state
            .evidence
            .iter()
            .position(|e| e.id == id)
            .ok_or(StoreError::EvidenceNotFound(id))?;

        info!(evidence_id = %id, "Evidence deleted");
        Ok(state.evidence.remove(position))
    }

    // ========================================================================
    // Journal entries
    // ========================================================================

    /// Records a journal entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry fails validation, or if its account is
    /// not in the chart and unknown accounts are rejected.
    pub async fn create_journal_entry(
        &self,
        input: JournalEntryInput,
    ) -> Result<JournalEntry, StoreError> {
        let mut state = self.state.write().await;
        let entry = self.prepare_entry(&state.accounts, EntryId::new(), input)?;
        state.journal_entries.push(entry.clone());

        info!(
            entry_id = %entry.id,
            account_number = %entry.account_number,
            debit = %entry.debit_amount,
            credit = %entry.credit_amount,
            "Journal entry recorded"
        );
        Ok(entry)
    }

    /// Looks up a journal entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry does not exist.
    pub async fn get_journal_entry(&self, id: EntryId) -> Result<JournalEntry, StoreError> {
        let state = self.state.read().await;
        state
            .journal_entries
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(StoreError::EntryNotFound(id))
    }

    /// Lists journal entries in insertion order.
    pub async fn list_journal_entries(&self) -> Vec<JournalEntry> {
        self.state.read().await.journal_entries.clone()
    }

    /// Replaces a journal entry's contents, keeping its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry does not exist or fails validation.
    pub async fn update_journal_entry(
        &self,
        id: EntryId,
        input: JournalEntryInput,
    ) -> Result<JournalEntry, StoreError> {
        let mut state = self.state.write().await;
        let entry = self.prepare_entry(&state.accounts, id, input)?;
        let slot = state
            .journal_entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::EntryNotFound(id))?;
        *slot = entry.clone();

        info!(entry_id = %id, "Journal entry updated");
        Ok(entry)
    }

    /// Removes a journal entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry does not exist.
    pub async fn delete_journal_entry(&self, id: EntryId) -> Result<JournalEntry, StoreError> {
        let mut state = self.state.write().await;
        let position = state
            .journal_entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(StoreError::EntryNotFound(id))?;

        info!(entry_id = %id, "Journal entry deleted");
        Ok(state.journal_entries.remove(position))
    }

    /// Validates an entry and fills in its account name from the chart.
    fn prepare_entry(
        &self,
        accounts: &[Account],
        id: EntryId,
        input: JournalEntryInput,
    ) -> Result<JournalEntry, StoreError> {
        let mut entry = JournalEntry::from_input(id, input);
        validate_journal_entry(&entry)?;

        match accounts
            .iter()
            .find(|a| a.account_number == entry.account_number)
        {
            Some(account) => {
                if entry.account_name.trim().is_empty() {
                    entry.account_name.clone_from(&account.name);
                }
            }
            None if self.require_known_account => {
                return Err(LedgerError::UnknownAccount(entry.account_number.clone()).into());
            }
            None => {}
        }

        Ok(entry)
    }
}

impl LedgerSource for MemoryStore {
    async fn list_accounts(&self) -> Result<Vec<Account>, ReportError> {
        Ok(MemoryStore::list_accounts(self).await)
    }

    async fn list_journal_entries(&self) -> Result<Vec<JournalEntry>, ReportError> {
        Ok(MemoryStore::list_journal_entries(self).await)
    }
}
