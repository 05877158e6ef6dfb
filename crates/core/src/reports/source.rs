//! Data-source seam and the report generator that reads through it.

use std::future::Future;
use std::sync::Arc;

use tracing::debug;

use super::error::ReportError;
use super::service::ReportService;
use super::types::{FinancialReports, ReportOptions};
use crate::dashboard::LedgerSummary;
use crate::ledger::{Account, JournalEntry};

/// Read access to the chart of accounts and the journal.
///
/// This trait is implemented by the store crate. Each call returns an owned
/// snapshot; the aggregator never sees live collections.
pub trait LedgerSource: Send + Sync {
    /// List every account, in chart order.
    fn list_accounts(&self) -> impl Future<Output = Result<Vec<Account>, ReportError>> + Send;

    /// List every journal entry.
    fn list_journal_entries(
        &self,
    ) -> impl Future<Output = Result<Vec<JournalEntry>, ReportError>> + Send;
}

/// Fetches a ledger snapshot and runs the aggregator over it.
pub struct ReportGenerator<S: LedgerSource> {
    source: Arc<S>,
    options: ReportOptions,
}

impl<S: LedgerSource> ReportGenerator<S> {
    /// Creates a new report generator.
    #[must_use]
    pub fn new(source: Arc<S>, options: ReportOptions) -> Self {
        Self { source, options }
    }

    /// Returns the options reports are generated with.
    #[must_use]
    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Fetches accounts and entries concurrently and waits for both.
    ///
    /// # Errors
    ///
    /// Returns an error if either fetch fails.
    pub async fn fetch(&self) -> Result<(Vec<Account>, Vec<JournalEntry>), ReportError> {
        let (accounts, entries) = tokio::try_join!(
            self.source.list_accounts(),
            self.source.list_journal_entries()
        )?;

        debug!(
            accounts = accounts.len(),
            entries = entries.len(),
            "Fetched ledger snapshot"
        );

        Ok((accounts, entries))
    }

    /// Generates all three statements from the current ledger data.
    ///
    /// # Errors
    ///
    /// Returns an error if fetching fails, or if unmatched entries exist under
    /// the `reject` policy.
    pub async fn generate(&self) -> Result<FinancialReports, ReportError> {
        let (accounts, entries) = self.fetch().await?;
        ReportService::generate_with(&accounts, &entries, &self.options)
    }

    /// Computes the headline ledger figures.
    ///
    /// # Errors
    ///
    /// Returns an error if fetching fails.
    pub async fn summary(&self) -> Result<LedgerSummary, ReportError> {
        let (accounts, entries) = self.fetch().await?;
        Ok(LedgerSummary::from_snapshot(
            &accounts,
            &entries,
            self.options.balance_tolerance,
        ))
    }
}
