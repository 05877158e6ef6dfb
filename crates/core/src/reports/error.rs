//! Report error types.

use neraca_shared::types::AccountNumber;
use thiserror::Error;

/// Errors that can occur during report generation.
///
/// The derivation itself never fails; these come from fetching the data
/// or from an opt-in strict policy.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Journal entries reference accounts missing from the chart and the
    /// configured policy is `reject`.
    #[error("{count} journal entries reference unknown accounts: {}", format_numbers(.account_numbers))]
    UnmatchedReferences {
        /// Number of unmatched entries.
        count: usize,
        /// Distinct unknown account numbers, in first-seen order.
        account_numbers: Vec<AccountNumber>,
    },

    /// The data source failed to return accounts or entries.
    #[error("Failed to fetch ledger data: {0}")]
    Source(String),
}

impl ReportError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnmatchedReferences { .. } => "UNMATCHED_REFERENCES",
            Self::Source(_) => "SOURCE_ERROR",
        }
    }
}

fn format_numbers(numbers: &[AccountNumber]) -> String {
    numbers
        .iter()
        .map(AccountNumber::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmatched_display() {
        let err = ReportError::UnmatchedReferences {
            count: 3,
            account_numbers: vec!["999".into(), "X-1".into()],
        };
        assert_eq!(
            err.to_string(),
            "3 journal entries reference unknown accounts: 999, X-1"
        );
        assert_eq!(err.error_code(), "UNMATCHED_REFERENCES");
    }

    #[test]
    fn test_source_display() {
        let err = ReportError::Source("connection refused".to_string());
        assert_eq!(err.to_string(), "Failed to fetch ledger data: connection refused");
        assert_eq!(err.error_code(), "SOURCE_ERROR");
    }
}
