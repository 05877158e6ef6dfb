//! Entry-time validation rules.
//!
//! Applied by the store before a record is accepted. The aggregator does not
//! rely on any of this having run.

use rust_decimal::Decimal;

use super::account::Account;
use super::entry::JournalEntry;
use super::error::LedgerError;
use super::evidence::TransactionEvidence;

/// Validates that exactly one of debit/credit is filled in and neither is negative.
///
/// # Errors
///
/// Returns an error if both or neither amounts are set, or either is negative.
pub fn validate_entry_amounts(debit: Decimal, credit: Decimal) -> Result<(), LedgerError> {
    if debit.is_sign_negative() && !debit.is_zero() {
        return Err(LedgerError::NegativeAmount(debit));
    }
    if credit.is_sign_negative() && !credit.is_zero() {
        return Err(LedgerError::NegativeAmount(credit));
    }

    match (debit.is_zero(), credit.is_zero()) {
        (true, true) => Err(LedgerError::MissingAmount),
        (false, false) => Err(LedgerError::BothSidesFilled { debit, credit }),
        _ => Ok(()),
    }
}

/// Validates a journal entry before it is recorded.
///
/// # Errors
///
/// Returns an error if the account number is blank or the amounts are invalid.
pub fn validate_journal_entry(entry: &JournalEntry) -> Result<(), LedgerError> {
    if entry.account_number.is_blank() {
        return Err(LedgerError::BlankAccountNumber);
    }

    validate_entry_amounts(entry.debit_amount, entry.credit_amount)
}

/// Validates a chart-of-accounts entry.
///
/// # Errors
///
/// Returns an error if the number or name is blank.
pub fn validate_account(account: &Account) -> Result<(), LedgerError> {
    if account.account_number.is_blank() {
        return Err(LedgerError::BlankAccountNumber);
    }
    if account.name.trim().is_empty() {
        return Err(LedgerError::BlankAccountName);
    }

    Ok(())
}

/// Validates an evidence record.
///
/// # Errors
///
/// Returns an error if the evidence number is blank.
pub fn validate_evidence(evidence: &TransactionEvidence) -> Result<(), LedgerError> {
    if evidence.evidence_number.trim().is_empty() {
        return Err(LedgerError::BlankEvidenceNumber);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::account::{AccountGroup, NormalBalance};
    use crate::ledger::entry::JournalEntryInput;
    use neraca_shared::types::EntryId;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(1000), dec!(0))]
    #[case(dec!(0), dec!(0.01))]
    #[case(dec!(0.00), dec!(5))]
    fn test_one_sided_amounts_accepted(#[case] debit: Decimal, #[case] credit: Decimal) {
        assert!(validate_entry_amounts(debit, credit).is_ok());
    }

    #[test]
    fn test_missing_amount() {
        assert_eq!(
            validate_entry_amounts(dec!(0), dec!(0.00)),
            Err(LedgerError::MissingAmount)
        );
    }

    #[test]
    fn test_both_sides_filled() {
        assert_eq!(
            validate_entry_amounts(dec!(10), dec!(20)),
            Err(LedgerError::BothSidesFilled {
                debit: dec!(10),
                credit: dec!(20),
            })
        );
    }

    #[rstest]
    #[case(dec!(-5), dec!(0), dec!(-5))]
    #[case(dec!(0), dec!(-1.5), dec!(-1.5))]
    #[case(dec!(-5), dec!(3), dec!(-5))]
    fn test_negative_amount(
        #[case] debit: Decimal,
        #[case] credit: Decimal,
        #[case] reported: Decimal,
    ) {
        assert_eq!(
            validate_entry_amounts(debit, credit),
            Err(LedgerError::NegativeAmount(reported))
        );
    }

    #[test]
    fn test_negative_zero_is_zero() {
        let negative_zero = -Decimal::ZERO;
        assert_eq!(
            validate_entry_amounts(negative_zero, dec!(0)),
            Err(LedgerError::MissingAmount)
        );
    }

    #[test]
    fn test_journal_entry_requires_account() {
        let entry = JournalEntry::from_input(EntryId::new(), JournalEntryInput::debit("  ", dec!(5)));
        assert_eq!(
            validate_journal_entry(&entry),
            Err(LedgerError::BlankAccountNumber)
        );

        let entry = JournalEntry::from_input(EntryId::new(), JournalEntryInput::debit("101", dec!(5)));
        assert!(validate_journal_entry(&entry).is_ok());
    }

    #[test]
    fn test_account_validation() {
        let ok = Account::new("101", "Cash", AccountGroup::CurrentAsset, NormalBalance::Debit);
        assert!(validate_account(&ok).is_ok());

        let no_number = Account::new("", "Cash", AccountGroup::CurrentAsset, NormalBalance::Debit);
        assert_eq!(validate_account(&no_number), Err(LedgerError::BlankAccountNumber));

        let no_name = Account::new("101", " ", AccountGroup::CurrentAsset, NormalBalance::Debit);
        assert_eq!(validate_account(&no_name), Err(LedgerError::BlankAccountName));
    }

    #[test]
    fn test_evidence_validation() {
        let evidence = TransactionEvidence::from_input(
            neraca_shared::types::EvidenceId::new(),
            crate::ledger::evidence::EvidenceInput {
                evidence_number: "   ".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(
            validate_evidence(&evidence),
            Err(LedgerError::BlankEvidenceNumber)
        );
    }
}
