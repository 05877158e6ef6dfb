//! Financial report generation.
//!
//! This module provides pure business logic for deriving financial reports
//! from one shared balance table:
//! - Trial Balance
//! - Income Statement
//! - Balance Sheet

pub mod error;
pub mod service;
pub mod source;
pub mod types;


pub use error::ReportError;
pub use service::{
    ReportService, compute_balance_sheet, compute_income_statement, generate_reports,
};
pub use source::{LedgerSource, ReportGenerator};
pub use types::*;
