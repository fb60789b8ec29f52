//! Error types for document composition

use thiserror::Error;

use crate::payload::AmountError;

/// Errors that can occur while composing the block plan
#[derive(Debug, Error)]
pub enum ComposeError {
    /// A visible income item carries a non-numeric amount
    #[error("income item '{label}': {source}")]
    IncomeItem {
        label: String,
        source: AmountError,
    },

    /// A visible deduction item carries a non-numeric amount
    #[error("deduction item '{label}': {source}")]
    DeductionItem {
        label: String,
        source: AmountError,
    },
}
