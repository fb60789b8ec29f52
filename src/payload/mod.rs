//! Payload parsing for payslip JSON documents

mod amount;
mod model;

pub use amount::{Amount, AmountError};
pub use model::{
    Company, Deduction, Employee, EmployerContrib, Income, LineItem, Payslip, Period, Ytd,
    YtdBreakdown,
};

use thiserror::Error;

/// Errors that can occur while deserializing the payload
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("invalid payslip payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a JSON payload into a [`Payslip`]
pub fn parse(json: &str) -> Result<Payslip, PayloadError> {
    Ok(serde_json::from_str(json)?)
}
