//! Monetary amount strings as supplied by the caller
//!
//! Amounts arrive pre-formatted (e.g. "3,500.00") and the generator never
//! does currency arithmetic on them. The numeric view exists only to decide
//! whether an optional line item is visible.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// A pre-formatted monetary amount, e.g. "1,250.00"
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Amount(String);

/// The amount string does not describe a number
#[derive(Debug, Error)]
#[error("not a numeric amount: '{value}'")]
pub struct AmountError {
    pub value: String,
}

impl Amount {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the amount with thousands separators stripped
    pub fn numeric(&self) -> Result<f64, AmountError> {
        let cleaned = self.0.replace(',', "");
        cleaned.trim().parse::<f64>().map_err(|_| AmountError {
            value: self.0.clone(),
        })
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
