//! Payload structure for a single payslip
//!
//! Field names follow the caller's JSON (camelCase). Unknown fields are
//! ignored; missing required fields fail deserialization.

use serde::Deserialize;

use super::{Amount, AmountError};

/// The complete input payload for one payslip
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payslip {
    pub company: Company,
    pub employee: Employee,
    pub period: Period,
    pub income: Income,
    pub deduction: Deduction,
    pub net_income: Amount,
    pub employer_contrib: EmployerContrib,
    pub ytd: Ytd,
}

/// Company identity for the page header
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub reg_no: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub name: String,
    /// National ID number; renders as "N/A" when absent
    pub ic_no: Option<String>,
    pub position: String,
}

/// Pay period the slip covers
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub month: String,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub basic: Amount,
    pub items: Vec<LineItem>,
    pub total_gross: Amount,
}

/// Statutory employee deductions plus optional extra items
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deduction {
    pub epf_emp: Amount,
    pub socso_emp: Amount,
    pub eis_emp: Amount,
    pub items: Vec<LineItem>,
    pub total: Amount,
}

/// An optional labeled line in the income or deduction column
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub label: String,
    pub amount: Amount,
    #[serde(default)]
    pub show: bool,
}

impl LineItem {
    /// An item renders only when explicitly flagged visible and its value
    /// exceeds zero. Hidden items are never inspected, so a malformed amount
    /// on a hidden item is not an error.
    pub fn is_rendered(&self) -> Result<bool, AmountError> {
        if !self.show {
            return Ok(false);
        }
        Ok(self.amount.numeric()? > 0.0)
    }
}

/// Statutory employer contribution figures for the current period
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerContrib {
    pub epf_er: Amount,
    pub socso_er: Amount,
    pub eis_er: Amount,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ytd {
    pub breakdown: YtdBreakdown,
}

/// Year-to-date cumulative figures per statutory category
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YtdBreakdown {
    pub epf_employee: Amount,
    pub epf_employer: Amount,
    pub socso_employee: Amount,
    pub socso_employer: Amount,
    pub eis_employee: Amount,
    pub eis_employer: Amount,
    pub pcb: Amount,
}
