//! Composition of the fixed payslip block sequence
//!
//! This module takes a parsed payload and produces a [`DocumentPlan`]: the
//! confidential notice, company and employee blocks, the income-vs-deduction
//! comparison, the net pay banner, employer contributions, the year-to-date
//! summary, and the footer, in that order. Conditional row inclusion happens
//! here; the renderer only positions what it is handed.

pub mod blocks;
mod error;

pub use blocks::{Block, DocumentPlan, LabeledAmount, TableRow};
pub use error::ComposeError;

use chrono::{Local, NaiveDate};

use crate::payload::{Amount, Deduction, Income, Payslip};

/// Notice printed at the very top of the page
const CONFIDENTIAL_NOTICE: &str = "STRICTLY PRIVATE & CONFIDENTIAL";

/// Currency prefix applied to every displayed amount
const CURRENCY: &str = "RM";

/// Bilingual no-signature line in the footer
const SIGNATURE_NOTE: &str =
    "Dokumen ini dijana secara automatik dan tidak memerlukan tandatangan.";

/// Options for composition
#[derive(Debug, Clone)]
pub struct ComposeOptions {
    /// Date stamped into the footer
    pub generated_on: NaiveDate,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            generated_on: Local::now().date_naive(),
        }
    }
}

impl ComposeOptions {
    /// Create options with the current local date
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the footer generation date
    pub fn with_generated_on(mut self, date: NaiveDate) -> Self {
        self.generated_on = date;
        self
    }
}

/// Build the fixed block sequence for one payslip
pub fn compose(slip: &Payslip, options: &ComposeOptions) -> Result<DocumentPlan, ComposeError> {
    let mut blocks = Vec::with_capacity(8);

    blocks.push(Block::ConfidentialNotice {
        text: CONFIDENTIAL_NOTICE.to_string(),
    });

    blocks.push(Block::CompanyHeader {
        name: slip.company.name.clone(),
        reg_no: slip.company.reg_no.clone(),
        address: slip.company.address.clone(),
    });

    blocks.push(Block::EmployeeDetails {
        name: slip.employee.name.clone(),
        ic_no: slip
            .employee
            .ic_no
            .clone()
            .unwrap_or_else(|| "N/A".to_string()),
        position: slip.employee.position.clone(),
        month: slip.period.month.clone(),
        year: slip.period.year.to_string(),
    });

    let (income, deductions) = comparison_columns(&slip.income, &slip.deduction)?;
    blocks.push(Block::EarningsComparison { income, deductions });

    blocks.push(Block::NetPay {
        amount: currency(&slip.net_income),
    });

    let contrib = &slip.employer_contrib;
    blocks.push(Block::EmployerContributions {
        columns: vec![
            LabeledAmount::new("EPF EMPLOYER", currency(&contrib.epf_er)),
            LabeledAmount::new("SOCSO EMPLOYER", currency(&contrib.socso_er)),
            LabeledAmount::new("EIS EMPLOYER", currency(&contrib.eis_er)),
        ],
    });

    let ytd = &slip.ytd.breakdown;
    blocks.push(Block::YtdSummary {
        employee: vec![
            LabeledAmount::new("EPF Employee", currency(&ytd.epf_employee)),
            LabeledAmount::new("SOCSO Employee", currency(&ytd.socso_employee)),
            LabeledAmount::new("EIS Employee", currency(&ytd.eis_employee)),
            LabeledAmount::new("PCB/MTD", currency(&ytd.pcb)),
        ],
        employer: vec![
            LabeledAmount::new("EPF Employer", currency(&ytd.epf_employer)),
            LabeledAmount::new("SOCSO Employer", currency(&ytd.socso_employer)),
            LabeledAmount::new("EIS Employer", currency(&ytd.eis_employer)),
        ],
    });

    blocks.push(Block::Footer {
        lines: vec![
            SIGNATURE_NOTE.to_string(),
            format!(
                "Generated on: {}",
                options.generated_on.format("%-d/%-m/%Y")
            ),
        ],
    });

    Ok(DocumentPlan { blocks })
}

fn currency(amount: &Amount) -> String {
    format!("{CURRENCY} {amount}")
}

fn item_row(label: &str, amount: &Amount) -> TableRow {
    TableRow::Item(LabeledAmount::new(label, currency(amount)))
}

/// Build both comparison columns and pad the shorter one with blank rows so
/// they render with equal length.
fn comparison_columns(
    income: &Income,
    deduction: &Deduction,
) -> Result<(Vec<TableRow>, Vec<TableRow>), ComposeError> {
    let mut left = vec![
        TableRow::Heading("INCOME".to_string()),
        TableRow::Blank,
        item_row("Basic Salary", &income.basic),
    ];
    for item in &income.items {
        let rendered = item.is_rendered().map_err(|source| ComposeError::IncomeItem {
            label: item.label.clone(),
            source,
        })?;
        if rendered {
            left.push(item_row(&item.label, &item.amount));
        }
    }
    left.push(TableRow::Blank);
    left.push(TableRow::Total(LabeledAmount::new(
        "TOTAL GROSS",
        currency(&income.total_gross),
    )));

    let mut right = vec![
        TableRow::Heading("DEDUCTION".to_string()),
        TableRow::Blank,
        item_row("EPF Employee", &deduction.epf_emp),
        TableRow::Blank,
        item_row("SOCSO Employee", &deduction.socso_emp),
        TableRow::Blank,
        item_row("EIS Employee", &deduction.eis_emp),
    ];
    for item in &deduction.items {
        let rendered = item
            .is_rendered()
            .map_err(|source| ComposeError::DeductionItem {
                label: item.label.clone(),
                source,
            })?;
        if rendered {
            right.push(item_row(&item.label, &item.amount));
        }
    }
    right.push(TableRow::Blank);
    right.push(TableRow::Total(LabeledAmount::new(
        "TOTAL DEDUCTION",
        currency(&deduction.total),
    )));

    while left.len() < right.len() {
        left.push(TableRow::Blank);
    }
    while right.len() < left.len() {
        right.push(TableRow::Blank);
    }

    Ok((left, right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::LineItem;

    fn income_fixture(items: Vec<LineItem>) -> Income {
        Income {
            basic: Amount::new("3,500.00"),
            items,
            total_gross: Amount::new("3,620.00"),
        }
    }

    fn deduction_fixture(items: Vec<LineItem>) -> Deduction {
        Deduction {
            epf_emp: Amount::new("385.00"),
            socso_emp: Amount::new("19.75"),
            eis_emp: Amount::new("7.00"),
            items,
            total: Amount::new("557.25"),
        }
    }

    fn item(label: &str, amount: &str, show: bool) -> LineItem {
        LineItem {
            label: label.to_string(),
            amount: Amount::new(amount),
            show,
        }
    }

    #[test]
    fn test_columns_padded_to_equal_length() {
        let (left, right) =
            comparison_columns(&income_fixture(vec![]), &deduction_fixture(vec![])).unwrap();
        // Income has 5 fixed rows, deduction 9; the income column pads up
        assert_eq!(left.len(), 9);
        assert_eq!(right.len(), 9);
        assert_eq!(left[6], TableRow::Blank);
    }

    #[test]
    fn test_visible_item_appears_after_basic_salary() {
        let income = income_fixture(vec![item("Overtime", "120.00", true)]);
        let (left, _) = comparison_columns(&income, &deduction_fixture(vec![])).unwrap();
        assert_eq!(
            left[3],
            TableRow::Item(LabeledAmount::new("Overtime", "RM 120.00"))
        );
    }

    #[test]
    fn test_hidden_and_zero_items_are_omitted() {
        let income = income_fixture(vec![
            item("Overtime", "120.00", false),
            item("Bonus", "0.00", true),
        ]);
        let (left, _) = comparison_columns(&income, &deduction_fixture(vec![])).unwrap();
        let labels: Vec<_> = left
            .iter()
            .filter_map(|row| match row {
                TableRow::Item(entry) => Some(entry.label.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["Basic Salary"]);
    }

    #[test]
    fn test_shown_item_with_bad_amount_is_compose_error() {
        let income = income_fixture(vec![item("Overtime", "??", true)]);
        let err = comparison_columns(&income, &deduction_fixture(vec![])).unwrap_err();
        assert!(matches!(err, ComposeError::IncomeItem { label, .. } if label == "Overtime"));
    }

    #[test]
    fn test_deduction_item_error_names_the_section() {
        let deduction = deduction_fixture(vec![item("Advance", "??", true)]);
        let err = comparison_columns(&income_fixture(vec![]), &deduction).unwrap_err();
        assert!(matches!(err, ComposeError::DeductionItem { .. }));
    }

    #[test]
    fn test_totals_carry_currency_prefix() {
        let (left, right) =
            comparison_columns(&income_fixture(vec![]), &deduction_fixture(vec![])).unwrap();
        // The income column's total sits before its padding rows
        assert_eq!(left.last(), Some(&TableRow::Blank));
        assert!(left.contains(&TableRow::Total(LabeledAmount::new(
            "TOTAL GROSS",
            "RM 3,620.00"
        ))));
        assert_eq!(
            right.last(),
            Some(&TableRow::Total(LabeledAmount::new(
                "TOTAL DEDUCTION",
                "RM 557.25"
            )))
        );
    }
}
