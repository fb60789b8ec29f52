//! Block model for the composed payslip page
//!
//! A [`DocumentPlan`] is the renderer-agnostic middle of the pipeline: an
//! ordered list of blocks mirroring the fixed page layout. All strings are
//! display-ready; the renderer only positions them.

/// One labeled figure, amount already carrying its currency prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledAmount {
    pub label: String,
    pub amount: String,
}

impl LabeledAmount {
    pub fn new(label: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            amount: amount.into(),
        }
    }
}

/// A row in one column of the earnings comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    /// Column heading (INCOME / DEDUCTION)
    Heading(String),
    /// Spacer row
    Blank,
    /// Regular labeled figure
    Item(LabeledAmount),
    /// Column total, rendered bold
    Total(LabeledAmount),
}

/// One block of the fixed page sequence
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Right-aligned confidentiality line at the top of the page
    ConfidentialNotice { text: String },
    /// Company identity with a reserved logo gutter on the left
    CompanyHeader {
        name: String,
        reg_no: String,
        address: String,
    },
    /// Employee and pay-period grid
    EmployeeDetails {
        name: String,
        ic_no: String,
        position: String,
        month: String,
        year: String,
    },
    /// Income and deduction columns side by side, padded to equal length
    EarningsComparison {
        income: Vec<TableRow>,
        deductions: Vec<TableRow>,
    },
    /// Net pay banner
    NetPay { amount: String },
    /// Three centered statutory employer contribution columns
    EmployerContributions { columns: Vec<LabeledAmount> },
    /// Year-to-date employee and employer columns
    YtdSummary {
        employee: Vec<LabeledAmount>,
        employer: Vec<LabeledAmount>,
    },
    /// Centered closing lines (signature note, generation date)
    Footer { lines: Vec<String> },
}

/// The composed page: a fixed sequence of layout blocks
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentPlan {
    pub blocks: Vec<Block>,
}

impl DocumentPlan {
    /// One line per block, used by debug mode and regression tests
    pub fn outline(&self) -> String {
        self.blocks
            .iter()
            .map(block_outline)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn block_outline(block: &Block) -> String {
    match block {
        Block::ConfidentialNotice { .. } => "confidential-notice".to_string(),
        Block::CompanyHeader { name, .. } => format!("company-header: {name}"),
        Block::EmployeeDetails { name, .. } => format!("employee-details: {name}"),
        Block::EarningsComparison { income, deductions } => format!(
            "earnings-comparison: {} x {} rows",
            income.len(),
            deductions.len()
        ),
        Block::NetPay { amount } => format!("net-pay: {amount}"),
        Block::EmployerContributions { columns } => {
            format!("employer-contributions: {} columns", columns.len())
        }
        Block::YtdSummary { employee, employer } => format!(
            "ytd-summary: {} + {} rows",
            employee.len(),
            employer.len()
        ),
        Block::Footer { lines } => format!("footer: {} lines", lines.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_one_line_per_block() {
        let plan = DocumentPlan {
            blocks: vec![
                Block::ConfidentialNotice {
                    text: "PRIVATE".to_string(),
                },
                Block::NetPay {
                    amount: "RM 1,000.00".to_string(),
                },
            ],
        };
        assert_eq!(plan.outline(), "confidential-notice\nnet-pay: RM 1,000.00");
    }
}
