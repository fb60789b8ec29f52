//! Integration tests for payload parsing and plan composition

use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use payslip_gen::compose::{Block, LabeledAmount, TableRow};
use payslip_gen::{compose, parse, ComposeOptions, DocumentPlan};

const SAMPLE_PAYLOAD: &str = r#"{
    "company": {
        "name": "Acme Sdn Bhd",
        "regNo": "201901012345 (1234567-X)",
        "address": "12 Jalan Ampang, 50450 Kuala Lumpur"
    },
    "employee": {
        "name": "Jane Doe",
        "icNo": "900101-14-5678",
        "position": "Software Engineer"
    },
    "period": { "month": "March", "year": 2025 },
    "income": {
        "basic": "3,500.00",
        "items": [
            { "label": "Overtime", "amount": "120.00", "show": true },
            { "label": "Bonus", "amount": "0.00", "show": true },
            { "label": "Commission", "amount": "999.00", "show": false }
        ],
        "totalGross": "3,620.00"
    },
    "deduction": {
        "epfEmp": "385.00",
        "socsoEmp": "19.75",
        "eisEmp": "7.00",
        "items": [
            { "label": "MTD/PCB", "amount": "145.50", "show": true }
        ],
        "total": "557.25"
    },
    "netIncome": "3,062.75",
    "employerContrib": {
        "epfEr": "455.00",
        "socsoEr": "69.05",
        "eisEr": "7.00"
    },
    "ytd": {
        "breakdown": {
            "epfEmployee": "1,155.00",
            "epfEmployer": "1,365.00",
            "socsoEmployee": "59.25",
            "socsoEmployer": "207.15",
            "eisEmployee": "21.00",
            "eisEmployer": "21.00",
            "pcb": "436.50"
        }
    }
}"#;

fn sample_plan() -> DocumentPlan {
    let slip = parse(SAMPLE_PAYLOAD).expect("Should parse");
    let options =
        ComposeOptions::new().with_generated_on(NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
    compose(&slip, &options).expect("Should compose")
}

#[test]
fn test_block_order_is_fixed() {
    let plan = sample_plan();
    insta::assert_snapshot!(plan.outline(), @r"
    confidential-notice
    company-header: Acme Sdn Bhd
    employee-details: Jane Doe
    earnings-comparison: 10 x 10 rows
    net-pay: RM 3,062.75
    employer-contributions: 3 columns
    ytd-summary: 4 + 3 rows
    footer: 2 lines
    ");
}

#[test]
fn test_comparison_includes_only_visible_positive_items() {
    let plan = sample_plan();
    let (income, deductions) = earnings(&plan);

    let income_labels = item_labels(income);
    assert_eq!(income_labels, vec!["Basic Salary", "Overtime"]);

    let deduction_labels = item_labels(deductions);
    assert_eq!(
        deduction_labels,
        vec!["EPF Employee", "SOCSO Employee", "EIS Employee", "MTD/PCB"]
    );
}

#[test]
fn test_comparison_columns_have_equal_length() {
    let plan = sample_plan();
    let (income, deductions) = earnings(&plan);
    assert_eq!(income.len(), deductions.len());
}

#[test]
fn test_statutory_rows_survive_empty_item_lists() {
    let stripped = SAMPLE_PAYLOAD
        .replacen(
            r#"[
            { "label": "Overtime", "amount": "120.00", "show": true },
            { "label": "Bonus", "amount": "0.00", "show": true },
            { "label": "Commission", "amount": "999.00", "show": false }
        ]"#,
            "[]",
            1,
        )
        .replacen(
            r#"[
            { "label": "MTD/PCB", "amount": "145.50", "show": true }
        ]"#,
            "[]",
            1,
        );
    let slip = parse(&stripped).expect("Should parse");
    let plan = compose(&slip, &ComposeOptions::default()).expect("Should compose");
    let (income, deductions) = earnings(&plan);

    assert_eq!(
        item_labels(deductions),
        vec!["EPF Employee", "SOCSO Employee", "EIS Employee"]
    );
    assert_eq!(item_labels(income), vec!["Basic Salary"]);
    // Deduction column has 9 fixed rows; income pads up from 5
    assert_eq!(income.len(), 9);
    assert_eq!(deductions.len(), 9);
}

#[test]
fn test_amounts_carry_currency_prefix() {
    let plan = sample_plan();
    let (income, _) = earnings(&plan);
    assert!(income.contains(&TableRow::Item(LabeledAmount::new(
        "Basic Salary",
        "RM 3,500.00"
    ))));

    let net = plan.blocks.iter().find_map(|block| match block {
        Block::NetPay { amount } => Some(amount.clone()),
        _ => None,
    });
    assert_eq!(net.as_deref(), Some("RM 3,062.75"));
}

#[test]
fn test_missing_ic_no_renders_na() {
    let without_ic = SAMPLE_PAYLOAD.replacen("\"icNo\": \"900101-14-5678\",", "", 1);
    let slip = parse(&without_ic).expect("Should parse");
    let plan = compose(&slip, &ComposeOptions::default()).expect("Should compose");

    let ic = plan.blocks.iter().find_map(|block| match block {
        Block::EmployeeDetails { ic_no, .. } => Some(ic_no.clone()),
        _ => None,
    });
    assert_eq!(ic.as_deref(), Some("N/A"));
}

#[test]
fn test_footer_has_signature_note_and_unpadded_date() {
    let plan = sample_plan();
    let lines = plan
        .blocks
        .iter()
        .find_map(|block| match block {
            Block::Footer { lines } => Some(lines.clone()),
            _ => None,
        })
        .expect("Should have a footer");

    assert_eq!(
        lines,
        vec![
            "Dokumen ini dijana secara automatik dan tidak memerlukan tandatangan.".to_string(),
            "Generated on: 5/3/2025".to_string(),
        ]
    );
}

#[test]
fn test_ytd_summary_carries_all_seven_figures() {
    let plan = sample_plan();
    let (employee, employer) = plan
        .blocks
        .iter()
        .find_map(|block| match block {
            Block::YtdSummary { employee, employer } => {
                Some((employee.clone(), employer.clone()))
            }
            _ => None,
        })
        .expect("Should have a YTD summary");

    assert_eq!(employee.len(), 4);
    assert_eq!(employer.len(), 3);
    assert_eq!(employee[3], LabeledAmount::new("PCB/MTD", "RM 436.50"));
    assert_eq!(employer[0], LabeledAmount::new("EPF Employer", "RM 1,365.00"));
}

fn earnings(plan: &DocumentPlan) -> (&[TableRow], &[TableRow]) {
    plan.blocks
        .iter()
        .find_map(|block| match block {
            Block::EarningsComparison { income, deductions } => {
                Some((income.as_slice(), deductions.as_slice()))
            }
            _ => None,
        })
        .expect("Should have an earnings comparison")
}

fn item_labels(rows: &[TableRow]) -> Vec<&str> {
    rows.iter()
        .filter_map(|row| match row {
            TableRow::Item(entry) => Some(entry.label.as_str()),
            _ => None,
        })
        .collect()
}
