//! PDF assembly from the composed block plan
//!
//! Maps each block onto genpdf table and paragraph elements and writes the
//! finished single-page A4 document. Column weight ratios follow the
//! reference layout.

use std::path::Path;

use genpdf::elements::{Break, LinearLayout, Paragraph, StyledElement, TableLayout};
use genpdf::style::{Color, Style};
use genpdf::{Alignment, Document, Element, Margins, PaperSize, SimplePageDecorator};

use crate::compose::{Block, DocumentPlan, LabeledAmount, TableRow};
use crate::theme::Theme;

use super::{fonts, PageConfig, RenderError};

/// Render the plan to a PDF file at `path`
pub fn render_to_file(
    plan: &DocumentPlan,
    path: &Path,
    config: &PageConfig,
    theme: &Theme,
) -> Result<(), RenderError> {
    let doc = build_document(plan, config, theme)?;
    doc.render_to_file(path)?;
    Ok(())
}

/// Assemble the genpdf document without writing it out
pub fn build_document(
    plan: &DocumentPlan,
    config: &PageConfig,
    theme: &Theme,
) -> Result<Document, RenderError> {
    let family = fonts::load_family(
        config.fonts_dir.as_deref().or(theme.font_dir.as_deref()),
        config.font_family.as_deref().or(theme.font_family.as_deref()),
    )?;

    let mut doc = Document::new(family);
    doc.set_title("Payslip");
    doc.set_paper_size(PaperSize::A4);
    doc.set_font_size(config.base_font_size);

    let mut decorator = SimplePageDecorator::new();
    let (top, right, bottom, left) = config.margins;
    decorator.set_margins(Margins::trbl(top, right, bottom, left));
    doc.set_page_decorator(decorator);

    let last = plan.blocks.len().saturating_sub(1);
    for (index, block) in plan.blocks.iter().enumerate() {
        push_block(&mut doc, block, config, theme)?;
        if index < last {
            doc.push(Break::new(config.section_gap));
        }
    }

    Ok(doc)
}

fn push_block(
    doc: &mut Document,
    block: &Block,
    config: &PageConfig,
    theme: &Theme,
) -> Result<(), RenderError> {
    match block {
        Block::ConfidentialNotice { text } => {
            doc.push(
                Paragraph::new(text.as_str())
                    .aligned(Alignment::Right)
                    .styled(small_style(config, theme)),
            );
        }

        Block::CompanyHeader {
            name,
            reg_no,
            address,
        } => {
            let mut details = LinearLayout::vertical();
            details.push(Paragraph::new(name.as_str()).styled(banner_style(config, theme)));
            details.push(Paragraph::new(reg_no.as_str()).styled(text_style(theme)));
            details.push(Paragraph::new(address.as_str()).styled(text_style(theme)));

            let mut table = TableLayout::new(vec![1, 8]);
            // The narrow first column reserves the logo gutter
            table
                .row()
                .element(Paragraph::new(""))
                .element(details)
                .push()?;
            doc.push(table);
        }

        Block::EmployeeDetails {
            name,
            ic_no,
            position,
            month,
            year,
        } => {
            let rows: [[&str; 4]; 4] = [
                ["NAME:", name, "MONTH:", month],
                ["", "", "YEAR:", year],
                ["I/C NO.:", ic_no, "", ""],
                ["POSITION:", position, "", ""],
            ];
            let mut table = TableLayout::new(vec![7, 14, 7, 8]);
            for cells in rows {
                table
                    .row()
                    .element(Paragraph::new(cells[0]).styled(bold_style(theme)))
                    .element(Paragraph::new(cells[1]).styled(text_style(theme)))
                    .element(Paragraph::new(cells[2]).styled(bold_style(theme)))
                    .element(Paragraph::new(cells[3]).styled(text_style(theme)))
                    .push()?;
            }
            doc.push(table);
        }

        Block::EarningsComparison { income, deductions } => {
            let mut table = TableLayout::new(vec![12, 7, 12, 7]);
            for (left, right) in income.iter().zip(deductions.iter()) {
                let row = table.row();
                let row = comparison_cells(row, left, theme);
                let row = comparison_cells(row, right, theme);
                row.push()?;
            }
            doc.push(table);
        }

        Block::NetPay { amount } => {
            let mut table = TableLayout::new(vec![22, 5]);
            table
                .row()
                .element(Paragraph::new("NET PAY").styled(banner_style(config, theme)))
                .element(
                    Paragraph::new(amount.as_str())
                        .aligned(Alignment::Right)
                        .styled(banner_style(config, theme)),
                )
                .push()?;
            doc.push(table);
        }

        Block::EmployerContributions { columns } => {
            doc.push(Paragraph::new("EMPLOYER CONTRIBUTION").styled(bold_style(theme)));
            doc.push(Break::new(0.5));

            let mut table = TableLayout::new(vec![1; columns.len()]);
            let mut headers = table.row();
            for column in columns {
                headers = headers.element(
                    Paragraph::new(column.label.as_str())
                        .aligned(Alignment::Center)
                        .styled(bold_style(theme)),
                );
            }
            headers.push()?;

            let mut amounts = table.row();
            for column in columns {
                amounts = amounts.element(
                    Paragraph::new(column.amount.as_str())
                        .aligned(Alignment::Center)
                        .styled(text_style(theme)),
                );
            }
            amounts.push()?;
            doc.push(table);
        }

        Block::YtdSummary { employee, employer } => {
            doc.push(Paragraph::new("YEAR TO DATE SUMMARY").styled(bold_style(theme)));
            doc.push(Break::new(0.5));

            let mut table = TableLayout::new(vec![2, 1, 2, 1]);
            table
                .row()
                .element(Paragraph::new("EMPLOYEE CONTRIBUTION YTD").styled(bold_style(theme)))
                .element(Paragraph::new(""))
                .element(Paragraph::new("EMPLOYER CONTRIBUTION YTD").styled(bold_style(theme)))
                .element(Paragraph::new(""))
                .push()?;

            let rows = employee.len().max(employer.len());
            for index in 0..rows {
                let row = table.row();
                let row = ytd_cells(row, employee.get(index), theme);
                let row = ytd_cells(row, employer.get(index), theme);
                row.push()?;
            }
            doc.push(table);
        }

        Block::Footer { lines } => {
            let mut layout = LinearLayout::vertical();
            for line in lines {
                layout.push(
                    Paragraph::new(line.as_str())
                        .aligned(Alignment::Center)
                        .styled(small_style(config, theme)),
                );
            }
            doc.push(layout);
        }
    }

    Ok(())
}

fn comparison_cells<'a>(
    row: genpdf::elements::TableLayoutRow<'a>,
    cell: &TableRow,
    theme: &Theme,
) -> genpdf::elements::TableLayoutRow<'a> {
    match cell {
        TableRow::Heading(text) => row
            .element(Paragraph::new(text.as_str()).styled(bold_style(theme)))
            .element(Paragraph::new("")),
        TableRow::Blank => row.element(Paragraph::new("")).element(Paragraph::new("")),
        TableRow::Item(entry) => row
            .element(Paragraph::new(entry.label.as_str()).styled(text_style(theme)))
            .element(amount_cell(&entry.amount, text_style(theme))),
        TableRow::Total(entry) => row
            .element(Paragraph::new(entry.label.as_str()).styled(bold_style(theme)))
            .element(amount_cell(&entry.amount, bold_style(theme))),
    }
}

fn ytd_cells<'a>(
    row: genpdf::elements::TableLayoutRow<'a>,
    entry: Option<&LabeledAmount>,
    theme: &Theme,
) -> genpdf::elements::TableLayoutRow<'a> {
    match entry {
        Some(entry) => row
            .element(Paragraph::new(entry.label.as_str()).styled(text_style(theme)))
            .element(amount_cell(&entry.amount, text_style(theme))),
        None => row.element(Paragraph::new("")).element(Paragraph::new("")),
    }
}

fn amount_cell(amount: &str, style: Style) -> StyledElement<Paragraph> {
    Paragraph::new(amount)
        .aligned(Alignment::Right)
        .styled(style)
}

fn text_style(theme: &Theme) -> Style {
    let (r, g, b) = theme.rgb("text");
    Style::new().with_color(Color::Rgb(r, g, b))
}

fn bold_style(theme: &Theme) -> Style {
    let (r, g, b) = theme.rgb("heading");
    Style::new().bold().with_color(Color::Rgb(r, g, b))
}

fn banner_style(config: &PageConfig, theme: &Theme) -> Style {
    let (r, g, b) = theme.rgb("heading");
    Style::new()
        .bold()
        .with_font_size(config.banner_font_size)
        .with_color(Color::Rgb(r, g, b))
}

fn small_style(config: &PageConfig, theme: &Theme) -> Style {
    let (r, g, b) = theme.rgb("muted");
    Style::new()
        .with_font_size(config.small_font_size)
        .with_color(Color::Rgb(r, g, b))
}
