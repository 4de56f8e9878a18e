use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use compo_report::{FileOutcome, VerificationOutcome};

use crate::types::BatchResult;

pub fn print_summary(result: &BatchResult) {
    println!("Output: {}", result.output_dir.display());
    if let Some(path) = &result.report_file {
        println!("Batch report: {}", path.display());
    }
    if result.outcomes.is_empty() {
        println!("No phenopacket files found.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Variant"),
        header_cell("Output"),
        header_cell("Verification"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Center);
    let mut converted = 0usize;
    for outcome in &result.outcomes {
        if outcome.is_success() {
            converted += 1;
        }
        table.add_row(vec![
            Cell::new(outcome.input.display()),
            variant_cell(outcome),
            output_cell(outcome.output.as_deref()),
            verification_cell(outcome.verification),
            status_cell(outcome.is_success()),
        ]);
    }
    let failed = result.outcomes.len() - converted;
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(converted).add_attribute(Attribute::Bold),
        dim_cell("-"),
        count_cell(failed, Color::Red).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    if result.skipped > 0 {
        println!("Skipped after first failure: {}", result.skipped);
    }
    let errors: Vec<&FileOutcome> = result
        .outcomes
        .iter()
        .filter(|outcome| !outcome.is_success())
        .collect();
    if !errors.is_empty() {
        eprintln!("Errors:");
        for outcome in errors {
            let message = outcome.error.as_deref().unwrap_or("unknown error");
            eprintln!("- {}: {message}", outcome.input.display());
        }
    }
}

fn variant_cell(outcome: &FileOutcome) -> Cell {
    match outcome.variant {
        Some(variant) => Cell::new(variant)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        None => dim_cell("-"),
    }
}

fn output_cell(path: Option<&Path>) -> Cell {
    match path.and_then(Path::file_name) {
        Some(name) => Cell::new(name.to_string_lossy()),
        None => dim_cell("-"),
    }
}

fn verification_cell(outcome: VerificationOutcome) -> Cell {
    match outcome {
        VerificationOutcome::NotRequested => dim_cell(outcome.describe()),
        VerificationOutcome::MissingTarget => Cell::new(outcome.describe()).fg(Color::Yellow),
        VerificationOutcome::InvalidTarget => Cell::new(outcome.describe()).fg(Color::Red),
        VerificationOutcome::Compared {
            added: 0,
            removed: 0,
            changed: 0,
        } => Cell::new("match")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        VerificationOutcome::Compared { .. } => Cell::new(outcome.describe()).fg(Color::Yellow),
    }
}

fn status_cell(success: bool) -> Cell {
    if success {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("✗")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Percentage(45)),
        ColumnConstraint::LowerBoundary(Width::Fixed(14)),
        ColumnConstraint::UpperBoundary(Width::Percentage(35)),
        ColumnConstraint::LowerBoundary(Width::Fixed(12)),
        ColumnConstraint::LowerBoundary(Width::Fixed(6)),
    ]);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
