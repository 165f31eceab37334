use std::cmp::Ordering;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use payfeed_model::ErrorKind;

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Batch: {}", result.batch_file.display());
    if let Some(dir) = &result.output_dir {
        println!("Output: {}", dir.display());
    }
    if let Some(path) = &result.report_path {
        println!("Error report: {}", path.display());
    }
    println!(
        "Rows: {} ({} transformed, {} skipped by compliance gate)",
        result.rows,
        result.transformed,
        result.skipped.len()
    );
    println!(
        "Issues: {} errors, {} warnings, {} unparseable rows",
        result.errors.len(),
        result.warning_count,
        result.parse_errors.len()
    );
    if !result.provider_files.is_empty() {
        print_provider_table(result);
    }
    print_error_table(result);
    if !result.parse_errors.is_empty() {
        eprintln!("Unparseable rows:");
        for error in &result.parse_errors {
            eprintln!("- row {}: {}", error.row_number, error.message);
        }
    }
    if !result.skipped.is_empty() {
        println!("Skipped by compliance gate:");
        for record in &result.skipped {
            println!("- {} (row {}): {}", record.row_id, record.row_number, record.reason);
        }
    }
}

fn print_provider_table(result: &RunResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Provider"),
        header_cell("Records"),
        header_cell("File"),
    ]);
    apply_provider_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for file in &result.provider_files {
        let path_cell = match &file.path {
            Some(path) => Cell::new(path.display()),
            None => dim_cell("- (dry run)"),
        };
        table.add_row(vec![
            Cell::new(&file.provider).add_attribute(Attribute::Bold),
            Cell::new(file.records),
            path_cell,
        ]);
    }
    println!("{table}");
}

fn print_error_table(result: &RunResult) {
    if result.errors.is_empty() {
        return;
    }
    let mut errors = result.errors.clone();
    errors.sort_by(|a, b| {
        let kind = kind_rank(a.kind).cmp(&kind_rank(b.kind));
        if kind != Ordering::Equal {
            return kind;
        }
        let row = a.row_number.cmp(&b.row_number);
        if row != Ordering::Equal {
            return row;
        }
        a.field.cmp(&b.field)
    });
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Row"),
        header_cell("Record"),
        header_cell("Field"),
        header_cell("Kind"),
        header_cell("Value"),
        header_cell("Message"),
        header_cell("Suggestion"),
    ]);
    apply_error_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for error in &errors {
        table.add_row(vec![
            dim_cell(&error.id),
            Cell::new(error.row_number),
            Cell::new(&error.row_id),
            Cell::new(&error.field),
            kind_cell(error.kind),
            Cell::new(&error.value),
            Cell::new(&error.message),
            match &error.suggestion {
                Some(text) => Cell::new(text),
                None => dim_cell("-"),
            },
        ]);
    }
    println!();
    println!("Errors:");
    println!("{table}");
}

fn kind_rank(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::ParseError => 0,
        ErrorKind::RequiredFieldMissing => 1,
        ErrorKind::InvalidFormat => 2,
        ErrorKind::BusinessLogicError => 3,
    }
}

fn kind_cell(kind: ErrorKind) -> Cell {
    let (label, color) = match kind {
        ErrorKind::ParseError => ("PARSE", Color::Red),
        ErrorKind::RequiredFieldMissing => ("MISSING", Color::Red),
        ErrorKind::InvalidFormat => ("FORMAT", Color::Yellow),
        ErrorKind::BusinessLogicError => ("LOGIC", Color::Magenta),
    };
    Cell::new(label).fg(color).add_attribute(Attribute::Bold)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn apply_provider_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_error_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(200);
    if table.column_count() >= 8 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Fixed(14)),
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Percentage(15)),
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
        ]);
    }
}
