//! Terminal and JSON presentation of search results.

use std::borrow::Cow;
use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use fincheck_filter::{MatchResult, SearchOutcome};
use fincheck_model::{Record, RegistryField};

use crate::columns::ColumnSelection;

const MISSING: &str = "-";

/// JSON document printed by `search --output json`.
#[derive(Debug, Serialize)]
pub struct SearchReport<'r, 'a> {
    pub outcome: SearchOutcome,
    #[serde(flatten)]
    pub result: &'r MatchResult<'a>,
}

impl<'r, 'a> SearchReport<'r, 'a> {
    pub fn new(result: &'r MatchResult<'a>) -> Self {
        Self {
            outcome: result.outcome(),
            result,
        }
    }
}

/// The `No` column: the registry's own `Nomor`, else the 1-based row position.
pub fn display_number(record: &Record, position: usize) -> String {
    record
        .field_text(RegistryField::Number)
        .map_or_else(|| (position + 1).to_string(), Cow::into_owned)
}

fn cell_text(record: &Record, field: RegistryField, position: usize) -> String {
    match field {
        RegistryField::Number => display_number(record, position),
        _ => record
            .field_text(field)
            .map_or_else(|| MISSING.to_string(), Cow::into_owned),
    }
}

/// Plain cell values for the result table, one row per record.
pub fn result_rows(records: &[&Record], columns: &ColumnSelection) -> Vec<Vec<String>> {
    records
        .iter()
        .enumerate()
        .map(|(position, record)| {
            columns
                .fields()
                .iter()
                .map(|field| cell_text(record, *field, position))
                .collect()
        })
        .collect()
}

pub fn results_table(records: &[&Record], columns: &ColumnSelection) -> Table {
    let mut table = Table::new();
    table.set_header(columns.fields().iter().map(|field| header_cell(field.label())));
    apply_table_style(&mut table);
    if let Some(index) = columns
        .fields()
        .iter()
        .position(|field| *field == RegistryField::Number)
    {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for row in result_rows(records, columns) {
        table.add_row(row.into_iter().map(|text| {
            if text == MISSING {
                dim_cell(text)
            } else {
                Cell::new(text)
            }
        }));
    }
    table
}

pub fn summary_table(source: &Path, total: usize, unparsed_dates: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Registry"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Source"),
        Cell::new(source.display().to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Records"),
        Cell::new(total).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Unparsed dates"), count_cell(unparsed_dates)]);
    table
}

/// One-line verdict for a search.
pub fn outcome_message(result: &MatchResult<'_>) -> String {
    match result.outcome() {
        SearchOutcome::NotSearched => format!(
            "Registry holds {} record(s). Give a search term to check a provider.",
            result.total()
        ),
        SearchOutcome::Found { matches } => format!("Found {matches} result(s)"),
        SearchOutcome::NotFound => {
            "Not found — possibly ILLEGAL / UNLISTED fintech provider".to_string()
        }
    }
}

pub const NOT_FOUND_TIP: &str = "Tip: check the spelling, or search by electronic system \
                                 name or website instead of the company name.";

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}
