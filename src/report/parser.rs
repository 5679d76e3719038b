// src/report/parser.rs
//! Turns the portal's CSV export into typed monthly records.
//!
//! The export is a fixed preamble, one row per reporting month, and a totals
//! row at the end. Rows get shorter once the operator and field stop
//! changing, so those two columns are carried forward from the row above.

use crate::constants::{FIELD_COLUMN, OPERATOR_COLUMN, REPORT_HEADER_ROWS};
use crate::error::AppError;
use crate::model::{GasRecord, MonthlyRecord, OilRecord};
use crate::types::WellType;
use csv::{ReaderBuilder, StringRecord};

/// Parses a production report for a lease of the given well type.
///
/// Fails with `EmptyReport` when nothing is left once the totals row is gone.
pub fn parse_production(
    csv_text: &str,
    well_type: WellType,
) -> Result<Vec<MonthlyRecord>, AppError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(strip_preamble(csv_text).as_bytes());

    let mut records = Vec::new();
    let mut carried = CarriedColumns::default();

    for row in reader.records() {
        let row = row?;
        carried = carried.advance(&row);
        records.push(map_row(&row, well_type, &carried));
    }

    // Last row is the report's totals line.
    records.pop();

    if records.is_empty() {
        return Err(AppError::EmptyReport);
    }

    log::debug!("Parsed {} monthly {} records", records.len(), well_type);
    Ok(records)
}

/// Same as [`parse_production`] for callers holding the portal's well-type label.
pub fn parse_production_labeled(
    csv_text: &str,
    well_type: &str,
) -> Result<Vec<MonthlyRecord>, AppError> {
    parse_production(csv_text, well_type.parse()?)
}

/// Parses a volume cell. Thousands separators are ignored and anything
/// unparseable counts as zero; the export is not consistently formatted.
pub fn parse_volume(cell: &str) -> f64 {
    cell.replace(',', "").trim().parse().unwrap_or(0.0)
}

/// Drops the report preamble.
///
/// Counts rows, not lines: a newline inside a quoted cell does not end a row.
/// The csv reader skips blank lines, so the boundary is found here instead;
/// a blank line in the preamble still counts as one of its rows.
fn strip_preamble(csv_text: &str) -> &str {
    let mut quoted = false;
    let mut rows = 0;

    for (index, byte) in csv_text.bytes().enumerate() {
        match byte {
            b'"' => quoted = !quoted,
            b'\n' if !quoted => {
                rows += 1;
                if rows == REPORT_HEADER_ROWS {
                    return &csv_text[index + 1..];
                }
            }
            _ => {}
        }
    }
    ""
}

/// Operator and field as of the most recent row.
#[derive(Debug, Default, Clone)]
struct CarriedColumns {
    operator: String,
    field: String,
}

impl CarriedColumns {
    fn advance(self, row: &StringRecord) -> Self {
        Self {
            operator: text_cell(row, OPERATOR_COLUMN).unwrap_or(self.operator),
            field: text_cell(row, FIELD_COLUMN).unwrap_or(self.field),
        }
    }
}

fn map_row(row: &StringRecord, well_type: WellType, carried: &CarriedColumns) -> MonthlyRecord {
    let month = row.get(0).map(str::trim).unwrap_or_default().to_string();

    match well_type {
        WellType::Oil => MonthlyRecord::Oil(OilRecord {
            month,
            oil_production: volume_cell(row, 1),
            oil_disposition: volume_cell(row, 2),
            gas_production: volume_cell(row, 3),
            gas_disposition: volume_cell(row, 4),
            operator: carried.operator.clone(),
            field: carried.field.clone(),
        }),
        WellType::Gas => MonthlyRecord::Gas(GasRecord {
            month,
            gas_production: volume_cell(row, 1),
            gas_disposition: volume_cell(row, 2),
            condensate_production: volume_cell(row, 3),
            condensate_disposition: volume_cell(row, 4),
            operator: carried.operator.clone(),
            field: carried.field.clone(),
        }),
    }
}

/// A blank cell counts as missing.
fn text_cell(row: &StringRecord, index: usize) -> Option<String> {
    row.get(index)
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
}

fn volume_cell(row: &StringRecord, index: usize) -> f64 {
    row.get(index).map_or(0.0, parse_volume)
}
