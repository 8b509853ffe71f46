//! Input workbook adapter.
//!
//! Loads the three-sheet xlsx workbook the normalizer consumes: the raw
//! material records, the property-name mapping sheet, and the result schema
//! sheet whose header supplies the canonical column names. Sheet presence is
//! checked by name before any reading so a malformed workbook fails fast.

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use tracing::debug;

use crate::constants::{PROPERTY_MAP_SHEET, RAW_DATA_SHEET, REQUIRED_SHEETS, RESULT_SHEET};
use crate::error::{NormalizerError, Result};
use crate::models::MaterialTable;

/// The fully loaded input workbook
#[derive(Debug)]
pub struct InputWorkbook {
    /// Material records under their producer-supplied column names
    pub raw_table: MaterialTable,
    /// Raw-to-canonical name pairs from the mapping sheet (diagnostics only;
    /// the rename lookup is built positionally from the two headers)
    pub property_map: Vec<(String, String)>,
    /// Canonical column names from the result schema sheet
    pub result_header: Vec<String>,
}

impl InputWorkbook {
    /// Load and shape-check the input workbook
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(NormalizerError::InputNotFound {
                path: path.to_path_buf(),
            });
        }

        let mut workbook: Xlsx<_> = open_workbook(path)?;

        let sheet_names = workbook.sheet_names().to_owned();
        for required in REQUIRED_SHEETS {
            if !sheet_names.iter().any(|name| name == required) {
                return Err(NormalizerError::MissingSheet {
                    sheet: required.to_string(),
                    path: path.to_path_buf(),
                });
            }
        }

        let raw_table = read_table(&mut workbook, RAW_DATA_SHEET)?;
        let property_map = read_pairs(&mut workbook, PROPERTY_MAP_SHEET)?;
        let result_header = read_header(&mut workbook, RESULT_SHEET)?;

        debug!(
            "Loaded workbook: {} records, {} property map entries, {} result columns",
            raw_table.row_count(),
            property_map.len(),
            result_header.len()
        );

        Ok(Self {
            raw_table,
            property_map,
            result_header,
        })
    }
}

/// Read a sheet as a header row plus string record rows
fn read_table(workbook: &mut Xlsx<impl std::io::Read + std::io::Seek>, sheet: &str) -> Result<MaterialTable> {
    let range = workbook.worksheet_range(sheet)?;
    let mut rows = range.rows();

    let header = rows
        .next()
        .ok_or_else(|| NormalizerError::EmptySheet {
            sheet: sheet.to_string(),
        })?
        .iter()
        .map(cell_to_string)
        .collect();

    let records = rows
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    MaterialTable::new(header, records)
}

/// Read the first row of a sheet as its header
fn read_header(
    workbook: &mut Xlsx<impl std::io::Read + std::io::Seek>,
    sheet: &str,
) -> Result<Vec<String>> {
    let range = workbook.worksheet_range(sheet)?;
    let header = range
        .rows()
        .next()
        .ok_or_else(|| NormalizerError::EmptySheet {
            sheet: sheet.to_string(),
        })?
        .iter()
        .map(cell_to_string)
        .collect();
    Ok(header)
}

/// Read a two-column mapping sheet as (raw, canonical) pairs
fn read_pairs(
    workbook: &mut Xlsx<impl std::io::Read + std::io::Seek>,
    sheet: &str,
) -> Result<Vec<(String, String)>> {
    let range = workbook.worksheet_range(sheet)?;
    let pairs = range
        .rows()
        .skip(1) // header row
        .map(|row| {
            let raw = row.first().map(cell_to_string).unwrap_or_default();
            let canonical = row.get(1).map(cell_to_string).unwrap_or_default();
            (raw, canonical)
        })
        .filter(|(raw, canonical)| !raw.is_empty() || !canonical.is_empty())
        .collect();
    Ok(pairs)
}

/// Convert any spreadsheet cell type to its string form; empty cells become
/// empty strings
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => format_number(*f),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => format_number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{:?}", e),
    }
}

/// Format a numeric cell without a spurious trailing ".0" for whole numbers
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
