//! Core data structures for ceramic property normalization.
//!
//! Defines the parsed property columns, the in-memory material table,
//! and the run statistics returned by the pipeline.

use serde::Serialize;
use std::path::PathBuf;

use crate::constants::columns;
use crate::error::{NormalizerError, Result};

/// Physical-property columns the normalizer parses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyColumn {
    ThermalExpansion,
    ThermalConductivity,
    FractureToughness,
    Density,
    MeltingPoint,
}

impl PropertyColumn {
    /// All parsed columns, in processing order
    pub const ALL: [PropertyColumn; 5] = [
        PropertyColumn::ThermalExpansion,
        PropertyColumn::ThermalConductivity,
        PropertyColumn::FractureToughness,
        PropertyColumn::Density,
        PropertyColumn::MeltingPoint,
    ];

    /// The canonical column name this parser is keyed by
    pub fn canonical_name(&self) -> &'static str {
        match self {
            PropertyColumn::ThermalExpansion => columns::THERMAL_EXPANSION,
            PropertyColumn::ThermalConductivity => columns::THERMAL_CONDUCTIVITY,
            PropertyColumn::FractureToughness => columns::FRACTURE_TOUGHNESS,
            PropertyColumn::Density => columns::DENSITY,
            PropertyColumn::MeltingPoint => columns::MELTING_POINT,
        }
    }

    /// Look up the parsed column for a canonical name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|column| column.canonical_name() == name)
    }
}

/// Rectangular table of material records: an ordered header plus string rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl MaterialTable {
    /// Create a table, validating that every row matches the header width
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(NormalizerError::RaggedRow {
                    row: index,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// Column names, in sheet order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Replace the header; the new header must keep the table rectangular
    pub fn set_columns(&mut self, columns: Vec<String>) -> Result<()> {
        if columns.len() != self.columns.len() {
            return Err(NormalizerError::SchemaMismatch {
                raw: self.columns.len(),
                result: columns.len(),
            });
        }
        self.columns = columns;
        Ok(())
    }

    /// Index of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Vec<String>] {
        &mut self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// Statistics for one normalization run
#[derive(Debug, Default, Serialize)]
pub struct CleanStats {
    pub records_processed: usize,
    pub columns_renamed: usize,
    pub cells_cleaned: usize,
    pub cells_skipped: usize,
    pub processing_time_ms: u128,
    pub output_path: PathBuf,
}
