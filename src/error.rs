//! Error handling for ceramic property normalization.
//!
//! Provides error types with context for cell parsing, workbook shape
//! validation, and output serialization failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalizerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Workbook read error: {0}")]
    XlsxRead(#[from] calamine::XlsxError),

    #[error("Workbook write error: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("Input workbook not found at path: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Required sheet '{sheet}' not found in workbook: {path}")]
    MissingSheet { sheet: String, path: PathBuf },

    #[error("Sheet '{sheet}' has no header row")]
    EmptySheet { sheet: String },

    #[error("Header mismatch: raw sheet has {raw} columns, result sheet has {result}")]
    SchemaMismatch { raw: usize, result: usize },

    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Designated column '{column}' not found after renaming")]
    MissingColumn { column: String },

    #[error("Invalid numeric token '{token}'")]
    InvalidNumber { token: String },

    #[error("Ambiguous range in value '{value}': indicator produced an empty segment (negative values are unsupported)")]
    AmbiguousRange { value: String },

    #[error("Unrecognized melting point unit in value '{value}': expected 'F' or 'C'")]
    UnknownTemperatureUnit { value: String },

    #[error("Failed to parse column '{column}' at record {row}: {reason}")]
    CellParsing {
        column: String,
        row: usize,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl NormalizerError {
    /// Create an invalid numeric token error
    pub fn invalid_number(token: impl Into<String>) -> Self {
        Self::InvalidNumber {
            token: token.into(),
        }
    }

    /// Create an ambiguous range error
    pub fn ambiguous_range(value: impl Into<String>) -> Self {
        Self::AmbiguousRange {
            value: value.into(),
        }
    }

    /// Create an unrecognized temperature unit error
    pub fn unknown_temperature_unit(value: impl Into<String>) -> Self {
        Self::UnknownTemperatureUnit {
            value: value.into(),
        }
    }

    /// Create a cell parsing error with record context
    pub fn cell_parsing(column: impl Into<String>, row: usize, reason: impl Into<String>) -> Self {
        Self::CellParsing {
            column: column.into(),
            row,
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NormalizerError>;
