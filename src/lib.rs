//! Ceramic Property Normalizer Library
//!
//! A Rust library for normalizing materials-science property data extracted
//! from spreadsheets of ceramic material records. Source cells mix units,
//! ranges, magnitude notations, and embedded temperature qualifiers inside
//! free-text strings; the library parses each cell into a canonical numeric
//! representation and re-emits the dataset in a chosen output format.
//!
//! This library provides tools for:
//! - Stripping formatting noise and unit/magnitude notation from cells
//! - Splitting range cells into independent numeric tokens
//! - Converting Fahrenheit melting points to Celsius
//! - Preserving value/temperature associations in the output
//! - Renaming producer-supplied columns to canonical property names
//! - Writing the cleaned dataset as csv, NDJSON, or xlsx

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod workbook;
pub mod writer;

// Re-export commonly used types
pub use config::{Config, OutputFormat};
pub use error::{NormalizerError, Result};
pub use models::{CleanStats, MaterialTable, PropertyColumn};
pub use pipeline::TableCleaner;
