//! Error-path integration tests for the normalization pipeline
//!
//! A single malformed cell aborts the whole run with no partial output;
//! these tests verify the explicit errors the pipeline raises for malformed
//! workbooks and cells.

use ceramic_normalizer::{Config, NormalizerError, OutputFormat, TableCleaner};
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const RAW_HEADER: [&str; 3] = ["Material", "Density", "Melting Point"];
const CANONICAL_HEADER: [&str; 3] = ["materialName", "density", "meltingPoint"];

/// Build a fixture workbook with a reduced raw schema.
///
/// Only the density and melting-point columns are present, so the missing
/// designated columns also get exercised.
fn write_fixture(dir: &TempDir, rows: &[[&str; 3]], result_header: &[&str]) -> PathBuf {
    let path = dir.path().join("ceramic_properties.xlsx");
    let mut workbook = Workbook::new();

    let raw = workbook.add_worksheet();
    raw.set_name("Ceramic_Raw_Data").unwrap();
    for (col, name) in RAW_HEADER.iter().enumerate() {
        raw.write_string(0, col as u16, *name).unwrap();
    }
    for (row, record) in rows.iter().enumerate() {
        for (col, cell) in record.iter().enumerate() {
            raw.write_string((row + 1) as u32, col as u16, *cell).unwrap();
        }
    }

    let map = workbook.add_worksheet();
    map.set_name("material_property_map").unwrap();
    map.write_string(0, 0, "raw_name").unwrap();
    map.write_string(0, 1, "canonical_name").unwrap();

    let result = workbook.add_worksheet();
    result.set_name("material_data_result").unwrap();
    for (col, name) in result_header.iter().enumerate() {
        result.write_string(0, col as u16, *name).unwrap();
    }

    workbook.save(&path).unwrap();
    path
}

fn run_pipeline(input: &Path, output_dir: &Path) -> ceramic_normalizer::Result<ceramic_normalizer::CleanStats> {
    let config = Config::default()
        .with_input(input)
        .with_output_dir(output_dir)
        .with_format(OutputFormat::Csv)
        .with_progress(false);
    TableCleaner::new(config)?.run()
}

/// Test that a missing required sheet fails before any parsing
///
/// Purpose: Validate the workbook shape check
/// Benefit: A malformed workbook is reported by sheet name, not a panic downstream
#[test]
fn test_missing_sheet_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.xlsx");

    let mut workbook = Workbook::new();
    let raw = workbook.add_worksheet();
    raw.set_name("Ceramic_Raw_Data").unwrap();
    raw.write_string(0, 0, "Material").unwrap();
    workbook.save(&path).unwrap();

    match run_pipeline(&path, &dir.path().join("out")) {
        Err(NormalizerError::MissingSheet { sheet, .. }) => {
            assert_eq!(sheet, "material_property_map");
        }
        other => panic!("expected MissingSheet, got {:?}", other),
    }
}

/// Test that mismatched raw/result headers abort the rename step
///
/// Purpose: Validate the positional rename lookup's length check
/// Benefit: Prevents silent zip truncation from mispairing column names
#[test]
fn test_header_length_mismatch() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(
        &dir,
        &[["Alumina", "3.95 g/cc", "2072 \u{b0}C"]],
        &["materialName", "density"], // one column short
    );

    match run_pipeline(&input, &dir.path().join("out")) {
        Err(NormalizerError::SchemaMismatch { raw, result }) => {
            assert_eq!(raw, 3);
            assert_eq!(result, 2);
        }
        other => panic!("expected SchemaMismatch, got {:?}", other),
    }
}

/// Test that a missing designated column is an explicit error
///
/// Purpose: Validate the designated-column lookup after renaming
/// Benefit: A schema that drops a property column is caught by name
#[test]
fn test_missing_designated_column() {
    let dir = TempDir::new().unwrap();
    // Renamed header carries no thermal expansion column.
    let input = write_fixture(
        &dir,
        &[["Alumina", "3.95 g/cc", "2072 \u{b0}C"]],
        &CANONICAL_HEADER,
    );

    match run_pipeline(&input, &dir.path().join("out")) {
        Err(NormalizerError::MissingColumn { column }) => {
            assert_eq!(column, "linearCoefficientOfThermalExpansion");
        }
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}

/// Test that a malformed cell aborts the run with no partial output
///
/// Purpose: Validate the fail-fast contract of the cleaning pass
/// Benefit: Guarantees the output file never contains half-cleaned data
#[test]
fn test_malformed_cell_aborts_without_output() {
    let dir = TempDir::new().unwrap();
    let input = write_full_fixture(
        &dir,
        &[[
            "Alumina",
            "not a number x10-6",
            "30 W/mK",
            "3.5 MPam1/2",
            "3.95 g/cc",
            "2072 \u{b0}C",
        ]],
    );
    let out_dir = dir.path().join("out");

    match run_pipeline(&input, &out_dir) {
        Err(NormalizerError::CellParsing { column, row, reason }) => {
            assert_eq!(column, "linearCoefficientOfThermalExpansion");
            assert_eq!(row, 0);
            assert!(reason.contains("notanumber"), "reason: {}", reason);
        }
        other => panic!("expected CellParsing, got {:?}", other),
    }
    assert!(
        !out_dir.join("output.csv").exists(),
        "no output should be written for a failed run"
    );
}

/// Test that a melting point without a scale letter is an explicit error
///
/// Purpose: Validate the unrecognized-unit redesign
/// Benefit: Bad input surfaces as an error instead of a silent empty value
#[test]
fn test_unrecognized_melting_point_unit() {
    let dir = TempDir::new().unwrap();
    let input = write_full_fixture(
        &dir,
        &[[
            "Alumina",
            "8.1 x 10-6/K",
            "30 W/mK",
            "3.5 MPam1/2",
            "3.95 g/cc",
            "3100",
        ]],
    );

    match run_pipeline(&input, &dir.path().join("out")) {
        Err(NormalizerError::CellParsing { column, reason, .. }) => {
            assert_eq!(column, "meltingPoint");
            assert!(reason.contains("Unrecognized melting point unit"), "reason: {}", reason);
        }
        other => panic!("expected CellParsing, got {:?}", other),
    }
}

/// Test that a negative-looking value is an explicit unsupported-input error
///
/// Purpose: Validate the range/negative-sign ambiguity redesign
/// Benefit: The pipeline refuses to guess instead of silently mis-splitting
#[test]
fn test_negative_value_is_unsupported() {
    let dir = TempDir::new().unwrap();
    let input = write_full_fixture(
        &dir,
        &[[
            "Alumina",
            "8.1 x 10-6/K",
            "30 W/mK",
            "3.5 MPam1/2",
            "-3.95 g/cc",
            "2072 \u{b0}C",
        ]],
    );

    match run_pipeline(&input, &dir.path().join("out")) {
        Err(NormalizerError::CellParsing { column, reason, .. }) => {
            assert_eq!(column, "density");
            assert!(reason.contains("Ambiguous range"), "reason: {}", reason);
        }
        other => panic!("expected CellParsing, got {:?}", other),
    }
}

/// Test that a nonexistent input path is caught at pipeline construction
///
/// Purpose: Validate the input existence check
/// Benefit: Misconfigured paths fail before any work starts
#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let result = run_pipeline(&dir.path().join("absent.xlsx"), &dir.path().join("out"));
    assert!(matches!(result, Err(NormalizerError::InputNotFound { .. })));
}

/// Build a fixture with the full six-column schema
fn write_full_fixture(dir: &TempDir, rows: &[[&str; 6]]) -> PathBuf {
    let raw_header = [
        "Material",
        "Linear Coefficient of Thermal Expansion",
        "Thermal Conductivity",
        "Fracture Toughness",
        "Density",
        "Melting Point",
    ];
    let canonical_header = [
        "materialName",
        "linearCoefficientOfThermalExpansion",
        "thermalConductivity",
        "fractureToughness",
        "density",
        "meltingPoint",
    ];

    let path = dir.path().join("ceramic_properties.xlsx");
    let mut workbook = Workbook::new();

    let raw = workbook.add_worksheet();
    raw.set_name("Ceramic_Raw_Data").unwrap();
    for (col, name) in raw_header.iter().enumerate() {
        raw.write_string(0, col as u16, *name).unwrap();
    }
    for (row, record) in rows.iter().enumerate() {
        for (col, cell) in record.iter().enumerate() {
            raw.write_string((row + 1) as u32, col as u16, *cell).unwrap();
        }
    }

    let map = workbook.add_worksheet();
    map.set_name("material_property_map").unwrap();
    map.write_string(0, 0, "raw_name").unwrap();
    map.write_string(0, 1, "canonical_name").unwrap();

    let result = workbook.add_worksheet();
    result.set_name("material_data_result").unwrap();
    for (col, name) in canonical_header.iter().enumerate() {
        result.write_string(0, col as u16, *name).unwrap();
    }

    workbook.save(&path).unwrap();
    path
}
