//! Application constants for the ceramic property normalizer
//!
//! This module contains the sheet names, default paths, separator
//! conventions, and conversion constants used throughout the application.
//! All values are read-only; no runtime mutation occurs.

// =============================================================================
// Workbook Sheet Names
// =============================================================================

/// Sheet holding the raw material records (producer-supplied column names)
pub const RAW_DATA_SHEET: &str = "Ceramic_Raw_Data";

/// Sheet holding the raw-to-canonical property name mapping
pub const PROPERTY_MAP_SHEET: &str = "material_property_map";

/// Sheet whose header row supplies the canonical column names
pub const RESULT_SHEET: &str = "material_data_result";

/// All sheets an input workbook must contain
pub const REQUIRED_SHEETS: &[&str] = &[RAW_DATA_SHEET, PROPERTY_MAP_SHEET, RESULT_SHEET];

// =============================================================================
// Default Paths
// =============================================================================

/// Default input workbook path, relative to the working directory
pub const DEFAULT_INPUT_FILE: &str = "data/ceramic_properties.xlsx";

/// Default output directory, created if absent
pub const DEFAULT_OUTPUT_DIR: &str = "out";

/// Output file name stem; the extension comes from the selected format
pub const OUTPUT_FILE_STEM: &str = "output";

// =============================================================================
// Cell Text Conventions
// =============================================================================

/// Characters stripped from every raw cell before parsing
pub const NOISE_CHARS: &[char] = &[' ', ',', '\u{b0}', '<', '>'];

/// Separator between same-unit range tokens in cleaned output
pub const RANGE_SEPARATOR: &str = ",";

/// Marker joining a property value to its measurement temperature in raw cells
pub const TEMPERATURE_MARKER: char = '@';

/// Separator between a value and its temperature in cleaned output
pub const TEMPERATURE_SEPARATOR: &str = ";";

// =============================================================================
// Numeric Conversion Constants
// =============================================================================

/// Scale factor implied by the thermal-expansion magnitude notation
pub const MICRO_SCALE: f64 = 1e-6;

/// Fixed decimal places for formatted thermal-expansion tokens
pub const EXPANSION_DECIMAL_PLACES: usize = 7;

/// Fahrenheit to Celsius: celsius = trunc((fahrenheit - offset) / scale)
pub const FAHRENHEIT_OFFSET: f64 = 32.0;
pub const FAHRENHEIT_SCALE: f64 = 1.8;

// =============================================================================
// Column Name Constants
// =============================================================================

/// Canonical names of the columns the normalizer parses
pub mod columns {
    pub const THERMAL_EXPANSION: &str = "linearCoefficientOfThermalExpansion";
    pub const THERMAL_CONDUCTIVITY: &str = "thermalConductivity";
    pub const FRACTURE_TOUGHNESS: &str = "fractureToughness";
    pub const DENSITY: &str = "density";
    pub const MELTING_POINT: &str = "meltingPoint";

    /// All parsed property columns
    pub const ALL: &[&str] = &[
        THERMAL_EXPANSION,
        THERMAL_CONDUCTIVITY,
        FRACTURE_TOUGHNESS,
        DENSITY,
        MELTING_POINT,
    ];
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Check if a character is stripped during text normalization
pub fn is_noise_char(c: char) -> bool {
    NOISE_CHARS.contains(&c)
}

/// Check if a canonical column name designates a parsed property column
pub fn is_property_column(name: &str) -> bool {
    columns::ALL.contains(&name)
}

/// Build the output file name for a given format extension
pub fn output_filename(extension: &str) -> String {
    format!("{}.{}", OUTPUT_FILE_STEM, extension)
}
