//! Column parsers for ceramic property cells.
//!
//! Each parser is a pure transform from one raw cell value to a cleaned
//! value string: numeric tokens joined by "," for same-unit ranges and by
//! ";" for value/temperature pairs. A token that cannot be parsed as a
//! finite number fails the whole run; there is no partial-success mode.

use crate::constants::{
    EXPANSION_DECIMAL_PLACES, FAHRENHEIT_OFFSET, FAHRENHEIT_SCALE, MICRO_SCALE, RANGE_SEPARATOR,
    TEMPERATURE_MARKER, TEMPERATURE_SEPARATOR,
};
use crate::error::{NormalizerError, Result};
use crate::models::PropertyColumn;
use crate::parser::markers::TemperatureUnit;
use crate::parser::text;

/// Parse a thermal-expansion cell: strip the magnitude notation, scale every
/// range token by 10^-6, and format to fixed 7 decimal places.
///
/// `"7.9 - 11 x10 -6 / ° C"` becomes `"0.0000079,0.0000110"`.
pub fn parse_thermal_expansion(input: &str) -> Result<String> {
    let normalized = text::normalize(input);
    let value = text::strip_magnitude(&normalized);

    let mut tokens = Vec::new();
    for segment in text::split_range(value)? {
        let number = parse_token(segment)? * MICRO_SCALE;
        tokens.push(format!("{:.*}", EXPANSION_DECIMAL_PLACES, number));
    }
    Ok(tokens.join(RANGE_SEPARATOR))
}

/// Parse a cell that needs no unit conversion (conductivity, toughness,
/// density): strip the unit marker, then reformat range and temperature
/// separators. Token text is preserved verbatim.
///
/// `">6.04@23C"` becomes `"6.04;23"`.
pub fn parse_generic_column(input: &str) -> Result<String> {
    let normalized = text::normalize(input);
    let value = text::strip_units(&normalized);
    format_tokens(value)
}

/// Parse a melting-point cell: detect the temperature scale, convert
/// Fahrenheit readings to Celsius, and pass Celsius readings through
/// unconverted. A cell with neither scale letter is an error.
///
/// `"4,919° F"` becomes `"2715"`; `"2681 - 2847 °C"` becomes `"2681,2847"`.
pub fn parse_melting_point(input: &str) -> Result<String> {
    let normalized = text::normalize(input);

    let value = match TemperatureUnit::detect(&normalized) {
        Some((pos, TemperatureUnit::Fahrenheit)) => fahrenheit_to_celsius(&normalized[..pos])?,
        Some((pos, TemperatureUnit::Celsius)) => normalized[..pos].to_string(),
        None => return Err(NormalizerError::unknown_temperature_unit(input.trim())),
    };
    format_tokens(&value)
}

/// Convert an integer-valued Fahrenheit string to Celsius, truncating the
/// quotient toward zero.
pub fn fahrenheit_to_celsius(input: &str) -> Result<String> {
    let fahrenheit: i64 = input
        .parse()
        .map_err(|_| NormalizerError::invalid_number(input))?;

    let celsius = ((fahrenheit as f64 - FAHRENHEIT_OFFSET) / FAHRENHEIT_SCALE).trunc() as i64;
    Ok(celsius.to_string())
}

/// Apply the parser designated for a canonical column
pub fn parse_property(column: PropertyColumn, input: &str) -> Result<String> {
    match column {
        PropertyColumn::ThermalExpansion => parse_thermal_expansion(input),
        PropertyColumn::ThermalConductivity
        | PropertyColumn::FractureToughness
        | PropertyColumn::Density => parse_generic_column(input),
        PropertyColumn::MeltingPoint => parse_melting_point(input),
    }
}

/// Split a unit-stripped value into its temperature-associated parts and
/// range tokens, validate every token, and join with the output separators.
///
/// Range handling operates within each "@"-separated part, so range commas
/// and temperature semicolons never collide.
fn format_tokens(value: &str) -> Result<String> {
    let mut parts = Vec::new();
    for part in value.split(TEMPERATURE_MARKER) {
        let tokens = text::split_range(part)?;
        for token in &tokens {
            parse_token(token)?;
        }
        parts.push(tokens.join(RANGE_SEPARATOR));
    }
    Ok(parts.join(TEMPERATURE_SEPARATOR))
}

/// Parse one token as a finite float, keeping the token text in the error
fn parse_token(token: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| NormalizerError::invalid_number(token))
}
