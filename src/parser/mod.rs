//! Value-normalization core for ceramic property cells.
//!
//! Raw cells mix units, ranges, magnitude notations, and embedded
//! temperature qualifiers in free text. This module turns each cell into a
//! canonical numeric string, with the unit implied by the column.
//!
//! The parsers are organized into layers:
//! - [`markers`] - enumerated marker vocabularies and their detection
//! - [`text`] - noise stripping, marker truncation, and range splitting
//! - [`values`] - the per-column parsers composing the layers below

pub mod markers;
pub mod text;
pub mod values;

#[cfg(test)]
mod tests;

pub use values::{
    fahrenheit_to_celsius, parse_generic_column, parse_melting_point, parse_property,
    parse_thermal_expansion,
};
