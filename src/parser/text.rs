//! Leaf text transforms shared by the column parsers.
//!
//! These are small pure functions over a single cell value: noise stripping,
//! marker truncation, and range splitting. Each parser in
//! [`values`](super::values) composes them in a fixed order.

use crate::constants::is_noise_char;
use crate::error::{NormalizerError, Result};
use crate::parser::markers::{MagnitudeMarker, RangeIndicator, UnitMarker};

/// Remove every noise character (space, comma, degree sign, angle brackets)
/// from a raw cell value.
pub fn normalize(input: &str) -> String {
    input.chars().filter(|c| !is_noise_char(*c)).collect()
}

/// Truncate a normalized cell at the earliest order-of-magnitude marker.
///
/// Returns the full input when no marker is present.
pub fn strip_magnitude(input: &str) -> &str {
    match MagnitudeMarker::find(input) {
        Some((pos, _)) => &input[..pos],
        None => input,
    }
}

/// Truncate a normalized cell at the earliest unit marker.
///
/// Returns the full input when no marker is present.
pub fn strip_units(input: &str) -> &str {
    match UnitMarker::find(input) {
        Some((pos, _)) => &input[..pos],
        None => input,
    }
}

/// Split a unit-stripped cell on range indicators ("-" or "to").
///
/// A value with no indicator yields a one-element split. An indicator that
/// produces an empty segment is the signature of a leading or trailing dash,
/// which cannot be told apart from a negative sign; that case fails rather
/// than mis-splitting.
pub fn split_range(input: &str) -> Result<Vec<&str>> {
    let mut segments = Vec::new();
    let mut rest = input;

    while let Some((pos, indicator)) = RangeIndicator::find(rest) {
        segments.push(&rest[..pos]);
        rest = &rest[pos + indicator.pattern().len()..];
    }
    segments.push(rest);

    if segments.len() > 1 && segments.iter().any(|s| s.is_empty()) {
        return Err(NormalizerError::ambiguous_range(input));
    }
    Ok(segments)
}
