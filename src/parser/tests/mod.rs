//! Test utilities for the cell parsing core
//!
//! Shared helpers used across the marker, text, and value test modules,
//! exercising the parsers against the cell vocabulary observed in the
//! ceramic sample data.

use crate::error::{NormalizerError, Result};


/// Unwrap a parser result, panicking with the input on failure
pub fn expect_clean(result: Result<String>, input: &str) -> String {
    match result {
        Ok(cleaned) => cleaned,
        Err(e) => panic!("expected '{}' to parse, got error: {}", input, e),
    }
}

/// Assert a parser failed with an invalid-number error for the given token
pub fn assert_invalid_number(result: Result<String>, expected_token: &str) {
    match result {
        Err(NormalizerError::InvalidNumber { token }) => assert_eq!(token, expected_token),
        other => panic!("expected InvalidNumber('{}'), got {:?}", expected_token, other),
    }
}
