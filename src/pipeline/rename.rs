//! Column rename lookup.
//!
//! Pairs the raw sheet's header with the result sheet's header positionally
//! (raw column i becomes canonical column i) and applies the resulting
//! lookup to a material table. A length mismatch between the two headers is
//! an explicit error rather than a silent truncation.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{NormalizerError, Result};
use crate::models::MaterialTable;

/// Raw-to-canonical column name lookup
#[derive(Debug, Clone)]
pub struct ColumnRename {
    lookup: HashMap<String, String>,
    canonical: Vec<String>,
}

impl ColumnRename {
    /// Build the lookup from the raw and result headers
    pub fn from_headers(raw: &[String], canonical: &[String]) -> Result<Self> {
        if raw.len() != canonical.len() {
            return Err(NormalizerError::SchemaMismatch {
                raw: raw.len(),
                result: canonical.len(),
            });
        }

        let lookup = raw
            .iter()
            .cloned()
            .zip(canonical.iter().cloned())
            .collect();

        Ok(Self {
            lookup,
            canonical: canonical.to_vec(),
        })
    }

    /// Canonical name for a raw column, if the lookup knows it
    pub fn canonical_for(&self, raw: &str) -> Option<&str> {
        self.lookup.get(raw).map(String::as_str)
    }

    /// Replace the table's header with the canonical names.
    ///
    /// Returns the number of columns whose name actually changed.
    pub fn apply(&self, table: &mut MaterialTable) -> Result<usize> {
        let renamed = table
            .columns()
            .iter()
            .zip(&self.canonical)
            .filter(|(old, new)| old != new)
            .count();

        table.set_columns(self.canonical.clone())?;
        debug!("Renamed {} of {} columns", renamed, self.canonical.len());
        Ok(renamed)
    }
}
