//! Per-column cell cleaning pass.
//!
//! Applies each property column's parser to every record's value in that
//! column. Empty cells are missing values and are skipped; a malformed cell
//! aborts the run with its column and record attached to the error.

use indicatif::ProgressBar;
use tracing::{debug, trace};

use crate::error::{NormalizerError, Result};
use crate::models::{CleanStats, MaterialTable, PropertyColumn};
use crate::parser::values::parse_property;

/// Clean all five property columns in place.
///
/// Column order does not affect correctness; each column transform is
/// independent of the others.
pub fn clean_all(
    table: &mut MaterialTable,
    stats: &mut CleanStats,
    progress: Option<&ProgressBar>,
) -> Result<()> {
    for column in PropertyColumn::ALL {
        clean_column(table, column, stats, progress)?;
    }
    Ok(())
}

/// Clean one designated column across all records
pub fn clean_column(
    table: &mut MaterialTable,
    column: PropertyColumn,
    stats: &mut CleanStats,
    progress: Option<&ProgressBar>,
) -> Result<()> {
    let name = column.canonical_name();
    let index = table
        .column_index(name)
        .ok_or_else(|| NormalizerError::MissingColumn {
            column: name.to_string(),
        })?;

    let mut cleaned = 0usize;
    for (row_index, row) in table.rows_mut().iter_mut().enumerate() {
        let raw = &row[index];

        if raw.trim().is_empty() {
            stats.cells_skipped += 1;
            if let Some(pb) = progress {
                pb.inc(1);
            }
            continue;
        }

        let value = parse_property(column, raw)
            .map_err(|e| NormalizerError::cell_parsing(name, row_index, e.to_string()))?;
        trace!("{}[{}]: '{}' -> '{}'", name, row_index, raw, value);

        row[index] = value;
        cleaned += 1;
        if let Some(pb) = progress {
            pb.inc(1);
        }
    }

    stats.cells_cleaned += cleaned;
    debug!("Cleaned column '{}': {} cells", name, cleaned);
    Ok(())
}
