//! Normalization pipeline.
//!
//! Orchestrates the complete run: read the input workbook, rename columns
//! to their canonical names, clean the five property columns, and write the
//! cleaned table in the selected output format.

pub mod clean;
pub mod rename;

use std::time::Instant;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::config::Config;
use crate::error::{NormalizerError, Result};
use crate::models::{CleanStats, PropertyColumn};
use crate::pipeline::rename::ColumnRename;
use crate::workbook::InputWorkbook;
use crate::writer::OutputWriter;

/// Main pipeline for one normalization run
#[derive(Debug)]
pub struct TableCleaner {
    config: Config,
}

impl TableCleaner {
    /// Create a pipeline, verifying the input workbook exists
    pub fn new(config: Config) -> Result<Self> {
        if !config.input_path.exists() {
            return Err(NormalizerError::InputNotFound {
                path: config.input_path.clone(),
            });
        }
        Ok(Self { config })
    }

    /// Run the pipeline end to end and return the run statistics.
    ///
    /// In quiet mode the step banners and summary are suppressed; errors
    /// still propagate to the caller.
    pub fn run(&self) -> Result<CleanStats> {
        let start_time = Instant::now();
        let mut stats = CleanStats::default();
        let console = !self.config.quiet;

        if console {
            println!(
                "{}",
                "Starting ceramic property normalization".bright_green().bold()
            );
            println!(
                "  {} {}",
                "Input:".bright_cyan(),
                self.config.input_path.display()
            );
            println!(
                "  {} {}",
                "Output:".bright_cyan(),
                self.config.output_path().display()
            );
        }

        // Step 1: Read the input workbook
        if console {
            println!("\n{}", "Reading input workbook...".bright_yellow());
        }
        let workbook = InputWorkbook::load(&self.config.input_path)?;
        let mut table = workbook.raw_table;
        stats.records_processed = table.row_count();
        if console {
            println!(
                "  {} {} records with {} columns",
                "Found".bright_green(),
                table.row_count().to_string().bright_white().bold(),
                table.column_count().to_string().bright_white().bold()
            );
        }
        debug!(
            "Property map sheet carries {} entries",
            workbook.property_map.len()
        );

        // Step 2: Rename columns to their canonical names
        if console {
            println!("\n{}", "Renaming columns...".bright_yellow());
        }
        let column_rename = ColumnRename::from_headers(table.columns(), &workbook.result_header)?;
        stats.columns_renamed = column_rename.apply(&mut table)?;
        if console {
            println!(
                "  {} {} columns",
                "Renamed".bright_green(),
                stats.columns_renamed.to_string().bright_white().bold()
            );
        }

        // Step 3: Clean the property columns
        if console {
            println!("\n{}", "Cleaning property cells...".bright_yellow());
        }
        let progress = if self.config.show_progress {
            let total = (table.row_count() * PropertyColumn::ALL.len()) as u64;
            Some(create_progress_bar(total, "cleaning cells"))
        } else {
            None
        };
        clean::clean_all(&mut table, &mut stats, progress.as_ref())?;
        if let Some(pb) = progress {
            pb.finish_and_clear();
        }
        if console {
            println!(
                "  {} {} cells ({} empty cells skipped)",
                "Cleaned".bright_green(),
                stats.cells_cleaned.to_string().bright_white().bold(),
                stats.cells_skipped.to_string().bright_white()
            );
        }

        // Step 4: Write the cleaned table
        if console {
            println!("\n{}", "Writing output...".bright_yellow());
        }
        let writer = OutputWriter::new(self.config.output_dir.clone(), self.config.format);
        stats.output_path = writer.write(&table)?;

        let total_time = start_time.elapsed().as_millis();
        stats.processing_time_ms = total_time;

        if console {
            println!("\n{}", "Normalization Summary".bright_green().bold());
            println!(
                "  {} {}ms",
                "Time elapsed:".bright_cyan(),
                total_time.to_string().bright_white()
            );
            println!(
                "  {} {}",
                "Records processed:".bright_cyan(),
                stats.records_processed.to_string().bright_white()
            );
            println!(
                "  {} {}",
                "Cells cleaned:".bright_cyan(),
                stats.cells_cleaned.to_string().bright_white().bold()
            );
            println!(
                "  {} {}",
                "Output file:".bright_cyan(),
                stats.output_path.display().to_string().bright_white()
            );
        }

        Ok(stats)
    }
}

/// Create a progress bar for the cleaning step
fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
