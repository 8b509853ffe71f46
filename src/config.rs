//! Configuration for a normalization run.
//!
//! Provides the output format selection and the `Config` structure the
//! pipeline runs under. CLI arguments produce a `Config`; library callers
//! can build one with the `with_*` methods.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{output_filename, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_DIR};
use crate::error::{NormalizerError, Result};

/// Output container formats for the cleaned table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated values with a header row
    Csv,
    /// Line-delimited JSON records (NDJSON)
    Json,
    /// Spreadsheet with a single result worksheet
    #[default]
    Xlsx,
}

impl OutputFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Xlsx => "xlsx",
        }
    }
}

/// Configuration for one normalization run
#[derive(Debug, Clone)]
pub struct Config {
    /// Input workbook path
    pub input_path: PathBuf,
    /// Directory the output file is written to (created if absent)
    pub output_dir: PathBuf,
    /// Output container format
    pub format: OutputFormat,
    /// Show a progress bar during the cleaning step
    pub show_progress: bool,
    /// Suppress console step banners and the run summary
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            format: OutputFormat::default(),
            show_progress: true,
            quiet: false,
        }
    }
}

impl Config {
    /// Set the input workbook path
    pub fn with_input(mut self, input_path: impl Into<PathBuf>) -> Self {
        self.input_path = input_path.into();
        self
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Suppress console output except errors
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Full path of the output file this configuration writes
    pub fn output_path(&self) -> PathBuf {
        self.output_dir
            .join(output_filename(self.format.extension()))
    }

    /// Validate the configuration before the pipeline starts
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(NormalizerError::InputNotFound {
                path: self.input_path.clone(),
            });
        }
        if !self.input_path.is_file() {
            return Err(NormalizerError::configuration(format!(
                "Input path is not a file: {}",
                self.input_path.display()
            )));
        }
        if !is_xlsx_path(&self.input_path) {
            return Err(NormalizerError::configuration(format!(
                "Input path is not an xlsx workbook: {}",
                self.input_path.display()
            )));
        }
        Ok(())
    }
}

/// Check that a path looks like an xlsx workbook
pub fn is_xlsx_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"))
}
