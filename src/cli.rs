//! Command-line interface for the ceramic property normalizer.
//!
//! Defines the argument surface with the clap derive API and the structured
//! logging setup the binary runs under.

use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use crate::config::{Config, OutputFormat};
use crate::constants::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_DIR};
use crate::error::{NormalizerError, Result};

/// CLI arguments for the ceramic property normalizer
///
/// Parses free-text ceramic material property cells from a spreadsheet into
/// canonical numeric values and re-emits the dataset in the chosen format.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ceramic-normalizer",
    version,
    about = "Normalize free-text ceramic material property data into canonical numeric values",
    long_about = "Reads a three-sheet xlsx workbook of ceramic material records, strips unit and \
                  magnitude notation from the property cells, splits ranges, converts Fahrenheit \
                  melting points to Celsius, and writes the cleaned dataset as csv, json, or xlsx."
)]
pub struct Args {
    /// Input workbook path
    ///
    /// Must be an xlsx workbook containing the Ceramic_Raw_Data,
    /// material_property_map, and material_data_result sheets.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        default_value = DEFAULT_INPUT_FILE,
        help = "Input xlsx workbook with the raw ceramic records"
    )]
    pub input: PathBuf,

    /// Output directory for the cleaned dataset
    ///
    /// Created if it does not exist. The output file is named
    /// output.<format extension>.
    #[arg(
        long = "output-dir",
        value_name = "DIR",
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Directory the output file is written to"
    )]
    pub output_dir: PathBuf,

    /// Output format for the cleaned dataset
    #[arg(
        short = 'o',
        long = "outformat",
        value_enum,
        default_value = "xlsx",
        help = "Output format for the cleaned dataset"
    )]
    pub outformat: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors; also disables the progress bar.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Validate the arguments for consistency before the pipeline starts
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(NormalizerError::configuration(format!(
                "Input file does not exist: {}",
                self.input.display()
            )));
        }
        if !self.input.is_file() {
            return Err(NormalizerError::configuration(format!(
                "Input path is not a file: {}",
                self.input.display()
            )));
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show the progress bar (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the pipeline configuration from the parsed arguments
    pub fn to_config(&self) -> Config {
        Config::default()
            .with_input(self.input.clone())
            .with_output_dir(self.output_dir.clone())
            .with_format(self.outformat)
            .with_progress(self.show_progress())
            .with_quiet(self.quiet)
    }
}

/// Set up structured logging for the run
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ceramic_normalizer={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
