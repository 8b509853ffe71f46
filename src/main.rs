use anyhow::Context;
use ceramic_normalizer::cli::{setup_logging, Args};
use ceramic_normalizer::{CleanStats, TableCleaner};
use clap::Parser;
use std::process;

fn main() {
    let args = Args::parse();

    if let Err(e) = setup_logging(&args) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    match run(&args) {
        Ok(_stats) => {
            // Success - the summary has already been printed by the pipeline
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> anyhow::Result<CleanStats> {
    args.validate().context("invalid arguments")?;

    let cleaner = TableCleaner::new(args.to_config())
        .context("failed to initialize the normalization pipeline")?;

    let stats = cleaner.run().context("normalization failed")?;
    Ok(stats)
}
