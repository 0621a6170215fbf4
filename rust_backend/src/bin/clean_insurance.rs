//! Insurance table cleaning CLI
//!
//! Runs the full cleaning pipeline on a raw policy table and writes the result.
//!
//! # Usage
//!
//! ```bash
//! clean_insurance data_insurance.csv -o cleaned.parquet --format parquet \
//!     --config cleaning.toml --report report.json
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log filter directives, e.g. `insurance_cleaner=debug` (default: info)

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use insurance_cleaner::io::{SourceFormat, TableWriter};
use insurance_cleaner::{CleaningConfig, TableCleaner};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Parquet,
}

impl From<OutputFormat> for SourceFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => SourceFormat::Csv,
            OutputFormat::Parquet => SourceFormat::Parquet,
        }
    }
}

/// Clean a raw insurance-policy table
#[derive(Debug, Parser)]
#[command(name = "clean_insurance", version, about)]
struct Args {
    /// Raw policy table (CSV or Parquet)
    input: PathBuf,

    /// Where to write the cleaned table
    #[arg(short, long, default_value = "cleaned_insurance.csv")]
    output: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// TOML file overriding the default cleaning constants
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a JSON summary of every step to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_ansi(false)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => CleaningConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => CleaningConfig::from_default_location()?,
    };
    info!("Cleaning {} with {:?}", args.input.display(), config);

    let mut cleaned = TableCleaner::from_path_with_config(&args.input, config)
        .context("Failed to load input table")?
        .clean_with_report()
        .context("Cleaning pipeline failed")?;

    TableWriter::write(&mut cleaned.dataframe, &args.output, args.format.into())
        .context("Failed to write cleaned table")?;

    if let Some(report_path) = &args.report {
        let json = serde_json::to_string_pretty(&cleaned.report)
            .context("Failed to serialize cleaning report")?;
        fs::write(report_path, json)
            .with_context(|| format!("Failed to write report {}", report_path.display()))?;
        info!("Report written to {}", report_path.display());
    }

    info!(
        "Kept {} of {} rows ({} dropped)",
        cleaned.report.output_rows,
        cleaned.report.input_rows,
        cleaned.report.rows_dropped()
    );
    Ok(())
}
