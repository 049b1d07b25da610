//! CLI commands for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{csv, json, yaml};
use crate::storage::ExpenseStore;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one row per expense)
    Csv,
    /// JSON format (expenses plus metadata)
    Json,
    /// YAML format (expenses plus metadata, human-readable)
    Yaml,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

/// Handle the export command
pub fn handle_export_command(store: &ExpenseStore, args: ExportArgs) -> ExpenseResult<()> {
    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(store, &args, &mut writer)?;
            writer
                .flush()
                .map_err(|e| ExpenseError::Export(e.to_string()))?;
            eprintln!(
                "Exported {} expense(s) to: {}",
                store.len(),
                path.display()
            );
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(store, &args, &mut writer)?;
            if matches!(args.format, ExportFormat::Json) {
                writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;
            }
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    store: &ExpenseStore,
    args: &ExportArgs,
    writer: &mut W,
) -> ExpenseResult<()> {
    let expenses = store.expenses();
    match args.format {
        ExportFormat::Csv => csv::export_expenses_csv(expenses, writer),
        ExportFormat::Json => json::export_full_json(expenses, writer, !args.compact),
        ExportFormat::Yaml => yaml::export_full_yaml(expenses, writer),
    }
}
