//! Replen CLI - store replenishment quantity tool

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use replen::prelude::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "replen")]
#[command(
    author,
    version,
    about = "Compute store replenishment quantities from a sales/inventory CSV"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute demand quantities and write the result spreadsheet
    Compute {
        /// Input CSV file with the sales/inventory table
        input: PathBuf,

        /// Output file, .xlsx or .csv (default: 需求数量计算结果.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compute demand quantities and print the result table to stdout
    Preview {
        /// Input CSV file with the sales/inventory table
        input: PathBuf,

        /// Maximum number of result rows to print
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Check that a CSV file has all columns the calculation needs
    Check {
        /// Input CSV file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compute { input, output } => compute(&input, output.as_deref()),
        Commands::Preview { input, limit } => preview(&input, limit),
        Commands::Check { input } => check(&input),
    }
}

fn read_input(input: &Path) -> Result<Sheet> {
    CsvReader::read_file(input, &CsvReadOptions::default())
        .with_context(|| format!("Failed to read '{}'", input.display()))
}

fn compute(input: &Path, output: Option<&Path>) -> Result<()> {
    let sheet = read_input(input)?;

    let result = demand_sheet(&sheet)
        .with_context(|| format!("Failed to compute demand for '{}'", input.display()))?;

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILENAME));
    result
        .save(&output)
        .with_context(|| format!("Failed to write '{}'", output.display()))?;

    eprintln!(
        "Computed demand for {} of {} rows, wrote '{}'",
        result.row_count(),
        sheet.row_count(),
        output.display()
    );

    Ok(())
}

fn preview(input: &Path, limit: Option<usize>) -> Result<()> {
    let sheet = read_input(input)?;

    let result = demand_sheet(&sheet)
        .with_context(|| format!("Failed to compute demand for '{}'", input.display()))?;

    let limit = limit.unwrap_or(usize::MAX);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}\t{}", COL_ITEM_CODE, COL_DEMAND_QTY)?;
    for row in result.rows().take(limit) {
        writeln!(out, "{}\t{}", row[0], row[1])?;
    }

    if result.row_count() > limit {
        eprintln!("... {} more rows", result.row_count() - limit);
    }

    Ok(())
}

fn check(input: &Path) -> Result<()> {
    let sheet = read_input(input)?;

    match sheet.require_columns(&REQUIRED_COLUMNS) {
        Ok(_) => {
            println!(
                "OK: '{}' has all required columns ({})",
                input.display(),
                REQUIRED_COLUMNS.join(", ")
            );
            Ok(())
        }
        Err(err) => bail!("{err}"),
    }
}
