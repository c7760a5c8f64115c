pub mod check;
pub mod report;
pub mod run;

use std::fs::File;
use std::io::BufReader;

use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::error::Result;
use crate::index::{LoadReport, PeriodIndex};

#[derive(Parser)]
#[command(
    name = "tally",
    about = "Monthly sales rollup CLI for delimited transaction exports."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a transaction export and write the monthly rollup CSV.
    Run {
        /// Path to the transaction export
        input: String,
        /// Output file path (default: rollup-YYYY-MM-DD.csv)
        #[arg(long)]
        output: Option<String>,
    },
    /// Print the monthly rollup to the terminal.
    Report {
        /// Path to the transaction export
        input: String,
        /// Emit JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Parse a transaction export and show per-line diagnostics only.
    Check {
        /// Path to the transaction export
        input: String,
    },
}

/// Open `input` and build the period index. A file that cannot be opened is
/// the one fatal condition; rejected lines come back in the report.
pub(crate) fn load_index(input: &str) -> Result<(PeriodIndex, LoadReport)> {
    let file = File::open(input)?;
    let mut index = PeriodIndex::new();
    let report = index.load(BufReader::new(file))?;
    Ok((index, report))
}

/// Surface every dropped line on stderr, keeping stdout clean for piping.
pub(crate) fn print_rejections(report: &LoadReport) {
    for r in &report.rejected {
        eprintln!(
            "{} line {}: {}\n  {}",
            "rejected".yellow(),
            r.line_no,
            r.error,
            r.raw
        );
    }
}
