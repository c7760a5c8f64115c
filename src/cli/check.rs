use colored::Colorize;

use crate::cli::{load_index, print_rejections};
use crate::error::Result;

/// Parse only: show what would make it into a rollup and what gets dropped.
/// Rejections never change the exit status.
pub fn run(input: &str) -> Result<()> {
    let (index, report) = load_index(input)?;
    print_rejections(&report);

    let parsed = format!("{} parsed", report.parsed).green();
    let rejected = if report.rejected.is_empty() {
        "0 rejected".normal()
    } else {
        format!("{} rejected", report.rejected.len()).yellow()
    };
    println!(
        "{parsed}, {rejected}, {} period(s)",
        index.period_count()
    );
    Ok(())
}
