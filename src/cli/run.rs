use std::path::PathBuf;

use crate::cli::{load_index, print_rejections};
use crate::error::Result;
use crate::fmt::metric;
use crate::summary;

fn default_path() -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    PathBuf::from(format!("rollup-{date}.csv"))
}

pub fn run(input: &str, output: Option<&str>) -> Result<()> {
    let (index, report) = load_index(input)?;
    print_rejections(&report);
    println!("Read {} records", report.parsed);

    let rows = summary::summarize(&index);
    let path = output.map(PathBuf::from).unwrap_or_else(default_path);

    // No header row: 20 bare fields per period, metrics at two decimals.
    let mut wtr = csv::Writer::from_path(&path)?;
    for row in &rows {
        let mut fields = vec![row.year.to_string(), row.month.to_string()];
        fields.extend(row.metrics().iter().map(|m| metric(*m)));
        wtr.write_record(&fields)?;
    }
    wtr.flush()?;

    println!("Wrote {}", path.display());
    Ok(())
}
