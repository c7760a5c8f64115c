use std::collections::BTreeMap;
use std::io::BufRead;

use crate::error::{LineError, Result};
use crate::models::{Period, SaleRecord};
use crate::parser;

/// Records grouped by (year, month), iterated ascending. Buckets keep file
/// order; the aggregation engine sorts its own copy.
#[derive(Debug, Default)]
pub struct PeriodIndex {
    buckets: BTreeMap<Period, Vec<SaleRecord>>,
}

/// One dropped input line, kept for diagnostics.
#[derive(Debug)]
pub struct RejectedLine {
    /// 1-based position in the file, counting the header.
    pub line_no: usize,
    pub raw: String,
    pub error: LineError,
}

pub struct LoadReport {
    pub parsed: usize,
    pub rejected: Vec<RejectedLine>,
}

impl PeriodIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to its period bucket, creating the bucket on first
    /// insertion. No dedup: every parsed record is retained.
    pub fn insert(&mut self, record: SaleRecord) {
        self.buckets.entry(record.period).or_default().push(record);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Period, &[SaleRecord])> {
        self.buckets.iter().map(|(p, records)| (p, records.as_slice()))
    }

    pub fn period_count(&self) -> usize {
        self.buckets.len()
    }

    /// Read every line from `reader` and bucket each record that parses.
    /// The first line is always a header and is dropped unread. Rejected
    /// lines are collected in the report, never fatal.
    pub fn load<R: BufRead>(&mut self, reader: R) -> Result<LoadReport> {
        let mut lines = reader.lines();
        if let Some(header) = lines.next() {
            header?;
        }

        let mut report = LoadReport {
            parsed: 0,
            rejected: Vec::new(),
        };
        for (idx, line) in lines.enumerate() {
            let line = line?;
            match parser::parse_line(&line) {
                Ok(record) => {
                    self.insert(record);
                    report.parsed += 1;
                }
                Err(error) => report.rejected.push(RejectedLine {
                    line_no: idx + 2,
                    raw: line,
                    error,
                }),
            }
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "YEAR,MONTH,VERSION,SKU,PROMOTION,CATEGORY,CHANNEL,OFFER,UNITS,U1,U2,U3,REGULAR,SELLING,COST,COMMISSION";

    fn line(year: u32, month: u32, price: f64) -> String {
        format!("{year},{month},ACTUALIZED,1,REGULAR PRICE,FRAGRANCE,CHANNEL1,2,1,1,0,0,10.0,{price},5.0,0")
    }

    fn load(content: &str) -> (PeriodIndex, LoadReport) {
        let mut index = PeriodIndex::new();
        let report = index.load(content.as_bytes()).unwrap();
        (index, report)
    }

    #[test]
    fn test_header_is_skipped_unconditionally() {
        // The header here would even parse as a data row; it must still go.
        let content = format!("{}\n{}\n", line(2023, 1, 10.0), line(2023, 1, 20.0));
        let (index, report) = load(&content);
        assert_eq!(report.parsed, 1);
        let (_, records) = index.iter().next().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].selling_price, 20.0);
    }

    #[test]
    fn test_buckets_iterate_ascending_by_year_then_month() {
        let content = format!(
            "{HEADER}\n{}\n{}\n{}\n{}\n",
            line(2024, 2, 1.0),
            line(2023, 12, 2.0),
            line(2024, 1, 3.0),
            line(2023, 5, 4.0),
        );
        let (index, report) = load(&content);
        assert_eq!(report.parsed, 4);
        let periods: Vec<(u32, u32)> = index.iter().map(|(p, _)| (p.year, p.month)).collect();
        assert_eq!(periods, vec![(2023, 5), (2023, 12), (2024, 1), (2024, 2)]);
    }

    #[test]
    fn test_bucket_keeps_file_order() {
        let content = format!(
            "{HEADER}\n{}\n{}\n{}\n",
            line(2023, 1, 30.0),
            line(2023, 1, 10.0),
            line(2023, 1, 20.0),
        );
        let (index, _) = load(&content);
        let (_, records) = index.iter().next().unwrap();
        let prices: Vec<f64> = records.iter().map(|r| r.selling_price).collect();
        assert_eq!(prices, vec![30.0, 10.0, 20.0]);
    }

    #[test]
    fn test_rejected_lines_are_collected_not_fatal() {
        let content = format!(
            "{HEADER}\n{}\nshort,line\n{}\n",
            line(2023, 1, 10.0),
            line(2023, 2, 20.0),
        );
        let (index, report) = load(&content);
        assert_eq!(report.parsed, 2);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].line_no, 3);
        assert_eq!(report.rejected[0].raw, "short,line");
        assert_eq!(index.period_count(), 2);
    }

    #[test]
    fn test_empty_input_yields_empty_report() {
        let (index, report) = load("");
        assert_eq!(report.parsed, 0);
        assert!(report.rejected.is_empty());
        assert_eq!(index.period_count(), 0);
    }

    #[test]
    fn test_no_bucket_for_rejected_only_period() {
        let content = format!("{HEADER}\n2025,7,bad-line\n");
        let (index, report) = load(&content);
        assert_eq!(report.parsed, 0);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(index.period_count(), 0);
    }
}
