use colored::Colorize;
use comfy_table::Table;

use crate::cli::{load_index, print_rejections};
use crate::error::Result;
use crate::fmt::metric;
use crate::summary::{self, SummaryRow};

pub fn run(input: &str, json: bool) -> Result<()> {
    let (index, report) = load_index(input)?;
    print_rejections(&report);

    let rows = summary::summarize(&index);
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    if rows.is_empty() {
        println!("No records parsed.");
        return Ok(());
    }
    println!("{}", format_rollup(&rows));
    Ok(())
}

fn period_label(row: &SummaryRow) -> String {
    format!("{}-{:02}", row.year, row.month)
}

// ---------------------------------------------------------------------------
// Pure formatting (summary rows -> String)
// ---------------------------------------------------------------------------

pub fn format_rollup(rows: &[SummaryRow]) -> String {
    let mut sales = Table::new();
    sales.set_header(vec!["Period", "Total", "Category 1", "Category 2", "Category 3"]);
    for row in rows {
        sales.add_row(vec![
            period_label(row),
            metric(row.total_sales),
            metric(row.category1_sales),
            metric(row.category2_sales),
            metric(row.category3_sales),
        ]);
    }

    let price_header = vec![
        "Period", "All", "Beauty", "Fashion", "Home", "Channel 1", "Channel 2", "Channel 3",
    ];

    let mut mean = Table::new();
    mean.set_header(price_header.clone());
    for row in rows {
        mean.add_row(vec![
            period_label(row),
            metric(row.total_mean_price),
            metric(row.beauty_mean_price),
            metric(row.fashion_mean_price),
            metric(row.home_mean_price),
            metric(row.channel1_mean_price),
            metric(row.channel2_mean_price),
            metric(row.channel3_mean_price),
        ]);
    }

    let mut median = Table::new();
    median.set_header(price_header);
    for row in rows {
        median.add_row(vec![
            period_label(row),
            metric(row.total_median_price),
            metric(row.beauty_median_price),
            metric(row.fashion_median_price),
            metric(row.home_median_price),
            metric(row.channel1_median_price),
            metric(row.channel2_median_price),
            metric(row.channel3_median_price),
        ]);
    }

    format!(
        "{}\n{sales}\n\n{}\n{mean}\n\n{}\n{median}",
        "NET SALES".green().bold(),
        "MEAN SELLING PRICE".green().bold(),
        "MEDIAN SELLING PRICE".green().bold(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::PeriodIndex;
    use crate::models::{Category, Channel, ChannelName, Period, Promotion, SaleRecord, Version};

    fn sample_rows() -> Vec<SummaryRow> {
        let mut index = PeriodIndex::new();
        index.insert(SaleRecord {
            period: Period { year: 2023, month: 7 },
            version: Version::Actualized,
            sku_id: 1,
            promotion: Promotion::RegularPrice,
            category: Category::Beauty,
            channel: Channel {
                name: ChannelName::Channel1,
                commission_percent: 0.0,
            },
            offer_id: 1,
            sold_units: [2, 1, 0, 0],
            regular_price: 15.0,
            selling_price: 12.5,
            product_cost: 5.0,
        });
        summary::summarize(&index)
    }

    #[test]
    fn test_format_rollup_contains_sections_and_metrics() {
        let out = format_rollup(&sample_rows());
        assert!(out.contains("NET SALES"));
        assert!(out.contains("MEAN SELLING PRICE"));
        assert!(out.contains("MEDIAN SELLING PRICE"));
        assert!(out.contains("2023-07"));
        assert!(out.contains("25.00")); // 2 units * 12.5
        assert!(out.contains("12.50"));
    }
}
