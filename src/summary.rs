use serde::Serialize;

use crate::index::PeriodIndex;
use crate::models::{Category, ChannelName, Period, Promotion, SaleRecord, Version};

/// One output row per period: the period plus 18 computed metrics.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub year: u32,
    pub month: u32,
    pub total_sales: f64,
    pub category1_sales: f64,
    pub category2_sales: f64,
    pub category3_sales: f64,
    pub total_mean_price: f64,
    pub beauty_mean_price: f64,
    pub fashion_mean_price: f64,
    pub home_mean_price: f64,
    pub total_median_price: f64,
    pub beauty_median_price: f64,
    pub fashion_median_price: f64,
    pub home_median_price: f64,
    pub channel1_mean_price: f64,
    pub channel2_mean_price: f64,
    pub channel3_mean_price: f64,
    pub channel1_median_price: f64,
    pub channel2_median_price: f64,
    pub channel3_median_price: f64,
}

impl SummaryRow {
    /// Metric values in rollup-file column order (everything after year and
    /// month).
    pub fn metrics(&self) -> [f64; 18] {
        [
            self.total_sales,
            self.category1_sales,
            self.category2_sales,
            self.category3_sales,
            self.total_mean_price,
            self.beauty_mean_price,
            self.fashion_mean_price,
            self.home_mean_price,
            self.total_median_price,
            self.beauty_median_price,
            self.fashion_median_price,
            self.home_median_price,
            self.channel1_mean_price,
            self.channel2_mean_price,
            self.channel3_mean_price,
            self.channel1_median_price,
            self.channel2_median_price,
            self.channel3_median_price,
        ]
    }
}

/// Aggregate every period bucket into a summary row, ascending (year, month).
pub fn summarize(index: &PeriodIndex) -> Vec<SummaryRow> {
    index
        .iter()
        .map(|(period, records)| summarize_bucket(*period, records))
        .collect()
}

fn summarize_bucket(period: Period, records: &[SaleRecord]) -> SummaryRow {
    // Price-ascending copy. The sort is stable, so equal prices keep file
    // order, but tie order is not part of the output contract.
    let mut sorted: Vec<&SaleRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.selling_price.total_cmp(&b.selling_price));

    let all = price_view(&sorted, |_| true);
    let beauty = price_view(&sorted, |r| r.category == Category::Beauty);
    let fashion = price_view(&sorted, |r| r.category == Category::Fashion);
    let home = price_view(&sorted, |r| r.category == Category::Home);
    let channel1 = price_view(&sorted, |r| r.channel.name == ChannelName::Channel1);
    let channel2 = price_view(&sorted, |r| r.channel.name == ChannelName::Channel2);
    let channel3 = price_view(&sorted, |r| r.channel.name == ChannelName::Channel3);

    SummaryRow {
        year: period.year,
        month: period.month,
        total_sales: sales(&sorted, 0),
        category1_sales: sales(&sorted, 1),
        category2_sales: sales(&sorted, 2),
        category3_sales: sales(&sorted, 3),
        total_mean_price: mean_price(&all),
        beauty_mean_price: mean_price(&beauty),
        fashion_mean_price: mean_price(&fashion),
        home_mean_price: mean_price(&home),
        total_median_price: median_price(&all),
        beauty_median_price: median_price(&beauty),
        fashion_median_price: median_price(&fashion),
        home_median_price: median_price(&home),
        channel1_mean_price: mean_price(&channel1),
        channel2_mean_price: mean_price(&channel2),
        channel3_mean_price: mean_price(&channel3),
        channel1_median_price: median_price(&channel1),
        channel2_median_price: median_price(&channel2),
        channel3_median_price: median_price(&channel3),
    }
}

/// Records visible to the price statistics: GWP/PWP/order-builder promotions
/// are always dropped first, then the view's own predicate applies. Sales
/// totals do NOT use these views.
fn price_view<'a>(
    sorted: &[&'a SaleRecord],
    pred: impl Fn(&SaleRecord) -> bool,
) -> Vec<&'a SaleRecord> {
    sorted
        .iter()
        .copied()
        .filter(|&r| r.promotion != Promotion::GwpPwpOrderBuilders && pred(r))
        .collect()
}

/// Net sales over one unit-count slot (0 = total, 1..4 = category slots):
/// units * selling price, less the channel commission. Planned records are
/// excluded entirely; promotion type is not.
fn sales(records: &[&SaleRecord], slot: usize) -> f64 {
    records
        .iter()
        .filter(|r| r.version != Version::Planned)
        .map(|r| {
            r.sold_units[slot] as f64
                * r.selling_price
                * (1.0 - r.channel.commission_percent / 100.0)
        })
        .sum()
}

fn mean_price(records: &[&SaleRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let total: f64 = records.iter().map(|r| r.selling_price).sum();
    total / records.len() as f64
}

/// Selling price of the element at index `len / 2` of the price-sorted view.
/// For even sizes this is the lower of the two middle ranks, not their
/// average — not the textbook median, but downstream consumers depend on the
/// exact rule, so it stays.
fn median_price(records: &[&SaleRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    records[records.len() / 2].selling_price
}
