/// One (year, month) aggregation bucket key. `Ord` is year-major, so a
/// BTreeMap keyed by `Period` iterates in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Period {
    pub year: u32,
    pub month: u32,
}

/// Whether a record reflects realized sales or a forward plan. Planned
/// records never contribute to sales totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    Actualized,
    Planned,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Promotion {
    StraightDiscounting,
    CombinationOffers,
    /// In the taxonomy but absent from the feed's label set, so
    /// classification never produces it.
    #[allow(dead_code)]
    RepresentativeOffer,
    RegularPrice,
    ConditionalContingentOffer,
    GwpPwpOrderBuilders,
    InstantExpressDelivery,
    None,
}

/// Top-level product bucket derived from the raw sub-category label.
/// Unrecognized labels land in `None` rather than failing the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Beauty,
    Fashion,
    Home,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelName {
    Channel1,
    Channel2,
    Channel3,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Channel {
    pub name: ChannelName,
    /// Commission rate in percent; reduces the net value of a sale.
    pub commission_percent: f64,
}

/// One transaction line, immutable once the parser has built it.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct SaleRecord {
    pub period: Period,
    pub version: Version,
    pub sku_id: i64,
    pub promotion: Promotion,
    pub category: Category,
    pub channel: Channel,
    pub offer_id: i64,
    /// [total, category1, category2, category3]; -1 marks an absent count.
    pub sold_units: [i64; 4],
    pub regular_price: f64,
    pub selling_price: f64,
    pub product_cost: f64,
}
