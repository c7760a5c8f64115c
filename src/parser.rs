use crate::classifier;
use crate::error::LineError;
use crate::models::{Channel, Period, SaleRecord};

/// Positional tokens per line: year, month, version, sku, promotion,
/// category, channel name, offer id, four unit counts, regular price,
/// selling price, product cost, commission percent.
pub const REQUIRED_FIELDS: usize = 16;

const DELIMITER: char = ',';

/// Parse one raw export line into a `SaleRecord`.
///
/// Fields are split on the delimiter with no quoting or escaping: a delimiter
/// inside a field value shifts every later column. Any field failure rejects
/// the whole line; no partial record survives.
pub fn parse_line(line: &str) -> Result<SaleRecord, LineError> {
    let tokens: Vec<&str> = line.split(DELIMITER).collect();
    if tokens.len() < REQUIRED_FIELDS {
        return Err(LineError::TooFewFields {
            required: REQUIRED_FIELDS,
            found: tokens.len(),
        });
    }

    let period = Period {
        year: classifier::parse_period_part("year", tokens[0], 1970)?,
        month: classifier::parse_period_part("month", tokens[1], 1)?,
    };

    // The commission rate sits in the last column but belongs to the channel
    // named in column 6. That split is part of the file contract.
    let channel = Channel {
        name: classifier::channel_name(tokens[6]),
        commission_percent: classifier::parse_float("commission percent", tokens[15])?,
    };

    let sold_units = [
        classifier::parse_int("total units", tokens[8])?,
        classifier::parse_int("category1 units", tokens[9])?,
        classifier::parse_int("category2 units", tokens[10])?,
        classifier::parse_int("category3 units", tokens[11])?,
    ];

    Ok(SaleRecord {
        period,
        version: classifier::version(tokens[2]),
        sku_id: classifier::parse_int("sku id", tokens[3])?,
        promotion: classifier::promotion(tokens[4]),
        category: classifier::category(tokens[5]),
        channel,
        offer_id: classifier::parse_int("offer id", tokens[7])?,
        sold_units,
        regular_price: classifier::parse_float("regular price", tokens[12])?,
        selling_price: classifier::parse_float("selling price", tokens[13])?,
        product_cost: classifier::parse_float("product cost", tokens[14])?,
    })
}
