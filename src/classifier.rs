use crate::error::LineError;
use crate::models::{Category, ChannelName, Promotion, Version};

// ---------------------------------------------------------------------------
// Numeric defaulting
// ---------------------------------------------------------------------------
//
// The export leaves unknown values as empty fields. Empty is fine and falls
// back to a documented default; anything non-empty must parse, or the whole
// line is rejected.

/// Id and unit-count fields: empty means absent (-1).
pub fn parse_int(field: &'static str, raw: &str) -> Result<i64, LineError> {
    if raw.is_empty() {
        return Ok(-1);
    }
    raw.parse().map_err(|_| LineError::BadNumber {
        field,
        value: raw.to_string(),
    })
}

/// Money and commission fields: empty means zero.
pub fn parse_float(field: &'static str, raw: &str) -> Result<f64, LineError> {
    if raw.is_empty() {
        return Ok(0.0);
    }
    raw.parse().map_err(|_| LineError::BadNumber {
        field,
        value: raw.to_string(),
    })
}

/// Period fields: an empty year falls back to 1970, an empty month to 1.
pub fn parse_period_part(
    field: &'static str,
    raw: &str,
    default: u32,
) -> Result<u32, LineError> {
    if raw.is_empty() {
        return Ok(default);
    }
    raw.parse().map_err(|_| LineError::BadNumber {
        field,
        value: raw.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Taxonomy lookups
// ---------------------------------------------------------------------------
//
// Closed, case-sensitive label sets from the upstream feed. A label outside
// a set classifies as the None variant — the deliberate unknown bucket, not
// a parse failure.

const BEAUTY_LABELS: &[&str] = &["FRAGRANCE", "SKIN CARE", "HAIR CARE", "COLOR"];
const FASHION_LABELS: &[&str] = &[
    "INNERWEAR",
    "ACCESSORIES",
    "JEWELRY",
    "WATCHES",
    "FOOTWEAR",
    "OUTERWEAR",
];
const HOME_LABELS: &[&str] = &[
    "KIDS",
    "DECORATIVE",
    "WELLBEING",
    "HOUSEWARE",
    "ENTERTAINMENT",
];

pub fn version(raw: &str) -> Version {
    match raw {
        "ACTUALIZED" => Version::Actualized,
        "PLANNED" => Version::Planned,
        _ => Version::None,
    }
}

// The feed never labels REPRESENTATIVE OFFER, so that variant is absent here.
pub fn promotion(raw: &str) -> Promotion {
    match raw {
        "STRAIGHT DISCOUNTING" => Promotion::StraightDiscounting,
        "COMBINATION OFFERS" => Promotion::CombinationOffers,
        "REGULAR PRICE" => Promotion::RegularPrice,
        "CONDITIONAL/CONTINGENT OFFER" => Promotion::ConditionalContingentOffer,
        "GWP/PWP/ORDER BUILDERS" => Promotion::GwpPwpOrderBuilders,
        "INSTANT/EXPRESS DELIVERY" => Promotion::InstantExpressDelivery,
        _ => Promotion::None,
    }
}

pub fn category(raw: &str) -> Category {
    if BEAUTY_LABELS.contains(&raw) {
        Category::Beauty
    } else if FASHION_LABELS.contains(&raw) {
        Category::Fashion
    } else if HOME_LABELS.contains(&raw) {
        Category::Home
    } else {
        Category::None
    }
}

pub fn channel_name(raw: &str) -> ChannelName {
    match raw {
        "CHANNEL1" => ChannelName::Channel1,
        "CHANNEL2" => ChannelName::Channel2,
        "CHANNEL3" => ChannelName::Channel3,
        _ => ChannelName::None,
    }
}
