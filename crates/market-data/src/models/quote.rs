use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::coerce;

/// Latest market quote for a ticker.
///
/// Deserializes from the provider's camelCase `/quote` record and serializes
/// with snake_case keys. Keys the provider sends beyond these are dropped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Quote {
    /// Ticker symbol
    pub symbol: String,

    /// Display name of the instrument
    pub name: String,

    /// Last traded price
    #[serde(deserialize_with = "coerce::decimal")]
    pub price: Decimal,

    /// Change against previous close, in percent
    #[serde(deserialize_with = "coerce::decimal")]
    pub changes_percentage: Decimal,

    /// Absolute change against previous close
    #[serde(deserialize_with = "coerce::decimal")]
    pub change: Decimal,

    #[serde(deserialize_with = "coerce::decimal")]
    pub day_low: Decimal,

    #[serde(deserialize_with = "coerce::decimal")]
    pub day_high: Decimal,

    /// Market capitalization, absent for instruments without one (indices, FX)
    #[serde(default, deserialize_with = "coerce::option_unsigned")]
    pub market_cap: Option<u64>,

    #[serde(deserialize_with = "coerce::unsigned")]
    pub volume: u64,

    /// Exchange code (e.g., "NASDAQ")
    pub exchange: String,
}
