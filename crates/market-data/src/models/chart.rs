use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::coerce;
use super::format::{fmp_date, fmp_datetime};
use crate::errors::MarketDataError;

/// One end-of-day bar from `/historical-price-full`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct HistoricalDataPoint {
    #[serde(with = "fmp_date")]
    pub date: NaiveDate,

    #[serde(deserialize_with = "coerce::decimal")]
    pub open: Decimal,

    #[serde(deserialize_with = "coerce::decimal")]
    pub high: Decimal,

    #[serde(deserialize_with = "coerce::decimal")]
    pub low: Decimal,

    #[serde(deserialize_with = "coerce::decimal")]
    pub close: Decimal,

    /// Close adjusted for splits and dividends
    #[serde(deserialize_with = "coerce::decimal")]
    pub adj_close: Decimal,

    #[serde(deserialize_with = "coerce::unsigned")]
    pub volume: u64,

    #[serde(deserialize_with = "coerce::unsigned")]
    pub unadjusted_volume: u64,

    #[serde(deserialize_with = "coerce::decimal")]
    pub change: Decimal,

    #[serde(deserialize_with = "coerce::decimal")]
    pub change_percent: Decimal,

    /// Volume-weighted average price
    #[serde(deserialize_with = "coerce::decimal")]
    pub vwap: Decimal,
}

/// One intraday bar from `/historical-chart/{interval}`.
///
/// Sequences are kept in provider order and are not checked for ordering
/// or gaps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    #[serde(with = "fmp_datetime")]
    pub date: NaiveDateTime,

    #[serde(deserialize_with = "coerce::decimal")]
    pub open: Decimal,

    #[serde(deserialize_with = "coerce::decimal")]
    pub low: Decimal,

    #[serde(deserialize_with = "coerce::decimal")]
    pub high: Decimal,

    #[serde(deserialize_with = "coerce::decimal")]
    pub close: Decimal,

    #[serde(deserialize_with = "coerce::unsigned")]
    pub volume: u64,
}

/// Bar width served by the intraday chart endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChartInterval {
    OneMinute,
    #[default]
    FiveMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    OneHour,
    FourHours,
}

impl ChartInterval {
    pub const ALL: [ChartInterval; 6] = [
        ChartInterval::OneMinute,
        ChartInterval::FiveMinutes,
        ChartInterval::FifteenMinutes,
        ChartInterval::ThirtyMinutes,
        ChartInterval::OneHour,
        ChartInterval::FourHours,
    ];

    /// Path segment the provider expects for this interval.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartInterval::OneMinute => "1min",
            ChartInterval::FiveMinutes => "5min",
            ChartInterval::FifteenMinutes => "15min",
            ChartInterval::ThirtyMinutes => "30min",
            ChartInterval::OneHour => "1hour",
            ChartInterval::FourHours => "4hour",
        }
    }
}

impl fmt::Display for ChartInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartInterval {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ChartInterval::ALL
            .into_iter()
            .find(|interval| interval.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MarketDataError::UnsupportedInterval(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn historical_point_keeps_eleven_fields() {
        let point: HistoricalDataPoint = serde_json::from_value(json!({
            "date": "2024-03-15",
            "open": 171.17,
            "high": 172.62,
            "low": 170.29,
            "close": 172.62,
            "adjClose": 172.39,
            "volume": 121664700,
            "unadjustedVolume": 121664700,
            "change": 1.45,
            "changePercent": 0.84711,
            "vwap": 171.84,
            "label": "March 15, 24",
            "changeOverTime": 0.0084711
        }))
        .unwrap();

        assert_eq!(point.adj_close, dec!(172.39));
        let out = serde_json::to_value(&point).unwrap();
        let fields = out.as_object().unwrap();
        assert_eq!(fields.len(), 11);
        assert_eq!(out["date"], "2024-03-15");
        assert_eq!(out["unadjusted_volume"], 121_664_700u64);
        assert!(fields.get("label").is_none());
    }

    #[test]
    fn chart_point_parses_intraday_timestamp() {
        let point: ChartPoint = serde_json::from_value(json!({
            "date": "2024-03-15 15:55:00",
            "open": 172.5,
            "low": 172.41,
            "high": 172.7,
            "close": 172.62,
            "volume": 2101234
        }))
        .unwrap();

        assert_eq!(point.date.to_string(), "2024-03-15 15:55:00");
        assert_eq!(
            serde_json::to_value(&point).unwrap()["date"],
            "2024-03-15 15:55:00"
        );
    }

    #[test]
    fn interval_round_trips_through_path_segment() {
        for interval in ChartInterval::ALL {
            assert_eq!(interval.as_str().parse::<ChartInterval>().unwrap(), interval);
        }
        assert_eq!("5MIN".parse::<ChartInterval>().unwrap(), ChartInterval::FiveMinutes);
        assert_eq!(ChartInterval::default().to_string(), "5min");
    }

    #[test]
    fn unknown_interval_is_rejected() {
        let err = "2min".parse::<ChartInterval>().unwrap_err();
        assert!(matches!(err, MarketDataError::UnsupportedInterval(ref s) if s == "2min"));
    }
}
