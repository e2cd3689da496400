//! Lenient numeric deserializers for upstream payloads.
//!
//! The provider is not consistent about number encoding: the same field may
//! arrive as `12.5`, `"12.5"`, `1.25e1` or, for counts, `1200.0`. These
//! helpers accept all of them and reject anything that does not describe the
//! target type exactly.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumericInput {
    Number(serde_json::Number),
    String(String),
}

fn parse_decimal(value: &str) -> Result<Decimal, String> {
    let trimmed = value.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|e| format!("Invalid decimal value '{}': {}", value, e))
}

fn float_to_unsigned(value: f64) -> Result<u64, String> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
        Ok(value as u64)
    } else {
        Err(format!("Invalid unsigned value '{}'", value))
    }
}

fn parse_unsigned(value: &str) -> Result<u64, String> {
    let trimmed = value.trim();
    if let Ok(parsed) = trimmed.parse::<u64>() {
        return Ok(parsed);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| format!("Invalid unsigned value '{}'", value))
        .and_then(float_to_unsigned)
}

impl NumericInput {
    fn into_decimal(self) -> Result<Decimal, String> {
        match self {
            NumericInput::Number(n) => parse_decimal(&n.to_string()),
            NumericInput::String(s) => parse_decimal(&s),
        }
    }

    fn into_unsigned(self) -> Result<u64, String> {
        match self {
            NumericInput::Number(n) => match n.as_u64() {
                Some(v) => Ok(v),
                None => n
                    .as_f64()
                    .ok_or_else(|| format!("Invalid unsigned value '{}'", n))
                    .and_then(float_to_unsigned),
            },
            NumericInput::String(s) => parse_unsigned(&s),
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, NumericInput::String(s) if s.trim().is_empty())
    }
}

pub fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    NumericInput::deserialize(deserializer)?
        .into_decimal()
        .map_err(serde::de::Error::custom)
}

pub fn option_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumericInput>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.is_blank() => Ok(None),
        Some(raw) => raw
            .into_decimal()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

pub fn unsigned<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    NumericInput::deserialize(deserializer)?
        .into_unsigned()
        .map_err(serde::de::Error::custom)
}

pub fn option_unsigned<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumericInput>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.is_blank() => Ok(None),
        Some(raw) => raw
            .into_unsigned()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "super::decimal")]
        price: rust_decimal::Decimal,
        #[serde(default, deserialize_with = "super::option_decimal")]
        beta: Option<rust_decimal::Decimal>,
        #[serde(deserialize_with = "super::unsigned")]
        volume: u64,
        #[serde(default, deserialize_with = "super::option_unsigned")]
        market_cap: Option<u64>,
    }

    fn sample(value: serde_json::Value) -> Result<Sample, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn accepts_plain_numbers() {
        let s = sample(json!({"price": 187.44, "beta": 1.29, "volume": 51234567, "market_cap": 2915000000000u64}))
            .unwrap();
        assert_eq!(s.price, dec!(187.44));
        assert_eq!(s.beta, Some(dec!(1.29)));
        assert_eq!(s.volume, 51_234_567);
        assert_eq!(s.market_cap, Some(2_915_000_000_000));
    }

    #[test]
    fn accepts_numeric_strings_and_integral_floats() {
        let s = sample(json!({"price": " 12.50 ", "volume": 1200.0, "market_cap": "3.5e9"})).unwrap();
        assert_eq!(s.price, dec!(12.50));
        assert_eq!(s.volume, 1200);
        assert_eq!(s.market_cap, Some(3_500_000_000));
        assert_eq!(s.beta, None);
    }

    #[test]
    fn accepts_scientific_notation_for_decimals() {
        let s = sample(json!({"price": "1.5e-3", "volume": 1})).unwrap();
        assert_eq!(s.price, dec!(0.0015));
    }

    #[test]
    fn treats_null_and_blank_optionals_as_missing() {
        let s = sample(json!({"price": 1, "beta": null, "volume": 1, "market_cap": ""})).unwrap();
        assert_eq!(s.beta, None);
        assert_eq!(s.market_cap, None);
    }

    #[test]
    fn rejects_fractional_or_negative_counts() {
        assert!(sample(json!({"price": 1, "volume": 10.5})).is_err());
        assert!(sample(json!({"price": 1, "volume": -3})).is_err());
        assert!(sample(json!({"price": 1, "volume": "lots"})).is_err());
    }

    #[test]
    fn rejects_non_numeric_prices() {
        assert!(sample(json!({"price": "n/a", "volume": 1})).is_err());
        assert!(sample(json!({"price": null, "volume": 1})).is_err());
    }
}
