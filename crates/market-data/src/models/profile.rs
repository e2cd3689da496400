use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::coerce;

/// Company profile from the provider's `/profile` endpoint.
///
/// Numeric fields are required; free-text fields the provider leaves null
/// for some listings (funds, ADRs, delisted names) are optional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct CompanyProfile {
    pub symbol: String,

    #[serde(deserialize_with = "coerce::decimal")]
    pub price: Decimal,

    #[serde(deserialize_with = "coerce::decimal")]
    pub beta: Decimal,

    /// Average traded volume
    #[serde(deserialize_with = "coerce::unsigned")]
    pub vol_avg: u64,

    /// Market capitalization
    #[serde(deserialize_with = "coerce::unsigned")]
    pub mkt_cap: u64,

    /// Last dividend paid per share
    #[serde(deserialize_with = "coerce::decimal")]
    pub last_div: Decimal,

    /// 52-week range, e.g. "164.08-199.62"
    #[serde(default)]
    pub range: Option<String>,

    pub company_name: String,

    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub isin: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub website: Option<String>,

    /// Logo image URL
    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub ceo: Option<String>,

    #[serde(default)]
    pub sector: Option<String>,

    #[serde(default)]
    pub country: Option<String>,

    #[serde(default)]
    pub industry: Option<String>,

    #[serde(default)]
    pub exchange: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn maps_upstream_profile() {
        let profile: CompanyProfile = serde_json::from_value(json!({
            "symbol": "AAPL",
            "price": 187.44,
            "beta": 1.286,
            "volAvg": 58405568,
            "mktCap": 2915000000000u64,
            "lastDiv": 0.96,
            "range": "164.08-199.62",
            "changes": 2.29,
            "companyName": "Apple Inc.",
            "currency": "USD",
            "cik": "0000320193",
            "isin": "US0378331005",
            "cusip": "037833100",
            "exchange": "NASDAQ Global Select",
            "exchangeShortName": "NASDAQ",
            "industry": "Consumer Electronics",
            "website": "https://www.apple.com",
            "description": "Apple Inc. designs, manufactures, and markets smartphones.",
            "ceo": "Mr. Timothy D. Cook",
            "sector": "Technology",
            "country": "US",
            "fullTimeEmployees": "161000",
            "image": "https://financialmodelingprep.com/image-stock/AAPL.png",
            "ipoDate": "1980-12-12",
            "isEtf": false
        }))
        .unwrap();

        assert_eq!(profile.company_name, "Apple Inc.");
        assert_eq!(profile.vol_avg, 58_405_568);
        assert_eq!(profile.last_div, dec!(0.96));
        assert_eq!(profile.isin.as_deref(), Some("US0378331005"));

        let out = serde_json::to_value(&profile).unwrap();
        assert_eq!(out["company_name"], "Apple Inc.");
        assert_eq!(out["mkt_cap"], 2_915_000_000_000u64);
        assert!(out.get("companyName").is_none());
        assert!(out.get("cusip").is_none());
    }

    #[test]
    fn null_text_fields_are_kept_as_none() {
        let profile: CompanyProfile = serde_json::from_value(json!({
            "symbol": "SPY",
            "price": "512.1",
            "beta": 1,
            "volAvg": "75000000",
            "mktCap": 0,
            "lastDiv": 6.8,
            "companyName": "SPDR S&P 500 ETF Trust",
            "ceo": null,
            "sector": null,
            "isin": null
        }))
        .unwrap();

        assert_eq!(profile.price, dec!(512.1));
        assert_eq!(profile.ceo, None);
        assert_eq!(profile.range, None);
        assert_eq!(
            serde_json::to_value(&profile).unwrap()["sector"],
            serde_json::Value::Null
        );
    }
}
