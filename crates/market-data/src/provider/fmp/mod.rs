//! FinancialModelingPrep (FMP) market data provider implementation.
//!
//! This module provides market data from the FMP v3 API:
//! - Latest quotes via /quote
//! - Company profiles via /profile
//! - Daily history via /historical-price-full
//! - Intraday bars via /historical-chart/{interval}
//!
//! The API key travels as the `apikey` query parameter on every request.
//! API documentation: https://site.financialmodelingprep.com/developer/docs

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::models::{ChartInterval, ChartPoint, CompanyProfile, HistoricalDataPoint, Quote};
use crate::provider::StockDataProvider;

/// Production base URL of the FMP v3 API.
pub const DEFAULT_BASE_URL: &str = "https://financialmodelingprep.com/api/v3";
const PROVIDER_ID: &str = "FMP";

// ============================================================================
// FmpProvider
// ============================================================================

/// FinancialModelingPrep market data provider.
///
/// Holds one `reqwest::Client`; its connection pool is shared by all
/// requests. No retries and no timeout beyond the client defaults.
pub struct FmpProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl FmpProvider {
    /// Create a provider against the production API.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Create a provider against an alternative base URL (staging, mocks).
    pub fn with_base_url(base_url: impl Into<String>, api_key: String) -> Self {
        let client = Client::builder()
            .user_agent(concat!("stock-analytics/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Make a GET request to `{base_url}{path}?apikey={key}`.
    ///
    /// Returns `Ok(None)` when the body carries no data: blank, `null`,
    /// `[]` or `{}`.
    async fn fetch(&self, path: &str) -> Result<Option<Value>, MarketDataError> {
        let url = format!("{}{}", self.base_url, path);

        debug!("FMP request: {}", path);

        // Strip the URL from transport errors: it carries the API key.
        let response = self
            .client
            .get(&url)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| MarketDataError::Network(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("FMP request {} failed with HTTP {}", path, status.as_u16());
            return Err(MarketDataError::UpstreamStatus {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| MarketDataError::Network(e.without_url()))?;
        debug!("FMP response: {} ({} bytes)", path, body.len());

        parse_body(&body)
    }

    /// Decode the first element of a list payload.
    ///
    /// Anything other than a non-empty list means "no record".
    fn first_record<T: DeserializeOwned>(
        payload: Option<Value>,
    ) -> Result<Option<T>, MarketDataError> {
        match payload {
            Some(Value::Array(items)) => items.into_iter().next().map(decode).transpose(),
            _ => Ok(None),
        }
    }

    /// Decode every element of a list payload. Non-lists decode to nothing.
    fn records<T: DeserializeOwned>(payload: Option<Value>) -> Result<Vec<T>, MarketDataError> {
        match payload {
            Some(Value::Array(items)) => items.into_iter().map(decode).collect(),
            _ => Ok(Vec::new()),
        }
    }
}

fn parse_body(body: &str) -> Result<Option<Value>, MarketDataError> {
    if body.trim().is_empty() {
        return Ok(None);
    }

    let value: Value =
        serde_json::from_str(body).map_err(|e| MarketDataError::InvalidResponse {
            provider: PROVIDER_ID.to_string(),
            message: format!("Failed to parse response: {}", e),
        })?;

    let empty = match &value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    };
    Ok(if empty { None } else { Some(value) })
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, MarketDataError> {
    serde_json::from_value(value).map_err(|e| MarketDataError::InvalidResponse {
        provider: PROVIDER_ID.to_string(),
        message: format!("Unexpected record shape: {}", e),
    })
}

#[async_trait]
impl StockDataProvider for FmpProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_quote(&self, symbol: &str) -> Result<Option<Quote>, MarketDataError> {
        let payload = self.fetch(&format!("/quote/{}", encode(symbol))).await?;
        Self::first_record(payload)
    }

    async fn get_profile(&self, symbol: &str) -> Result<Option<CompanyProfile>, MarketDataError> {
        let payload = self.fetch(&format!("/profile/{}", encode(symbol))).await?;
        Self::first_record(payload)
    }

    async fn get_daily_history(
        &self,
        symbol: &str,
    ) -> Result<Vec<HistoricalDataPoint>, MarketDataError> {
        let payload = self
            .fetch(&format!("/historical-price-full/{}", encode(symbol)))
            .await?;

        let historical = match payload {
            Some(Value::Object(mut fields)) => fields.remove("historical"),
            _ => None,
        };
        Self::records(historical)
    }

    async fn get_intraday_chart(
        &self,
        symbol: &str,
        interval: ChartInterval,
    ) -> Result<Vec<ChartPoint>, MarketDataError> {
        let payload = self
            .fetch(&format!(
                "/historical-chart/{}/{}",
                interval.as_str(),
                encode(symbol)
            ))
            .await?;
        Self::records(payload)
    }
}
