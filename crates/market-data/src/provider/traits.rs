//! Stock data provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{ChartInterval, ChartPoint, CompanyProfile, HistoricalDataPoint, Quote};

/// Trait for upstream stock data sources.
///
/// Each method is one upstream round trip. "No data" is a successful
/// outcome (`None` or an empty `Vec`); only transport failures, non-2xx
/// statuses and undecodable payloads are errors. Callers decide whether
/// missing data is a not-found condition.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use stock_analytics_market_data::StockDataProvider;
///
/// struct FixtureProvider;
///
/// #[async_trait]
/// impl StockDataProvider for FixtureProvider {
///     fn id(&self) -> &'static str {
///         "FIXTURE"
///     }
///
///     async fn get_quote(&self, symbol: &str) -> Result<Option<Quote>, MarketDataError> {
///         Ok(None)
///     }
///
///     // ... implement the remaining fetches
/// }
/// ```
#[async_trait]
pub trait StockDataProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Latest quote, or `None` when the provider has no quote for `symbol`.
    async fn get_quote(&self, symbol: &str) -> Result<Option<Quote>, MarketDataError>;

    /// Company profile, or `None` when the provider has no profile for `symbol`.
    async fn get_profile(&self, symbol: &str) -> Result<Option<CompanyProfile>, MarketDataError>;

    /// Full daily history in provider order. Empty when there is none.
    async fn get_daily_history(
        &self,
        symbol: &str,
    ) -> Result<Vec<HistoricalDataPoint>, MarketDataError>;

    /// Intraday bars of the given width in provider order. Empty when there are none.
    async fn get_intraday_chart(
        &self,
        symbol: &str,
        interval: ChartInterval,
    ) -> Result<Vec<ChartPoint>, MarketDataError>;
}
