//! Combined profile/quote/intraday overview.

use futures::try_join;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::{ChartInterval, StockOverview};
use crate::provider::StockDataProvider;

/// Fetch profile, quote and 5-minute chart for `symbol` concurrently.
///
/// All three calls are joined; the first failure aborts the whole overview
/// and the other in-flight calls are dropped. Missing parts are fine as long
/// as at least one part has data, otherwise the symbol is reported as not
/// found.
pub async fn fetch_overview(
    provider: &dyn StockDataProvider,
    symbol: &str,
) -> Result<StockOverview, MarketDataError> {
    let (profile, quote, chart_intraday) = try_join!(
        provider.get_profile(symbol),
        provider.get_quote(symbol),
        provider.get_intraday_chart(symbol, ChartInterval::FiveMinutes),
    )?;

    let overview = StockOverview {
        profile,
        quote,
        chart_intraday,
    };

    if overview.is_empty() {
        return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
    }

    debug!(
        "{} overview for {}: profile={} quote={} chart_points={}",
        provider.id(),
        symbol,
        overview.profile.is_some(),
        overview.quote.is_some(),
        overview.chart_intraday.len()
    );
    Ok(overview)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{ChartPoint, CompanyProfile, HistoricalDataPoint, Quote};

    #[derive(Default)]
    struct StubProvider {
        profile: Option<CompanyProfile>,
        quote: Option<Quote>,
        chart: Vec<ChartPoint>,
        fail_chart_with: Option<u16>,
        intervals: Mutex<Vec<ChartInterval>>,
    }

    #[async_trait]
    impl StockDataProvider for StubProvider {
        fn id(&self) -> &'static str {
            "STUB"
        }

        async fn get_quote(&self, _symbol: &str) -> Result<Option<Quote>, MarketDataError> {
            Ok(self.quote.clone())
        }

        async fn get_profile(
            &self,
            _symbol: &str,
        ) -> Result<Option<CompanyProfile>, MarketDataError> {
            Ok(self.profile.clone())
        }

        async fn get_daily_history(
            &self,
            _symbol: &str,
        ) -> Result<Vec<HistoricalDataPoint>, MarketDataError> {
            Ok(Vec::new())
        }

        async fn get_intraday_chart(
            &self,
            _symbol: &str,
            interval: ChartInterval,
        ) -> Result<Vec<ChartPoint>, MarketDataError> {
            self.intervals.lock().unwrap().push(interval);
            if let Some(status) = self.fail_chart_with {
                return Err(MarketDataError::UpstreamStatus {
                    provider: "STUB".to_string(),
                    status,
                    body: "upstream down".to_string(),
                });
            }
            Ok(self.chart.clone())
        }
    }

    fn quote() -> Quote {
        Quote {
            symbol: "AAPL".to_string(),
            name: "Apple Inc.".to_string(),
            price: dec!(187.44),
            changes_percentage: dec!(1.2345),
            change: dec!(2.29),
            day_low: dec!(185.1),
            day_high: dec!(188.0),
            market_cap: Some(2_915_000_000_000),
            volume: 51_234_567,
            exchange: "NASDAQ".to_string(),
        }
    }

    fn chart_point() -> ChartPoint {
        ChartPoint {
            date: NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(15, 55, 0)
                .unwrap(),
            open: dec!(172.5),
            low: dec!(172.41),
            high: dec!(172.7),
            close: dec!(172.62),
            volume: 2_101_234,
        }
    }

    #[tokio::test]
    async fn test_missing_profile_still_succeeds() {
        let provider = StubProvider {
            quote: Some(quote()),
            chart: vec![chart_point()],
            ..Default::default()
        };

        let overview = fetch_overview(&provider, "AAPL").await.unwrap();
        assert!(overview.profile.is_none());
        assert_eq!(overview.quote, Some(quote()));
        assert_eq!(overview.chart_intraday.len(), 1);
    }

    #[tokio::test]
    async fn test_chart_alone_is_enough() {
        let provider = StubProvider {
            chart: vec![chart_point()],
            ..Default::default()
        };

        let overview = fetch_overview(&provider, "AAPL").await.unwrap();
        assert!(overview.profile.is_none());
        assert!(overview.quote.is_none());
    }

    #[tokio::test]
    async fn test_all_parts_missing_is_symbol_not_found() {
        let provider = StubProvider::default();

        let err = fetch_overview(&provider, "ZZZZ").await.unwrap_err();
        assert!(matches!(err, MarketDataError::SymbolNotFound(ref s) if s == "ZZZZ"));
    }

    #[tokio::test]
    async fn test_one_failed_call_aborts_overview() {
        let provider = StubProvider {
            quote: Some(quote()),
            fail_chart_with: Some(503),
            ..Default::default()
        };

        let err = fetch_overview(&provider, "AAPL").await.unwrap_err();
        assert_eq!(err.upstream_status(), Some(503));
    }

    #[tokio::test]
    async fn test_chart_is_requested_at_five_minutes() {
        let provider = StubProvider {
            quote: Some(quote()),
            ..Default::default()
        };

        fetch_overview(&provider, "AAPL").await.unwrap();
        assert_eq!(
            *provider.intervals.lock().unwrap(),
            vec![ChartInterval::FiveMinutes]
        );
    }
}
