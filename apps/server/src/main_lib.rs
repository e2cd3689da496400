use std::sync::Arc;

use crate::config::Config;
use stock_analytics_market_data::{FmpProvider, StockDataProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub provider: Arc<dyn StockDataProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn StockDataProvider>) -> Arc<Self> {
        Arc::new(Self { provider })
    }
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = FmpProvider::with_base_url(config.fmp_base_url.clone(), config.fmp_api_key.clone());
    tracing::info!(
        "Upstream provider {} at {}",
        provider.id(),
        config.fmp_base_url
    );
    Ok(AppState::new(Arc::new(provider)))
}
