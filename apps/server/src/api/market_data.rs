use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult, ErrorBody},
    main_lib::AppState,
    models::{ChartPoint, HistoricalDataPoint, Quote, StockOverview},
};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use stock_analytics_market_data::{fetch_overview, ChartInterval};

/// Latest quote for a ticker.
#[utoipa::path(
    get,
    path = "/api/quote/{ticker}",
    params(("ticker" = String, Path, description = "Ticker symbol")),
    responses(
        (status = 200, body = Quote),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorBody)
    )
)]
pub async fn get_quote(
    Path(ticker): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Quote>> {
    let quote = state
        .provider
        .get_quote(&ticker)
        .await?
        .ok_or_else(|| ApiError::NotFound("Quote data for ticker not found.".to_string()))?;
    Ok(Json(Quote::from(quote)))
}

/// Daily history for a ticker. Empty when the provider has none.
#[utoipa::path(
    get,
    path = "/api/historical/daily/{ticker}",
    params(("ticker" = String, Path, description = "Ticker symbol")),
    responses(
        (status = 200, body = [HistoricalDataPoint]),
        (status = 500, body = ErrorBody)
    )
)]
pub async fn get_historical_daily(
    Path(ticker): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<HistoricalDataPoint>>> {
    let history = state.provider.get_daily_history(&ticker).await?;
    Ok(Json(
        history.into_iter().map(HistoricalDataPoint::from).collect(),
    ))
}

/// Intraday bars for a ticker at one of 1min, 5min, 15min, 30min, 1hour, 4hour.
#[utoipa::path(
    get,
    path = "/api/historical/intraday/{interval}/{ticker}",
    params(
        ("interval" = String, Path, description = "Bar width, e.g. 5min"),
        ("ticker" = String, Path, description = "Ticker symbol")
    ),
    responses(
        (status = 200, body = [ChartPoint]),
        (status = 400, body = ErrorBody),
        (status = 500, body = ErrorBody)
    )
)]
pub async fn get_historical_intraday(
    Path((interval, ticker)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ChartPoint>>> {
    let interval: ChartInterval = interval.parse()?;
    let chart = state.provider.get_intraday_chart(&ticker, interval).await?;
    Ok(Json(chart.into_iter().map(ChartPoint::from).collect()))
}

/// Profile, quote and 5-minute intraday chart in one response.
#[utoipa::path(
    get,
    path = "/api/stock/{ticker}",
    params(("ticker" = String, Path, description = "Ticker symbol")),
    responses(
        (status = 200, body = StockOverview),
        (status = 404, body = ErrorBody),
        (status = 500, body = ErrorBody)
    )
)]
pub async fn get_stock_overview(
    Path(ticker): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<StockOverview>> {
    let overview = fetch_overview(state.provider.as_ref(), &ticker).await?;
    Ok(Json(StockOverview::from(overview)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/quote/{ticker}", get(get_quote))
        .route("/historical/daily/{ticker}", get(get_historical_daily))
        .route(
            "/historical/intraday/{interval}/{ticker}",
            get(get_historical_intraday),
        )
        .route("/stock/{ticker}", get(get_stock_overview))
}
