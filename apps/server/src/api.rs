mod market_data;

use std::sync::Arc;

use crate::{
    config::Config,
    error::ErrorBody,
    main_lib::AppState,
    models::{ChartPoint, CompanyProfile, HistoricalDataPoint, Quote, RootStatus, StockOverview},
};
use anyhow::Context;
use axum::{http::HeaderValue, routing::get, Json, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

pub const DOCS_PATH: &str = "/docs";

#[utoipa::path(get, path = "/", responses((status = 200, body = RootStatus)))]
pub async fn read_root() -> Json<RootStatus> {
    // The process refuses to start without a key, so reaching here means it is set.
    Json(RootStatus {
        message: "Stock Analytics API is running.".to_string(),
        api_key_status: "CONFIGURED".to_string(),
        docs_url: DOCS_PATH.to_string(),
    })
}

#[utoipa::path(get, path = "/healthz", responses((status = 200, description = "Health")))]
pub async fn healthz() -> &'static str {
    "ok"
}

async fn openapi_doc() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stock Analytics API",
        description = "A proxy API for fetching data from FinancialModelingPrep."
    ),
    paths(
        read_root,
        healthz,
        market_data::get_quote,
        market_data::get_historical_daily,
        market_data::get_historical_intraday,
        market_data::get_stock_overview
    ),
    components(schemas(
        RootStatus,
        Quote,
        CompanyProfile,
        HistoricalDataPoint,
        ChartPoint,
        StockOverview,
        ErrorBody
    )),
    tags((name = "stock-analytics"))
)]
pub struct ApiDoc;

fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin: {}", o))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        CorsLayer::new().allow_origin(origins)
    };
    Ok(cors.allow_methods(Any).allow_headers(Any))
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> anyhow::Result<Router> {
    let cors = cors_layer(config)?;

    let router = Router::new()
        .route("/", get(read_root))
        .route("/healthz", get(healthz))
        .route(DOCS_PATH, get(openapi_doc))
        .nest("/api", market_data::router())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(cors),
        );
    Ok(router)
}
