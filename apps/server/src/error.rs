use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use stock_analytics_market_data::MarketDataError;
use thiserror::Error;
use utoipa::ToSchema;

/// Detail returned for transport and decode failures; the cause is only logged.
pub const INTERNAL_ERROR_DETAIL: &str = "An unexpected error occurred.";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    MarketData(#[from] MarketDataError),
    #[error("{0}")]
    NotFound(String),
}

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub code: u16,
    pub detail: String,
}

impl ApiError {
    fn status_and_detail(&self) -> (StatusCode, String) {
        match self {
            ApiError::MarketData(e) => match e {
                MarketDataError::UpstreamStatus { status, body, .. } => (
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                    format!("API request failed: {}", body),
                ),
                MarketDataError::SymbolNotFound(symbol) => (
                    StatusCode::NOT_FOUND,
                    format!("Could not retrieve data for ticker {}.", symbol),
                ),
                MarketDataError::UnsupportedInterval(_) => (StatusCode::BAD_REQUEST, e.to_string()),
                MarketDataError::InvalidResponse { .. } | MarketDataError::Network(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_DETAIL.to_string())
                }
            },
            ApiError::NotFound(reason) => (StatusCode::NOT_FOUND, reason.clone()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            detail,
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
