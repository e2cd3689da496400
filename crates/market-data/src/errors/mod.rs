//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while fetching data from the upstream provider.
///
/// None of these are retried. The HTTP layer decides how each variant is
/// surfaced to the client.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The upstream provider returned no data for any of the requested
    /// resources of this symbol.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The requested chart interval is not one the provider serves.
    #[error("Unsupported chart interval: {0}")]
    UnsupportedInterval(String),

    /// The upstream provider answered with a non-2xx status.
    /// Carries the upstream status code and the raw response body.
    #[error("Upstream {provider} returned HTTP {status}: {body}")]
    UpstreamStatus {
        /// The provider that returned the error
        provider: String,
        /// HTTP status code returned upstream
        status: u16,
        /// Raw response body returned upstream
        body: String,
    },

    /// The upstream body could not be decoded into the expected schema.
    #[error("Invalid response from {provider}: {message}")]
    InvalidResponse {
        /// The provider that returned the payload
        provider: String,
        /// What failed to decode
        message: String,
    },

    /// A network error occurred while communicating with the provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Upstream HTTP status carried by this error, if any.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::UpstreamStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
