//! Stock Analytics Market Data Crate
//!
//! This crate fetches stock data from the upstream financial-data API and
//! reshapes it into typed models for the Stock Analytics server.
//!
//! # Overview
//!
//! - One upstream fetch helper per provider: `GET {base}{path}?apikey={key}`,
//!   returning parsed JSON or a "no data" sentinel
//! - Typed models with camelCase-in / snake_case-out field mapping
//! - A combined overview that fans out to three endpoints concurrently
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +---------------------+
//! |   HTTP handler   | --> |  StockDataProvider  |  (trait seam)
//! +------------------+     +---------------------+
//!          |                          |
//!          v                          v
//! +------------------+     +---------------------+
//! |  fetch_overview  | --> |     FmpProvider     |  (upstream fetch)
//! +------------------+     +---------------------+
//!                                     |
//!                                     v
//!                          +---------------------+
//!                          | Quote / Profile /   |  (typed models)
//!                          | HistoricalDataPoint |
//!                          +---------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Quote`] - Latest quote
//! - [`CompanyProfile`] - Company profile
//! - [`HistoricalDataPoint`] - End-of-day bar
//! - [`ChartPoint`] - Intraday bar, at a [`ChartInterval`]
//! - [`StockOverview`] - Profile + quote + intraday chart
//! - [`MarketDataError`] - Upstream, decode and not-found failures

pub mod errors;
pub mod models;
pub mod overview;
pub mod provider;

pub use errors::MarketDataError;

// Re-export all public types from models
pub use models::{
    ChartInterval, ChartPoint, CompanyProfile, HistoricalDataPoint, Quote, StockOverview,
};

// Re-export provider types
pub use overview::fetch_overview;
pub use provider::fmp::FmpProvider;
pub use provider::StockDataProvider;
