//! Market data models
//!
//! Each model deserializes from the provider's camelCase payload, coercing
//! numeric strings and integral floats, and serializes with snake_case keys:
//! - `quote` - Latest quote (Quote)
//! - `profile` - Company profile (CompanyProfile)
//! - `chart` - Daily and intraday bars (HistoricalDataPoint, ChartPoint, ChartInterval)
//! - `overview` - Combined profile/quote/chart result (StockOverview)
//! - `format` - Serde adapters for the provider's date layouts

mod chart;
mod coerce;
pub mod format;
mod overview;
mod profile;
mod quote;

pub use chart::{ChartInterval, ChartPoint, HistoricalDataPoint};
pub use overview::StockOverview;
pub use profile::CompanyProfile;
pub use quote::Quote;
