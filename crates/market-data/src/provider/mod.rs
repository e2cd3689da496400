//! Stock data provider abstractions and implementations.
//!
//! This module contains:
//! - The `StockDataProvider` trait the HTTP layer depends on
//! - The FinancialModelingPrep implementation (`fmp`)
//!
//! Providers own the upstream fetch and schema mapping. Policy about what
//! counts as "not found" belongs to the caller.

mod traits;

pub mod fmp;

// Re-exports
pub use traits::StockDataProvider;
