use serde::{Deserialize, Serialize};

use super::{ChartPoint, CompanyProfile, Quote};

/// Profile, quote and intraday chart for one ticker, merged positionally.
///
/// The three parts come from independent upstream calls and are not
/// cross-checked against each other.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StockOverview {
    pub profile: Option<CompanyProfile>,
    pub quote: Option<Quote>,
    pub chart_intraday: Vec<ChartPoint>,
}

impl StockOverview {
    /// True when none of the three upstream calls returned data.
    pub fn is_empty(&self) -> bool {
        self.profile.is_none() && self.quote.is_none() && self.chart_intraday.is_empty()
    }
}
