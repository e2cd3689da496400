use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;
use stock_analytics_market_data as market_data;
use stock_analytics_market_data::models::format::{fmp_date, fmp_datetime};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema, Debug, Clone)]
pub struct RootStatus {
    pub message: String,
    pub api_key_status: String,
    pub docs_url: String,
}

#[derive(Serialize, ToSchema, Debug, Clone)]
pub struct Quote {
    pub symbol: String,
    pub name: String,
    pub price: Decimal,
    pub changes_percentage: Decimal,
    pub change: Decimal,
    pub day_low: Decimal,
    pub day_high: Decimal,
    pub market_cap: Option<u64>,
    pub volume: u64,
    pub exchange: String,
}

impl From<market_data::Quote> for Quote {
    fn from(q: market_data::Quote) -> Self {
        Self {
            symbol: q.symbol,
            name: q.name,
            price: q.price,
            changes_percentage: q.changes_percentage,
            change: q.change,
            day_low: q.day_low,
            day_high: q.day_high,
            market_cap: q.market_cap,
            volume: q.volume,
            exchange: q.exchange,
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone)]
pub struct CompanyProfile {
    pub symbol: String,
    pub price: Decimal,
    pub beta: Decimal,
    pub vol_avg: u64,
    pub mkt_cap: u64,
    pub last_div: Decimal,
    #[schema(example = "164.08-199.62")]
    pub range: Option<String>,
    pub company_name: String,
    pub currency: Option<String>,
    pub isin: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub image: Option<String>,
    pub ceo: Option<String>,
    pub sector: Option<String>,
    pub country: Option<String>,
    pub industry: Option<String>,
    pub exchange: Option<String>,
}

impl From<market_data::CompanyProfile> for CompanyProfile {
    fn from(p: market_data::CompanyProfile) -> Self {
        Self {
            symbol: p.symbol,
            price: p.price,
            beta: p.beta,
            vol_avg: p.vol_avg,
            mkt_cap: p.mkt_cap,
            last_div: p.last_div,
            range: p.range,
            company_name: p.company_name,
            currency: p.currency,
            isin: p.isin,
            description: p.description,
            website: p.website,
            image: p.image,
            ceo: p.ceo,
            sector: p.sector,
            country: p.country,
            industry: p.industry,
            exchange: p.exchange,
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone)]
pub struct HistoricalDataPoint {
    #[serde(with = "fmp_date")]
    #[schema(value_type = String, example = "2024-03-15")]
    pub date: NaiveDate,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub adj_close: Decimal,
    pub volume: u64,
    pub unadjusted_volume: u64,
    pub change: Decimal,
    pub change_percent: Decimal,
    pub vwap: Decimal,
}

impl From<market_data::HistoricalDataPoint> for HistoricalDataPoint {
    fn from(h: market_data::HistoricalDataPoint) -> Self {
        Self {
            date: h.date,
            open: h.open,
            high: h.high,
            low: h.low,
            close: h.close,
            adj_close: h.adj_close,
            volume: h.volume,
            unadjusted_volume: h.unadjusted_volume,
            change: h.change,
            change_percent: h.change_percent,
            vwap: h.vwap,
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone)]
pub struct ChartPoint {
    #[serde(with = "fmp_datetime")]
    #[schema(value_type = String, example = "2024-03-15 15:55:00")]
    pub date: NaiveDateTime,
    pub open: Decimal,
    pub low: Decimal,
    pub high: Decimal,
    pub close: Decimal,
    pub volume: u64,
}

impl From<market_data::ChartPoint> for ChartPoint {
    fn from(c: market_data::ChartPoint) -> Self {
        Self {
            date: c.date,
            open: c.open,
            low: c.low,
            high: c.high,
            close: c.close,
            volume: c.volume,
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone)]
pub struct StockOverview {
    pub profile: Option<CompanyProfile>,
    pub quote: Option<Quote>,
    pub chart_intraday: Vec<ChartPoint>,
}

impl From<market_data::StockOverview> for StockOverview {
    fn from(o: market_data::StockOverview) -> Self {
        Self {
            profile: o.profile.map(CompanyProfile::from),
            quote: o.quote.map(Quote::from),
            chart_intraday: o.chart_intraday.into_iter().map(ChartPoint::from).collect(),
        }
    }
}
