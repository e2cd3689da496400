use std::net::SocketAddr;

use anyhow::{anyhow, Context};
use stock_analytics_market_data::provider::fmp::DEFAULT_BASE_URL;

pub const API_KEY_VAR: &str = "FMP_API_KEY";

pub struct Config {
    pub listen_addr: SocketAddr,
    pub fmp_api_key: String,
    pub fmp_base_url: String,
    pub cors_allow: Vec<String>,
}

impl Config {
    /// Load configuration from the process environment, reading a local
    /// `.env` file first when one exists.
    ///
    /// A missing upstream API key is fatal: the server must not start
    /// without it.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fmp_api_key = lookup(API_KEY_VAR)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "{} environment variable not set. Application cannot start.",
                    API_KEY_VAR
                )
            })?;
        let fmp_base_url = lookup("FMP_BASE_URL")
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let listen_addr: SocketAddr = lookup("SA_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid SA_LISTEN_ADDR")?;
        let cors_allow = lookup("SA_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Ok(Self {
            listen_addr,
            fmp_api_key,
            fmp_base_url,
            cors_allow,
        })
    }
}
