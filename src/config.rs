use crate::constants::*;
use crate::logger::{self, LogTag};
use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::str::FromStr;
use std::time::Duration;

pub const ENV_BASE_URL: &str = "COINGECKO_API_BASE_URL";
pub const ENV_API_KEY: &str = "COINGECKO_API_KEY";
pub const ENV_COINS_PER_PAGE: &str = "COINS_PER_PAGE";
pub const ENV_HIGHLIGHTS_COUNT: &str = "HIGHLIGHTS_COUNT";
pub const ENV_REQUEST_TIMEOUT_MS: &str = "REQUEST_TIMEOUT_MS";
pub const ENV_CACHE_TTL_MS: &str = "CACHE_TTL_MS";
pub const ENV_DETAIL_CACHE_TTL_MS: &str = "DETAIL_CACHE_TTL_MS";
pub const ENV_CACHE_SWEEP_INTERVAL_MS: &str = "CACHE_SWEEP_INTERVAL_MS";
pub const ENV_DEFAULT_CURRENCY: &str = "DEFAULT_CURRENCY";

/// Runtime configuration of the market data layer
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub base_url: String,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub coins_per_page: u32,
    pub highlights_count: u32,
    pub request_timeout_ms: u64,
    pub cache_ttl_ms: u64,
    pub detail_cache_ttl_ms: u64,
    pub cache_sweep_interval_ms: u64,
    pub default_currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            coins_per_page: DEFAULT_COINS_PER_PAGE,
            highlights_count: DEFAULT_HIGHLIGHTS_COUNT,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            cache_ttl_ms: DEFAULT_CACHE_TTL_MS,
            detail_cache_ttl_ms: DEFAULT_DETAIL_CACHE_TTL_MS,
            cache_sweep_interval_ms: DEFAULT_CACHE_SWEEP_INTERVAL_MS,
            default_currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl Config {
    /// Load from the process environment, reading `.env` first when present
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenv::dotenv() {
            logger::debug(
                LogTag::Config,
                &format!("Loaded environment from {}", path.display()),
            );
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset or blank variables keep their default
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();
        let config = Self {
            base_url: get(ENV_BASE_URL)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            api_key: get(ENV_API_KEY),
            coins_per_page: parse_var(ENV_COINS_PER_PAGE, get(ENV_COINS_PER_PAGE))?
                .unwrap_or(defaults.coins_per_page),
            highlights_count: parse_var(ENV_HIGHLIGHTS_COUNT, get(ENV_HIGHLIGHTS_COUNT))?
                .unwrap_or(defaults.highlights_count),
            request_timeout_ms: parse_var(ENV_REQUEST_TIMEOUT_MS, get(ENV_REQUEST_TIMEOUT_MS))?
                .unwrap_or(defaults.request_timeout_ms),
            cache_ttl_ms: parse_var(ENV_CACHE_TTL_MS, get(ENV_CACHE_TTL_MS))?
                .unwrap_or(defaults.cache_ttl_ms),
            detail_cache_ttl_ms: parse_var(ENV_DETAIL_CACHE_TTL_MS, get(ENV_DETAIL_CACHE_TTL_MS))?
                .unwrap_or(defaults.detail_cache_ttl_ms),
            cache_sweep_interval_ms: parse_var(
                ENV_CACHE_SWEEP_INTERVAL_MS,
                get(ENV_CACHE_SWEEP_INTERVAL_MS),
            )?
            .unwrap_or(defaults.cache_sweep_interval_ms),
            default_currency: get(ENV_DEFAULT_CURRENCY)
                .map(|c| c.to_lowercase())
                .unwrap_or(defaults.default_currency),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url)
            .with_context(|| format!("{} is not a valid URL: {}", ENV_BASE_URL, self.base_url))?;

        if self.coins_per_page == 0 || self.coins_per_page > MAX_PER_PAGE {
            return Err(anyhow!(
                "{} must be between 1 and {} (got {})",
                ENV_COINS_PER_PAGE,
                MAX_PER_PAGE,
                self.coins_per_page
            ));
        }
        if self.highlights_count == 0 || self.highlights_count > MAX_PER_PAGE {
            return Err(anyhow!(
                "{} must be between 1 and {} (got {})",
                ENV_HIGHLIGHTS_COUNT,
                MAX_PER_PAGE,
                self.highlights_count
            ));
        }
        if self.request_timeout_ms == 0 {
            return Err(anyhow!("{} must be greater than zero", ENV_REQUEST_TIMEOUT_MS));
        }
        if self.cache_sweep_interval_ms == 0 {
            return Err(anyhow!(
                "{} must be greater than zero",
                ENV_CACHE_SWEEP_INTERVAL_MS
            ));
        }
        if !is_supported_currency(&self.default_currency) {
            return Err(anyhow!(
                "{} must be one of {:?} (got {})",
                ENV_DEFAULT_CURRENCY,
                SUPPORTED_CURRENCIES,
                self.default_currency
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

fn parse_var<T>(key: &str, raw: Option<String>) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.map(|value| {
        value
            .parse::<T>()
            .with_context(|| format!("Failed to parse {}={}", key, value))
    })
    .transpose()
}
