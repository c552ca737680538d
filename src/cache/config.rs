/// Cache configuration per payload type
///
/// TTLs tuned for different use cases:
/// - Market listings and trending: default TTL (1 min)
/// - Coin detail: shorter TTL (30s), single-entity deep view
use crate::config::Config;
use crate::constants::{
    DEFAULT_CACHE_SWEEP_INTERVAL_MS, DEFAULT_CACHE_TTL_MS, DEFAULT_DETAIL_CACHE_TTL_MS,
};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Time-to-live applied by `set` when no explicit TTL is given
    pub default_ttl: Duration,

    /// Time-to-live for coin detail payloads
    pub detail_ttl: Duration,

    /// How often the background sweeper evicts stale entries
    pub sweep_interval: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: Duration::from_millis(DEFAULT_CACHE_TTL_MS),
            detail_ttl: Duration::from_millis(DEFAULT_DETAIL_CACHE_TTL_MS),
            sweep_interval: Duration::from_millis(DEFAULT_CACHE_SWEEP_INTERVAL_MS),
        }
    }
}

impl CacheConfig {
    /// Custom configuration
    pub fn custom(default_ttl_ms: u64, detail_ttl_ms: u64) -> Self {
        Self {
            default_ttl: Duration::from_millis(default_ttl_ms),
            detail_ttl: Duration::from_millis(detail_ttl_ms),
            ..Self::default()
        }
    }
}

impl From<&Config> for CacheConfig {
    fn from(config: &Config) -> Self {
        Self {
            default_ttl: Duration::from_millis(config.cache_ttl_ms),
            detail_ttl: Duration::from_millis(config.detail_cache_ttl_ms),
            sweep_interval: Duration::from_millis(config.cache_sweep_interval_ms),
        }
    }
}
