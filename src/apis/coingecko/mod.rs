/// CoinGecko API gateway
///
/// API Documentation: https://docs.coingecko.com/reference/introduction
///
/// Endpoints implemented:
/// 1. /coins/markets - Paged market listing (also backs gainers, losers and volume)
/// 2. /search/trending - Trending coins
/// 3. /coins/{id} - Coin detail document
///
/// Every read goes cache first. A miss runs the request through the shared
/// `HttpClient`, adapts the payload and stores it; failures are returned
/// unchanged and never cached.
pub mod types;

pub use self::types::{adapt_detail, adapt_markets, adapt_trending};

use crate::apis::client::{HttpClient, RequestOptions};
use crate::cache::{spawn_sweeper, CacheConfig, CacheStats, TtlCache};
use crate::config::Config;
use crate::constants::{
    ENDPOINT_COINS_MARKETS, ENDPOINT_COIN_DETAIL_PREFIX, ENDPOINT_TRENDING, MAX_PER_PAGE,
    PRICE_CHANGE_WINDOW,
};
use crate::errors::RequestError;
use crate::logger::{self, LogTag};
use crate::market_data::{
    search, Coin, CoinDetail, HighlightsSource, MarketOrder, MarketsQuery, TrendingCoin,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::task::JoinHandle;

const TRENDING_CACHE_KEY: &str = "trending_coins";

/// Adapted payloads as stored in the cache
#[derive(Debug, Clone)]
enum CachedPayload {
    Markets(Vec<Coin>),
    Trending(Vec<TrendingCoin>),
    Detail(CoinDetail),
}

pub struct CoinGeckoClient {
    http: HttpClient,
    cache: Arc<TtlCache<CachedPayload>>,
    default_currency: String,
    coins_per_page: u32,
}

impl CoinGeckoClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = HttpClient::from_config(config)?;
        let cache = Arc::new(TtlCache::new(CacheConfig::from(config)));

        logger::debug(
            LogTag::Gateway,
            &format!(
                "CoinGecko gateway ready (base={}, api_key={})",
                http.base_url(),
                if config.has_api_key() { "set" } else { "none" }
            ),
        );

        Ok(Self {
            http,
            cache,
            default_currency: config.default_currency.to_lowercase(),
            coins_per_page: config.coins_per_page,
        })
    }

    pub fn default_currency(&self) -> &str {
        &self.default_currency
    }

    pub fn coins_per_page(&self) -> u32 {
        self.coins_per_page
    }

    /// Paged market listing
    ///
    /// Missing query fields fall back to the configured currency and page
    /// size. The 24h price change window is always requested.
    pub async fn list_markets(&self, query: &MarketsQuery) -> Result<Vec<Coin>, RequestError> {
        let currency = query
            .currency
            .as_deref()
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| self.default_currency.clone());
        let per_page = query
            .per_page
            .unwrap_or(self.coins_per_page)
            .clamp(1, MAX_PER_PAGE);
        let page = query.page.max(1);

        let key = markets_cache_key(&currency, query.order, per_page, page, query.sparkline);
        if let Some(CachedPayload::Markets(coins)) = self.cache.get(&key) {
            return Ok(coins);
        }

        logger::debug(
            LogTag::Gateway,
            &format!(
                "Fetching markets (currency={}, order={}, page={}, per_page={})",
                currency, query.order, page, per_page
            ),
        );

        let options = RequestOptions::get()
            .param("vs_currency", &currency)
            .param("order", query.order)
            .param("per_page", per_page)
            .param("page", page)
            .param("sparkline", query.sparkline)
            .param("price_change_percentage", PRICE_CHANGE_WINDOW);

        let payload = self.http.execute(ENDPOINT_COINS_MARKETS, options).await?;
        let coins = adapt_markets(payload)?;

        self.cache.set(key, CachedPayload::Markets(coins.clone()));
        Ok(coins)
    }

    pub async fn trending_coins(&self) -> Result<Vec<TrendingCoin>, RequestError> {
        if let Some(CachedPayload::Trending(coins)) = self.cache.get(TRENDING_CACHE_KEY) {
            return Ok(coins);
        }

        logger::debug(LogTag::Gateway, "Fetching trending coins");

        let payload = self
            .http
            .execute(ENDPOINT_TRENDING, RequestOptions::get())
            .await?;
        let coins = adapt_trending(payload)?;

        self.cache
            .set(TRENDING_CACHE_KEY, CachedPayload::Trending(coins.clone()));
        Ok(coins)
    }

    /// Full detail document for one coin, cached with the shorter detail TTL
    pub async fn coin_detail(&self, id: &str) -> Result<CoinDetail, RequestError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(RequestError::api(None, "Coin id must not be empty"));
        }

        let key = format!("coin_details:{}", id);
        if let Some(CachedPayload::Detail(detail)) = self.cache.get(&key) {
            return Ok(detail);
        }

        logger::debug(LogTag::Gateway, &format!("Fetching coin detail for {}", id));

        let path = format!("{}{}", ENDPOINT_COIN_DETAIL_PREFIX, id);
        let payload = self.http.execute(&path, RequestOptions::get()).await?;
        let detail = adapt_detail(payload)?;

        let ttl = self.cache.config().detail_ttl;
        self.cache
            .set_with_ttl(key, CachedPayload::Detail(detail.clone()), ttl);
        Ok(detail)
    }

    /// Coins with a strictly positive 24h change, best first
    pub async fn top_gainers(&self, limit: u32) -> Result<Vec<Coin>, RequestError> {
        let coins = self
            .ranked_by(MarketOrder::PercentChange24hDesc, limit)
            .await?;
        Ok(coins
            .into_iter()
            .filter(|coin| coin.price_change_percentage_24h.map_or(false, |p| p > 0.0))
            .collect())
    }

    /// Coins with a strictly negative 24h change, worst first
    pub async fn top_losers(&self, limit: u32) -> Result<Vec<Coin>, RequestError> {
        let coins = self
            .ranked_by(MarketOrder::PercentChange24hAsc, limit)
            .await?;
        Ok(coins
            .into_iter()
            .filter(|coin| coin.price_change_percentage_24h.map_or(false, |p| p < 0.0))
            .collect())
    }

    pub async fn highest_volume(&self, limit: u32) -> Result<Vec<Coin>, RequestError> {
        self.ranked_by(MarketOrder::VolumeDesc, limit).await
    }

    /// First page sorted by `order`, never longer than `limit`
    async fn ranked_by(&self, order: MarketOrder, limit: u32) -> Result<Vec<Coin>, RequestError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let query = MarketsQuery::new().order(order).per_page(limit).page(1);
        let mut coins = self.list_markets(&query).await?;
        coins.truncate(limit as usize);
        Ok(coins)
    }

    /// Client-side filter over an already fetched listing
    pub fn search_coins(&self, query: &str, pool: &[Coin]) -> Vec<Coin> {
        search(query, pool)
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Periodically evict expired entries; abort the handle to stop
    pub fn start_cache_sweeper(&self) -> JoinHandle<()> {
        let every = self.cache.config().sweep_interval;
        logger::debug(
            LogTag::Cache,
            &format!("Starting cache sweeper every {}ms", every.as_millis()),
        );
        spawn_sweeper(self.cache.clone(), every)
    }
}

fn markets_cache_key(
    currency: &str,
    order: MarketOrder,
    per_page: u32,
    page: u32,
    sparkline: bool,
) -> String {
    format!(
        "coins_markets:{}:{}:{}:{}:{}:{}",
        currency, order, per_page, page, sparkline, PRICE_CHANGE_WINDOW
    )
}

#[async_trait]
impl HighlightsSource for CoinGeckoClient {
    async fn top_gainers(&self, limit: u32) -> Result<Vec<Coin>, RequestError> {
        CoinGeckoClient::top_gainers(self, limit).await
    }

    async fn top_losers(&self, limit: u32) -> Result<Vec<Coin>, RequestError> {
        CoinGeckoClient::top_losers(self, limit).await
    }

    async fn highest_volume(&self, limit: u32) -> Result<Vec<Coin>, RequestError> {
        CoinGeckoClient::highest_volume(self, limit).await
    }

    async fn trending_coins(&self) -> Result<Vec<TrendingCoin>, RequestError> {
        CoinGeckoClient::trending_coins(self).await
    }
}
