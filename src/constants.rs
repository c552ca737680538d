/// Upstream endpoints and configuration defaults

// ============================================================================
// UPSTREAM API
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

pub const ENDPOINT_COINS_MARKETS: &str = "/coins/markets";
pub const ENDPOINT_TRENDING: &str = "/search/trending";
pub const ENDPOINT_COIN_DETAIL_PREFIX: &str = "/coins/";

/// Auth header for the public (demo) API tier
pub const DEMO_API_KEY_HEADER: &str = "x-cg-demo-api-key";

/// Auth header for the pro API tier (pro-api.coingecko.com)
pub const PRO_API_KEY_HEADER: &str = "x-cg-pro-api-key";

/// Percentage-change window requested with every market listing
pub const PRICE_CHANGE_WINDOW: &str = "24h";

/// Upstream hard limit on `per_page`
pub const MAX_PER_PAGE: u32 = 250;

// ============================================================================
// DEFAULTS
// ============================================================================

pub const DEFAULT_CURRENCY: &str = "usd";
pub const SUPPORTED_CURRENCIES: [&str; 3] = ["usd", "eur", "btc"];

pub const DEFAULT_COINS_PER_PAGE: u32 = 50;
pub const DEFAULT_HIGHLIGHTS_COUNT: u32 = 10;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// General cache lifetime (markets, trending)
pub const DEFAULT_CACHE_TTL_MS: u64 = 60_000;

/// Coin detail is a deep single-entity view and goes stale faster
pub const DEFAULT_DETAIL_CACHE_TTL_MS: u64 = 30_000;

pub const DEFAULT_CACHE_SWEEP_INTERVAL_MS: u64 = 60_000;

/// Upstream does not expose a total coin count; the listing assumes this many pages
pub const ESTIMATED_TOTAL_PAGES: u32 = 200;

/// Delay before a search keystroke is applied
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

pub fn is_supported_currency(currency: &str) -> bool {
    let currency = currency.trim().to_lowercase();
    SUPPORTED_CURRENCIES.iter().any(|c| *c == currency)
}
