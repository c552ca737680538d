/// CoinGecko response types and adapters into the domain model
use crate::errors::RequestError;
use crate::logger::{self, LogTag};
use crate::market_data::{Coin, CoinDetail, TrendingCoin};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// ============================================================================
// CUSTOM DESERIALIZERS - Handle API inconsistencies
// ============================================================================

/// Numbers arrive as JSON numbers, numeric strings or null
///
/// Anything that does not yield a finite number maps to `None`.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

/// Ranks and ids are positive integers; zero means "unranked"
fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(number_from_value)
        .filter(|n| n.fract() == 0.0 && *n >= 1.0 && *n <= u32::MAX as f64)
        .map(|n| n as u32))
}

fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Non-string values (numbers, objects) are treated as missing
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

/// Display strings degrade to empty instead of rejecting the entry
fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        _ => String::new(),
    })
}

fn number_from_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

fn parse_date(raw: Option<String>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s.trim()).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

// ============================================================================
// MARKET LISTING
// ============================================================================

/// One element of `/coins/markets`
#[derive(Debug, Clone, Deserialize)]
pub struct CoinGeckoMarketCoin {
    pub id: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub symbol: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub current_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub market_cap: Option<f64>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub market_cap_rank: Option<u32>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fully_diluted_valuation: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_volume: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub high_24h: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub low_24h: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price_change_24h: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub market_cap_change_24h: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub market_cap_change_percentage_24h: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub circulating_supply: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_supply: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub max_supply: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub ath: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub ath_change_percentage: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub ath_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub atl: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub atl_change_percentage: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub atl_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_updated: Option<String>,
    /// `{"price": [...]}`, kept loose so a malformed series only drops the sparkline
    #[serde(default)]
    pub sparkline_in_7d: Option<Value>,
}

impl From<CoinGeckoMarketCoin> for Coin {
    fn from(raw: CoinGeckoMarketCoin) -> Self {
        Coin {
            id: raw.id,
            symbol: raw.symbol,
            name: raw.name,
            image: raw.image,
            current_price: raw.current_price,
            market_cap: raw.market_cap,
            market_cap_rank: raw.market_cap_rank,
            fully_diluted_valuation: raw.fully_diluted_valuation,
            total_volume: raw.total_volume,
            high_24h: raw.high_24h,
            low_24h: raw.low_24h,
            price_change_24h: raw.price_change_24h,
            price_change_percentage_24h: raw.price_change_percentage_24h,
            market_cap_change_24h: raw.market_cap_change_24h,
            market_cap_change_percentage_24h: raw.market_cap_change_percentage_24h,
            circulating_supply: raw.circulating_supply,
            total_supply: raw.total_supply,
            max_supply: raw.max_supply,
            ath: raw.ath,
            ath_change_percentage: raw.ath_change_percentage,
            ath_date: parse_date(raw.ath_date),
            atl: raw.atl,
            atl_change_percentage: raw.atl_change_percentage,
            atl_date: parse_date(raw.atl_date),
            last_updated: parse_date(raw.last_updated),
            sparkline_7d: raw
                .sparkline_in_7d
                .as_ref()
                .and_then(|s| s.get("price"))
                .and_then(Value::as_array)
                .map(|prices| prices.iter().filter_map(number_from_value).collect()),
        }
    }
}

/// Convert a `/coins/markets` payload, keeping upstream order
///
/// Only entries without a string `id` (or that are not objects) are skipped;
/// every other field degrades to absent.
pub fn adapt_markets(payload: Value) -> Result<Vec<Coin>, RequestError> {
    let Value::Array(items) = payload else {
        return Err(RequestError::api(
            None,
            "Unexpected market listing payload: expected an array",
        ));
    };

    let total = items.len();
    let coins: Vec<Coin> = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<CoinGeckoMarketCoin>(item) {
            Ok(raw) => Some(Coin::from(raw)),
            Err(e) => {
                logger::warning(LogTag::Api, &format!("Skipping malformed market entry: {}", e));
                None
            }
        })
        .collect();

    if coins.len() != total {
        logger::debug(
            LogTag::Api,
            &format!("Adapted {}/{} market entries", coins.len(), total),
        );
    }
    Ok(coins)
}

// ============================================================================
// TRENDING
// ============================================================================

/// Inner `item` object of `/search/trending`
#[derive(Debug, Clone, Deserialize)]
pub struct CoinGeckoTrendingItem {
    pub id: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub coin_id: Option<u64>,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub symbol: String,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub market_cap_rank: Option<u32>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub thumb: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub small: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub large: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price_btc: Option<f64>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: Option<u32>,
}

/// Score is a zero-based position, so zero is kept
fn lenient_score<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(number_from_value)
        .filter(|n| n.fract() == 0.0 && *n >= 0.0 && *n <= u32::MAX as f64)
        .map(|n| n as u32))
}

#[derive(Debug, Clone, Deserialize)]
struct CoinGeckoTrendingEntry {
    item: CoinGeckoTrendingItem,
}

impl From<CoinGeckoTrendingItem> for TrendingCoin {
    fn from(raw: CoinGeckoTrendingItem) -> Self {
        TrendingCoin {
            id: raw.id,
            coin_id: raw.coin_id,
            name: raw.name,
            symbol: raw.symbol,
            market_cap_rank: raw.market_cap_rank,
            thumb: raw.thumb,
            small: raw.small,
            large: raw.large,
            slug: raw.slug,
            price_btc: raw.price_btc,
            score: raw.score,
        }
    }
}

/// Unwrap `{"coins": [{"item": {...}}, ...]}` into trending coins
///
/// A payload without a `coins` array yields an empty list.
pub fn adapt_trending(payload: Value) -> Result<Vec<TrendingCoin>, RequestError> {
    let Value::Object(mut body) = payload else {
        return Err(RequestError::api(
            None,
            "Unexpected trending payload: expected an object",
        ));
    };

    let items = match body.remove("coins") {
        Some(Value::Array(items)) => items,
        Some(Value::Null) | None => return Ok(Vec::new()),
        Some(_) => {
            return Err(RequestError::api(
                None,
                "Unexpected trending payload: 'coins' is not an array",
            ))
        }
    };

    Ok(items
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<CoinGeckoTrendingEntry>(entry) {
            Ok(entry) => Some(TrendingCoin::from(entry.item)),
            Err(e) => {
                logger::warning(LogTag::Api, &format!("Skipping malformed trending entry: {}", e));
                None
            }
        })
        .collect())
}

// ============================================================================
// COIN DETAIL
// ============================================================================

/// Coin detail is passed through as-is; it only has to be a JSON object
pub fn adapt_detail(payload: Value) -> Result<CoinDetail, RequestError> {
    match payload {
        Value::Object(detail) => Ok(detail),
        _ => Err(RequestError::api(
            None,
            "Unexpected coin detail payload: expected an object",
        )),
    }
}
