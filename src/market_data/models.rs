use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Normalized market entry for one coin
///
/// Numeric fields are `None` when upstream did not provide a usable number;
/// `Some(0.0)` is a real zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub image: Option<String>,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub market_cap_rank: Option<u32>,
    pub fully_diluted_valuation: Option<f64>,
    pub total_volume: Option<f64>,
    pub high_24h: Option<f64>,
    pub low_24h: Option<f64>,
    pub price_change_24h: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub market_cap_change_24h: Option<f64>,
    pub market_cap_change_percentage_24h: Option<f64>,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
    pub max_supply: Option<f64>,
    pub ath: Option<f64>,
    pub ath_change_percentage: Option<f64>,
    pub ath_date: Option<DateTime<Utc>>,
    pub atl: Option<f64>,
    pub atl_change_percentage: Option<f64>,
    pub atl_date: Option<DateTime<Utc>>,
    pub last_updated: Option<DateTime<Utc>>,
    /// 7-day price series, only present when sparkline data was requested
    pub sparkline_7d: Option<Vec<f64>>,
}

/// Entry of the upstream trending list
///
/// Carries no price or market cap fields; `score` is the upstream relevance
/// position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingCoin {
    pub id: String,
    pub coin_id: Option<u64>,
    pub name: String,
    pub symbol: String,
    pub market_cap_rank: Option<u32>,
    pub thumb: Option<String>,
    pub small: Option<String>,
    pub large: Option<String>,
    pub slug: Option<String>,
    pub price_btc: Option<f64>,
    pub score: Option<u32>,
}

impl TrendingCoin {
    /// Smallest available image, falling back to the larger sizes
    pub fn image(&self) -> Option<&str> {
        self.thumb
            .as_deref()
            .or(self.small.as_deref())
            .or(self.large.as_deref())
    }
}

/// Free-form coin detail document (description, links, market data, ...)
pub type CoinDetail = serde_json::Map<String, serde_json::Value>;

/// Sort orders accepted by the market listing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MarketOrder {
    MarketCapAsc,
    #[default]
    MarketCapDesc,
    VolumeAsc,
    VolumeDesc,
    IdAsc,
    IdDesc,
    PriceAsc,
    PriceDesc,
    PercentChange24hAsc,
    PercentChange24hDesc,
}

impl MarketOrder {
    pub const ALL: [MarketOrder; 10] = [
        MarketOrder::MarketCapDesc,
        MarketOrder::MarketCapAsc,
        MarketOrder::VolumeDesc,
        MarketOrder::VolumeAsc,
        MarketOrder::IdAsc,
        MarketOrder::IdDesc,
        MarketOrder::PriceAsc,
        MarketOrder::PriceDesc,
        MarketOrder::PercentChange24hAsc,
        MarketOrder::PercentChange24hDesc,
    ];

    /// Upstream wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketOrder::MarketCapAsc => "market_cap_asc",
            MarketOrder::MarketCapDesc => "market_cap_desc",
            MarketOrder::VolumeAsc => "volume_asc",
            MarketOrder::VolumeDesc => "volume_desc",
            MarketOrder::IdAsc => "id_asc",
            MarketOrder::IdDesc => "id_desc",
            MarketOrder::PriceAsc => "price_asc",
            MarketOrder::PriceDesc => "price_desc",
            MarketOrder::PercentChange24hAsc => "percent_change_24h_asc",
            MarketOrder::PercentChange24hDesc => "percent_change_24h_desc",
        }
    }
}

impl std::fmt::Display for MarketOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MarketOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        MarketOrder::ALL
            .iter()
            .copied()
            .find(|order| order.as_str() == wanted)
            .ok_or_else(|| {
                let valid: Vec<&str> = MarketOrder::ALL.iter().map(|o| o.as_str()).collect();
                format!("unknown sort order '{}', expected one of: {}", s, valid.join(", "))
            })
    }
}

/// Parameters of a market listing request
///
/// `None` fields fall back to the gateway's configured defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketsQuery {
    pub currency: Option<String>,
    pub order: MarketOrder,
    pub per_page: Option<u32>,
    pub page: u32,
    pub sparkline: bool,
}

impl Default for MarketsQuery {
    fn default() -> Self {
        Self {
            currency: None,
            order: MarketOrder::default(),
            per_page: None,
            page: 1,
            sparkline: false,
        }
    }
}

impl MarketsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn order(mut self, order: MarketOrder) -> Self {
        self.order = order;
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn sparkline(mut self, sparkline: bool) -> Self {
        self.sparkline = sparkline;
        self
    }
}
