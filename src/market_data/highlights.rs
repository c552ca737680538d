/// Dashboard highlights: gainers, losers, volume and trending
///
/// The four queries run concurrently and every one of them is awaited
/// regardless of the others. A failed query becomes an empty list; only when
/// all four fail is an error returned.
use super::models::{Coin, TrendingCoin};
use crate::errors::{HighlightsError, RequestError};
use crate::logger::{self, LogTag};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

/// Queries the aggregator needs from the data layer
#[async_trait]
pub trait HighlightsSource: Send + Sync {
    async fn top_gainers(&self, limit: u32) -> Result<Vec<Coin>, RequestError>;
    async fn top_losers(&self, limit: u32) -> Result<Vec<Coin>, RequestError>;
    async fn highest_volume(&self, limit: u32) -> Result<Vec<Coin>, RequestError>;
    async fn trending_coins(&self) -> Result<Vec<TrendingCoin>, RequestError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HighlightSection {
    TopGainers,
    TopLosers,
    HighestVolume,
    Trending,
}

impl std::fmt::Display for HighlightSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            HighlightSection::TopGainers => "top gainers",
            HighlightSection::TopLosers => "top losers",
            HighlightSection::HighestVolume => "highest volume",
            HighlightSection::Trending => "trending",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Highlights {
    pub top_gainers: Vec<Coin>,
    pub top_losers: Vec<Coin>,
    pub highest_volume: Vec<Coin>,
    pub trending: Vec<TrendingCoin>,
    /// Sections whose query failed and were replaced by an empty list
    pub failed: Vec<HighlightSection>,
}

impl Highlights {
    pub fn is_partial(&self) -> bool {
        !self.failed.is_empty()
    }
}

pub struct HighlightsAggregator<S: ?Sized> {
    source: Arc<S>,
    limit: u32,
}

impl<S: HighlightsSource + ?Sized> HighlightsAggregator<S> {
    /// `limit` caps every section, trending included
    pub fn new(source: Arc<S>, limit: u32) -> Self {
        Self {
            source,
            limit: limit.max(1),
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub async fn highlights(&self) -> Result<Highlights, HighlightsError> {
        logger::debug(
            LogTag::Highlights,
            &format!("Fetching highlights (limit={})", self.limit),
        );

        let (gainers, losers, volume, trending) = futures::join!(
            self.source.top_gainers(self.limit),
            self.source.top_losers(self.limit),
            self.source.highest_volume(self.limit),
            self.source.trending_coins(),
        );

        settle(gainers, losers, volume, trending, self.limit as usize)
    }
}

/// Apply the empty-on-failure / error-on-total-failure policy
pub fn settle(
    gainers: Result<Vec<Coin>, RequestError>,
    losers: Result<Vec<Coin>, RequestError>,
    volume: Result<Vec<Coin>, RequestError>,
    trending: Result<Vec<TrendingCoin>, RequestError>,
    trending_limit: usize,
) -> Result<Highlights, HighlightsError> {
    let mut highlights = Highlights::default();
    let mut errors = Vec::new();

    match gainers {
        Ok(coins) => highlights.top_gainers = coins,
        Err(err) => record_failure(&mut highlights, &mut errors, HighlightSection::TopGainers, err),
    }
    match losers {
        Ok(coins) => highlights.top_losers = coins,
        Err(err) => record_failure(&mut highlights, &mut errors, HighlightSection::TopLosers, err),
    }
    match volume {
        Ok(coins) => highlights.highest_volume = coins,
        Err(err) => {
            record_failure(&mut highlights, &mut errors, HighlightSection::HighestVolume, err)
        }
    }
    match trending {
        Ok(mut coins) => {
            coins.truncate(trending_limit);
            highlights.trending = coins;
        }
        Err(err) => record_failure(&mut highlights, &mut errors, HighlightSection::Trending, err),
    }

    if errors.len() == 4 {
        logger::error(LogTag::Highlights, "All highlight requests failed");
        return Err(HighlightsError::AllFailed { errors });
    }

    Ok(highlights)
}

fn record_failure(
    highlights: &mut Highlights,
    errors: &mut Vec<RequestError>,
    section: HighlightSection,
    err: RequestError,
) {
    logger::warning(
        LogTag::Highlights,
        &format!("Failed to load {} [{}]: {}", section, err.code(), err),
    );
    highlights.failed.push(section);
    errors.push(err);
}
