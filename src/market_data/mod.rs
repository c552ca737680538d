//! Domain model and client-side logic of the market dashboard
//!
//! - `models`: normalized `Coin` / `TrendingCoin` and listing parameters
//! - `highlights`: concurrent all-settle aggregation of the four highlights
//! - `search`: substring filter over fetched lists
//! - `pagination`: page cursor over the listing
//! - `debounce`: delayed invocation for search input

pub mod debounce;
pub mod highlights;
pub mod models;
pub mod pagination;
pub mod search;

pub use debounce::Debouncer;
pub use highlights::{HighlightSection, Highlights, HighlightsAggregator, HighlightsSource};
pub use models::{Coin, CoinDetail, MarketOrder, MarketsQuery, TrendingCoin};
pub use pagination::PageCursor;
pub use search::{search, Searchable};
