/// In-memory response cache
///
/// `TtlCache` is the generic store; `CacheConfig` carries the TTLs used by the
/// market data gateway.
pub mod config;
pub mod manager;

pub use config::CacheConfig;
pub use manager::{spawn_sweeper, CacheStats, TtlCache};
