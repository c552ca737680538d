/// Generic in-memory cache with per-entry TTL
///
/// Thread-safe, string-keyed, generic over the value type.
/// Stale entries are never returned: `get` evicts them on sight and
/// `sweep` removes the rest in bulk.
use super::config::CacheConfig;
use crate::logger::{self, LogTag};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Cache entry with TTL tracking
struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
    ttl: Duration,
}

impl<V> CacheEntry<V> {
    fn new(value: V, ttl: Duration) -> Self {
        Self {
            value,
            stored_at: Instant::now(),
            ttl,
        }
    }

    // An entry is stale once its full TTL has elapsed
    fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.stored_at) >= self.ttl
    }
}

/// Snapshot of the cache contents for introspection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub count: usize,
    pub keys: Vec<String>,
}

/// TTL cache keyed by string
pub struct TtlCache<V> {
    config: CacheConfig,
    entries: Mutex<HashMap<String, CacheEntry<V>>>,
}

impl<V: Clone> TtlCache<V> {
    /// Create new cache with given configuration
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Get value from cache (returns None if expired or missing)
    pub fn get(&self, key: &str) -> Option<V> {
        let mut entries = self.entries.lock();

        let expired = entries.get(key)?.is_expired(Instant::now());
        if expired {
            entries.remove(key);
            logger::debug(LogTag::Cache, &format!("Cache EXPIRED for key: {}", key));
            return None;
        }

        logger::debug(LogTag::Cache, &format!("Cache HIT for key: {}", key));
        entries.get(key).map(|entry| entry.value.clone())
    }

    /// Store with the default TTL, replacing any previous entry
    pub fn set(&self, key: impl Into<String>, value: V) {
        self.set_with_ttl(key, value, self.config.default_ttl);
    }

    /// Store with an explicit TTL, replacing any previous entry
    pub fn set_with_ttl(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let key = key.into();
        logger::debug(
            LogTag::Cache,
            &format!("Cache SET for key: {} (TTL: {}ms)", key, ttl.as_millis()),
        );
        self.entries.lock().insert(key, CacheEntry::new(value, ttl));
    }

    /// True when the key is absent or its entry is stale; never evicts
    pub fn is_expired(&self, key: &str) -> bool {
        self.entries
            .lock()
            .get(key)
            .map_or(true, |entry| entry.is_expired(Instant::now()))
    }

    /// Remove specific key from cache
    pub fn delete(&self, key: &str) -> bool {
        let removed = self.entries.lock().remove(key).is_some();
        if removed {
            logger::debug(LogTag::Cache, &format!("Cache DELETE for key: {}", key));
        }
        removed
    }

    /// Clear all entries
    pub fn clear(&self) {
        self.entries.lock().clear();
        logger::debug(LogTag::Cache, "Cache CLEARED");
    }

    /// Evict every stale entry, returning how many were removed
    pub fn sweep(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        let removed = before - entries.len();
        drop(entries);

        if removed > 0 {
            logger::debug(
                LogTag::Cache,
                &format!("Cache sweep removed {} expired entries", removed),
            );
        }
        removed
    }

    pub fn stats(&self) -> CacheStats {
        let entries = self.entries.lock();
        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();
        CacheStats {
            count: entries.len(),
            keys,
        }
    }

    /// Get current cache size (stale entries included until evicted)
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Run `sweep` on a fixed interval until the returned handle is aborted
pub fn spawn_sweeper<V>(cache: Arc<TtlCache<V>>, every: Duration) -> JoinHandle<()>
where
    V: Clone + Send + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            cache.sweep();
        }
    })
}
