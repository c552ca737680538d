/// Client-side search over an already fetched list
use super::models::{Coin, TrendingCoin};

/// Anything that can be matched by name or symbol
pub trait Searchable {
    fn name(&self) -> &str;
    fn symbol(&self) -> &str;
}

impl Searchable for Coin {
    fn name(&self) -> &str {
        &self.name
    }

    fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl Searchable for TrendingCoin {
    fn name(&self) -> &str {
        &self.name
    }

    fn symbol(&self) -> &str {
        &self.symbol
    }
}

/// Entries whose name or symbol contains `query`, case-insensitively
///
/// A blank query returns the whole pool in its original order.
pub fn search<T>(query: &str, pool: &[T]) -> Vec<T>
where
    T: Searchable + Clone,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return pool.to_vec();
    }

    pool.iter()
        .filter(|entry| {
            entry.name().to_lowercase().contains(&needle)
                || entry.symbol().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
