//! Time-bounded cache for slow-changing chain state.

use std::time::{Duration, Instant};

/// A single cached value with a time-to-live.
///
/// The global configuration changes rarely but is needed before every
/// curve quote; a [`StateSource`](crate::traits::StateSource)
/// implementation that wants to skip the round trip keeps one of these
/// behind the trait. The pricing core itself never reads a cache — it is
/// always handed a fresh snapshot. Entries are valid for their TTL and
/// then must be refreshed; there is no background refresh, the reader
/// drives it.
#[derive(Debug, Clone)]
pub struct ConfigCache<T> {
    entry: Option<(T, Instant)>,
    ttl: Duration,
}

impl<T: Clone> ConfigCache<T> {
    /// Default TTL for the global configuration.
    pub const DEFAULT_TTL: Duration = Duration::from_secs(30);

    /// Creates an empty cache with the given TTL.
    #[must_use]
    pub const fn new(ttl: Duration) -> Self {
        Self { entry: None, ttl }
    }

    /// Returns the cached value if it is still within its TTL.
    #[must_use]
    pub fn get(&self) -> Option<T> {
        match &self.entry {
            Some((value, fetched_at)) if fetched_at.elapsed() < self.ttl => Some(value.clone()),
            _ => None,
        }
    }

    /// Stores a freshly fetched value, restarting the TTL.
    pub fn put(&mut self, value: T) {
        self.entry = Some((value, Instant::now()));
    }

    /// Drops the cached value, forcing the next read to refresh.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

impl<T: Clone> Default for ConfigCache<T> {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cache_misses() {
        let cache: ConfigCache<u64> = ConfigCache::default();
        assert_eq!(cache.get(), None);
    }

    #[test]
    fn fresh_entry_hits() {
        let mut cache = ConfigCache::new(Duration::from_secs(30));
        cache.put(7u64);
        assert_eq!(cache.get(), Some(7));
    }

    #[test]
    fn zero_ttl_always_misses() {
        let mut cache = ConfigCache::new(Duration::ZERO);
        cache.put(7u64);
        assert_eq!(cache.get(), None);
    }

    #[test]
    fn invalidate_clears() {
        let mut cache = ConfigCache::new(Duration::from_secs(30));
        cache.put(7u64);
        cache.invalidate();
        assert_eq!(cache.get(), None);
    }
}
