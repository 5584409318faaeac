//! Cache Store Module
//!
//! HashMap-backed cache with a fixed TTL and lazy expiration on read.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, Clock, SystemClock};

// == Expiring Cache ==
/// Key-value cache whose entries expire a fixed TTL after insertion.
///
/// There is no background sweep. Expired entries are dropped when `get`
/// next touches them, or by `invalidate` and `clear`.
pub struct ExpiringCache<V, C = SystemClock> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Lifetime applied by `set`
    ttl: Duration,
    /// Time source
    clock: C,
}

impl<V> ExpiringCache<V, SystemClock> {
    // == Constructor ==
    /// Creates an empty cache on the system clock.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, SystemClock)
    }
}

impl<V, C: Clock> ExpiringCache<V, C> {
    /// Creates an empty cache reading time from `clock`.
    pub fn with_clock(ttl: Duration, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            clock,
        }
    }

    // == Set ==
    /// Stores `value` under `key` for the cache TTL, replacing any previous
    /// entry for that key.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        let ttl = self.ttl;
        self.set_with_ttl(key, value, ttl);
    }

    /// Stores `value` under `key` for `ttl` instead of the cache default.
    pub fn set_with_ttl(&mut self, key: impl Into<String>, value: V, ttl: Duration) {
        let entry = CacheEntry::new(value, self.clock.now_ms(), ttl);
        self.entries.insert(key.into(), entry);
    }

    // == Get ==
    /// Returns the value for `key` if it is present and not expired.
    ///
    /// An expired entry found here is removed.
    pub fn get(&mut self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        let now = self.clock.now_ms();
        let expired = self.entries.get(key)?.is_expired_at(now);

        if expired {
            self.entries.remove(key);
            debug!(key, "evicted expired cache entry");
            return None;
        }

        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Invalidate ==
    /// Removes the entry for `key`. Absent keys are ignored.
    pub fn invalidate(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            debug!(key, "invalidated cache entry");
        }
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // == Stats ==
    /// Counts total, valid and expired entries. Nothing is evicted.
    pub fn stats(&self) -> CacheStats {
        CacheStats::collect(self.entries.values(), self.clock.now_ms())
    }

    // == Length ==
    /// Returns the number of stored entries, including expired ones not yet
    /// evicted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the default TTL applied by `set`.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl<V, C> fmt::Debug for ExpiringCache<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpiringCache")
            .field("entries", &self.entries.len())
            .field("ttl", &self.ttl)
            .finish()
    }
}
