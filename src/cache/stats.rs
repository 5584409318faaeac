//! Cache Statistics Module
//!
//! Diagnostic snapshot splitting stored entries into valid and expired.

use serde::Serialize;

use crate::cache::CacheEntry;

// == Cache Stats ==
/// Point-in-time view of the cache contents.
///
/// `total_entries - valid_entries` counts entries that have expired but have
/// not been read since, so lazy eviction has not removed them yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Entries currently held, expired or not
    pub total_entries: usize,
    /// Entries that `get` would still return
    pub valid_entries: usize,
    /// Entries past their expiration awaiting lazy eviction
    pub expired_entries: usize,
}

impl CacheStats {
    // == Fold ==
    /// Partitions `entries` by expiry at `now_ms` without touching them.
    pub fn collect<'a, V: 'a>(
        entries: impl IntoIterator<Item = &'a CacheEntry<V>>,
        now_ms: u64,
    ) -> Self {
        let (total_entries, valid_entries) =
            entries
                .into_iter()
                .fold((0, 0), |(total, valid), entry| {
                    if entry.is_expired_at(now_ms) {
                        (total + 1, valid)
                    } else {
                        (total + 1, valid + 1)
                    }
                });

        Self {
            total_entries,
            valid_entries,
            expired_entries: total_entries - valid_entries,
        }
    }
}
