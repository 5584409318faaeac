//! Cache Module
//!
//! Provides an in-memory cache with fixed-TTL expiration and lazy eviction.

mod clock;
mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{current_timestamp_ms, duration_ms, Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::ExpiringCache;

// == Public Constants ==
/// TTL applied to cached user profiles (5 minutes)
pub const DEFAULT_TTL_SECS: u64 = 300;
