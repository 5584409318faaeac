//! Cache-backed profile retrieval.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::cache::{CacheStats, Clock, ExpiringCache, SystemClock};
use crate::error::FetchError;
use crate::models::UpdateProfileRequest;
use crate::profile::{ProfileSource, UserProfile};

/// Prefix of the cache key derived from a user id.
pub const USER_KEY_PREFIX: &str = "user_";

// == Profile Service ==
/// Serves user profiles from an expiring cache, falling back to a
/// [`ProfileSource`] on a miss.
///
/// The cache lock is released before the upstream call and taken again to
/// store the result. Two concurrent misses for one user therefore both call
/// upstream and the later write wins.
pub struct ProfileService<C = SystemClock> {
    cache: Arc<RwLock<ExpiringCache<UserProfile, C>>>,
    source: Arc<dyn ProfileSource>,
}

impl ProfileService<SystemClock> {
    /// Creates a service whose cache keeps profiles for `ttl`.
    pub fn new(source: Arc<dyn ProfileSource>, ttl: Duration) -> Self {
        Self::with_clock(source, ttl, SystemClock)
    }
}

impl<C: Clock> ProfileService<C> {
    pub fn with_clock(source: Arc<dyn ProfileSource>, ttl: Duration, clock: C) -> Self {
        Self {
            cache: Arc::new(RwLock::new(ExpiringCache::with_clock(ttl, clock))),
            source,
        }
    }

    /// Cache key for `user_id`.
    pub fn cache_key(user_id: &str) -> String {
        format!("{USER_KEY_PREFIX}{user_id}")
    }

    /// Shared handle to the underlying cache.
    pub fn cache(&self) -> Arc<RwLock<ExpiringCache<UserProfile, C>>> {
        Arc::clone(&self.cache)
    }

    // == Fetch ==
    /// Returns the profile of `user_id`, from cache when possible.
    ///
    /// Upstream failures are logged and reported as `None`; nothing is
    /// cached for them.
    pub async fn fetch_with_cache(&self, user_id: &str) -> Option<UserProfile> {
        match self.try_fetch_with_cache(user_id).await {
            Ok(profile) => Some(profile),
            Err(err) => {
                warn!(user_id, error = %err, "profile fetch failed");
                None
            }
        }
    }

    /// Same lookup as [`fetch_with_cache`](Self::fetch_with_cache) but keeps
    /// the reason a miss could not be filled.
    pub async fn try_fetch_with_cache(&self, user_id: &str) -> Result<UserProfile, FetchError> {
        let key = Self::cache_key(user_id);

        let cached = self.cache.write().await.get(&key);
        if let Some(profile) = cached {
            debug!(user_id, "profile cache hit");
            return Ok(profile);
        }

        debug!(user_id, "profile cache miss");
        let profile = self.source.fetch_profile(user_id).await?;

        self.cache.write().await.set(key, profile.clone());
        Ok(profile)
    }

    // == Invalidate ==
    /// Drops the cached profile of `user_id` so the next read refetches.
    ///
    /// Call after any successful write that changes the profile.
    pub async fn invalidate_user_cache(&self, user_id: &str) {
        let key = Self::cache_key(user_id);
        self.cache.write().await.invalidate(&key);
        debug!(user_id, "profile cache invalidated");
    }

    // == Update ==
    /// Writes a profile change upstream, then invalidates the cached copy.
    ///
    /// A failed write leaves the cache untouched.
    pub async fn update_profile(
        &self,
        user_id: &str,
        update: &UpdateProfileRequest,
    ) -> Result<UserProfile, FetchError> {
        let updated = self.source.update_profile(user_id, update).await?;
        self.invalidate_user_cache(user_id).await;
        info!(user_id, "profile updated");
        Ok(updated)
    }

    // == Clear ==
    /// Empties the cache and returns how many entries were dropped.
    pub async fn clear_cache(&self) -> usize {
        let mut cache = self.cache.write().await;
        let removed = cache.len();
        cache.clear();
        removed
    }

    // == Stats ==
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }
}

impl<C> Clone for ProfileService<C> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
            source: Arc::clone(&self.source),
        }
    }
}
