//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cache contract over generated operation
//! sequences.

use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{duration_ms, ExpiringCache, ManualClock};

// == Test Configuration ==
const TEST_TTL: Duration = Duration::from_secs(300);
const TEST_START_MS: u64 = 1_700_000_000_000;

// == Strategies ==
/// Generates cache keys drawn from a small pool so operations collide
fn key_strategy() -> impl Strategy<Value = String> {
    "user_[a-d]{1,2}".prop_map(|s| s)
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,64}".prop_map(|s| s)
}

/// A single step against the cache
#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String },
    Get { key: String },
    Invalidate { key: String },
    Stats,
    Advance { secs: u64 },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy()).prop_map(|(key, value)| CacheOp::Set { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
        key_strategy().prop_map(|key| CacheOp::Invalidate { key }),
        Just(CacheOp::Stats),
        (0u64..400).prop_map(|secs| CacheOp::Advance { secs }),
    ]
}

fn new_cache() -> (ExpiringCache<String, ManualClock>, ManualClock) {
    let clock = ManualClock::new(TEST_START_MS);
    (ExpiringCache::with_clock(TEST_TTL, clock.clone()), clock)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Immediately after set(key, value), get(key) returns value.
    #[test]
    fn prop_get_after_set(key in key_strategy(), value in value_strategy()) {
        let (mut cache, _clock) = new_cache();

        cache.set(key.clone(), value.clone());
        prop_assert_eq!(cache.get(&key), Some(value));
    }

    // After invalidate(key), get(key) is absent regardless of prior state.
    #[test]
    fn prop_invalidate_removes_entry(
        ops in prop::collection::vec(cache_op_strategy(), 0..30),
        key in key_strategy()
    ) {
        let (mut cache, clock) = new_cache();
        for op in ops {
            apply(&mut cache, &clock, op);
        }

        cache.invalidate(&key);
        prop_assert_eq!(cache.get(&key), None);
    }

    // A later set for the same key fully replaces the earlier one.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let (mut cache, _clock) = new_cache();

        cache.set(key.clone(), value1);
        cache.set(key.clone(), value2.clone());

        prop_assert_eq!(cache.get(&key), Some(value2));
        prop_assert_eq!(cache.len(), 1, "Should have exactly one entry after overwrite");
    }

    // Past expires_at, get is absent and the entry no longer counts at all.
    #[test]
    fn prop_expired_entry_is_evicted(
        key in key_strategy(),
        value in value_strategy(),
        overshoot_ms in 1u64..1_000_000
    ) {
        let (mut cache, clock) = new_cache();

        cache.set(key.clone(), value);
        clock.advance(TEST_TTL + Duration::from_millis(overshoot_ms));

        prop_assert_eq!(cache.get(&key), None);
        prop_assert_eq!(cache.stats().total_entries, 0);
    }

    // Interleaving stats() calls never changes what get() observes.
    #[test]
    fn prop_stats_never_mutates(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let (mut with_stats, clock_a) = new_cache();
        let (mut without_stats, clock_b) = new_cache();

        for op in ops {
            let observed_a = apply(&mut with_stats, &clock_a, op.clone());
            with_stats.stats();
            with_stats.stats();

            let observed_b = match op {
                CacheOp::Stats => None,
                other => apply(&mut without_stats, &clock_b, other),
            };

            prop_assert_eq!(observed_a, observed_b);
        }
    }

    // The cache agrees with a simple model tracking (value, expires_at).
    #[test]
    fn prop_matches_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let (mut cache, clock) = new_cache();
        let mut model: HashMap<String, (String, u64)> = HashMap::new();
        let ttl_ms = duration_ms(TEST_TTL);

        for op in ops {
            let now = clock_now(&clock);
            match op.clone() {
                CacheOp::Set { key, value } => {
                    model.insert(key, (value, now + ttl_ms));
                }
                CacheOp::Get { key } => {
                    let expected = match model.get(&key).cloned() {
                        Some((value, expires_at)) if now <= expires_at => Some(value),
                        Some(_) => {
                            model.remove(&key);
                            None
                        }
                        None => None,
                    };
                    prop_assert_eq!(cache.get(&key), expected);
                    continue;
                }
                CacheOp::Invalidate { key } => {
                    model.remove(&key);
                }
                CacheOp::Stats => {
                    let stats = cache.stats();
                    let valid = model.values().filter(|(_, exp)| now <= *exp).count();
                    prop_assert_eq!(stats.total_entries, model.len());
                    prop_assert_eq!(stats.valid_entries, valid);
                    prop_assert_eq!(stats.expired_entries, model.len() - valid);
                    continue;
                }
                CacheOp::Advance { .. } => {}
            }
            apply(&mut cache, &clock, op);
        }
    }
}

/// Applies `op` and returns what a `get` observed, if the op was a `get`.
fn apply(
    cache: &mut ExpiringCache<String, ManualClock>,
    clock: &ManualClock,
    op: CacheOp,
) -> Option<Option<String>> {
    match op {
        CacheOp::Set { key, value } => {
            cache.set(key, value);
            None
        }
        CacheOp::Get { key } => Some(cache.get(&key)),
        CacheOp::Invalidate { key } => {
            cache.invalidate(&key);
            None
        }
        CacheOp::Stats => {
            cache.stats();
            None
        }
        CacheOp::Advance { secs } => {
            clock.advance(Duration::from_secs(secs));
            None
        }
    }
}

fn clock_now(clock: &ManualClock) -> u64 {
    use crate::cache::Clock;
    clock.now_ms()
}

// == Additional Unit Tests for Edge Cases ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_minute_window() {
        let (mut cache, clock) = new_cache();

        cache.set("u1", "A".to_string());

        clock.set_ms(TEST_START_MS + 299_000);
        assert_eq!(cache.get("u1"), Some("A".to_string()));

        clock.set_ms(TEST_START_MS + 301_000);
        assert_eq!(cache.get("u1"), None);
    }

    #[test]
    fn test_clear_drops_valid_and_expired() {
        let (mut cache, clock) = new_cache();

        cache.set("a", "1".to_string());
        clock.advance(TEST_TTL * 2);
        cache.set("b", "2".to_string());
        cache.clear();

        let stats = cache.stats();
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.valid_entries, 0);
    }
}
