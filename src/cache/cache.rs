// This is intentionally caller-owned:
// no globals
// no clock reads
// eviction happens only on access or purge

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use super::key::CacheKey;

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    inserted_at: DateTime<Utc>,
}

/// Time-bounded result cache placed above the engine by its caller.
///
/// All timestamps are supplied by the caller, so lifetime and eviction are
/// entirely the caller's policy.
#[derive(Debug, Clone)]
pub struct AnalysisCache<V> {
    ttl: Duration,
    entries: BTreeMap<CacheKey, CacheEntry<V>>,
}

impl<V> AnalysisCache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: BTreeMap::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fresh value for `key`. An expired entry is dropped and reported absent.
    pub fn get(&mut self, key: &CacheKey, now: DateTime<Utc>) -> Option<&V> {
        let stale = match self.entries.get(key) {
            None => {
                debug!(key = key.as_str(), "cache miss");
                return None;
            }
            Some(entry) => is_expired(entry, now, self.ttl),
        };

        if stale {
            self.entries.remove(key);
            debug!(key = key.as_str(), "cache entry expired");
            return None;
        }

        debug!(key = key.as_str(), "cache hit");
        self.entries.get(key).map(|entry| &entry.value)
    }

    /// Store `value`, returning the previous value for `key` if any.
    pub fn insert(&mut self, key: CacheKey, value: V, now: DateTime<Utc>) -> Option<V> {
        self.entries
            .insert(
                key,
                CacheEntry {
                    value,
                    inserted_at: now,
                },
            )
            .map(|old| old.value)
    }

    /// Fresh cached value, or the result of `compute` stored under `key`.
    pub fn get_or_insert_with<F>(&mut self, key: CacheKey, now: DateTime<Utc>, compute: F) -> &V
    where
        F: FnOnce() -> V,
    {
        let ttl = self.ttl;
        match self.entries.entry(key) {
            Entry::Occupied(mut occupied) => {
                if is_expired(occupied.get(), now, ttl) {
                    debug!(key = occupied.key().as_str(), "cache entry expired, recomputing");
                    occupied.insert(CacheEntry {
                        value: compute(),
                        inserted_at: now,
                    });
                } else {
                    debug!(key = occupied.key().as_str(), "cache hit");
                }
                &occupied.into_mut().value
            }
            Entry::Vacant(vacant) => {
                debug!(key = vacant.key().as_str(), "cache miss");
                &vacant
                    .insert(CacheEntry {
                        value: compute(),
                        inserted_at: now,
                    })
                    .value
            }
        }
    }

    /// Drop every expired entry, returning how many were removed.
    pub fn purge_expired(&mut self, now: DateTime<Utc>) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !is_expired(entry, now, ttl));
        let purged = before - self.entries.len();
        if purged > 0 {
            debug!(purged, "cache purged expired entries");
        }
        purged
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Strictly older than `ttl`.
fn is_expired<V>(entry: &CacheEntry<V>, now: DateTime<Utc>, ttl: Duration) -> bool {
    now.signed_duration_since(entry.inserted_at) > ttl
}
