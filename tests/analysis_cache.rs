use std::cell::Cell;

use chrono::{Duration, TimeZone, Utc};
use content_core::cache::{AnalysisCache, CacheKey};
use content_core::types::{AnalysisReport, KeywordRequest};
use content_core::ContentEngine;

fn t0() -> chrono::DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap()
}

#[test]
fn invariant_same_text_and_options_same_key() {
    let a = CacheKey::new("Cats are great.", &("keywords", 10)).unwrap();
    let b = CacheKey::new("Cats are great.", &("keywords", 10)).unwrap();
    let c = CacheKey::new("Cats are great.", &("keywords", 11)).unwrap();
    let d = CacheKey::new("Cats are great!", &("keywords", 10)).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, d);
    assert!(a.as_str().starts_with("sha256:"));
}

#[test]
fn key_parts_do_not_bleed_into_each_other() {
    let a = CacheKey::new("ab", "c").unwrap();
    let b = CacheKey::new("a", "bc").unwrap();
    assert_ne!(a, b);
}

#[test]
fn entries_expire_after_ttl() {
    let mut cache = AnalysisCache::new(Duration::minutes(5));
    let key = CacheKey::new("text", &()).unwrap();

    assert!(cache.insert(key.clone(), 42, t0()).is_none());
    assert_eq!(cache.get(&key, t0() + Duration::minutes(4)), Some(&42));
    // Exactly at the TTL boundary the entry is still fresh.
    assert_eq!(cache.get(&key, t0() + Duration::minutes(5)), Some(&42));

    assert_eq!(cache.get(&key, t0() + Duration::minutes(6)), None);
    assert!(cache.is_empty());
}

#[test]
fn insert_replaces_and_returns_previous() {
    let mut cache = AnalysisCache::new(Duration::minutes(5));
    let key = CacheKey::new("text", &()).unwrap();

    cache.insert(key.clone(), "old", t0());
    assert_eq!(cache.insert(key.clone(), "new", t0()), Some("old"));
    assert_eq!(cache.get(&key, t0()), Some(&"new"));
    assert_eq!(cache.len(), 1);
}

#[test]
fn purge_drops_only_expired_entries() {
    let mut cache = AnalysisCache::new(Duration::minutes(5));
    let old = CacheKey::new("old", &()).unwrap();
    let fresh = CacheKey::new("fresh", &()).unwrap();

    cache.insert(old, 1, t0());
    cache.insert(fresh.clone(), 2, t0() + Duration::minutes(4));

    assert_eq!(cache.purge_expired(t0() + Duration::minutes(8)), 1);
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get(&fresh, t0() + Duration::minutes(8)), Some(&2));

    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn get_or_insert_with_computes_once_per_ttl() {
    let engine = ContentEngine::default();
    let mut cache: AnalysisCache<AnalysisReport> = AnalysisCache::new(Duration::minutes(5));
    let text = "SEO is great. It helps websites rank higher in search engines.";
    let key = CacheKey::new(text, "analyze").unwrap();
    let computed = Cell::new(0);

    let compute = || {
        computed.set(computed.get() + 1);
        engine.analyze(text)
    };

    let first = cache.get_or_insert_with(key.clone(), t0(), compute).clone();
    let second = cache
        .get_or_insert_with(key.clone(), t0() + Duration::minutes(1), || {
            computed.set(computed.get() + 1);
            engine.analyze(text)
        })
        .clone();
    assert_eq!(computed.get(), 1);
    assert_eq!(first, second);

    cache.get_or_insert_with(key, t0() + Duration::minutes(10), || {
        computed.set(computed.get() + 1);
        engine.analyze(text)
    });
    assert_eq!(computed.get(), 2);
}

#[test]
fn request_can_serve_as_cache_options() {
    let request = KeywordRequest::new("Cats sleep.", 5);
    let a = CacheKey::new(&request.text, &request).unwrap();
    let b = CacheKey::new(&request.text, &KeywordRequest::new("Cats sleep.", 6)).unwrap();
    assert_ne!(a, b);
}
