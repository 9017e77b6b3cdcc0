//! Short-TTL result store keyed by request fingerprints, using moka.
//!
//! Each entry carries the TTL that was in force for the call that wrote
//! it, so a temporary TTL override on one call affects that call's writes
//! only. Expired entries read as absent; moka prunes them on its own
//! schedule.

use moka::future::Cache;
use moka::Expiry;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::domain::models::{Fingerprint, Record};

/// Default maximum number of cached results.
const RESULT_CACHE_MAX_CAPACITY: u64 = 4096;

/// A value held by the result cache.
#[derive(Debug, Clone)]
pub enum CachedValue {
    /// Scalar result of a property read, method invocation, or raw script.
    Scalar(String),
    /// Full instance list of an enumeration, stored as one shared copy so
    /// every hit hands back the same list, never element by element.
    Records(Arc<[Record]>),
}

#[derive(Debug, Clone)]
struct CacheSlot {
    value: CachedValue,
    ttl: Duration,
}

/// Expiry policy reading the TTL stored with each entry.
struct PerEntryTtl;

impl Expiry<Fingerprint, CacheSlot> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &Fingerprint,
        slot: &CacheSlot,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(slot.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &Fingerprint,
        slot: &CacheSlot,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(slot.ttl)
    }
}

/// Process-local, time-bounded store of previously computed results.
///
/// Safe under concurrent callers sharing one session; moka provides the
/// internal synchronization, and no operation blocks beyond map access.
pub struct ResultCache {
    entries: Cache<Fingerprint, CacheSlot>,
}

impl ResultCache {
    /// Create a cache with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(RESULT_CACHE_MAX_CAPACITY)
    }

    /// Create a cache bounded to `max_capacity` entries.
    pub fn with_capacity(max_capacity: u64) -> Self {
        let entries = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(PerEntryTtl)
            .build();
        Self { entries }
    }

    /// Look up a previously cached result. Expired entries are absent.
    pub async fn get(&self, key: &Fingerprint) -> Option<CachedValue> {
        self.entries.get(key).await.map(|slot| slot.value)
    }

    /// Unconditionally overwrite the entry for `key`, valid for `ttl`.
    pub async fn put(&self, key: Fingerprint, value: CachedValue, ttl: Duration) {
        self.entries.insert(key, CacheSlot { value, ttl }).await;
    }

    /// Drop every entry.
    pub fn invalidate_all(&self) {
        self.entries.invalidate_all();
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> Fingerprint {
        Fingerprint::of(&[name])
    }

    #[tokio::test]
    async fn test_put_then_get_scalar() {
        let cache = ResultCache::new();
        cache
            .put(key("a"), CachedValue::Scalar("5120".into()), Duration::from_secs(30))
            .await;

        match cache.get(&key("a")).await {
            Some(CachedValue::Scalar(v)) => assert_eq!(v, "5120"),
            other => panic!("expected scalar hit, got {other:?}"),
        }
        assert!(cache.get(&key("b")).await.is_none());
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let cache = ResultCache::new();
        cache
            .put(key("a"), CachedValue::Scalar("old".into()), Duration::from_secs(30))
            .await;
        cache
            .put(key("a"), CachedValue::Scalar("new".into()), Duration::from_secs(30))
            .await;

        match cache.get(&key("a")).await {
            Some(CachedValue::Scalar(v)) => assert_eq!(v, "new"),
            other => panic!("expected scalar hit, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_expired_entry_reads_as_absent() {
        let cache = ResultCache::new();
        cache
            .put(key("a"), CachedValue::Scalar("v".into()), Duration::from_millis(50))
            .await;

        assert!(cache.get(&key("a")).await.is_some());
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(cache.get(&key("a")).await.is_none());
    }

    #[tokio::test]
    async fn test_records_share_one_copy() {
        let cache = ResultCache::new();
        let records: Arc<[Record]> = Vec::new().into();
        cache
            .put(key("list"), CachedValue::Records(Arc::clone(&records)), Duration::from_secs(30))
            .await;

        match cache.get(&key("list")).await {
            Some(CachedValue::Records(hit)) => assert!(Arc::ptr_eq(&hit, &records)),
            other => panic!("expected records hit, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalidate_all() {
        let cache = ResultCache::new();
        cache
            .put(key("a"), CachedValue::Scalar("v".into()), Duration::from_secs(30))
            .await;
        cache.invalidate_all();
        assert!(cache.get(&key("a")).await.is_none());
    }
}
