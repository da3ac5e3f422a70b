//! Lookup cache: LRU bounded, entries expire a fixed time after write.

use lru::LruCache;
use pokedex_common::LookupResult;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
struct CacheEntry {
    result: LookupResult,
    inserted_at: Instant,
}

/// Summaries keyed by lower-cased name
pub struct LookupCache {
    cache: Mutex<LruCache<String, CacheEntry>>,
    ttl: Duration,
}

impl LookupCache {
    /// Create new lookup cache
    ///
    /// * `capacity` - Maximum number of names to keep (clamped to at least 1)
    /// * `ttl` - Time an entry stays valid after it was written
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);

        Self {
            cache: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    /// Cache key for a queried name
    pub fn key(name: &str) -> String {
        name.to_lowercase()
    }

    /// Fresh entry for `name`, if any. Expired entries are dropped.
    pub async fn get(&self, name: &str) -> Option<LookupResult> {
        let key = Self::key(name);
        let mut cache = self.cache.lock().await;

        let expired = match cache.get(&key) {
            Some(entry) if entry.inserted_at.elapsed() < self.ttl => {
                return Some(entry.result.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            cache.pop(&key);
        }
        None
    }

    pub async fn insert(&self, name: &str, result: LookupResult) {
        let mut cache = self.cache.lock().await;
        cache.put(
            Self::key(name),
            CacheEntry {
                result,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Prune expired entries
    pub async fn prune_expired(&self) -> usize {
        let mut cache = self.cache.lock().await;

        let expired_keys: Vec<String> = cache
            .iter()
            .filter(|(_, entry)| entry.inserted_at.elapsed() >= self.ttl)
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            cache.pop(key);
        }
        expired_keys.len()
    }

    /// Get current cache size
    pub async fn len(&self) -> usize {
        self.cache.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for LookupCache {
    fn default() -> Self {
        // 200 names, 10 minute TTL
        Self::new(200, Duration::from_secs(600))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str) -> LookupResult {
        serde_json::from_value(serde_json::json!({ "id": 1, "name": name })).unwrap()
    }

    #[tokio::test]
    async fn test_cache_miss_then_hit() {
        let cache = LookupCache::new(10, Duration::from_secs(60));

        assert!(cache.get("pikachu").await.is_none());
        cache.insert("pikachu", result("pikachu")).await;
        assert_eq!(cache.get("pikachu").await.unwrap().name, "pikachu");
    }

    #[tokio::test]
    async fn test_cache_key_is_case_insensitive() {
        let cache = LookupCache::new(10, Duration::from_secs(60));

        cache.insert("Pikachu", result("pikachu")).await;
        assert!(cache.get("PIKACHU").await.is_some());
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_cache_expiration() {
        let cache = LookupCache::new(10, Duration::from_millis(100));

        cache.insert("eevee", result("eevee")).await;
        tokio::time::sleep(Duration::from_millis(150)).await;

        assert!(cache.get("eevee").await.is_none(), "Entry should have expired");
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_cache_lru_eviction() {
        let cache = LookupCache::new(2, Duration::from_secs(60));

        cache.insert("bulbasaur", result("bulbasaur")).await;
        cache.insert("charmander", result("charmander")).await;
        cache.insert("squirtle", result("squirtle")).await; // Should evict bulbasaur

        assert!(cache.get("bulbasaur").await.is_none());
        assert!(cache.get("charmander").await.is_some());
        assert!(cache.get("squirtle").await.is_some());
    }

    #[tokio::test]
    async fn test_prune_expired() {
        let cache = LookupCache::new(10, Duration::from_millis(50));

        cache.insert("a", result("a")).await;
        cache.insert("b", result("b")).await;
        tokio::time::sleep(Duration::from_millis(80)).await;

        assert_eq!(cache.prune_expired().await, 2);
        assert_eq!(cache.len().await, 0);
    }
}
