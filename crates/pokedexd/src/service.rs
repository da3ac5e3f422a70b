//! Lookup service: validation, cache, upstream fetch and summary mapping.

use pokedex_common::LookupResult;
use regex::Regex;
use std::sync::{Arc, OnceLock};
use tracing::info;

use crate::cache::LookupCache;
use crate::config::Config;
use crate::error::DexError;
use crate::summary::summarize;
use crate::upstream::PokeApi;

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9-]+$").expect("static pattern"))
}

/// Check a raw `name` parameter.
pub fn validate_name(name: Option<&str>) -> Result<&str, DexError> {
    let name = name.filter(|n| !n.trim().is_empty()).ok_or(DexError::MissingName)?;
    if !name_pattern().is_match(name) {
        return Err(DexError::InvalidName);
    }
    Ok(name)
}

pub struct PokemonService {
    api: Arc<dyn PokeApi>,
    cache: LookupCache,
    move_limit: usize,
}

impl PokemonService {
    pub fn new(api: Arc<dyn PokeApi>, cache: LookupCache, move_limit: usize) -> Self {
        Self {
            api,
            cache,
            move_limit,
        }
    }

    pub fn from_config(api: Arc<dyn PokeApi>, config: &Config) -> Self {
        Self::new(
            api,
            LookupCache::new(config.cache.capacity, config.cache.ttl()),
            config.summary.move_limit,
        )
    }

    /// Look up a validated name, serving from cache when fresh.
    pub async fn find_pokemon(&self, name: &str) -> Result<LookupResult, DexError> {
        if let Some(cached) = self.cache.get(name).await {
            info!("  Cache hit for {}", LookupCache::key(name));
            return Ok(cached);
        }

        let document = self.api.fetch_pokemon(name).await?;
        let result = summarize(&document, self.move_limit);
        self.cache.insert(name, result.clone()).await;

        info!("  Fetched {} (#{})", result.name, result.id);
        Ok(result)
    }

    pub fn cache(&self) -> &LookupCache {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct CountingApi {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PokeApi for CountingApi {
        async fn fetch_pokemon(&self, name: &str) -> Result<Value, DexError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if name.eq_ignore_ascii_case("missingno") {
                return Err(DexError::NotFound(name.to_string()));
            }
            Ok(json!({ "id": 133, "name": name.to_lowercase() }))
        }
    }

    fn service(ttl: Duration) -> (Arc<CountingApi>, PokemonService) {
        let api = Arc::new(CountingApi {
            calls: AtomicUsize::new(0),
        });
        let service = PokemonService::new(api.clone(), LookupCache::new(10, ttl), 6);
        (api, service)
    }

    #[test]
    fn test_validate_name() {
        assert!(matches!(validate_name(None), Err(DexError::MissingName)));
        assert!(matches!(validate_name(Some("   ")), Err(DexError::MissingName)));
        assert!(matches!(validate_name(Some("mr mime")), Err(DexError::InvalidName)));
        assert!(matches!(validate_name(Some("pika<chu")), Err(DexError::InvalidName)));
        assert_eq!(validate_name(Some("ho-oh")).unwrap(), "ho-oh");
        assert_eq!(validate_name(Some("Porygon2")).unwrap(), "Porygon2");
    }

    #[tokio::test]
    async fn test_second_lookup_is_cached() {
        let (api, service) = service(Duration::from_secs(60));

        service.find_pokemon("Eevee").await.unwrap();
        let result = service.find_pokemon("eevee").await.unwrap();

        assert_eq!(result.name, "eevee");
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_expired_entry_refetches() {
        let (api, service) = service(Duration::from_millis(50));

        service.find_pokemon("eevee").await.unwrap();
        tokio::time::sleep(Duration::from_millis(80)).await;
        service.find_pokemon("eevee").await.unwrap();

        assert_eq!(api.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let (api, service) = service(Duration::from_secs(60));

        assert!(service.find_pokemon("missingno").await.is_err());
        assert!(service.find_pokemon("missingno").await.is_err());

        assert_eq!(api.calls.load(Ordering::SeqCst), 2);
        assert!(service.cache().is_empty().await);
    }
}
