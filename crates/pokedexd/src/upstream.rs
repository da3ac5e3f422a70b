//! PokéAPI client.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::UpstreamConfig;
use crate::error::DexError;

/// Source of raw Pokémon documents.
#[async_trait]
pub trait PokeApi: Send + Sync {
    /// Fetch the raw document for `name`.
    ///
    /// Upstream 4xx maps to [`DexError::NotFound`], 5xx to
    /// [`DexError::UpstreamUnavailable`].
    async fn fetch_pokemon(&self, name: &str) -> Result<Value, DexError>;
}

/// HTTP implementation backed by reqwest
pub struct HttpPokeApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPokeApi {
    pub fn new(config: &UpstreamConfig) -> Result<Self, DexError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("pokedexd/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DexError::Internal(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name.to_lowercase())
    }
}

#[async_trait]
impl PokeApi for HttpPokeApi {
    async fn fetch_pokemon(&self, name: &str) -> Result<Value, DexError> {
        let url = self.pokemon_url(name);
        debug!("  GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status.is_client_error() {
            return Err(DexError::NotFound(name.to_string()));
        }
        if status.is_server_error() {
            warn!("  PokéAPI returned {} for {}", status, name);
            return Err(DexError::UpstreamUnavailable);
        }

        Ok(response.json::<Value>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pokemon_url_lowercases_and_trims_slash() {
        let api = HttpPokeApi::new(&UpstreamConfig {
            base_url: "http://localhost:9/api/v2/".into(),
            timeout_secs: 1,
        })
        .unwrap();
        assert_eq!(api.pokemon_url("Pikachu"), "http://localhost:9/api/v2/pokemon/pikachu");
    }
}
