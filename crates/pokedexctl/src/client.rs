//! HTTP client for the pokedexd lookup endpoint.

use async_trait::async_trait;
use pokedex_common::{LookupError, LookupResult, API_PATH, RESPONSE_TIME_HEADER};
use std::time::Duration;
use tracing::debug;

/// Default daemon address
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:8080";

/// A successful lookup and the server's reported handling time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    pub result: LookupResult,
    /// `x-response-time` header, verbatim.
    pub response_time: Option<String>,
}

/// Anything that can resolve a query to a Lookup Result.
#[async_trait]
pub trait LookupApi: Send + Sync {
    async fn lookup(&self, query: &str) -> Result<Fetched, LookupError>;
}

/// Client for communicating with pokedexd
pub struct LookupClient {
    http: reqwest::Client,
    base_url: String,
}

impl LookupClient {
    pub fn new(base_url: &str) -> Result<Self, LookupError> {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Lookup URL with the query percent-encoded.
    pub fn lookup_url(&self, query: &str) -> String {
        format!(
            "{}{}?name={}",
            self.base_url,
            API_PATH,
            urlencoding::encode(query)
        )
    }
}

#[async_trait]
impl LookupApi for LookupClient {
    async fn lookup(&self, query: &str) -> Result<Fetched, LookupError> {
        let url = self.lookup_url(query);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        let response_time = response
            .headers()
            .get(RESPONSE_TIME_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        if !status.is_success() {
            // An unreadable error body falls back to the generic message
            let body = response.bytes().await.unwrap_or_else(|e| {
                debug!("Could not read {} error body: {}", status, e);
                Default::default()
            });
            return Err(LookupError::from_status(status.as_u16(), &body));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let result: LookupResult =
            serde_json::from_slice(&body).map_err(|e| LookupError::Malformed(e.to_string()))?;

        Ok(Fetched {
            result,
            response_time,
        })
    }
}
