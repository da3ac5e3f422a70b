//! Configuration management for pokedexd.
//!
//! Loads settings from `--config`, then `$POKEDEXD_CONFIG`, then
//! /etc/pokedex/config.toml, or uses defaults.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

/// Config file path
pub const CONFIG_PATH: &str = "/etc/pokedex/config.toml";

/// Environment variable naming an alternative config file
pub const CONFIG_ENV: &str = "POKEDEXD_CONFIG";

/// Upstream PokéAPI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_upstream_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

fn default_upstream_timeout() -> u64 {
    10
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_upstream_timeout(),
        }
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Lookup cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached summaries
    #[serde(default = "default_cache_capacity")]
    pub capacity: usize,

    /// Seconds an entry lives after it was written
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

fn default_cache_capacity() -> usize {
    200
}

fn default_cache_ttl() -> u64 {
    600
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_cache_capacity(),
            ttl_secs: default_cache_ttl(),
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

/// Summary mapping settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Number of moves kept from the upstream list
    #[serde(default = "default_move_limit")]
    pub move_limit: usize,
}

fn default_move_limit() -> usize {
    6
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            move_limit: default_move_limit(),
        }
    }
}

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Listen address
    #[serde(default = "default_bind")]
    pub bind: String,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub summary: SummaryConfig,
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            upstream: UpstreamConfig::default(),
            cache: CacheConfig::default(),
            summary: SummaryConfig::default(),
        }
    }
}

impl Config {
    /// Load config, trying an explicit path, then the environment, then
    /// the system path. Falls back to defaults.
    ///
    /// An explicit path that fails to load is an error; the implicit
    /// locations only warn.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        let env_path = std::env::var(CONFIG_ENV).ok();
        let config = env_path
            .as_deref()
            .map(Self::load_from_path)
            .unwrap_or_else(|| Err(anyhow!("{} not set", CONFIG_ENV)))
            .or_else(|_| Self::load_from_path(CONFIG_PATH))
            .unwrap_or_else(|e| {
                warn!("Config not found, using defaults: {}", e);
                Config::default()
            });

        Ok(config)
    }

    /// Load config from specific path
    pub fn load_from_path(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        info!("Loaded config from {}", path);
        Ok(config)
    }

    /// Save default config to path
    pub fn save_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)?;
        if let Some(parent) = Path::new(path).parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        info!("Saved default config to {}", path);
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.cache.capacity == 0 {
            return Err(anyhow!("cache.capacity must be at least 1"));
        }
        if self.upstream.base_url.trim().is_empty() {
            return Err(anyhow!("upstream.base_url must not be empty"));
        }
        Ok(())
    }
}
