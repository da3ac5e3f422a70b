//! Pokedex Daemon - serves Pokémon lookups and the search page.
//!
//! Fronts PokéAPI with a bounded TTL cache and answers `/api/pokemon`.

use anyhow::Result;
use clap::Parser;
use pokedexd::config::Config;
use pokedexd::server;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pokedexd")]
#[command(about = "Pokedex daemon - cached Pokémon lookup API", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (overrides $POKEDEXD_CONFIG and /etc/pokedex/config.toml)
    #[arg(long)]
    config: Option<String>,

    /// Listen address (overrides the config file)
    #[arg(long)]
    bind: Option<String>,

    /// Write the default config to PATH and exit
    #[arg(long, value_name = "PATH")]
    write_default_config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Some(path) = cli.write_default_config {
        return Config::save_default(&path);
    }

    info!("Pokedex Daemon v{} starting", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.bind = bind;
    }

    info!(
        "  Upstream {} (cache: {} entries, {}s ttl)",
        config.upstream.base_url, config.cache.capacity, config.cache.ttl_secs
    );

    server::run(config).await
}
