//! HTTP server for pokedexd

use crate::config::Config;
use crate::routes;
use crate::service::PokemonService;
use crate::upstream::{HttpPokeApi, PokeApi};
use anyhow::Result;
use axum::{middleware, Router};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Slack added to the upstream timeout before a request is abandoned.
const REQUEST_TIMEOUT_SLACK: Duration = Duration::from_secs(5);

/// Application state shared across handlers
pub struct AppState {
    pub service: PokemonService,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(service: PokemonService) -> Self {
        Self {
            service,
            start_time: Instant::now(),
        }
    }

    /// State backed by the real PokéAPI client
    pub fn from_config(config: &Config) -> Result<Self> {
        let api: Arc<dyn PokeApi> = Arc::new(HttpPokeApi::new(&config.upstream)?);
        Ok(Self::new(PokemonService::from_config(api, config)))
    }
}

/// Build the router with all routes and layers.
///
/// `response_time` wraps the deadline so timed-out requests are stamped too.
pub fn app(state: Arc<AppState>, request_timeout: Duration) -> Router {
    Router::new()
        .merge(routes::lookup_routes())
        .merge(routes::page_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(middleware::from_fn_with_state(
            request_timeout,
            routes::deadline,
        ))
        .layer(middleware::from_fn(routes::response_time))
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until Ctrl+C or SIGTERM
pub async fn run(config: Config) -> Result<()> {
    let state = Arc::new(AppState::from_config(&config)?);
    spawn_cache_pruner(state.clone(), config.cache.ttl());

    let app = app(state, config.upstream.timeout() + REQUEST_TIMEOUT_SLACK);

    let listener = TcpListener::bind(&config.bind).await?;
    info!("  Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

/// Drop expired cache entries once per TTL period
fn spawn_cache_pruner(state: Arc<AppState>, ttl: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(ttl.max(Duration::from_secs(1)));
        interval.tick().await;
        loop {
            interval.tick().await;
            let pruned = state.service.cache().prune_expired().await;
            if pruned > 0 {
                debug!("  Pruned {} expired cache entries", pruned);
            }
        }
    });
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
