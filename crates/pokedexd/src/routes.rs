//! API routes for pokedexd

use axum::{
    extract::{Query, Request, State},
    http::HeaderValue,
    middleware::Next,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use pokedex_common::page::{render_document, PageState};
use pokedex_common::{render_card, LookupResult, API_PATH, RESPONSE_TIME_HEADER, VERSION};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::error::DexError;
use crate::server::AppState;
use crate::service::validate_name;

type AppStateArc = Arc<AppState>;

#[derive(Debug, Default, Deserialize)]
pub struct LookupParams {
    pub name: Option<String>,
}

// ============================================================================
// Lookup Routes
// ============================================================================

pub fn lookup_routes() -> Router<AppStateArc> {
    Router::new().route(API_PATH, get(get_pokemon))
}

async fn get_pokemon(
    State(state): State<AppStateArc>,
    Query(params): Query<LookupParams>,
) -> Result<Json<LookupResult>, DexError> {
    let name = validate_name(params.name.as_deref()).map_err(|e| {
        warn!("  Rejected lookup: {}", e);
        e
    })?;

    info!("  Lookup: {}", name);
    let result = state.service.find_pokemon(name).await?;
    Ok(Json(result))
}

// ============================================================================
// Page Routes
// ============================================================================

pub fn page_routes() -> Router<AppStateArc> {
    Router::new().route("/", get(search_page))
}

/// Server-rendered search page. With `?name=` the lookup runs in-process and
/// the card or the failure lands in the page like a client-side search would.
async fn search_page(
    State(state): State<AppStateArc>,
    Query(params): Query<LookupParams>,
) -> Html<String> {
    let mut page = PageState::new();
    let query = params.name.as_deref().map(str::trim).unwrap_or_default();

    if !query.is_empty() {
        let started = Instant::now();
        page.searching(query);

        let outcome = match validate_name(Some(query)) {
            Ok(name) => state.service.find_pokemon(name).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(result) => {
                page.show_card(render_card(&result));
                let took = format!("{}ms", started.elapsed().as_millis());
                page.served(Some(&took));
            }
            Err(e) => {
                warn!("  Page lookup for {} failed: {}", query, e);
                page.set_status(e.public_message(), false);
            }
        }
        page.toggle_loading(false);
    }

    Html(render_document(&page))
}

// ============================================================================
// Health Routes
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub cached: usize,
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/health", get(health))
}

async fn health(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: VERSION.to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        cached: state.service.cache().len().await,
    })
}

// ============================================================================
// Middleware
// ============================================================================

/// Stamp every response with the time spent handling it.
pub async fn response_time(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let mut response = next.run(request).await;

    let took = format!("{}ms", started.elapsed().as_millis());
    if let Ok(value) = HeaderValue::from_str(&took) {
        response.headers_mut().insert(RESPONSE_TIME_HEADER, value);
    }
    response
}

/// Abandon a request that outlives `limit` with a 504 error payload.
pub async fn deadline(State(limit): State<Duration>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            warn!("  {} timed out after {}ms", path, limit.as_millis());
            DexError::Timeout.into_response()
        }
    }
}
