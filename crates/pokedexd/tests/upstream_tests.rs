//! HttpPokeApi tests against an in-process PokéAPI stand-in on an ephemeral port.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use pokedexd::config::UpstreamConfig;
use pokedexd::error::DexError;
use pokedexd::upstream::{HttpPokeApi, PokeApi};
use serde_json::json;

async fn pokemon(Path(name): Path<String>) -> Response {
    match name.as_str() {
        "pikachu" => axum::Json(json!({ "id": 25, "name": "pikachu" })).into_response(),
        "porygon" => (StatusCode::SERVICE_UNAVAILABLE, "maintenance").into_response(),
        "broken" => (StatusCode::OK, "not json").into_response(),
        _ => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

async fn spawn_upstream() -> HttpPokeApi {
    let app = Router::new().route("/api/v2/pokemon/:name", get(pokemon));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    HttpPokeApi::new(&UpstreamConfig {
        base_url: format!("http://{}/api/v2/", addr),
        timeout_secs: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn test_name_is_lowercased_in_path() {
    let api = spawn_upstream().await;

    let raw = api.fetch_pokemon("PikaChu").await.unwrap();
    assert_eq!(raw["id"], 25);
}

#[tokio::test]
async fn test_client_error_is_not_found() {
    let api = spawn_upstream().await;

    let err = api.fetch_pokemon("MissingNo").await.unwrap_err();
    assert!(matches!(err, DexError::NotFound(ref n) if n == "MissingNo"));
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_server_error_is_upstream_unavailable() {
    let api = spawn_upstream().await;

    let err = api.fetch_pokemon("porygon").await.unwrap_err();
    assert!(matches!(err, DexError::UpstreamUnavailable));
    assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_undecodable_body_is_unexpected_error() {
    let api = spawn_upstream().await;

    let err = api.fetch_pokemon("broken").await.unwrap_err();
    assert!(matches!(err, DexError::Upstream(_)));
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.public_message(), "Unexpected error occurred");
}
