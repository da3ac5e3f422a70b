//! Error types for pokedexd and their HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pokedex_common::ErrorPayload;
use thiserror::Error;
use tracing::error;

/// Message returned for failures whose details stay in the log.
pub const UNEXPECTED: &str = "Unexpected error occurred";

#[derive(Error, Debug)]
pub enum DexError {
    #[error("name is required")]
    MissingName,

    #[error("name must be alphanumeric or dash")]
    InvalidName,

    #[error("Pokémon '{0}' was not found")]
    NotFound(String),

    #[error("PokéAPI server error. Please try again later.")]
    UpstreamUnavailable,

    #[error("PokéAPI did not respond in time. Please try again later.")]
    Timeout,

    #[error("Failed to fetch Pokémon data: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DexError {
    pub fn status(&self) -> StatusCode {
        match self {
            DexError::MissingName | DexError::InvalidName => StatusCode::BAD_REQUEST,
            DexError::NotFound(_) => StatusCode::NOT_FOUND,
            DexError::UpstreamUnavailable => StatusCode::BAD_GATEWAY,
            DexError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            DexError::Upstream(_) | DexError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message exposed to clients.
    pub fn public_message(&self) -> String {
        match self {
            DexError::Upstream(_) | DexError::Internal(_) => UNEXPECTED.to_string(),
            other => other.to_string(),
        }
    }

    pub fn payload(&self) -> ErrorPayload {
        let status = self.status();
        ErrorPayload {
            timestamp: chrono::Utc::now().to_rfc3339(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message: self.public_message(),
        }
    }
}

impl From<reqwest::Error> for DexError {
    fn from(e: reqwest::Error) -> Self {
        DexError::Upstream(e.to_string())
    }
}

impl IntoResponse for DexError {
    fn into_response(self) -> Response {
        if matches!(self, DexError::Upstream(_) | DexError::Internal(_)) {
            error!("  Lookup failed: {}", self);
        }
        (self.status(), Json(self.payload())).into_response()
    }
}
