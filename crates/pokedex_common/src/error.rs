//! Error types shared by the lookup client and the daemon.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status-line text used when a failed response carries no usable message.
pub const GENERIC_FAILURE: &str = "Unable to fetch Pokémon";

/// Everything that can go wrong while fetching one Lookup Result.
///
/// Every variant reduces to a single status-line message through `Display`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The request never produced a response (connection refused, timeout).
    #[error("{0}")]
    Transport(String),

    /// Non-OK HTTP status; `message` is already resolved from the error body
    /// or the generic fallback.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// 2xx response whose body is not a Lookup Result.
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl LookupError {
    /// Build a status error from a raw error body, falling back to
    /// [`GENERIC_FAILURE`] when the body has no usable `message`.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let message = ErrorBody::message_from(body).unwrap_or_else(|| GENERIC_FAILURE.to_string());
        LookupError::Status { status, message }
    }

    /// Text shown in the status line.
    pub fn status_message(&self) -> String {
        self.to_string()
    }
}

/// Client view of an error body: only `message` matters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Extract a non-empty `message` from a JSON body, if there is one.
    pub fn message_from(body: &[u8]) -> Option<String> {
        serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
    }
}

/// Error payload written by the daemon for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// RFC 3339 timestamp.
    pub timestamp: String,
    pub status: u16,
    /// Reason phrase for `status`.
    pub error: String,
    pub message: String,
}
