//! Shared types and utilities for the Pokédex components.
//!
//! The daemon produces [`LookupResult`] payloads, the control CLI consumes
//! them, and both render through the same pure [`render`] and [`page`]
//! functions so the terminal, the HTML document and the server-rendered page
//! never disagree on formatting.

pub mod error;
pub mod format;
pub mod model;
pub mod page;
pub mod render;

pub use error::{ErrorBody, ErrorPayload, LookupError, GENERIC_FAILURE};
pub use model::{Ability, LookupResult, Stat};
pub use page::{PageState, StatusLine, StatusTone, SubmitControl};
pub use render::{render_card, CardView, StatBar};

/// Crate version shared by the daemon and the CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lookup endpoint served by `pokedexd`.
pub const API_PATH: &str = "/api/pokemon";

/// Header carrying the server-side handling time, displayed verbatim.
pub const RESPONSE_TIME_HEADER: &str = "x-response-time";
