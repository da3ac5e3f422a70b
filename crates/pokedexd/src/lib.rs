//! Pokedex daemon library - exposes modules for testing.

pub mod cache;
pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod service;
pub mod summary;
pub mod upstream;
