//! Pokedexctl library - exposes modules for testing

pub mod cli;
pub mod client;
pub mod controller;
pub mod display;
pub mod errors;
pub mod logging;
