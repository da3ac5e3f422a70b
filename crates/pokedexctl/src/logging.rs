//! Logging for pokedexctl
//!
//! Diagnostics go to stderr so stdout stays clean for `--json` and `--html`.
//! The filter comes from `$RUST_LOG`, defaulting to `warn` (`debug` with -v).

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "RUST_LOG";

/// Filter directive to install: the environment's when set, else the default.
pub fn filter_directive(from_env: Option<String>, verbose: bool) -> String {
    from_env
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| default_directive(verbose).to_string())
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

pub fn init(verbose: bool) {
    let directive = filter_directive(std::env::var(LOG_ENV).ok(), verbose);
    let filter =
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
