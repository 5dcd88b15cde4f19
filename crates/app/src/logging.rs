//! `tracing` subscriber setup for hosts embedding the panel core.
//!
//! The library only emits events; installing a subscriber is the host's call.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use crate::config::LoggingConfig;

/// Install a global fmt subscriber filtered by `filter` (`RUST_LOG` syntax).
///
/// Returns `false` when a global subscriber was already installed; the
/// existing one is kept. An unparsable filter falls back to `info` and the
/// rejected directive is reported as a warning once a subscriber is active.
pub fn init(filter: &str) -> bool {
    let (env_filter, rejected) = parse_filter(filter);
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .is_ok();
    if let Some(err) = rejected {
        tracing::warn!(filter, error = %err, "invalid log filter, falling back to info");
    }
    installed
}

fn parse_filter(filter: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(filter) {
        Ok(env_filter) => (env_filter, None),
        Err(err) => (EnvFilter::new("info"), Some(err)),
    }
}

/// Install the subscriber described by the `[logging]` config section.
pub fn init_from_config(config: &LoggingConfig) -> bool {
    init(&config.filter)
}
