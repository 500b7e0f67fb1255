// src/logging.rs

use tracing_subscriber::filter::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set, otherwise `default_level` applies. Calling this
/// twice is harmless; the second subscriber is ignored.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
