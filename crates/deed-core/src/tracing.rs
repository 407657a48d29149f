//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the tracing/logging system.
///
/// Reads the `DEED_LOG` environment variable for per-subsystem log levels
/// (e.g. `DEED_LOG=deed_validation=debug`), falling back to `deed=info`.
///
/// Idempotent; calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("DEED_LOG").unwrap_or_else(|_| EnvFilter::new("deed=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
