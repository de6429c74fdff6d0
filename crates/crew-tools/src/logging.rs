//! Tracing subscriber set-up

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::BoxError;

/// Initialize a compact stderr subscriber.
///
/// Uses the `RUST_LOG` environment variable, defaulting to "info".
pub fn init() -> Result<(), BoxError> {
    init_with_default("info")
}

/// Like [`init`], but falls back to `default_level` when `RUST_LOG` is unset.
pub fn init_with_default(default_level: &str) -> Result<(), BoxError> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
