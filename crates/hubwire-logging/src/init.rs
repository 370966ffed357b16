//! Subscriber installation

use crate::reload::{ReloadHandle, level_filter};
use hubwire_core::{CodecConfig, LogLevel};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, reload};

/// Install a formatted tracing subscriber as the global default
///
/// `RUST_LOG` takes precedence over `level` when set. The filter is
/// registered with [`ReloadHandle::global`] so it can be changed later.
/// Returns false if a global subscriber was already installed.
pub fn init_logging(level: LogLevel) -> bool {
    let initial = EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(level));
    let (filter, handle) = reload::Layer::new(initial);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true));

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return false;
    }
    ReloadHandle::global().set_handle(handle);
    tracing::debug!(%level, "logging initialized");
    true
}

/// Install the subscriber using the level named in a codec configuration
pub fn init_logging_from_config(config: &CodecConfig) -> bool {
    init_logging(config.log_level())
}

#[cfg(test)]
#[path = "init/init_tests.rs"]
mod init_tests;
