//! hubwire-logging - Tracing subscriber setup
//!
//! This crate provides:
//! - [`init_logging`] to install a formatted tracing subscriber
//! - [`ReloadHandle`] to change the active log level at runtime, failing with [`ReloadError`]

mod init;
mod reload;

pub use hubwire_core::LogLevel;
pub use init::{init_logging, init_logging_from_config};
pub use reload::{ReloadError, ReloadHandle};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, ReloadError, ReloadHandle, init_logging, init_logging_from_config};
}
