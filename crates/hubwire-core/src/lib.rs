//! hubwire-core - Invocation descriptors, dynamic values, and resolver traits
//!
//! This crate provides the foundational types shared by the hubwire codec:
//! - [`InvocationDescriptor`] and [`InvocationResultDescriptor`] for decoded messages
//! - [`TypedValue`] and [`TypeDescriptor`] for values whose type is only known at runtime
//! - [`ParameterTypeResolver`] and [`ResultTypeResolver`] for runtime type lookup
//! - [`CancellationToken`] for cooperative cancellation of decode calls
//! - [`CodecError`] for error handling
//! - [`CodecConfig`] for codec configuration

mod cancel;
mod config;
mod descriptor;
mod error;
mod resolver;
mod value;

pub use cancel::CancellationToken;
pub use config::CodecConfig;
pub use descriptor::{InvocationDescriptor, InvocationResultDescriptor};
pub use error::{CodecError, CodecResult};
pub use resolver::{ParameterTypeResolver, ResultTypeResolver};
pub use value::{HubValue, TypeDescriptor, TypedValue, WireType, typed};

use std::str::FromStr;

/// Log levels understood by the hubwire logging setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    /// Lowercase name, usable as a tracing filter directive
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

impl FromStr for LogLevel {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" | "none" => Ok(LogLevel::Off),
            other => Err(CodecError::InvalidFormat(format!(
                "unknown log level: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CancellationToken, CodecConfig, CodecError, CodecResult, HubValue, InvocationDescriptor,
        InvocationResultDescriptor, LogLevel, ParameterTypeResolver, ResultTypeResolver,
        TypeDescriptor, TypedValue, WireType, typed,
    };
}
