//! Codec configuration

use crate::LogLevel;
use serde::{Deserialize, Serialize};

/// Configuration for the invocation codec
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Pretty-print encoded messages (default: false for compact output)
    #[serde(default)]
    pub pretty: bool,

    /// Reject results that carry both a non-null value and an error
    ///
    /// When false, the value is dropped and only the error is kept.
    #[serde(default)]
    pub strict_outcome: bool,

    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            strict_outcome: false,
            log_level: default_log_level(),
        }
    }
}

impl CodecConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    ///
    /// Empty input yields the defaults.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }

    /// Enable or disable pretty-printed output
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Enable or disable strict result/error validation
    pub fn with_strict_outcome(mut self, strict: bool) -> Self {
        self.strict_outcome = strict;
        self
    }

    /// Set the initial log level
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level.as_str().to_string();
        self
    }

    /// Parse the configured log level, falling back to `Info` if unrecognised
    ///
    /// An unrecognised level is reported at `warn` before falling back.
    pub fn log_level(&self) -> LogLevel {
        match self.log_level.parse() {
            Ok(level) => level,
            Err(err) => {
                tracing::warn!(configured = %self.log_level, %err, "falling back to info log level");
                LogLevel::Info
            }
        }
    }
}
