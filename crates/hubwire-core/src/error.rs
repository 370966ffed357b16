//! Error types for the invocation codec

use serde_json::error::Category;
use thiserror::Error;

/// Result type alias for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Error type for encoding and decoding invocation messages
///
/// Variants fall into four groups: stream/parse failures, shape mismatches,
/// value conversion failures, and cancellation. None of them are retried by
/// the codec; the caller decides whether to close the connection, log, or resend.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Malformed or truncated JSON on the stream
    #[error("parse error: {0}")]
    Parse(String),

    /// JSON was well-formed but not shaped like an invocation message
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// Reading from or writing to the stream failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Wire argument count differs from the resolved parameter count
    #[error("argument count mismatch for method '{method}': expected {expected}, got {actual}")]
    ArgumentCountMismatch {
        method: String,
        expected: usize,
        actual: usize,
    },

    /// A value could not be converted to its resolved type
    #[error("cannot convert value at position {index} to {type_name}: {message}")]
    Conversion {
        index: usize,
        type_name: String,
        message: String,
    },

    /// No result type is registered for the invocation id
    #[error("unknown invocation id: {0}")]
    UnknownInvocation(String),

    /// A result carried both a value and an error (strict mode only)
    #[error("invocation '{0}' carries both a result and an error")]
    ConflictingOutcome(String),

    /// The operation was cancelled before decoding began
    #[error("operation cancelled")]
    Cancelled,

    /// A value could not be serialized
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The worker running the decode failed
    #[error("worker error: {0}")]
    Worker(String),
}

impl CodecError {
    /// Returns a stable numeric code for the error kind
    pub fn error_code(&self) -> u32 {
        match self {
            CodecError::Parse(_) => 1,
            CodecError::InvalidFormat(_) => 2,
            CodecError::Io(_) => 3,
            CodecError::ArgumentCountMismatch { .. } => 4,
            CodecError::Conversion { .. } => 5,
            CodecError::UnknownInvocation(_) => 6,
            CodecError::ConflictingOutcome(_) => 7,
            CodecError::Cancelled => 8,
            CodecError::Serialization(_) => 9,
            CodecError::Worker(_) => 10,
        }
    }

    /// Check whether this error signals cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, CodecError::Cancelled)
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Syntax | Category::Eof => CodecError::Parse(err.to_string()),
            Category::Data => CodecError::InvalidFormat(err.to_string()),
            Category::Io => CodecError::Io(err.into()),
        }
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
