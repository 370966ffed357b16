//! # hubwire
//!
//! A typed JSON codec for invocation messages exchanged over hub-style,
//! bidirectional RPC transports.
//!
//! Argument and result types are only known at runtime: the codec reads the
//! method name or invocation id first, asks a resolver for the matching
//! types, and then converts the untyped JSON payload element by element.
//!
//! ## Wire format
//!
//! ```text
//! {"Id": "1", "Method": "Add", "Arguments": [2, 3]}
//! {"Id": "1", "Result": 5, "Error": null}
//! ```
//!
//! ## Decoding a request
//!
//! ```
//! use hubwire::prelude::*;
//!
//! let signatures = MethodSignatures::new()
//!     .with_method("Add", vec![TypeDescriptor::of::<i32>(), TypeDescriptor::of::<i32>()]);
//! let adapter = JsonInvocationAdapter::new();
//!
//! let mut wire: &[u8] = br#"{"Id":"1","Method":"Add","Arguments":[2,3]}"#;
//! let invocation = adapter
//!     .read_invocation(&mut wire, &signatures, &CancellationToken::new())?
//!     .expect("one message on the stream");
//!
//! assert_eq!(invocation.argument::<i32>(0), Some(&2));
//! assert_eq!(invocation.argument::<i32>(1), Some(&3));
//! # Ok::<(), hubwire::CodecError>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`hubwire_core`] - Descriptors, dynamic values, resolvers, errors
//! - [`hubwire_codec`] - The JSON adapter, worker offload, in-memory registries
//! - [`hubwire_logging`] - Tracing subscriber setup

// Re-export core types
pub use hubwire_core::{
    CancellationToken, CodecConfig, CodecError, CodecResult, HubValue, InvocationDescriptor,
    InvocationResultDescriptor, LogLevel, ParameterTypeResolver, ResultTypeResolver,
    TypeDescriptor, TypedValue, WireType, typed,
};

// Re-export codec types
pub use hubwire_codec::{
    Decoded, InvocationAdapter, InvocationWorker, JsonInvocationAdapter, MethodSignatures,
    PendingInvocations,
};

// Re-export logging setup
pub use hubwire_logging::{ReloadHandle, init_logging, init_logging_from_config};

// Re-export common dependencies that hub authors need
pub use serde;
pub use serde_json;
pub use tokio;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use hubwire::prelude::*;` to import commonly used types.
///
/// This includes:
/// - Descriptors: `InvocationDescriptor`, `InvocationResultDescriptor`
/// - Types: `TypeDescriptor`, `HubValue`, `typed`
/// - Codec: `InvocationAdapter`, `JsonInvocationAdapter`, `InvocationWorker`
/// - Resolvers: `MethodSignatures`, `PendingInvocations` and the resolver traits
/// - Common deps: `Serialize`, `Deserialize`
pub mod prelude {
    pub use crate::{
        CancellationToken, CodecConfig, CodecError, CodecResult, Decoded, HubValue,
        InvocationAdapter,
        InvocationDescriptor, InvocationResultDescriptor, InvocationWorker,
        JsonInvocationAdapter, LogLevel, MethodSignatures, ParameterTypeResolver,
        PendingInvocations, ResultTypeResolver, TypeDescriptor, typed,
    };

    // Serde derives (commonly needed for argument and result types)
    pub use serde::{Deserialize, Serialize};
}
