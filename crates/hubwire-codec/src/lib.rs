//! hubwire-codec - JSON invocation codec
//!
//! This crate provides:
//! - [`InvocationAdapter`] trait for reading and writing invocation messages
//! - [`JsonInvocationAdapter`] implementation for the JSON wire format
//! - [`InvocationWorker`] for running decodes off the async executor, returning
//!   the reader in a [`Decoded`]
//! - [`MethodSignatures`] and [`PendingInvocations`] in-memory resolvers

mod adapter;
mod json;
mod registry;
mod worker;

pub use adapter::InvocationAdapter;
pub use json::JsonInvocationAdapter;
pub use registry::{MethodSignatures, PendingInvocations};
pub use worker::{Decoded, InvocationWorker};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Decoded, InvocationAdapter, InvocationWorker, JsonInvocationAdapter, MethodSignatures,
        PendingInvocations,
    };
}
