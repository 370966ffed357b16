//! Runtime type resolution for invocation payloads
//!
//! The codec cannot know the argument or result types of a message until it
//! has read the method name or invocation id. Resolvers supply those types.
//! Both traits are implemented for plain closures, so callers can pass
//! `&|method: &str| ...` directly.

use crate::value::TypeDescriptor;

/// Maps a method name to its ordered parameter types
///
/// Must be deterministic for a given method name while a decode is running.
/// An unknown method should resolve to an empty list.
pub trait ParameterTypeResolver: Send + Sync {
    fn parameter_types(&self, method: &str) -> Vec<TypeDescriptor>;
}

/// Maps a pending invocation id to its expected result type
pub trait ResultTypeResolver: Send + Sync {
    /// Returns `None` if no invocation with this id is pending
    fn result_type(&self, invocation_id: &str) -> Option<TypeDescriptor>;
}

impl<F> ParameterTypeResolver for F
where
    F: Fn(&str) -> Vec<TypeDescriptor> + Send + Sync,
{
    fn parameter_types(&self, method: &str) -> Vec<TypeDescriptor> {
        self(method)
    }
}

impl<F> ResultTypeResolver for F
where
    F: Fn(&str) -> Option<TypeDescriptor> + Send + Sync,
{
    fn result_type(&self, invocation_id: &str) -> Option<TypeDescriptor> {
        self(invocation_id)
    }
}
