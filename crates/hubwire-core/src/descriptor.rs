//! Typed invocation and invocation result descriptors

use crate::value::{HubValue, WireType, typed};

/// A single RPC call: which method to run and with which arguments
///
/// Descriptors are immutable once built; the builder-style `with_*`
/// methods consume and return the descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationDescriptor {
    id: String,
    method: String,
    arguments: Vec<HubValue>,
}

impl InvocationDescriptor {
    /// Create a new invocation descriptor
    pub fn new(id: impl Into<String>, method: impl Into<String>, arguments: Vec<HubValue>) -> Self {
        Self {
            id: id.into(),
            method: method.into(),
            arguments,
        }
    }

    /// Append an argument
    pub fn with_argument<T: WireType>(mut self, value: T) -> Self {
        self.arguments.push(typed(value));
        self
    }

    /// Caller-assigned invocation id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Target method name
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Positional arguments
    pub fn arguments(&self) -> &[HubValue] {
        &self.arguments
    }

    /// Borrow the argument at `index` as its concrete type
    ///
    /// Returns `None` if the index is out of range or the type does not match.
    pub fn argument<T: WireType>(&self, index: usize) -> Option<&T> {
        self.arguments.get(index)?.downcast_ref::<T>()
    }

    /// Decompose into id, method and arguments
    pub fn into_parts(self) -> (String, String, Vec<HubValue>) {
        (self.id, self.method, self.arguments)
    }
}

/// Outcome of a prior invocation
///
/// A present `error` means the call failed and `result` carries no meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationResultDescriptor {
    id: String,
    result: Option<HubValue>,
    error: Option<String>,
}

impl InvocationResultDescriptor {
    /// Create a result descriptor from its raw parts
    pub fn new(id: impl Into<String>, result: Option<HubValue>, error: Option<String>) -> Self {
        Self {
            id: id.into(),
            result,
            error,
        }
    }

    /// Create a successful result
    pub fn success<T: WireType>(id: impl Into<String>, value: T) -> Self {
        Self::new(id, Some(typed(value)), None)
    }

    /// Create a failed result
    pub fn failure(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(id, None, Some(message.into()))
    }

    /// Id of the originating invocation
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn result(&self) -> Option<&HubValue> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Borrow the result as its concrete type
    pub fn result_as<T: WireType>(&self) -> Option<&T> {
        self.result.as_ref()?.downcast_ref::<T>()
    }

    /// Check if the invocation succeeded
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Decompose into id, result and error
    pub fn into_parts(self) -> (String, Option<HubValue>, Option<String>) {
        (self.id, self.result, self.error)
    }
}
