//! In-memory resolvers backed by concurrent maps

use dashmap::DashMap;
use hubwire_core::{ParameterTypeResolver, ResultTypeResolver, TypeDescriptor, WireType};
use std::sync::atomic::{AtomicU64, Ordering};

/// Registry of method signatures, keyed by method name
///
/// Unknown methods resolve to an empty parameter list, so a message that
/// names one with arguments fails with a count mismatch.
#[derive(Debug, Default)]
pub struct MethodSignatures {
    methods: DashMap<String, Vec<TypeDescriptor>>,
}

impl MethodSignatures {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a method signature
    ///
    /// Returns the previous signature, if any.
    pub fn register(
        &self,
        method: impl Into<String>,
        parameters: Vec<TypeDescriptor>,
    ) -> Option<Vec<TypeDescriptor>> {
        self.methods.insert(method.into(), parameters)
    }

    /// Register a method signature, builder style
    pub fn with_method(self, method: impl Into<String>, parameters: Vec<TypeDescriptor>) -> Self {
        self.register(method, parameters);
        self
    }

    /// Remove a method signature
    pub fn unregister(&self, method: &str) -> Option<Vec<TypeDescriptor>> {
        self.methods.remove(method).map(|(_, parameters)| parameters)
    }

    pub fn contains(&self, method: &str) -> bool {
        self.methods.contains_key(method)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl ParameterTypeResolver for MethodSignatures {
    fn parameter_types(&self, method: &str) -> Vec<TypeDescriptor> {
        self.methods
            .get(method)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }
}

/// In-flight invocations awaiting a result, keyed by invocation id
///
/// Ids handed out by [`next_id`](Self::next_id) are unique for the lifetime
/// of the registry. Resolving a result type leaves the entry in place; call
/// [`complete`](Self::complete) once the result has been delivered.
#[derive(Debug, Default)]
pub struct PendingInvocations {
    counter: AtomicU64,
    pending: DashMap<String, TypeDescriptor>,
}

impl PendingInvocations {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next invocation id
    pub fn next_id(&self) -> String {
        self.counter.fetch_add(1, Ordering::SeqCst).to_string()
    }

    /// Allocate an id and record that its result will be a `T`
    pub fn register<T: WireType>(&self) -> String {
        let id = self.next_id();
        self.pending.insert(id.clone(), TypeDescriptor::of::<T>());
        id
    }

    /// Record the result type of a caller-assigned id
    pub fn insert(&self, id: impl Into<String>, result_type: TypeDescriptor) {
        self.pending.insert(id.into(), result_type);
    }

    /// Remove a pending invocation, returning its result type
    pub fn complete(&self, id: &str) -> Option<TypeDescriptor> {
        self.pending.remove(id).map(|(_, result_type)| result_type)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.pending.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl ResultTypeResolver for PendingInvocations {
    fn result_type(&self, invocation_id: &str) -> Option<TypeDescriptor> {
        self.pending.get(invocation_id).map(|entry| *entry.value())
    }
}
