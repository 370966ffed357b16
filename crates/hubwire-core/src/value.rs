//! Dynamic values whose concrete type is resolved at runtime
//!
//! Invocation arguments and results travel as [`HubValue`]s: shared,
//! type-erased values that remember how to serialize themselves and can be
//! downcast back to their concrete type. A [`TypeDescriptor`] is the runtime
//! stand-in for a type, handed out by resolvers and used to materialize a
//! value from an untyped JSON tree.

use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use std::any::{Any, TypeId};
use std::fmt::Debug;
use std::sync::Arc;

/// Shared, type-erased invocation value
pub type HubValue = Arc<dyn TypedValue>;

/// Types that can travel as invocation arguments or results
pub trait WireType: Serialize + DeserializeOwned + Debug + PartialEq + Send + Sync + 'static {}

impl<T> WireType for T where T: Serialize + DeserializeOwned + Debug + PartialEq + Send + Sync + 'static
{}

/// Object-safe view of a [`WireType`] value
pub trait TypedValue: Debug + Send + Sync + 'static {
    /// Serialize using the value's runtime type
    fn to_json(&self) -> Result<serde_json::Value, serde_json::Error>;

    /// Name of the concrete type
    fn type_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    /// Equality across erased values; values of different types are never equal
    fn dyn_eq(&self, other: &dyn TypedValue) -> bool;
}

impl<T: WireType> TypedValue for T {
    fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn TypedValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

impl dyn TypedValue {
    /// Borrow the value as its concrete type
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Check whether the value holds a `T`
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

impl PartialEq for dyn TypedValue {
    fn eq(&self, other: &Self) -> bool {
        self.dyn_eq(other)
    }
}

impl Serialize for dyn TypedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::Error;

        self.to_json()
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

/// Wrap a value for use as an invocation argument or result
pub fn typed<T: WireType>(value: T) -> HubValue {
    Arc::new(value)
}

type ConvertFn = fn(&serde_json::Value) -> Result<HubValue, serde_json::Error>;

/// Runtime descriptor of a [`WireType`]
///
/// Resolvers return these so the codec can convert untyped JSON into the
/// concrete type expected by a method parameter or a pending result.
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
    type_id: TypeId,
    name: &'static str,
    convert: ConvertFn,
}

impl TypeDescriptor {
    /// Describe the type `T`
    pub fn of<T: WireType>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
            convert: convert_into::<T>,
        }
    }

    /// Name of the described type
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check whether this descriptor describes `T`
    pub fn describes<T: Any>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Materialize a value of the described type from an untyped JSON tree
    ///
    /// This deserializes directly from the borrowed tree without cloning it.
    pub fn convert(&self, json: &serde_json::Value) -> Result<HubValue, serde_json::Error> {
        (self.convert)(json)
    }
}

fn convert_into<T: WireType>(json: &serde_json::Value) -> Result<HubValue, serde_json::Error> {
    Ok(Arc::new(<T as serde::Deserialize>::deserialize(json)?))
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for TypeDescriptor {}

impl Debug for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("TypeDescriptor").field(&self.name).finish()
    }
}
