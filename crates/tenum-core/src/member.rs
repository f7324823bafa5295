//! Members of the static and instance surfaces.

use crate::descriptor::EnumType;
use crate::error::EnumError;
use crate::instance::{Construction, EnumInstance, MethodCall};
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// A method on the static surface. Receives the type it was called on.
pub type StaticMethod = Arc<dyn Fn(&EnumType, &[Value]) -> Result<Value, EnumError> + Send + Sync>;

/// A method on the instance surface.
///
/// Receives a [`MethodCall`], which derefs to the instance it was called on
/// and resolves call-super from the type that installed the method.
pub type InstanceMethod =
    Arc<dyn Fn(&MethodCall<'_>, &[Value]) -> Result<Value, EnumError> + Send + Sync>;

/// A construction entry point.
///
/// It is handed the construction context and the raw argument, and must
/// finish through [`Construction::construct_parent`]; that is the only way
/// to obtain an instance.
pub type ConstructFn =
    Arc<dyn Fn(&Construction<'_>, Value) -> Result<EnumInstance, EnumError> + Send + Sync>;

/// Entry on a type's static surface.
#[derive(Clone)]
pub enum StaticMember {
    Value(Value),
    Method(StaticMethod),
}

impl StaticMember {
    pub const fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Method(_) => None,
        }
    }

    pub const fn is_method(&self) -> bool {
        matches!(self, Self::Method(_))
    }
}

impl fmt::Debug for StaticMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Method(_) => f.write_str("Method(..)"),
        }
    }
}

/// Entry on a type's instance surface.
#[derive(Clone)]
pub enum InstanceMember {
    Value(Value),
    Method(InstanceMethod),
}

impl InstanceMember {
    pub const fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Method(_) => None,
        }
    }

    pub const fn is_method(&self) -> bool {
        matches!(self, Self::Method(_))
    }
}

impl fmt::Debug for InstanceMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Method(_) => f.write_str("Method(..)"),
        }
    }
}
