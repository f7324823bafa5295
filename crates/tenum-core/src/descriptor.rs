//! Enum type descriptors.
//!
//! An [`EnumType`] is sealed: it is assembled once by `EnumBuilder::build`
//! or [`EnumType::extend`] and exposes no way to change it afterwards.
//! Clones share the same descriptor.
//!
//! ## Static surface filtering
//!
//! The static surface holds constants, static data and static methods side
//! by side. Only entries accepted by [`is_declared_constant`] are constants:
//!
//! | Entry | Constant? |
//! |-------|-----------|
//! | `OK = "200"` | yes |
//! | `weights = {..}` (composite value) | no |
//! | `describe = fn` (static method) | no |
//! | `__internal = 1` (reserved prefix) | no |

use crate::builder::EnumBuilder;
use crate::error::{EnumError, ErrorFactory};
use crate::instance::{Construction, EnumInstance};
use crate::member::{ConstructFn, InstanceMember, StaticMember};
use crate::value::Value;
use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use std::sync::Arc;
use tenum_common::for_each_own;

/// Names starting with this prefix are reserved for bookkeeping and are
/// never constants.
pub const RESERVED_PREFIX: &str = "__";

/// Display name of types declared without one.
pub const DEFAULT_NAME: &str = "AbstractEnum";

/// Declared constants of a type, in declaration order.
pub type Constants = IndexMap<String, Value>;

#[derive(Clone)]
pub struct EnumType {
    data: Arc<EnumTypeData>,
}

pub(crate) struct EnumTypeData {
    pub(crate) name: String,
    pub(crate) statics: IndexMap<String, StaticMember>,
    pub(crate) members: FxHashMap<String, InstanceMember>,
    /// Instance members installed by this type itself, not inherited.
    pub(crate) own_members: FxHashSet<String>,
    pub(crate) constructor: Option<ConstructFn>,
    pub(crate) error_factory: Option<ErrorFactory>,
    pub(crate) parent: Option<EnumType>,
}

/// Returns true iff `name` is a declared constant of `ty`.
///
/// A declared constant is a static-surface value that is not composite and
/// whose name does not start with [`RESERVED_PREFIX`].
pub fn is_declared_constant(name: &str, ty: &EnumType) -> bool {
    ty.data
        .statics
        .get(name)
        .and_then(|member| declared_value(name, member))
        .is_some()
}

fn declared_value<'a>(name: &str, member: &'a StaticMember) -> Option<&'a Value> {
    if name.starts_with(RESERVED_PREFIX) {
        return None;
    }
    member.as_value().filter(|value| value.is_primitive())
}

impl EnumType {
    pub(crate) fn from_data(data: EnumTypeData) -> Self {
        Self {
            data: Arc::new(data),
        }
    }

    /// Start declaring a root enum type.
    pub fn builder() -> EnumBuilder {
        EnumBuilder::new()
    }

    /// The empty root type (`"AbstractEnum"`), meant to be extended.
    pub fn base() -> Self {
        EnumBuilder::new().build()
    }

    /// Declare a root type from name/value pairs.
    pub fn declare<K, V, I>(constants: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        EnumBuilder::new().constants(constants).build()
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn parent(&self) -> Option<&EnumType> {
        self.data.parent.as_ref()
    }

    /// Whether both handles refer to the same descriptor.
    pub fn same_type(&self, other: &EnumType) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Whether `ancestor` is a strict ancestor of this type.
    pub fn is_derived_from(&self, ancestor: &EnumType) -> bool {
        let mut current = self.parent();
        while let Some(ty) = current {
            if ty.same_type(ancestor) {
                return true;
            }
            current = ty.parent();
        }
        false
    }

    /// All declared constants, computed on demand.
    pub fn values(&self) -> Constants {
        let mut declared = Constants::default();
        for_each_own(&self.data.statics, |member, name, _| {
            if let Some(value) = declared_value(name, member) {
                declared.insert(name.clone(), value.clone());
            }
            None::<()>
        });
        declared
    }

    /// Whether some declared constant is equal to `needle`.
    pub fn has(&self, needle: &Value) -> bool {
        self.key_of(needle).is_some()
    }

    /// Name of the first declared constant equal to `needle`.
    pub fn key_of(&self, needle: &Value) -> Option<&str> {
        for_each_own(&self.data.statics, |member, name, _| {
            let value = declared_value(name, member)?;
            (value == needle).then_some(name.as_str())
        })
    }

    /// Raw static-surface lookup, including composite static data.
    pub fn static_value(&self, name: &str) -> Option<&Value> {
        self.data.statics.get(name).and_then(StaticMember::as_value)
    }

    pub fn static_member(&self, name: &str) -> Option<&StaticMember> {
        self.data.statics.get(name)
    }

    /// Instance-surface lookup on this type (inherited members included).
    pub fn member(&self, name: &str) -> Option<&InstanceMember> {
        self.data.members.get(name)
    }

    /// Instance-surface lookup on the parent type, for call-super.
    pub fn super_member(&self, name: &str) -> Option<&InstanceMember> {
        self.parent().and_then(|parent| parent.member(name))
    }

    /// The closest type, starting at this one, that installed the instance
    /// member `name` itself.
    pub fn defining_type(&self, name: &str) -> Option<&EnumType> {
        let mut current = Some(self);
        while let Some(ty) = current {
            if ty.data.own_members.contains(name) {
                return Some(ty);
            }
            current = ty.parent();
        }
        None
    }

    /// Construct an instance bound to `value`.
    pub fn construct(&self, value: impl Into<Value>) -> Result<EnumInstance, EnumError> {
        self.construct_at(self, value.into())
    }

    /// Construct an instance from a constant name rather than a value.
    pub fn make(&self, key: &str) -> Result<EnumInstance, EnumError> {
        let value = self
            .data
            .statics
            .get(key)
            .and_then(|member| declared_value(key, member))
            .cloned();

        match value {
            Some(value) => self.construct(value),
            None => {
                tracing::trace!(enum_type = %self.name(), key, "make with undeclared key");
                Err(self.raise(EnumError::unknown_key(self.name(), key)))
            }
        }
    }

    /// Call a static method with this type as the receiver.
    pub fn call_static(&self, name: &str, args: &[Value]) -> Result<Value, EnumError> {
        match self.data.statics.get(name) {
            Some(StaticMember::Method(method)) => method(self, args),
            _ => Err(self.raise(EnumError::unknown_method(self.name(), name))),
        }
    }

    /// Route an error through this type's error factory.
    pub fn raise(&self, error: EnumError) -> EnumError {
        match &self.data.error_factory {
            Some(factory) => factory(error),
            None => error,
        }
    }

    pub(crate) fn data(&self) -> &EnumTypeData {
        &self.data
    }

    /// Run this level's construction logic for an instance of `target`.
    pub(crate) fn construct_at(
        &self,
        target: &EnumType,
        value: Value,
    ) -> Result<EnumInstance, EnumError> {
        match &self.data.constructor {
            Some(constructor) => constructor(&Construction::new(target, self), value),
            None => self.construct_parent_at(target, value),
        }
    }

    /// Delegate to the parent's construction logic, or bind at the root.
    pub(crate) fn construct_parent_at(
        &self,
        target: &EnumType,
        value: Value,
    ) -> Result<EnumInstance, EnumError> {
        match &self.data.parent {
            Some(parent) => parent.construct_at(target, value),
            None => EnumInstance::bind(target, value),
        }
    }
}

/// Lists the constants as `KEY = value; ...`.
impl fmt::Display for EnumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.values().iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{key} = {value}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for EnumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumType")
            .field("name", &self.data.name)
            .field("constants", &self.values())
            .field("parent", &self.parent().map(EnumType::name))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../tests/descriptor_tests.rs"]
mod tests;
