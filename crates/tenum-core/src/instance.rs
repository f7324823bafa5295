//! Enum instances and construction.
//!
//! [`EnumInstance::bind`] is the only place an instance is assembled. It
//! checks the value against the declared constants of the most-derived
//! type, so an instance can never hold an undeclared value. Construction
//! entry points ([`crate::ConstructFn`]) wrap that check; they cannot skip it.

use crate::descriptor::EnumType;
use crate::error::EnumError;
use crate::member::InstanceMember;
use crate::value::Value;
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Deref;
use tenum_common::find_key_by_value;
use tracing::trace;

/// A value bound to one enum type.
#[derive(Clone)]
pub struct EnumInstance {
    ty: EnumType,
    value: Value,
    key: String,
}

impl EnumInstance {
    pub(crate) fn bind(target: &EnumType, value: Value) -> Result<Self, EnumError> {
        let declared = target.values();
        let Some(key) = find_key_by_value(&value, &declared) else {
            trace!(enum_type = %target.name(), %value, "construct with undeclared value");
            return Err(target.raise(EnumError::unknown_value(target.name(), &value)));
        };

        Ok(Self {
            ty: target.clone(),
            key: key.clone(),
            value,
        })
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Name of the constant this instance is bound to.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn enum_type(&self) -> &EnumType {
        &self.ty
    }

    /// Strict comparison against a raw value.
    pub fn equal(&self, value: &Value) -> bool {
        self.value == *value
    }

    /// Compare against another instance's value.
    ///
    /// Fails with [`crate::EnumErrorKind::NotAnInstance`] unless `other` holds
    /// an enum instance. The owning types are not compared.
    pub fn equal_enum(&self, other: &Value) -> Result<bool, EnumError> {
        match other {
            Value::Enum(other) => Ok(self.value == other.value),
            _ => Err(self.ty.raise(EnumError::not_an_instance())),
        }
    }

    /// Primitive conversion; same as [`EnumInstance::value`], owned.
    pub fn to_primitive(&self) -> Value {
        self.value.clone()
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// `instanceof`: the owning type is `ty` or derives from it.
    pub fn is_instance_of(&self, ty: &EnumType) -> bool {
        self.ty.same_type(ty) || self.ty.is_derived_from(ty)
    }

    /// Data stored on the instance surface, e.g. a lookup table.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.ty.member(name).and_then(InstanceMember::as_value)
    }

    /// Call an instance method.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, EnumError> {
        self.dispatch(Some(&self.ty), self.ty.name(), name, args)
    }

    /// Run the method `name` as installed on `from` or its closest ancestor.
    fn dispatch(
        &self,
        from: Option<&EnumType>,
        reported: &str,
        name: &str,
        args: &[Value],
    ) -> Result<Value, EnumError> {
        let level = from.and_then(|ty| ty.defining_type(name));
        match level.and_then(|level| level.member(name).map(|member| (level, member))) {
            Some((level, InstanceMember::Method(method))) => {
                method(&MethodCall::new(self, level), args)
            }
            _ => Err(self.ty.raise(EnumError::unknown_method(reported, name))),
        }
    }
}

/// Same owning type and equal value.
impl PartialEq for EnumInstance {
    fn eq(&self, other: &Self) -> bool {
        self.ty.same_type(&other.ty) && self.value == other.value
    }
}

impl fmt::Display for EnumInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl fmt::Debug for EnumInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumInstance")
            .field("enum_type", &self.ty.name())
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}

impl Serialize for EnumInstance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

/// Context handed to a construction entry point.
pub struct Construction<'a> {
    target: &'a EnumType,
    level: &'a EnumType,
}

impl<'a> Construction<'a> {
    pub(crate) const fn new(target: &'a EnumType, level: &'a EnumType) -> Self {
        Self { target, level }
    }

    /// The type being instantiated (the most-derived one).
    pub const fn target(&self) -> &'a EnumType {
        self.target
    }

    /// The type whose entry point is running.
    pub const fn level(&self) -> &'a EnumType {
        self.level
    }

    /// Run the parent's construction logic for the target type.
    pub fn construct_parent(&self, value: impl Into<Value>) -> Result<EnumInstance, EnumError> {
        self.level.construct_parent_at(self.target, value.into())
    }
}

/// Context handed to an instance method.
///
/// Derefs to the receiving instance. `level` is the type that installed the
/// running method, so call-super always moves one step above it, however
/// deep the receiver's own type sits.
pub struct MethodCall<'a> {
    instance: &'a EnumInstance,
    level: &'a EnumType,
}

impl<'a> MethodCall<'a> {
    pub(crate) const fn new(instance: &'a EnumInstance, level: &'a EnumType) -> Self {
        Self { instance, level }
    }

    pub const fn instance(&self) -> &'a EnumInstance {
        self.instance
    }

    /// The type whose method is running.
    pub const fn level(&self) -> &'a EnumType {
        self.level
    }

    /// Call the version of `name` installed above [`MethodCall::level`].
    pub fn call_super(&self, name: &str, args: &[Value]) -> Result<Value, EnumError> {
        let parent = self.level.parent();
        let reported = parent.unwrap_or(self.level).name();
        self.instance.dispatch(parent, reported, name, args)
    }
}

impl Deref for MethodCall<'_> {
    type Target = EnumInstance;

    fn deref(&self) -> &EnumInstance {
        self.instance
    }
}

#[cfg(test)]
#[path = "../tests/instance_tests.rs"]
mod tests;
