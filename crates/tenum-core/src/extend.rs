//! Derivation of child enum types.
//!
//! This is explicit composition rather than a prototype chain:
//! - static surface: parent statics overlaid by the additions (last write wins)
//! - instance surface: parent members overlaid by the additions (last write wins),
//!   each type remembering the members it installed itself for call-super
//! - construction: the additions' entry point, or forwarding to the parent
//! - name and error factory: the additions' if given, else inherited
//!
//! The parent is never modified; the child keeps a handle to it for
//! call-super.

use crate::descriptor::{DEFAULT_NAME, EnumType, EnumTypeData, is_declared_constant};
use crate::error::{EnumError, ErrorFactory};
use crate::instance::{Construction, EnumInstance, MethodCall};
use crate::member::{ConstructFn, InstanceMember, StaticMember};
use crate::value::Value;
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tenum_common::merge_into;
use tracing::debug;

/// Additions to a type's static surface: constants, static data and
/// static methods, plus an optional error factory.
#[derive(Clone, Default)]
#[must_use]
pub struct StaticAdditions {
    pub(crate) statics: IndexMap<String, StaticMember>,
    pub(crate) error_factory: Option<ErrorFactory>,
}

impl StaticAdditions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a constant. Composite values and `__`-prefixed names are kept as
    /// static data but are not constants.
    pub fn constant(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.statics
            .insert(name.into(), StaticMember::Value(value.into()));
        self
    }

    pub fn constants<K, V, I>(mut self, constants: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.statics.extend(
            constants
                .into_iter()
                .map(|(name, value)| (name.into(), StaticMember::Value(value.into()))),
        );
        self
    }

    pub fn static_method<F>(mut self, name: impl Into<String>, method: F) -> Self
    where
        F: Fn(&EnumType, &[Value]) -> Result<Value, EnumError> + Send + Sync + 'static,
    {
        self.statics
            .insert(name.into(), StaticMember::Method(Arc::new(method)));
        self
    }

    pub fn error_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(EnumError) -> EnumError + Send + Sync + 'static,
    {
        self.error_factory = Some(Arc::new(factory));
        self
    }
}

/// Additions to a type's instance surface: data and methods, plus an
/// optional display name and construction entry point.
#[derive(Clone, Default)]
#[must_use]
pub struct InstanceAdditions {
    pub(crate) name: Option<String>,
    pub(crate) members: FxHashMap<String, InstanceMember>,
    pub(crate) constructor: Option<ConstructFn>,
}

impl InstanceAdditions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.members
            .insert(name.into(), InstanceMember::Value(value.into()));
        self
    }

    pub fn method<F>(mut self, name: impl Into<String>, method: F) -> Self
    where
        F: Fn(&MethodCall<'_>, &[Value]) -> Result<Value, EnumError> + Send + Sync + 'static,
    {
        self.members
            .insert(name.into(), InstanceMember::Method(Arc::new(method)));
        self
    }

    /// Install a construction entry point. It must finish through
    /// [`Construction::construct_parent`].
    pub fn constructor<F>(mut self, constructor: F) -> Self
    where
        F: Fn(&Construction<'_>, Value) -> Result<EnumInstance, EnumError> + Send + Sync + 'static,
    {
        self.constructor = Some(Arc::new(constructor));
        self
    }
}

impl EnumType {
    /// Derive a new, independent child type.
    pub fn extend(&self, statics: StaticAdditions, instance: InstanceAdditions) -> EnumType {
        let parent = self.data();
        let overridden: Vec<String> = statics
            .statics
            .keys()
            .filter(|name| is_declared_constant(name, self))
            .cloned()
            .collect();

        let child = assemble(Some(self), statics, instance);
        debug!(
            parent = %parent.name,
            child = %child.name(),
            constants = child.values().len(),
            overridden = ?overridden,
            "Derived enum type"
        );
        child
    }
}

/// Seal a descriptor from an optional parent and the additions.
pub(crate) fn assemble(
    parent: Option<&EnumType>,
    statics: StaticAdditions,
    instance: InstanceAdditions,
) -> EnumType {
    let mut merged_statics: IndexMap<String, StaticMember> = IndexMap::new();
    let mut merged_members: FxHashMap<String, InstanceMember> = FxHashMap::default();

    if let Some(parent) = parent {
        let data = parent.data();
        merge_into(&mut merged_statics, [&data.statics, &statics.statics]);
        merge_into(&mut merged_members, [&data.members, &instance.members]);
    } else {
        merge_into(&mut merged_statics, [&statics.statics]);
        merge_into(&mut merged_members, [&instance.members]);
    }

    let own_members = instance.members.keys().cloned().collect();
    let inherited = parent.map(EnumType::data);
    let name = instance
        .name
        .or_else(|| inherited.map(|data| data.name.clone()))
        .unwrap_or_else(|| DEFAULT_NAME.to_string());
    let error_factory = statics
        .error_factory
        .or_else(|| inherited.and_then(|data| data.error_factory.clone()));

    EnumType::from_data(EnumTypeData {
        name,
        statics: merged_statics,
        members: merged_members,
        own_members,
        constructor: instance.constructor,
        error_factory,
        parent: parent.cloned(),
    })
}

#[cfg(test)]
#[path = "../tests/extend_tests.rs"]
mod tests;
