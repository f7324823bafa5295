//! Declaration of root enum types.

use crate::descriptor::{DEFAULT_NAME, EnumType};
use crate::error::EnumError;
use crate::extend::{InstanceAdditions, StaticAdditions, assemble};
use crate::instance::{Construction, EnumInstance, MethodCall};
use crate::value::Value;
use indexmap::IndexMap;
use tracing::debug;

/// A root enum type under construction.
///
/// [`EnumBuilder::build`] seals it into an [`EnumType`]; there is no way
/// back.
#[derive(Clone, Default)]
#[must_use]
pub struct EnumBuilder {
    statics: StaticAdditions,
    instance: InstanceAdditions,
}

impl EnumBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.instance = self.instance.name(name);
        self
    }

    pub fn constant(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.statics = self.statics.constant(name, value);
        self
    }

    pub fn constants<K, V, I>(mut self, constants: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.statics = self.statics.constants(constants);
        self
    }

    /// Read constants from a JSON object, in document order.
    ///
    /// A declaration error goes through the error factory if one was set
    /// earlier in the chain.
    pub fn constants_from_json(self, json: &str) -> Result<Self, EnumError> {
        let constants: IndexMap<String, Value> = match serde_json::from_str(json) {
            Ok(constants) => constants,
            Err(err) => {
                let error = EnumError::declaration(self.display_name(), err);
                return Err(match &self.statics.error_factory {
                    Some(factory) => factory(error),
                    None => error,
                });
            }
        };
        Ok(self.constants(constants))
    }

    pub fn static_method<F>(mut self, name: impl Into<String>, method: F) -> Self
    where
        F: Fn(&EnumType, &[Value]) -> Result<Value, EnumError> + Send + Sync + 'static,
    {
        self.statics = self.statics.static_method(name, method);
        self
    }

    pub fn instance_value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.instance = self.instance.value(name, value);
        self
    }

    pub fn instance_method<F>(mut self, name: impl Into<String>, method: F) -> Self
    where
        F: Fn(&MethodCall<'_>, &[Value]) -> Result<Value, EnumError> + Send + Sync + 'static,
    {
        self.instance = self.instance.method(name, method);
        self
    }

    pub fn constructor<F>(mut self, constructor: F) -> Self
    where
        F: Fn(&Construction<'_>, Value) -> Result<EnumInstance, EnumError> + Send + Sync + 'static,
    {
        self.instance = self.instance.constructor(constructor);
        self
    }

    pub fn error_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(EnumError) -> EnumError + Send + Sync + 'static,
    {
        self.statics = self.statics.error_factory(factory);
        self
    }

    fn display_name(&self) -> &str {
        self.instance.name.as_deref().unwrap_or(DEFAULT_NAME)
    }

    pub fn build(self) -> EnumType {
        let ty = assemble(None, self.statics, self.instance);
        debug!(
            enum_type = %ty.name(),
            constants = ty.values().len(),
            "Declared enum type"
        );
        ty
    }
}

#[cfg(test)]
#[path = "../tests/builder_tests.rs"]
mod tests;
