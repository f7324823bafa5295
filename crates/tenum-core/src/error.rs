//! The `EnumError` kind.
//!
//! Every failure the library reports is an [`EnumError`]. Errors raised on
//! behalf of a type pass through that type's [`ErrorFactory`] before they
//! reach the caller.

use crate::value::Value;
use std::backtrace::Backtrace;
use std::sync::Arc;

/// Rewrites errors raised on behalf of an enum type.
///
/// Installed with `EnumBuilder::error_factory` or
/// `StaticAdditions::error_factory`; derived types inherit it unless they
/// install their own.
pub type ErrorFactory = Arc<dyn Fn(EnumError) -> EnumError + Send + Sync>;

/// What went wrong.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EnumErrorKind {
    /// Construction with a value that is not a declared constant.
    UnknownValue,
    /// `make` with a name that is not a declared constant.
    UnknownKey,
    /// `equal_enum` with an argument that is not an enum instance.
    NotAnInstance,
    /// Call of a method that is not on the static or instance surface.
    UnknownMethod,
    /// A declaration source (e.g. JSON) could not be read.
    Declaration,
}

#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct EnumError {
    kind: EnumErrorKind,
    message: String,
    type_name: Option<String>,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    stack: Box<Backtrace>,
}

impl EnumError {
    /// Name tag shared by every enum error.
    pub const NAME: &'static str = "EnumError";

    pub fn new(kind: EnumErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            type_name: None,
            source: None,
            stack: Box::new(Backtrace::capture()),
        }
    }

    pub fn unknown_value(type_name: &str, value: &Value) -> Self {
        Self::new(
            EnumErrorKind::UnknownValue,
            format!("'{type_name}' does not have the value '{value}'"),
        )
        .with_type_name(type_name)
    }

    pub fn unknown_key(type_name: &str, key: &str) -> Self {
        Self::new(
            EnumErrorKind::UnknownKey,
            format!("'{type_name}' does not have value for key '{key}'"),
        )
        .with_type_name(type_name)
    }

    pub fn not_an_instance() -> Self {
        Self::new(EnumErrorKind::NotAnInstance, "Enum object is expected")
    }

    pub fn unknown_method(type_name: &str, method: &str) -> Self {
        Self::new(
            EnumErrorKind::UnknownMethod,
            format!("'{type_name}' does not have a method '{method}'"),
        )
        .with_type_name(type_name)
    }

    /// Wrap a lower-level error that prevented reading a declaration.
    pub fn declaration(
        type_name: &str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::new(
            EnumErrorKind::Declaration,
            format!("'{type_name}' declaration could not be read: {source}"),
        )
        .with_type_name(type_name)
        .with_source(source)
    }

    #[must_use]
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Replace the message, keeping kind, source and trace.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub const fn kind(&self) -> EnumErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Display name of the type the error was raised for, if any.
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// Backtrace captured when the error was created. Empty unless
    /// `RUST_BACKTRACE` is set.
    pub fn stack(&self) -> &Backtrace {
        &self.stack
    }
}

#[cfg(test)]
#[path = "../tests/error_tests.rs"]
mod tests;
