//! Runtime-declared enum types.
//!
//! An [`EnumType`] is a closed, named set of constant [`Value`]s plus
//! attached behavior. Instances ([`EnumInstance`]) can only be obtained
//! through validated construction, so an instance always holds one of its
//! type's declared constants.
//!
//! The crate provides:
//! - Declaration via [`EnumBuilder`], sealed into an immutable [`EnumType`]
//! - Introspection (`values`, `has`, `key_of`) and construction (`construct`, `make`)
//! - Derivation of child types with [`EnumType::extend`]
//! - A single error kind, [`EnumError`], routed through a per-type
//!   [`ErrorFactory`]
//!
//! # Example
//!
//! ```
//! use tenum_core::{EnumType, StaticAdditions, InstanceAdditions, Value};
//!
//! let status = EnumType::builder()
//!     .name("Status")
//!     .constant("OK", "200")
//!     .constant("NOT_FOUND", "404")
//!     .build();
//!
//! assert!(status.has(&Value::from("200")));
//! assert_eq!(status.make("OK")?.value(), &Value::from("200"));
//! assert!(status.construct("999").is_err());
//!
//! let extended = status.extend(
//!     StaticAdditions::new().constant("CREATED", "201"),
//!     InstanceAdditions::new(),
//! );
//! assert_eq!(extended.values().len(), 3);
//! assert_eq!(status.values().len(), 2);
//! # Ok::<(), tenum_core::EnumError>(())
//! ```

mod builder;
pub mod descriptor;
pub mod error;
mod extend;
pub mod instance;
pub mod member;
pub mod value;

pub use builder::EnumBuilder;
pub use descriptor::{Constants, DEFAULT_NAME, EnumType, RESERVED_PREFIX, is_declared_constant};
pub use error::{EnumError, EnumErrorKind, ErrorFactory};
pub use extend::{InstanceAdditions, StaticAdditions};
pub use instance::{Construction, EnumInstance, MethodCall};
pub use member::{ConstructFn, InstanceMember, InstanceMethod, StaticMember, StaticMethod};
pub use value::Value;

#[cfg(test)]
#[path = "../tests/instance_contract_tests.rs"]
mod instance_contract_tests;
