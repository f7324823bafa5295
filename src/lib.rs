//! tenum: closed enum types declared at run time.
//!
//! This crate re-exports the workspace crates:
//!
//! - [`common`]: reflection helpers over mapping-like containers
//! - the enum type system from `tenum-core` (re-exported at the root)
//!
//! and owns the process-level tracing setup ([`tracing_config`]).

pub use tenum_common as common;
pub use tenum_core::*;

pub mod tracing_config;
pub use tracing_config::init_tracing;
