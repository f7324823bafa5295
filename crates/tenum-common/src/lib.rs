//! Common utilities for the tenum crates.
//!
//! This crate has no notion of enums. It provides the mapping-level
//! reflection helpers the type system is built on:
//! - Own-entry iteration with short-circuiting (`for_each_own`)
//! - Multi-source overlay merging (`merge_into`)
//! - Reverse lookup of a key by value (`find_key_by_value`)

// Reflection over mapping-like containers
pub mod reflect;
pub use reflect::{PropertyMap, find_key_by_value, for_each_own, merge_into};
