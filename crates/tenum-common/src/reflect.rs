//! Reflection over mapping-like containers.
//!
//! These helpers only look at a container's *own* entries: whatever the
//! container yields from [`PropertyMap::own_entries`]. Nothing here knows
//! about enums; the type system in `tenum-core` layers its constant
//! filtering on top.
//!
//! Iteration order is the container's own order:
//!
//! | Container | Order |
//! |-----------|-------|
//! | `IndexMap` | insertion order |
//! | `BTreeMap` | key order |
//! | `HashMap` / `FxHashMap` | unspecified |

use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A keyed container that exposes its own entries and accepts overwrites.
pub trait PropertyMap {
    type Key;
    type Value;

    /// Iterate the container's own entries in its natural order.
    fn own_entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;

    /// Insert or overwrite a single entry.
    fn set_own(&mut self, key: Self::Key, value: Self::Value);
}

impl<K, V, S> PropertyMap for IndexMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn own_entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    fn set_own(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K, V, S> PropertyMap for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn own_entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    fn set_own(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K: Ord, V> PropertyMap for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn own_entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    fn set_own(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

/// Visit every own entry of `container` as `visitor(value, key, container)`.
///
/// Stops at the first `Some` the visitor returns and hands it back; returns
/// `None` when the visitor never short-circuits.
pub fn for_each_own<'a, C, R, F>(container: &'a C, mut visitor: F) -> Option<R>
where
    C: PropertyMap + ?Sized,
    F: FnMut(&'a C::Value, &'a C::Key, &'a C) -> Option<R>,
{
    container
        .own_entries()
        .find_map(|(key, value)| visitor(value, key, container))
}

/// Copy every own entry of each source, in order, onto `target`.
///
/// Later sources overwrite earlier ones as well as entries already present
/// in `target`.
pub fn merge_into<'t, 's, T, S, I>(target: &'t mut T, sources: I) -> &'t mut T
where
    T: PropertyMap + ?Sized,
    T::Key: Clone,
    T::Value: Clone,
    S: PropertyMap<Key = T::Key, Value = T::Value> + ?Sized + 's,
    I: IntoIterator<Item = &'s S>,
{
    for source in sources {
        for_each_own(source, |value, key, _| {
            target.set_own(key.clone(), value.clone());
            None::<()>
        });
    }
    target
}

/// Find the first key whose value is equal to `needle`.
pub fn find_key_by_value<'a, C>(needle: &C::Value, container: &'a C) -> Option<&'a C::Key>
where
    C: PropertyMap + ?Sized,
    C::Value: PartialEq,
{
    for_each_own(container, |value, key, _| (value == needle).then_some(key))
}

#[cfg(test)]
#[path = "../tests/reflect_tests.rs"]
mod tests;
