//! Storage backends for the DP cache.

use std::collections::HashMap;
use std::hash::Hash;

/// A storage backend for the DP cache.
///
/// # Contract
///
/// - Entries are write-once: `insert` on an index that already holds a value
///   keeps the first value
/// - Entries are never evicted while the backend lives
pub trait Backend<I, K> {
    /// Returns the cached value for `index`, if any.
    fn get(&self, index: &I) -> Option<&K>;

    /// Stores `value` under `index` unless a value is already present.
    fn insert(&mut self, index: I, value: K);

    /// Number of cached entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A HashMap-based backend for arbitrary hashable indices.
///
/// Suitable for sparse or composite indices such as `(node, hops)` pairs.
#[derive(Debug)]
pub struct HashMapBackend<I, K> {
    data: HashMap<I, K>,
}

impl<I, K> HashMapBackend<I, K> {
    /// Creates a new empty HashMapBackend.
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl<I, K> Default for HashMapBackend<I, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq, K> Backend<I, K> for HashMapBackend<I, K> {
    fn get(&self, index: &I) -> Option<&K> {
        self.data.get(index)
    }

    fn insert(&mut self, index: I, value: K) {
        self.data.entry(index).or_insert(value);
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

/// A backend that stores nothing.
///
/// Every lookup misses, so each index is recomputed every time it is
/// reached. Turns the cache into a plain evaluation of the recurrence.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCacheBackend;

impl NoCacheBackend {
    pub fn new() -> Self {
        Self
    }
}

impl<I, K> Backend<I, K> for NoCacheBackend {
    fn get(&self, _index: &I) -> Option<&K> {
        None
    }

    fn insert(&mut self, _index: I, _value: K) {}

    fn len(&self) -> usize {
        0
    }
}
