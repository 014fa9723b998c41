//! Explicit memoization tables
//!
//! Entries are never evicted; call [`Memo::clear`] to reset.

use std::collections::HashMap;
use std::hash::Hash;

use parking_lot::RwLock;

/// A thread-safe, unbounded memo table
#[derive(Debug, Default)]
pub struct Memo<K, V> {
    entries: RwLock<HashMap<K, V>>,
}

impl<K, V> Memo<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.entries.read().get(key).cloned()
    }

    pub fn insert(&self, key: K, value: V) {
        self.entries.write().insert(key, value);
    }

    /// Returns the cached value for `key`, computing and storing it on a miss
    ///
    /// `compute` runs under the write lock, so it is called at most once per key.
    pub fn get_or_insert_with(&self, key: K, compute: impl FnOnce() -> V) -> V {
        if let Some(value) = self.get(&key) {
            return value;
        }
        let mut entries = self.entries.write();
        entries.entry(key).or_insert_with(compute).clone()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
