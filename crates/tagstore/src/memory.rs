//! In-memory backing store

use std::collections::HashMap;
use ahash::RandomState;

use crate::store::BackingStore;

/// Backing store held in a process-local hash map.
///
/// Values are cloned out on [`get`](BackingStore::get), the same way a
/// store backed by a file or a remote service would hand back a fresh copy.
#[derive(Debug, Clone)]
pub struct MemoryStore<V> {
    store: HashMap<String, V, RandomState>,
}

impl<V> MemoryStore<V> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            store: HashMap::with_hasher(RandomState::new()),
        }
    }

    /// Create an empty store pre-sized for `capacity` tags.
    ///
    /// This is an allocation hint only; the store keeps growing past it.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    /// Number of tags durably recorded
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if nothing has been written yet
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Iterate over all stored tags in unspecified order
    pub fn tags(&self) -> impl Iterator<Item = &str> + '_ {
        self.store.keys().map(String::as_str)
    }
}

impl<V> Default for MemoryStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> BackingStore<V> for MemoryStore<V> {
    fn put(&mut self, tag: &str, data: V) {
        match self.store.get_mut(tag) {
            Some(slot) => *slot = data,
            None => {
                self.store.insert(tag.to_owned(), data);
            }
        }
    }

    fn get(&self, tag: &str) -> Option<V> {
        self.store.get(tag).cloned()
    }

    fn contains(&self, tag: &str) -> bool {
        self.store.contains_key(tag)
    }
}
