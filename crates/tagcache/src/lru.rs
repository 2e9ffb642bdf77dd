//! Fast tier: capacity-bounded set of resident items
//!
//! Recency is read straight off each item's `last_used` stamp. Finding the
//! victim is a linear scan over the resident items, O(capacity) per eviction.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use ahash::RandomState;
use chrono::{DateTime, Utc};

use crate::item::CacheItem;

/// Resident items keyed by tag, never more than `capacity` of them
#[derive(Debug)]
pub(crate) struct ResidentSet<V> {
    items: HashMap<String, CacheItem<V>, RandomState>,
    capacity: usize,
}

impl<V> ResidentSet<V> {
    /// Create an empty set holding at most `capacity` items
    pub(crate) fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than 0");

        Self {
            items: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            capacity,
        }
    }

    pub(crate) fn get(&self, tag: &str) -> Option<&CacheItem<V>> {
        self.items.get(tag)
    }

    pub(crate) fn get_mut(&mut self, tag: &str) -> Option<&mut CacheItem<V>> {
        self.items.get_mut(tag)
    }

    pub(crate) fn contains(&self, tag: &str) -> bool {
        self.items.contains_key(tag)
    }

    /// Refresh the stamp of a resident item and hand it back
    pub(crate) fn touch(&mut self, tag: &str, now: DateTime<Utc>) -> Option<&CacheItem<V>> {
        let item = self.items.get_mut(tag)?;
        item.touch(now);
        Some(&*item)
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn items(&self) -> impl Iterator<Item = &CacheItem<V>> + '_ {
        self.items.values()
    }

    /// Least recently used item: the one with the earliest stamp.
    ///
    /// Among items sharing the earliest stamp, whichever the map yields first
    /// wins. Callers must not rely on which one that is.
    pub(crate) fn find_lru(&self) -> Option<&CacheItem<V>> {
        self.items.values().min_by_key(|item| item.last_used())
    }

    /// Insert `item`, evicting the least recently used item first if the set
    /// is full. Returns the admitted item and the evicted one, if any.
    ///
    /// Re-admitting a resident tag replaces it in place without evicting.
    pub(crate) fn admit(&mut self, item: CacheItem<V>) -> (&CacheItem<V>, Option<CacheItem<V>>) {
        let evicted = if self.items.len() >= self.capacity && !self.items.contains_key(item.tag()) {
            self.evict()
        } else {
            None
        };
        debug_assert!(self.items.len() < self.capacity || self.items.contains_key(item.tag()));

        let admitted = match self.items.entry(item.tag().to_owned()) {
            Entry::Occupied(mut slot) => {
                slot.insert(item);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(item),
        };

        (&*admitted, evicted)
    }

    fn evict(&mut self) -> Option<CacheItem<V>> {
        let victim = self.find_lru()?.tag().to_owned();
        self.items.remove(&victim)
    }
}
