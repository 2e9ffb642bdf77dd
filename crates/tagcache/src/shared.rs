//! Thread-safe wrapper around [`Cache`]
//!
//! A single lock guards the resident set, the counters and the backing store,
//! so admission and eviction are atomic with respect to every other caller.

use parking_lot::Mutex;
use tagstore::{BackingStore, MemoryStore};

use crate::cache::Cache;
use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::stats::CacheStats;

/// [`Cache`] behind a mutex, shareable across threads through an
/// [`Arc`](std::sync::Arc).
///
/// Reads hand back a clone of the cached value because the item itself
/// cannot outlive the lock.
#[derive(Debug)]
pub struct SharedCache<V, B = MemoryStore<V>, C = SystemClock> {
    inner: Mutex<Cache<V, B, C>>,
}

impl<V: Clone> SharedCache<V> {
    /// Create a shared cache with the wall clock and a fresh [`MemoryStore`]
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self::from(Cache::new(capacity))
    }
}

impl<V, B, C> SharedCache<V, B, C>
where
    V: Clone,
    B: BackingStore<V>,
    C: Clock,
{
    /// Write `data` under `tag` to both tiers
    pub fn write(&self, tag: &str, data: V) {
        self.inner.lock().write(tag, data);
    }

    /// Read a copy of the value stored under `tag`
    pub fn read(&self, tag: &str) -> Result<V> {
        let mut cache = self.inner.lock();
        cache.read(tag).map(|item| item.data().clone())
    }
}

impl<V, B, C> SharedCache<V, B, C> {
    /// Check whether `tag` is resident
    pub fn contains(&self, tag: &str) -> bool {
        self.inner.lock().contains(tag)
    }

    /// Get current number of resident items
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check if no item is resident
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Get cache capacity
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Snapshot of the counters
    pub fn stats(&self) -> CacheStats {
        *self.inner.lock().stats()
    }

    /// Zero all counters
    pub fn reset_counters(&self) {
        self.inner.lock().reset_counters();
    }

    /// Run `f` with exclusive access to the underlying cache
    pub fn with<R>(&self, f: impl FnOnce(&mut Cache<V, B, C>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Unwrap the underlying cache
    pub fn into_inner(self) -> Cache<V, B, C> {
        self.inner.into_inner()
    }
}

impl<V, B, C> From<Cache<V, B, C>> for SharedCache<V, B, C> {
    fn from(cache: Cache<V, B, C>) -> Self {
        Self {
            inner: Mutex::new(cache),
        }
    }
}
