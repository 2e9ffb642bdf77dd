//! TagCache: LRU fast tier in front of a write-through backing store

use tagstore::{BackingStore, MemoryStore};
use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};
use crate::error::{Error, Result};
use crate::item::CacheItem;
use crate::lru::ResidentSet;
use crate::stats::CacheStats;

/// Fixed-capacity LRU cache with a write-through backing store.
///
/// Reads are served from the fast tier when the tag is resident and fall
/// back to the backing store otherwise, promoting the value into the fast
/// tier. Every write lands in the backing store immediately, so a value
/// evicted from the fast tier can always be read back.
#[derive(Debug)]
pub struct Cache<V, B = MemoryStore<V>, C = SystemClock> {
    /// Capacity-bounded resident items
    resident: ResidentSet<V>,

    /// Durable tier holding every value ever written
    store: B,

    /// Source of recency stamps
    clock: C,

    /// Usage counters
    stats: CacheStats,
}

impl<V: Clone> Cache<V> {
    /// Create a cache holding at most `capacity` items, stamped by the wall
    /// clock and backed by a fresh [`MemoryStore`].
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self::with_clock(capacity, SystemClock)
    }
}

impl<V: Clone, C: Clock> Cache<V, MemoryStore<V>, C> {
    /// Create a cache backed by a fresh [`MemoryStore`], using `clock` for
    /// recency stamps.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn with_clock(capacity: usize, clock: C) -> Self {
        Self::with_store(capacity, MemoryStore::new(), clock)
    }
}

impl<V, B, C> Cache<V, B, C>
where
    V: Clone,
    B: BackingStore<V>,
    C: Clock,
{
    /// Create a cache in front of a caller-supplied backing store
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of resident items
    /// * `store` - Durable tier receiving every write
    /// * `clock` - Source of recency stamps
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn with_store(capacity: usize, store: B, clock: C) -> Self {
        Self {
            resident: ResidentSet::new(capacity),
            store,
            clock,
            stats: CacheStats::new(),
        }
    }

    /// Write `data` under `tag` to both tiers.
    ///
    /// A resident item is updated in place. Otherwise the value is admitted
    /// to the fast tier, evicting the least recently used item if the cache
    /// is full.
    pub fn write(&mut self, tag: &str, data: V) {
        self.stats.record_use();
        let now = self.clock.now();

        if let Some(item) = self.resident.get_mut(tag) {
            self.stats.record_hit();
            trace!(tag, "write hit");
            self.store.put(tag, data.clone());
            item.replace(data, now);
            return;
        }

        self.stats.record_miss();
        trace!(tag, "write miss");
        self.store.put(tag, data.clone());
        self.admit(CacheItem::new(tag.to_owned(), data, now));
    }

    /// Read the item stored under `tag`.
    ///
    /// On a fast-tier miss the value is fetched from the backing store and
    /// admitted, possibly evicting the least recently used item.
    ///
    /// # Errors
    /// [`Error::DataNotFound`] if `tag` was never written.
    pub fn read(&mut self, tag: &str) -> Result<&CacheItem<V>> {
        self.stats.record_use();
        let now = self.clock.now();

        if !self.resident.contains(tag) {
            self.stats.record_miss();
            trace!(tag, "read miss");

            let data = self.store.get(tag).ok_or_else(|| not_found(tag))?;
            return Ok(self.admit(CacheItem::new(tag.to_owned(), data, now)));
        }

        self.stats.record_hit();
        trace!(tag, "read hit");

        let item = self
            .resident
            .touch(tag, now)
            .expect("a resident tag must have an item");
        Ok(item)
    }

    fn admit(&mut self, item: CacheItem<V>) -> &CacheItem<V> {
        let (admitted, evicted) = self.resident.admit(item);

        if let Some(evicted) = evicted {
            self.stats.record_eviction();
            debug!(
                tag = evicted.tag(),
                last_used = %evicted.last_used(),
                "evicted least recently used item"
            );
        }

        admitted
    }
}

impl<V, B, C> Cache<V, B, C> {
    /// Look at a resident item without counting a use or refreshing it
    pub fn peek(&self, tag: &str) -> Option<&CacheItem<V>> {
        self.resident.get(tag)
    }

    /// Check whether `tag` is resident, without side effects
    pub fn contains(&self, tag: &str) -> bool {
        self.resident.contains(tag)
    }

    /// Tags currently resident in the fast tier, in unspecified order
    pub fn tags(&self) -> impl Iterator<Item = &str> + '_ {
        self.resident.items().map(CacheItem::tag)
    }

    /// Get current number of resident items
    pub fn len(&self) -> usize {
        self.resident.len()
    }

    /// Check if no item is resident
    pub fn is_empty(&self) -> bool {
        self.resident.len() == 0
    }

    /// Get cache capacity
    pub fn capacity(&self) -> usize {
        self.resident.capacity()
    }

    /// Get the backing store
    pub fn backing_store(&self) -> &B {
        &self.store
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Total reads and writes
    pub fn uses(&self) -> u64 {
        self.stats.uses()
    }

    /// Requests served by a resident item
    pub fn hits(&self) -> u64 {
        self.stats.hits()
    }

    /// Requests for a tag that was not resident
    pub fn misses(&self) -> u64 {
        self.stats.misses()
    }

    /// Zero all counters. Cache contents are left untouched.
    pub fn reset_counters(&mut self) {
        self.stats.reset();
    }
}

fn not_found(tag: &str) -> Error {
    Error::DataNotFound {
        tag: tag.to_owned(),
    }
}
