//! # tagcache
//!
//! Fixed-capacity LRU cache with a write-through backing store.
//!
//! ## Architecture
//! - **Fast tier**: AHash map of resident items, bounded by capacity
//! - **Recency**: every item carries a UTC `last_used` stamp from an
//!   injectable [`Clock`]; the item with the earliest stamp is evicted
//! - **Durable tier**: any [`BackingStore`], written on every write, never
//!   evicted from
//!
//! ```
//! use tagcache::{Cache, Error};
//!
//! let mut cache = Cache::new(1);
//! cache.write("a", 1);
//! cache.write("b", 2); // evicts "a" from the fast tier
//!
//! assert!(!cache.contains("a"));
//! assert_eq!(*cache.read("a").unwrap().data(), 1); // served by the backing store
//! assert!(matches!(cache.read("z"), Err(Error::DataNotFound { .. })));
//! ```

#![warn(missing_docs)]

mod cache;
mod clock;
mod error;
mod item;
mod lru;
mod shared;
mod stats;

pub use cache::Cache;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Error, Result};
pub use item::CacheItem;
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use tagstore::{BackingStore, MemoryStore};
