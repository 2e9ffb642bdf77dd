//! # tagstore
//!
//! Durable tier behind TagCache.
//!
//! A backing store holds every value ever written under a string tag. It has
//! no capacity bound, no eviction and no recency tracking. The concrete
//! medium (file, database, remote service) is chosen by the host application
//! by implementing [`BackingStore`]; [`MemoryStore`] is the default.

#![warn(missing_docs)]

mod memory;
mod store;

pub use memory::MemoryStore;
pub use store::BackingStore;
