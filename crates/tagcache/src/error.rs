//! Error types for tagcache

/// Result type alias for cache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The tag was never written: it is in neither the cache nor the
    /// backing store
    #[error("data for tag {tag:?} is not in the backing store")]
    DataNotFound {
        /// Tag that was requested
        tag: String,
    },
}
