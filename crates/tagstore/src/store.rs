//! Backing store contract

/// Unbounded key-value sink keyed by string tag.
///
/// Implementations must keep every value ever written. The cache in front of
/// a store only ever calls [`put`](BackingStore::put) and
/// [`get`](BackingStore::get); it never removes anything.
pub trait BackingStore<V> {
    /// Insert or overwrite the value stored under `tag`.
    ///
    /// Failures of the underlying medium are the implementation's concern.
    fn put(&mut self, tag: &str, data: V);

    /// Fetch the value stored under `tag`, or `None` if it was never written.
    fn get(&self, tag: &str) -> Option<V>;

    /// Check whether `tag` has ever been written
    fn contains(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Store that can only answer point lookups, like a remote service
    #[derive(Default)]
    struct PointLookupStore {
        entries: Vec<(String, u32)>,
        lookups: RefCell<usize>,
    }

    impl BackingStore<u32> for PointLookupStore {
        fn put(&mut self, tag: &str, data: u32) {
            self.entries.retain(|(existing, _)| existing != tag);
            self.entries.push((tag.to_owned(), data));
        }

        fn get(&self, tag: &str) -> Option<u32> {
            *self.lookups.borrow_mut() += 1;
            self.entries
                .iter()
                .find(|(existing, _)| existing == tag)
                .map(|(_, data)| *data)
        }
    }

    #[test]
    fn test_put_and_get_are_enough() {
        let mut store = PointLookupStore::default();

        store.put("a", 1);
        store.put("a", 2);

        assert_eq!(store.get("a"), Some(2));
        assert_eq!(store.entries.len(), 1);
    }

    #[test]
    fn test_contains_defaults_to_get() {
        let mut store = PointLookupStore::default();
        store.put("a", 1);

        assert!(store.contains("a"));
        assert!(!store.contains("b"));
        assert_eq!(*store.lookups.borrow(), 2);
    }
}
