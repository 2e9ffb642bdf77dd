//! Resident cache entries

use chrono::{DateTime, Utc};

/// One entry held in the fast tier.
///
/// An item is stamped with its admission time when it is built, and every
/// later read or write through the cache refreshes the stamp.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheItem<V> {
    tag: String,
    data: V,
    last_used: DateTime<Utc>,
}

impl<V> CacheItem<V> {
    pub(crate) fn new(tag: String, data: V, now: DateTime<Utc>) -> Self {
        Self {
            tag,
            data,
            last_used: now,
        }
    }

    /// Tag the item is stored under
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Cached value
    pub fn data(&self) -> &V {
        &self.data
    }

    /// Time of the most recent read or write of this item
    pub fn last_used(&self) -> DateTime<Utc> {
        self.last_used
    }

    /// Consume the item, returning the cached value
    pub fn into_data(self) -> V {
        self.data
    }

    /// Refresh the recency stamp. The stamp never moves backwards, even if
    /// the clock does.
    pub(crate) fn touch(&mut self, now: DateTime<Utc>) {
        if now > self.last_used {
            self.last_used = now;
        }
    }

    /// Swap in new data and refresh the stamp together
    pub(crate) fn replace(&mut self, data: V, now: DateTime<Utc>) {
        self.data = data;
        self.touch(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn t(secs: i64) -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(secs)
    }

    #[test]
    fn test_new_item_is_stamped() {
        let item = CacheItem::new("a".to_string(), 1, t(3));

        assert_eq!(item.tag(), "a");
        assert_eq!(*item.data(), 1);
        assert_eq!(item.last_used(), t(3));
    }

    #[test]
    fn test_touch_moves_forward() {
        let mut item = CacheItem::new("a".to_string(), 1, t(0));

        item.touch(t(5));

        assert_eq!(item.last_used(), t(5));
    }

    #[test]
    fn test_touch_never_moves_backward() {
        let mut item = CacheItem::new("a".to_string(), 1, t(5));

        item.touch(t(2));

        assert_eq!(item.last_used(), t(5));
    }

    #[test]
    fn test_replace_updates_data_and_stamp() {
        let mut item = CacheItem::new("a".to_string(), 1, t(0));

        item.replace(2, t(1));

        assert_eq!(*item.data(), 2);
        assert_eq!(item.last_used(), t(1));
        assert_eq!(item.into_data(), 2);
    }
}
