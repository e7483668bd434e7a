use std::collections::HashMap;
use std::time::{Duration, Instant};

/// A keyed cache with per-entry time-to-live, meant to be handed to whatever
/// collaborator performs retrieval instead of living as ambient global state.
pub trait Cache<V> {
    /// A live entry, or `None` when the key is missing or expired.
    fn get(&mut self, key: &str) -> Option<&V>;
    fn put(&mut self, key: String, value: V, ttl: Duration);
}

/// Resolved page titles keyed by page identifier.
pub type TitleCache = MemoryCache<String>;

/// In-process `Cache` backed by a `HashMap`. Expired entries are dropped
/// lazily on access; `purge_expired` sweeps the rest.
#[derive(Debug)]
pub struct MemoryCache<V> {
    entries: HashMap<String, Entry<V>>,
}

#[derive(Debug)]
struct Entry<V> {
    value: V,
    deadline: Instant,
}

impl<V> MemoryCache<V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn purge_expired(&mut self) {
        let now = Instant::now();
        self.entries.retain(|_, entry| entry.deadline > now);
    }
}

impl<V> Default for MemoryCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Cache<V> for MemoryCache<V> {
    fn get(&mut self, key: &str) -> Option<&V> {
        let expired = self
            .entries
            .get(key)
            .map(|entry| entry.deadline <= Instant::now())
            .unwrap_or_default();
        if expired {
            self.entries.remove(key);
        }
        self.entries.get(key).map(|entry| &entry.value)
    }

    fn put(&mut self, key: String, value: V, ttl: Duration) {
        self.entries.insert(
            key,
            Entry {
                value,
                deadline: Instant::now() + ttl,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_then_get() {
        let mut cache = TitleCache::new();
        cache.put(
            "59833787-2cf9-4fdf-8782-e53db20768a5".to_string(),
            "Cardiology".to_string(),
            Duration::from_secs(3600),
        );
        assert_eq!(
            cache.get("59833787-2cf9-4fdf-8782-e53db20768a5"),
            Some(&"Cardiology".to_string())
        );
    }

    #[test]
    fn test_missing_key_is_absent() {
        let mut cache: MemoryCache<String> = MemoryCache::new();
        assert_eq!(cache.get("nope"), None);
    }

    #[test]
    fn test_expired_entry_is_absent_and_dropped() {
        let mut cache: MemoryCache<u32> = MemoryCache::new();
        cache.put("k".to_string(), 1, Duration::ZERO);
        assert_eq!(cache.get("k"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_put_refreshes_deadline() {
        let mut cache: MemoryCache<u32> = MemoryCache::new();
        cache.put("k".to_string(), 1, Duration::ZERO);
        cache.put("k".to_string(), 2, Duration::from_secs(60));
        assert_eq!(cache.get("k"), Some(&2));
    }

    #[test]
    fn test_purge_expired_keeps_live_entries() {
        let mut cache: MemoryCache<u32> = MemoryCache::new();
        cache.put("dead".to_string(), 1, Duration::ZERO);
        cache.put("live".to_string(), 2, Duration::from_secs(60));
        cache.purge_expired();
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("live"), Some(&2));
    }
}
