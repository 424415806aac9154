use super::{CachedParses, ParseCache};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, (CachedParses, u64)>,
    /// Last-use tick to word, oldest first
    recency: BTreeMap<u64, String>,
    tick: u64,
}

impl Inner {
    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    fn touch(&mut self, word: &str) -> Option<CachedParses> {
        let tick = self.next_tick();
        let (parses, last_used) = self.entries.get_mut(word)?;
        let previous = std::mem::replace(last_used, tick);
        let parses = parses.clone();
        if let Some(key) = self.recency.remove(&previous) {
            self.recency.insert(tick, key);
        }
        Some(parses)
    }

    fn insert(&mut self, word: String, parses: CachedParses, capacity: usize) {
        let tick = self.next_tick();
        if let Some((_, previous)) = self.entries.insert(word.clone(), (parses, tick)) {
            self.recency.remove(&previous);
        }
        self.recency.insert(tick, word);

        while self.entries.len() > capacity {
            let Some((_, oldest)) = self.recency.pop_first() else {
                break;
            };
            self.entries.remove(&oldest);
        }
    }
}

/// Bounded cache evicting the least recently used word.
///
/// One mutex guards the map; lookups are short so contention stays low
/// even with many parsing threads.
#[derive(Debug)]
pub struct LruParseCache {
    capacity: usize,
    inner: Mutex<Inner>,
}

impl LruParseCache {
    /// Create a cache holding at most `capacity` words (at least one)
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Maximum number of words kept
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // a panic while holding the lock leaves the maps consistent
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ParseCache for LruParseCache {
    fn get(&self, word: &str) -> Option<CachedParses> {
        self.lock().touch(word)
    }

    fn put(&self, word: &str, parses: CachedParses) {
        self.lock().insert(word.to_string(), parses, self.capacity);
    }

    fn put_all(&self, entries: HashMap<String, CachedParses>) {
        let mut inner = self.lock();
        for (word, parses) in entries {
            inner.insert(word, parses, self.capacity);
        }
    }

    fn len(&self) -> usize {
        self.lock().entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::testing::parses;
    use std::sync::Arc;

    #[test]
    fn test_get_after_put() {
        let cache = LruParseCache::new(4);
        assert!(cache.get("ev").is_none());
        cache.put("ev", parses("ev"));
        let cached = cache.get("ev").unwrap();
        assert_eq!(cached.len(), parses("ev").len());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_least_recently_used_is_evicted() {
        let cache = LruParseCache::new(2);
        cache.put("ev", parses("ev"));
        cache.put("evler", parses("evler"));
        // touching "ev" makes "evler" the oldest
        assert!(cache.get("ev").is_some());
        cache.put("göz", parses("göz"));

        assert_eq!(cache.len(), 2);
        assert!(cache.get("ev").is_some());
        assert!(cache.get("evler").is_none());
        assert!(cache.get("göz").is_some());
    }

    #[test]
    fn test_overwrite_does_not_grow() {
        let cache = LruParseCache::new(2);
        cache.put("ev", parses("ev"));
        cache.put("ev", parses("ev"));
        cache.put("göz", parses("göz"));
        assert_eq!(cache.len(), 2);
        assert!(cache.get("ev").is_some());
    }

    #[test]
    fn test_put_all_respects_capacity() {
        let cache = LruParseCache::new(3);
        let entries: HashMap<String, CachedParses> = ["ev", "evde", "evden", "evler", "göz"]
            .into_iter()
            .map(|word| (word.to_string(), parses(word)))
            .collect();
        cache.put_all(entries);
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_unknown_words_are_cached_as_empty() {
        let cache = LruParseCache::new(2);
        cache.put("qq", parses("qq"));
        assert!(cache.get("qq").unwrap().is_empty());
    }

    #[test]
    fn test_concurrent_access() {
        let cache = Arc::new(LruParseCache::new(16));
        let words = ["ev", "evde", "evden", "evler", "göz", "gözler"];
        std::thread::scope(|scope| {
            for offset in 0..4 {
                let cache = Arc::clone(&cache);
                scope.spawn(move || {
                    for i in 0..50 {
                        let word = words[(i + offset) % words.len()];
                        if cache.get(word).is_none() {
                            cache.put(word, parses(word));
                        }
                    }
                });
            }
        });
        assert_eq!(cache.len(), words.len());
    }
}
