use super::{CachedParses, LruParseCache, ParseCache};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Cache collecting new entries in a small map and moving them into a
/// larger first-level cache in batches.
///
/// Lookups check the batch map first. Once it holds `l2_max_size` words it
/// is flushed into the first level with a single `put_all`, so the first
/// level is locked once per batch instead of once per word.
#[derive(Debug)]
pub struct TwoLevelParseCache<C = LruParseCache> {
    l1: C,
    l2: Mutex<HashMap<String, CachedParses>>,
    l2_max_size: usize,
}

impl TwoLevelParseCache<LruParseCache> {
    /// Batch map in front of an LRU of `lru_capacity` words
    pub fn with_lru(l2_max_size: usize, lru_capacity: usize) -> Self {
        Self::new(l2_max_size, LruParseCache::new(lru_capacity))
    }
}

impl<C: ParseCache> TwoLevelParseCache<C> {
    /// Batch map of at most `l2_max_size` words in front of `l1`
    pub fn new(l2_max_size: usize, l1: C) -> Self {
        let l2_max_size = l2_max_size.max(1);
        Self {
            l1,
            l2: Mutex::new(HashMap::with_capacity(l2_max_size)),
            l2_max_size,
        }
    }

    /// The first-level cache
    pub fn l1(&self) -> &C {
        &self.l1
    }

    /// Words waiting in the batch map
    pub fn pending(&self) -> usize {
        self.lock_l2().len()
    }

    /// Move every pending word into the first level
    pub fn flush(&self) {
        let mut l2 = self.lock_l2();
        self.flush_locked(&mut l2);
    }

    fn flush_locked(&self, l2: &mut HashMap<String, CachedParses>) {
        if l2.is_empty() {
            return;
        }
        let batch = std::mem::replace(l2, HashMap::with_capacity(self.l2_max_size));
        tracing::debug!(words = batch.len(), "flushing batch cache");
        self.l1.put_all(batch);
    }

    fn lock_l2(&self) -> MutexGuard<'_, HashMap<String, CachedParses>> {
        self.l2.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<C: ParseCache> ParseCache for TwoLevelParseCache<C> {
    fn get(&self, word: &str) -> Option<CachedParses> {
        if let Some(parses) = self.lock_l2().get(word) {
            return Some(parses.clone());
        }
        self.l1.get(word)
    }

    fn put(&self, word: &str, parses: CachedParses) {
        let mut l2 = self.lock_l2();
        l2.insert(word.to_string(), parses);
        if l2.len() >= self.l2_max_size {
            self.flush_locked(&mut l2);
        }
    }

    fn put_all(&self, entries: HashMap<String, CachedParses>) {
        let mut l2 = self.lock_l2();
        if l2.len() + entries.len() >= self.l2_max_size {
            self.flush_locked(&mut l2);
            self.l1.put_all(entries);
        } else {
            l2.extend(entries);
        }
    }

    /// Words in both levels; a word stored again after a flush counts twice
    fn len(&self) -> usize {
        let pending = self.lock_l2().len();
        self.l1.len() + pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::testing::parses;

    #[test]
    fn test_entries_stay_in_batch_until_full() {
        let cache = TwoLevelParseCache::with_lru(3, 100);
        cache.put("ev", parses("ev"));
        cache.put("evde", parses("evde"));
        assert_eq!(cache.pending(), 2);
        assert!(cache.l1().is_empty());
        assert!(cache.get("ev").is_some());

        cache.put("evden", parses("evden"));
        assert_eq!(cache.pending(), 0);
        assert_eq!(cache.l1().len(), 3);
        assert!(cache.get("evde").is_some());
    }

    #[test]
    fn test_large_put_all_goes_to_first_level() {
        let cache = TwoLevelParseCache::with_lru(2, 100);
        cache.put("göz", parses("göz"));
        let entries: HashMap<String, CachedParses> = ["ev", "evde"]
            .into_iter()
            .map(|word| (word.to_string(), parses(word)))
            .collect();
        cache.put_all(entries);

        assert_eq!(cache.pending(), 0);
        assert_eq!(cache.l1().len(), 3);
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_small_put_all_is_batched() {
        let cache = TwoLevelParseCache::with_lru(10, 100);
        let entries: HashMap<String, CachedParses> = ["ev", "evde"]
            .into_iter()
            .map(|word| (word.to_string(), parses(word)))
            .collect();
        cache.put_all(entries);
        assert_eq!(cache.pending(), 2);
        assert_eq!(cache.len(), 2);

        cache.flush();
        assert_eq!(cache.pending(), 0);
        assert_eq!(cache.l1().len(), 2);
    }
}
