//! Parser decorator consulting a cache before parsing

use crate::cache::{CachedParses, ParseCache};
use std::collections::HashMap;
use std::sync::Arc;
use turkmorph_core::{MorphemeContainer, MorphologicParser};

/// Parser answering from a [`ParseCache`] and parsing only on a miss.
///
/// The cache is built against the inner parser on construction. Batches are
/// deduplicated in a local map first and written back with a single
/// [`ParseCache::put_all`] once the batch is done.
pub struct CachingParser<P> {
    inner: P,
    cache: Arc<dyn ParseCache>,
}

impl<P: MorphologicParser> CachingParser<P> {
    /// Wrap a parser; the cache is built if it was not already
    pub fn new(inner: P, cache: Arc<dyn ParseCache>) -> Self {
        if !cache.is_built() {
            cache.build(&inner);
        }
        Self { inner, cache }
    }

    /// The cache in use
    pub fn cache(&self) -> &Arc<dyn ParseCache> {
        &self.cache
    }

    /// The wrapped parser
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Parses of a word, shared with the cache
    pub fn parse_shared(&self, input: &str) -> CachedParses {
        if let Some(cached) = self.cache.get(input) {
            return cached;
        }
        let parses: CachedParses = self.inner.parse(input).into();
        self.cache.put(input, parses.clone());
        parses
    }

    /// Parses of each word, shared with the cache, in input order
    pub fn parse_all_shared(&self, inputs: &[&str]) -> Vec<CachedParses> {
        let mut fresh: HashMap<String, CachedParses> = HashMap::new();
        let mut hits = 0usize;
        let results = inputs
            .iter()
            .map(|input| {
                if let Some(parses) = fresh.get(*input) {
                    return parses.clone();
                }
                if let Some(cached) = self.cache.get(input) {
                    hits += 1;
                    return cached;
                }
                let parses: CachedParses = self.inner.parse(input).into();
                fresh.insert((*input).to_string(), parses.clone());
                parses
            })
            .collect();

        tracing::debug!(
            words = inputs.len(),
            hits,
            parsed = fresh.len(),
            "cached batch parse"
        );
        if !fresh.is_empty() {
            self.cache.put_all(fresh);
        }
        results
    }
}

impl<P: MorphologicParser> MorphologicParser for CachingParser<P> {
    fn parse(&self, input: &str) -> Vec<MorphemeContainer> {
        self.parse_shared(input).to_vec()
    }

    fn parse_all(&self, inputs: &[&str]) -> Vec<Vec<MorphemeContainer>> {
        self.parse_all_shared(inputs)
            .into_iter()
            .map(|parses| parses.to_vec())
            .collect()
    }
}

impl<P> std::fmt::Debug for CachingParser<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachingParser")
            .field("cached_words", &self.cache.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::testing::CountingParser;
    use crate::cache::{LruParseCache, OfflineParseCache};

    #[test]
    fn test_second_parse_is_served_from_cache() {
        let parser = CachingParser::new(CountingParser::new(), Arc::new(LruParseCache::new(8)));
        let first = parser.parse("evler");
        let second = parser.parse("evler");
        assert_eq!(first.len(), second.len());
        assert_eq!(parser.inner().calls(), 1);
        assert_eq!(parser.cache().len(), 1);
    }

    #[test]
    fn test_batch_deduplicates_and_writes_back() {
        let parser = CachingParser::new(CountingParser::new(), Arc::new(LruParseCache::new(8)));
        let results = parser.parse_all(&["ev", "evde", "ev", "qq", "evde"]);

        assert_eq!(results.len(), 5);
        assert_eq!(results[0].len(), results[2].len());
        assert!(results[3].is_empty());
        assert_eq!(parser.inner().calls(), 3);
        assert_eq!(parser.cache().len(), 3);

        parser.parse_all(&["ev", "qq"]);
        assert_eq!(parser.inner().calls(), 3);
    }

    #[test]
    fn test_offline_cache_is_built_on_construction() {
        let cache = Arc::new(OfflineParseCache::new(["ev", "evler"]).unwrap());
        let parser = CachingParser::new(CountingParser::new(), cache);
        assert!(parser.cache().is_built());
        assert_eq!(parser.inner().calls(), 2);

        parser.parse("evler");
        assert_eq!(parser.inner().calls(), 2);
        // words outside the list are parsed every time
        parser.parse("evde");
        parser.parse("evde");
        assert_eq!(parser.inner().calls(), 4);
    }
}
