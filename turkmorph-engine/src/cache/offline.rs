use super::{CachedParses, ParseCache};
use crate::error::{EngineError, Result};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;
use turkmorph_core::MorphologicParser;

/// Cache of a fixed word list, parsed once by [`ParseCache::build`].
///
/// Typically built from the most frequent words of a corpus. After the
/// build the map is never written again, so lookups take no lock; `put`
/// and `put_all` are ignored.
#[derive(Debug)]
pub struct OfflineParseCache {
    words: Vec<String>,
    map: OnceLock<HashMap<String, CachedParses>>,
}

impl OfflineParseCache {
    /// Cache for the given words; the list must not be empty
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: Vec<String> = words.into_iter().map(Into::into).collect();
        words.sort();
        words.dedup();
        if words.is_empty() {
            return Err(EngineError::ConfigError(
                "offline cache needs at least one word".to_string(),
            ));
        }
        Ok(Self {
            words,
            map: OnceLock::new(),
        })
    }

    /// Cache for a word list file with one word per line; blank lines are skipped
    pub fn from_word_list(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            EngineError::IoError(format!("Failed to read file '{}': {}", path.display(), e))
        })?;
        Self::new(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        )
    }

    /// Words the cache is built from
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl ParseCache for OfflineParseCache {
    fn get(&self, word: &str) -> Option<CachedParses> {
        self.map.get()?.get(word).cloned()
    }

    fn put(&self, _word: &str, _parses: CachedParses) {}

    fn put_all(&self, _entries: HashMap<String, CachedParses>) {}

    fn build(&self, parser: &dyn MorphologicParser) {
        self.map.get_or_init(|| {
            let inputs: Vec<&str> = self.words.iter().map(String::as_str).collect();
            let map: HashMap<String, CachedParses> = self
                .words
                .iter()
                .cloned()
                .zip(parser.parse_all(&inputs).into_iter().map(CachedParses::from))
                .collect();
            tracing::debug!(words = map.len(), "built offline cache");
            map
        });
    }

    fn is_built(&self) -> bool {
        self.map.get().is_some()
    }

    fn len(&self) -> usize {
        self.map.get().map_or(0, HashMap::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::testing::{parser, parses, CountingParser};
    use std::io::Write;

    #[test]
    fn test_empty_word_list_is_rejected() {
        assert!(matches!(
            OfflineParseCache::new(Vec::<String>::new()),
            Err(EngineError::ConfigError(_))
        ));
    }

    #[test]
    fn test_nothing_is_served_before_build() {
        let cache = OfflineParseCache::new(["ev", "evler"]).unwrap();
        assert!(!cache.is_built());
        assert!(cache.get("ev").is_none());

        cache.build(&*parser());
        assert!(cache.is_built());
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("evler").unwrap().len(), parses("evler").len());
    }

    #[test]
    fn test_build_runs_once_and_ignores_puts() {
        let counting = CountingParser::new();
        let cache = OfflineParseCache::new(["ev", "ev", "göz"]).unwrap();
        cache.build(&counting);
        cache.build(&counting);
        assert_eq!(counting.calls(), 2);

        cache.put("evde", parses("evde"));
        assert!(cache.get("evde").is_none());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_word_list_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ev\n\n  göz  \nevler").unwrap();
        let cache = OfflineParseCache::from_word_list(file.path()).unwrap();
        assert_eq!(cache.words(), ["ev", "evler", "göz"]);
    }

    #[test]
    fn test_missing_word_list_file() {
        assert!(matches!(
            OfflineParseCache::from_word_list("/nonexistent/words.txt"),
            Err(EngineError::IoError(_))
        ));
    }
}
