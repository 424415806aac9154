//! Word-level memoization of parse results
//!
//! A cache maps a word to the complete list of its parses. Population is
//! best-effort: two threads parsing the same miss both store the same
//! answer, which is harmless.

mod lru;
mod offline;
mod two_level;

pub use lru::LruParseCache;
pub use offline::OfflineParseCache;
pub use two_level::TwoLevelParseCache;

use std::collections::HashMap;
use std::sync::Arc;
use turkmorph_core::{MorphemeContainer, MorphologicParser};

/// Shared, immutable parse list of one word
pub type CachedParses = Arc<[MorphemeContainer]>;

/// Storage for parse results keyed by word
pub trait ParseCache: Send + Sync {
    /// Cached parses of the word, if any
    fn get(&self, word: &str) -> Option<CachedParses>;

    /// Store the parses of one word
    fn put(&self, word: &str, parses: CachedParses);

    /// Store many words at once
    fn put_all(&self, entries: HashMap<String, CachedParses>);

    /// Precompute entries before use; most caches need nothing here
    fn build(&self, _parser: &dyn MorphologicParser) {}

    /// Whether [`ParseCache::build`] has run, or is not needed
    fn is_built(&self) -> bool {
        true
    }

    /// Number of cached words
    fn len(&self) -> usize;

    /// Whether nothing is cached
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C: ParseCache + ?Sized> ParseCache for Arc<C> {
    fn get(&self, word: &str) -> Option<CachedParses> {
        (**self).get(word)
    }

    fn put(&self, word: &str, parses: CachedParses) {
        (**self).put(word, parses)
    }

    fn put_all(&self, entries: HashMap<String, CachedParses>) {
        (**self).put_all(entries)
    }

    fn build(&self, parser: &dyn MorphologicParser) {
        (**self).build(parser)
    }

    fn is_built(&self) -> bool {
        (**self).is_built()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::OnceLock;
    use turkmorph_core::lexicon::{Lexeme, PrimaryPos, RootGenerator, RootMap};
    use turkmorph_core::parser::{ContextlessParser, SuffixApplier};
    use turkmorph_core::phonetics::PhoneticsEngine;
    use turkmorph_core::suffix::PlainApplier;
    use turkmorph_core::{RootFinderChain, SuffixFormGraph, SuffixGraph};

    /// A small dictionary parser shared by the engine tests
    pub(crate) fn parser() -> Arc<ContextlessParser> {
        static PARSER: OnceLock<Arc<ContextlessParser>> = OnceLock::new();
        Arc::clone(PARSER.get_or_init(|| {
            let graph = Arc::new(SuffixGraph::standard().unwrap());
            let form_graph = Arc::new(SuffixFormGraph::compile(Arc::clone(&graph), &PlainApplier));
            let lexemes = [
                Lexeme::new("ev", "ev", PrimaryPos::Noun, None),
                Lexeme::new("göz", "göz", PrimaryPos::Noun, None),
            ];
            let root_map = Arc::new(RootMap::from_lexemes(&RootGenerator::new(), &lexemes));
            let chain = Arc::new(RootFinderChain::standard(root_map, false).unwrap());
            let applier = SuffixApplier::new(graph, PhoneticsEngine::new(Arc::new(PlainApplier)));
            Arc::new(ContextlessParser::new(form_graph, chain, applier, None).unwrap())
        }))
    }

    /// Parses of a word as they would be cached
    pub(crate) fn parses(word: &str) -> CachedParses {
        parser().parse(word).into()
    }

    /// Counts how often the inner parser runs
    pub(crate) struct CountingParser {
        pub(crate) calls: AtomicUsize,
    }

    impl CountingParser {
        pub(crate) fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl MorphologicParser for CountingParser {
        fn parse(&self, input: &str) -> Vec<MorphemeContainer> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            parser().parse(input)
        }
    }
}
