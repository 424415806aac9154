//! Assembly of a ready-to-use analyzer

use crate::bulk::BulkParser;
use crate::cache::{LruParseCache, OfflineParseCache, ParseCache, TwoLevelParseCache};
use crate::caching::CachingParser;
use crate::config::{CacheKind, EngineConfig};
use crate::error::{EngineError, Result};
use std::sync::Arc;
use turkmorph_core::lexicon::{Lexeme, RootGenerator, RootMap};
use turkmorph_core::parser::{ContextlessParser, Formatter, PredefinedPaths, SuffixApplier};
use turkmorph_core::phonetics::PhoneticsEngine;
use turkmorph_core::suffix::{PlainApplier, PrecachingApplier, SuffixFormApplier};
use turkmorph_core::{
    MorphemeContainer, MorphologicParser, ParseListener, RootFinderChain, SuffixFormGraph,
    SuffixGraph,
};

/// A complete analyzer: graph, parser, cache and worker pool
pub struct Analyzer {
    graph: Arc<SuffixGraph>,
    form_graph: Arc<SuffixFormGraph>,
    root_map: Arc<RootMap>,
    cache: Option<Arc<dyn ParseCache>>,
    parser: BulkParser<Arc<dyn MorphologicParser>>,
    config: EngineConfig,
}

impl Analyzer {
    /// Parses of one word
    pub fn parse(&self, word: &str) -> Vec<MorphemeContainer> {
        self.parser.parse(word)
    }

    /// Parses of each word, in input order
    pub fn parse_all(&self, words: &[&str]) -> Vec<Vec<MorphemeContainer>> {
        self.parser.parse_batch(words)
    }

    /// Readings of one word in `root(lemma)+Pos+Suffix(form[actual])` notation
    pub fn analyze(&self, word: &str) -> Vec<String> {
        let formatter = self.formatter();
        self.parse(word)
            .iter()
            .map(|result| formatter.format_with_forms(result))
            .collect()
    }

    /// Formatter over this analyzer's graph
    pub fn formatter(&self) -> Formatter<'_> {
        Formatter::new(&self.graph)
    }

    /// The morphotactic graph
    pub fn graph(&self) -> &Arc<SuffixGraph> {
        &self.graph
    }

    /// The compiled automaton
    pub fn form_graph(&self) -> &Arc<SuffixFormGraph> {
        &self.form_graph
    }

    /// The dictionary
    pub fn root_map(&self) -> &Arc<RootMap> {
        &self.root_map
    }

    /// The cache, unless caching is off
    pub fn cache(&self) -> Option<&Arc<dyn ParseCache>> {
        self.cache.as_ref()
    }

    /// Worker threads available to batches
    pub fn thread_count(&self) -> usize {
        self.parser.thread_count()
    }

    /// The configuration the analyzer was built with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl MorphologicParser for Analyzer {
    fn parse(&self, input: &str) -> Vec<MorphemeContainer> {
        Analyzer::parse(self, input)
    }

    fn parse_all(&self, inputs: &[&str]) -> Vec<Vec<MorphemeContainer>> {
        Analyzer::parse_all(self, inputs)
    }
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("config", &self.config)
            .field("nodes", &self.form_graph.node_count())
            .field("edges", &self.form_graph.edge_count())
            .field("roots", &self.root_map.len())
            .field("parser", &self.parser)
            .finish()
    }
}

/// Builder for [`Analyzer`]
///
/// ```
/// use turkmorph_core::lexicon::{Lexeme, LexemeAttribute, PrimaryPos};
/// use turkmorph_engine::{AnalyzerBuilder, EngineConfig};
///
/// let analyzer = AnalyzerBuilder::new()
///     .config(EngineConfig::low_memory())
///     .lexemes([Lexeme::new("kitap", "kitap", PrimaryPos::Noun, None)
///         .with_attributes([LexemeAttribute::Voicing])])
///     .build()?;
///
/// let readings = analyzer.analyze("kitaba");
/// assert!(readings.contains(&"kitab(kitap)+Noun+A3sg+Pnon+Dat(+yA[a])".to_string()));
/// # Ok::<(), turkmorph_engine::EngineError>(())
/// ```
#[derive(Default)]
pub struct AnalyzerBuilder {
    config: EngineConfig,
    root_map: Option<Arc<RootMap>>,
    lexemes: Vec<Lexeme>,
    offline_words: Option<Vec<String>>,
    listener: Option<Arc<dyn ParseListener>>,
}

impl AnalyzerBuilder {
    /// Create a builder with the default configuration and no dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Use an existing root map; lexemes added with [`Self::lexemes`] are then ignored
    pub fn root_map(mut self, root_map: Arc<RootMap>) -> Self {
        self.root_map = Some(root_map);
        self
    }

    /// Add dictionary entries
    pub fn lexemes(mut self, lexemes: impl IntoIterator<Item = Lexeme>) -> Self {
        self.lexemes.extend(lexemes);
        self
    }

    /// Words for the offline cache, instead of the configured word list file
    pub fn offline_words<S: Into<String>>(mut self, words: impl IntoIterator<Item = S>) -> Self {
        self.offline_words = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Report dead ends of every search to a listener
    pub fn listener(mut self, listener: Arc<dyn ParseListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    /// Build the analyzer
    pub fn build(self) -> Result<Analyzer> {
        let config = self.config;
        config.validate()?;

        let graph = Arc::new(SuffixGraph::standard()?);
        let applier: Arc<dyn SuffixFormApplier> = if config.precache_suffix_forms {
            Arc::new(PrecachingApplier::new(
                graph.forms().map(|form| &form.sequence),
            ))
        } else {
            Arc::new(PlainApplier)
        };
        let form_graph = Arc::new(SuffixFormGraph::compile(Arc::clone(&graph), applier.as_ref()));
        tracing::debug!(
            nodes = form_graph.node_count(),
            edges = form_graph.edge_count(),
            precached = config.precache_suffix_forms,
            "compiled suffix form graph"
        );

        let root_map = match self.root_map {
            Some(root_map) => root_map,
            None => Arc::new(RootMap::from_lexemes(&RootGenerator::new(), &self.lexemes)),
        };
        let chain = Arc::new(RootFinderChain::standard(
            Arc::clone(&root_map),
            config.brute_force,
        )?);

        let suffix_applier = SuffixApplier::new(Arc::clone(&graph), PhoneticsEngine::new(applier));
        let predefined = if config.predefined_paths {
            Some(Arc::new(PredefinedPaths::new(&suffix_applier, &root_map)?))
        } else {
            None
        };
        let mut contextless =
            ContextlessParser::new(Arc::clone(&form_graph), chain, suffix_applier, predefined)?;
        if let Some(listener) = self.listener {
            contextless = contextless.with_listener(listener);
        }
        let contextless: Arc<dyn MorphologicParser> = Arc::new(contextless);

        let cache = Self::cache_for(&config, self.offline_words)?;
        let parser: Arc<dyn MorphologicParser> = match &cache {
            Some(cache) => Arc::new(CachingParser::new(contextless, Arc::clone(cache))),
            None => contextless,
        };
        let parser = BulkParser::new(parser, &config)?;

        tracing::debug!(
            roots = root_map.len(),
            cache = ?config.cache_kind,
            threads = parser.thread_count(),
            "analyzer ready"
        );
        Ok(Analyzer {
            graph,
            form_graph,
            root_map,
            cache,
            parser,
            config,
        })
    }

    fn cache_for(
        config: &EngineConfig,
        offline_words: Option<Vec<String>>,
    ) -> Result<Option<Arc<dyn ParseCache>>> {
        let cache: Arc<dyn ParseCache> = match config.cache_kind {
            CacheKind::None => return Ok(None),
            CacheKind::Lru => Arc::new(LruParseCache::new(config.lru_capacity)),
            CacheKind::TwoLevel => Arc::new(TwoLevelParseCache::with_lru(
                config.l2_max_size,
                config.lru_capacity,
            )),
            CacheKind::Offline => {
                let cache = match (offline_words, &config.offline_word_list) {
                    (Some(words), _) => OfflineParseCache::new(words)?,
                    (None, Some(path)) => OfflineParseCache::from_word_list(path)?,
                    (None, None) => {
                        return Err(EngineError::ConfigError(
                            "offline cache needs a word list".to_string(),
                        ))
                    }
                };
                Arc::new(cache)
            }
        };
        Ok(Some(cache))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use turkmorph_core::lexicon::{LexemeAttribute, PrimaryPos};

    fn lexemes() -> Vec<Lexeme> {
        vec![
            Lexeme::new("ev", "ev", PrimaryPos::Noun, None),
            Lexeme::new("kitap", "kitap", PrimaryPos::Noun, None)
                .with_attributes([LexemeAttribute::Voicing]),
        ]
    }

    #[test]
    fn test_default_build() {
        let analyzer = AnalyzerBuilder::new().lexemes(lexemes()).build().unwrap();
        assert!(analyzer.cache().is_some());
        assert!(analyzer
            .analyze("evde")
            .contains(&"ev(ev)+Noun+A3sg+Pnon+Loc(dA[de])".to_string()));
        assert!(analyzer.parse("qqq").is_empty());
    }

    #[test]
    fn test_without_cache() {
        let config = EngineConfig {
            cache_kind: CacheKind::None,
            parallel: false,
            ..EngineConfig::default()
        };
        let analyzer = AnalyzerBuilder::new()
            .config(config)
            .lexemes(lexemes())
            .build()
            .unwrap();
        assert!(analyzer.cache().is_none());
        assert_eq!(analyzer.thread_count(), 1);
        assert!(!analyzer.parse("kitaba").is_empty());
    }

    #[test]
    fn test_cache_fills_while_parsing() {
        let analyzer = AnalyzerBuilder::new()
            .config(EngineConfig::low_memory())
            .lexemes(lexemes())
            .build()
            .unwrap();
        analyzer.parse_all(&["ev", "evde", "ev"]);
        assert_eq!(analyzer.cache().unwrap().len(), 2);
    }

    #[test]
    fn test_offline_cache_needs_words() {
        let config = EngineConfig {
            cache_kind: CacheKind::Offline,
            ..EngineConfig::default()
        };
        assert!(matches!(
            AnalyzerBuilder::new().config(config.clone()).build(),
            Err(EngineError::ConfigError(_))
        ));

        let analyzer = AnalyzerBuilder::new()
            .config(config)
            .lexemes(lexemes())
            .offline_words(["ev", "evler"])
            .build()
            .unwrap();
        let cache = analyzer.cache().unwrap();
        assert!(cache.is_built());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = EngineConfig {
            lru_capacity: 0,
            ..EngineConfig::default()
        };
        assert!(AnalyzerBuilder::new().config(config).build().is_err());
    }
}
