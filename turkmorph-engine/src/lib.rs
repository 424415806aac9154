//! Caching and bulk orchestration for Turkish morphological analysis
//!
//! This crate wraps the parser of `turkmorph-core` with the pieces a corpus
//! run needs: word-level caches, a caching parser decorator, batch parsing
//! over a worker pool, TOML configuration and a builder that assembles all
//! of it from a dictionary.

#![warn(missing_docs)]

pub mod builder;
pub mod bulk;
pub mod cache;
pub mod caching;
pub mod config;
pub mod error;

// Re-export key types
pub use builder::{Analyzer, AnalyzerBuilder};
pub use bulk::{BulkParser, ExecutionMode};
pub use cache::{CachedParses, LruParseCache, OfflineParseCache, ParseCache, TwoLevelParseCache};
pub use caching::CachingParser;
pub use config::{CacheKind, EngineConfig};
pub use error::{EngineError, Result};

// Re-export from core for convenience
pub use turkmorph_core::{MorphemeContainer, MorphologicParser, ParseListener};
