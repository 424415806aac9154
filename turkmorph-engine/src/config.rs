//! Configuration types for the engine

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Which cache sits in front of the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheKind {
    /// Every word is parsed
    None,
    /// Bounded least-recently-used cache
    #[default]
    Lru,
    /// Unlocked batch map flushed into a bounded LRU
    TwoLevel,
    /// Fixed word list parsed before use, read-only afterwards
    Offline,
}

/// Engine configuration
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// cache_kind = "two_level"
/// lru_capacity = 50000
/// threads = 4
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cache selector
    pub cache_kind: CacheKind,
    /// Maximum number of words kept by the LRU tier
    pub lru_capacity: usize,
    /// Entries collected by the two-level cache before it flushes
    pub l2_max_size: usize,
    /// Parse batches on a worker pool
    pub parallel: bool,
    /// Number of worker threads (None = one per core)
    pub threads: Option<usize>,
    /// Smaller batches are parsed on the calling thread
    pub min_parallel_batch: usize,
    /// Compile suffix forms through a precomputed table
    pub precache_suffix_forms: bool,
    /// Guess roots of words missing from the dictionary
    pub brute_force: bool,
    /// Seed pronouns and other irregular roots from their fixed paths
    pub predefined_paths: bool,
    /// Word list the offline cache is built from, one word per line
    pub offline_word_list: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_kind: CacheKind::Lru,
            lru_capacity: 10_000,
            l2_max_size: 1_000,
            parallel: true,
            threads: None,
            min_parallel_batch: 64,
            precache_suffix_forms: false,
            brute_force: false,
            predefined_paths: true,
            offline_word_list: None,
        }
    }
}

impl EngineConfig {
    /// Create a fast configuration: precached forms and a large two-level cache
    pub fn fast() -> Self {
        Self {
            cache_kind: CacheKind::TwoLevel,
            lru_capacity: 50_000,
            l2_max_size: 2_000,
            precache_suffix_forms: true,
            ..Self::default()
        }
    }

    /// Create a configuration with a small footprint
    pub fn low_memory() -> Self {
        Self {
            cache_kind: CacheKind::Lru,
            lru_capacity: 1_000,
            l2_max_size: 100,
            parallel: false,
            threads: Some(1),
            precache_suffix_forms: false,
            ..Self::default()
        }
    }

    /// Create a configuration for large corpora with unknown words
    pub fn corpus() -> Self {
        Self {
            cache_kind: CacheKind::TwoLevel,
            lru_capacity: 100_000,
            l2_max_size: 5_000,
            min_parallel_batch: 256,
            precache_suffix_forms: true,
            brute_force: true,
            ..Self::default()
        }
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| EngineError::ConfigError(format!("Failed to parse TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            EngineError::IoError(format!("Failed to read file '{}': {}", path.display(), e))
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| {
            EngineError::ConfigError(format!(
                "Failed to parse TOML from '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| EngineError::ConfigError(e.to_string()))
    }

    /// Check that sizes are usable for the selected cache
    pub fn validate(&self) -> Result<()> {
        let uses_lru = matches!(self.cache_kind, CacheKind::Lru | CacheKind::TwoLevel);
        if uses_lru && self.lru_capacity == 0 {
            return Err(EngineError::ConfigError(
                "lru_capacity must be greater than zero".to_string(),
            ));
        }
        if self.cache_kind == CacheKind::TwoLevel && self.l2_max_size == 0 {
            return Err(EngineError::ConfigError(
                "l2_max_size must be greater than zero".to_string(),
            ));
        }
        if self.threads == Some(0) {
            return Err(EngineError::ConfigError(
                "threads must be greater than zero".to_string(),
            ));
        }
        if self.min_parallel_batch == 0 {
            return Err(EngineError::ConfigError(
                "min_parallel_batch must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
