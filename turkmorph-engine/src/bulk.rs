//! Batch parsing over a worker pool

use crate::config::EngineConfig;
use crate::error::Result;
use turkmorph_core::{MorphemeContainer, MorphologicParser};

#[cfg(feature = "parallel")]
use crate::error::EngineError;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// How a batch is parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// On the calling thread
    Sequential,
    /// Partitioned over the worker pool
    Parallel,
}

/// Select the execution mode for a batch of `batch_len` words
pub fn auto_select(batch_len: usize, min_parallel_batch: usize, threads: usize) -> ExecutionMode {
    if threads <= 1 || batch_len < min_parallel_batch {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}

/// Parser splitting large batches into one partition per worker.
///
/// Each partition goes through the inner parser's `parse_all`, so a
/// [`CachingParser`](crate::CachingParser) deduplicates per partition and
/// writes back once per partition. Results always follow input order.
pub struct BulkParser<P> {
    parser: P,
    min_parallel_batch: usize,
    #[cfg(feature = "parallel")]
    pool: Option<rayon::ThreadPool>,
}

impl<P: MorphologicParser> BulkParser<P> {
    /// Parser that never leaves the calling thread
    pub fn sequential(parser: P) -> Self {
        Self {
            parser,
            min_parallel_batch: usize::MAX,
            #[cfg(feature = "parallel")]
            pool: None,
        }
    }

    /// Parser with a dedicated pool sized by the configuration
    pub fn new(parser: P, config: &EngineConfig) -> Result<Self> {
        if !config.parallel {
            return Ok(Self::sequential(parser));
        }

        #[cfg(feature = "parallel")]
        {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(config.threads.unwrap_or_else(num_cpus::get))
                .thread_name(|i| format!("turkmorph-worker-{i}"))
                .build()
                .map_err(|e| EngineError::ParallelError(e.to_string()))?;
            tracing::debug!(threads = pool.current_num_threads(), "created parse pool");
            Ok(Self {
                parser,
                min_parallel_batch: config.min_parallel_batch,
                pool: Some(pool),
            })
        }

        #[cfg(not(feature = "parallel"))]
        {
            tracing::debug!("parallel parsing requested without the parallel feature");
            Ok(Self::sequential(parser))
        }
    }

    /// The wrapped parser
    pub fn inner(&self) -> &P {
        &self.parser
    }

    /// Worker threads available to a batch
    pub fn thread_count(&self) -> usize {
        #[cfg(feature = "parallel")]
        if let Some(pool) = &self.pool {
            return pool.current_num_threads();
        }
        1
    }

    /// Mode a batch of this size would run in
    pub fn mode_for(&self, batch_len: usize) -> ExecutionMode {
        auto_select(batch_len, self.min_parallel_batch, self.thread_count())
    }

    /// Parses of each word, in input order
    pub fn parse_batch(&self, words: &[&str]) -> Vec<Vec<MorphemeContainer>> {
        match self.mode_for(words.len()) {
            ExecutionMode::Sequential => self.parser.parse_all(words),
            ExecutionMode::Parallel => self.parse_partitioned(words),
        }
    }

    #[cfg(feature = "parallel")]
    fn parse_partitioned(&self, words: &[&str]) -> Vec<Vec<MorphemeContainer>> {
        let Some(pool) = &self.pool else {
            return self.parser.parse_all(words);
        };
        let threads = pool.current_num_threads();
        let partition = words.len().div_ceil(threads).max(1);
        tracing::debug!(words = words.len(), threads, partition, "parallel batch");

        pool.install(|| {
            words
                .par_chunks(partition)
                .flat_map_iter(|chunk| self.parser.parse_all(chunk))
                .collect()
        })
    }

    #[cfg(not(feature = "parallel"))]
    fn parse_partitioned(&self, words: &[&str]) -> Vec<Vec<MorphemeContainer>> {
        self.parser.parse_all(words)
    }
}

impl<P: MorphologicParser> MorphologicParser for BulkParser<P> {
    fn parse(&self, input: &str) -> Vec<MorphemeContainer> {
        self.parser.parse(input)
    }

    fn parse_all(&self, inputs: &[&str]) -> Vec<Vec<MorphemeContainer>> {
        self.parse_batch(inputs)
    }
}

impl<P> std::fmt::Debug for BulkParser<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("BulkParser");
        debug.field("min_parallel_batch", &self.min_parallel_batch);
        #[cfg(feature = "parallel")]
        debug.field(
            "threads",
            &self.pool.as_ref().map_or(1, |pool| pool.current_num_threads()),
        );
        debug.finish()
    }
}
