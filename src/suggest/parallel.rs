//! Data-parallel ranking over large dictionaries.

use std::sync::Arc;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::analysis::Phrase;
use crate::error::{PhrazeError, Result};
use crate::suggest::dictionary::PhraseDictionary;
use crate::suggest::ranker::{RankerConfig, Suggestion, SuggestionRanker};

/// Configuration for [`ParallelRanker`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParallelRankConfig {
    /// Thread pool size for candidate evaluation.
    /// If None, uses the number of CPU cores.
    pub thread_pool_size: Option<usize>,
}

impl Default for ParallelRankConfig {
    fn default() -> Self {
        ParallelRankConfig {
            thread_pool_size: None,
        }
    }
}

/// Ranks candidates in parallel across a dedicated thread pool.
///
/// Candidate evaluation is independent, so the dictionary is mapped in
/// parallel and the results merged with a single sort. Output is identical
/// to [`SuggestionRanker::rank`] on the same inputs; parallelism is a
/// performance choice, not a semantic one.
pub struct ParallelRanker {
    /// Sequential ranker doing the per-candidate work.
    ranker: SuggestionRanker,

    /// Thread pool for parallel execution.
    thread_pool: Arc<ThreadPool>,
}

impl ParallelRanker {
    /// Create a new parallel ranker.
    pub fn new(config: RankerConfig, parallel_config: ParallelRankConfig) -> Result<Self> {
        let thread_pool_size = parallel_config
            .thread_pool_size
            .unwrap_or_else(num_cpus::get);

        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(thread_pool_size)
            .thread_name(|i| format!("phraze-rank-{i}"))
            .build()
            .map_err(|e| PhrazeError::internal(format!("Failed to create thread pool: {e}")))?;

        Ok(ParallelRanker {
            ranker: SuggestionRanker::with_config(config),
            thread_pool: Arc::new(thread_pool),
        })
    }

    /// The active ranking configuration.
    pub fn config(&self) -> &RankerConfig {
        self.ranker.config()
    }

    /// Rank every dictionary candidate against `query`, fanning candidates
    /// out over the thread pool and merging with a single sort.
    pub fn rank(&self, query: &str, dictionary: &PhraseDictionary) -> Vec<Suggestion> {
        let query_phrase = Phrase::normalize(query);

        let mut suggestions: Vec<Suggestion> = self.thread_pool.install(|| {
            dictionary
                .phrases()
                .par_iter()
                .filter_map(|candidate| self.ranker.score(&query_phrase, candidate))
                .collect()
        });

        suggestions.sort();
        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> PhraseDictionary {
        PhraseDictionary::from_phrases([
            "thank you miss",
            "thank you sir",
            "good morning",
            "thanks a lot",
            "thank you mist",
        ])
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let parallel =
            ParallelRanker::new(RankerConfig::default(), ParallelRankConfig::default()).unwrap();
        let sequential = SuggestionRanker::new();

        let queries = ["thank you mis", "good mornin", "unrelated words entirely", ""];
        for query in queries {
            assert_eq!(
                parallel.rank(query, &dictionary()),
                sequential.rank(query, &dictionary()),
                "query: {query:?}"
            );
        }
    }

    #[test]
    fn test_parallel_with_explicit_pool_size() {
        let config = ParallelRankConfig {
            thread_pool_size: Some(2),
        };
        let parallel = ParallelRanker::new(RankerConfig::default(), config).unwrap();
        let suggestions = parallel.rank("thank you mis", &dictionary());

        assert_eq!(suggestions[0].phrase, "thank you miss");
        assert_eq!(suggestions[0].distance, 1);
    }

    #[test]
    fn test_parallel_deterministic() {
        let parallel =
            ParallelRanker::new(RankerConfig::default(), ParallelRankConfig::default()).unwrap();
        let first = parallel.rank("thank you mis", &dictionary());
        let second = parallel.rank("thank you mis", &dictionary());
        assert_eq!(first, second);
    }
}
