//! High-level "Did you mean?" facade over the ranker.

use crate::analysis::Phrase;
use crate::suggest::dictionary::PhraseDictionary;
use crate::suggest::ranker::{RankerConfig, Suggestion, SuggestionRanker};

/// A corrector owning a dictionary and ranking configuration, for callers
/// that want a query-in / suggestions-out surface without wiring the pieces
/// themselves.
///
/// Each call is an independent request/response exchange; nothing about a
/// query survives into the next call.
#[derive(Debug, Clone)]
pub struct PhraseCorrector {
    dictionary: PhraseDictionary,
    ranker: SuggestionRanker,
}

impl PhraseCorrector {
    /// Create a corrector with the default ranking configuration.
    pub fn new(dictionary: PhraseDictionary) -> Self {
        PhraseCorrector {
            dictionary,
            ranker: SuggestionRanker::new(),
        }
    }

    /// Create a corrector with custom ranking configuration.
    pub fn with_config(dictionary: PhraseDictionary, config: RankerConfig) -> Self {
        PhraseCorrector {
            dictionary,
            ranker: SuggestionRanker::with_config(config),
        }
    }

    /// The dictionary suggestions are drawn from.
    pub fn dictionary(&self) -> &PhraseDictionary {
        &self.dictionary
    }

    /// Ranked suggestions for a query, closest first.
    pub fn suggest(&self, query: &str) -> Vec<Suggestion> {
        self.ranker.rank(query, &self.dictionary)
    }

    /// The single closest suggestion, if any falls within the threshold.
    pub fn best(&self, query: &str) -> Option<Suggestion> {
        self.suggest(query).into_iter().next()
    }

    /// Check whether the query matches a dictionary entry exactly after
    /// normalization.
    pub fn is_known(&self, query: &str) -> bool {
        let query_phrase = Phrase::normalize(query);
        self.dictionary
            .iter()
            .any(|candidate| Phrase::normalize(candidate) == query_phrase)
    }
}
