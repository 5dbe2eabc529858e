//! Suggestion ranking over a candidate dictionary.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::analysis::Phrase;
use crate::distance::{
    PhraseDistanceConfig, phrase_distance, phrase_distance_accumulating,
};
use crate::suggest::dictionary::PhraseDictionary;

/// A ranked suggestion: a candidate phrase and its distance from the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The candidate phrase, in its original spelling.
    pub phrase: String,
    /// Phrase-level edit distance from the query.
    pub distance: usize,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(phrase: String, distance: usize) -> Self {
        Suggestion { phrase, distance }
    }
}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        // Closer suggestions first; ties broken by the candidate string
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.phrase.cmp(&other.phrase))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Which distance algorithm the ranker runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMode {
    /// Full dynamic-programming distance, including whole-word insertions
    /// and deletions.
    FullDp,
    /// Accumulating positional sum with an early exit at the threshold.
    /// Cheaper, but only compares phrases of equal word count and can
    /// disagree with the full computation on borderline phrases.
    FastApproximate,
}

/// Configuration for [`SuggestionRanker`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankerConfig {
    /// Maximum phrase distance for a candidate to be suggested.
    pub threshold: usize,
    /// Phrase-level distance parameters.
    pub distance: PhraseDistanceConfig,
    /// Distance algorithm selection.
    pub mode: DistanceMode,
}

impl Default for RankerConfig {
    fn default() -> Self {
        RankerConfig {
            threshold: 2,
            distance: PhraseDistanceConfig::default(),
            mode: DistanceMode::FullDp,
        }
    }
}

/// Ranks dictionary candidates by phrase distance from a query.
///
/// Ranking is a pure function of its inputs: no state survives between
/// calls, and identical inputs produce identical output.
#[derive(Debug, Clone, Default)]
pub struct SuggestionRanker {
    config: RankerConfig,
}

impl SuggestionRanker {
    /// Create a new ranker with the default configuration.
    pub fn new() -> Self {
        SuggestionRanker {
            config: RankerConfig::default(),
        }
    }

    /// Create a new ranker with custom configuration.
    pub fn with_config(config: RankerConfig) -> Self {
        SuggestionRanker { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Rank every dictionary candidate against `query`.
    ///
    /// The query and each candidate are normalized before comparison, so
    /// matching is case- and spacing-insensitive; suggestions report the
    /// candidate's original spelling. Only candidates within the configured
    /// threshold are returned, sorted ascending by distance with ties broken
    /// by the candidate string. An empty result means "no suggestion within
    /// threshold" and is not an error.
    pub fn rank(&self, query: &str, dictionary: &PhraseDictionary) -> Vec<Suggestion> {
        let query_phrase = Phrase::normalize(query);

        let mut suggestions: Vec<Suggestion> = dictionary
            .iter()
            .filter_map(|candidate| self.score(&query_phrase, candidate))
            .collect();

        suggestions.sort();
        suggestions
    }

    /// Score a single candidate against an already-normalized query,
    /// returning it only when it passes the prefilter and the threshold.
    pub(crate) fn score(&self, query: &Phrase, candidate: &str) -> Option<Suggestion> {
        let candidate_phrase = Phrase::normalize(candidate);

        if self.prefilter_rejects(query, &candidate_phrase) {
            return None;
        }

        let distance = match self.config.mode {
            DistanceMode::FullDp => {
                phrase_distance(query, &candidate_phrase, &self.config.distance)?
            }
            DistanceMode::FastApproximate => {
                phrase_distance_accumulating(query, &candidate_phrase, self.config.threshold)?
            }
        };

        if distance <= self.config.threshold {
            Some(Suggestion::new(candidate.to_string(), distance))
        } else {
            None
        }
    }

    /// Word-count prefilter: a difference of more than `threshold` words
    /// cannot be repaired within the threshold as long as every inserted or
    /// deleted word costs at least 1. A zero indel cost would make the rule
    /// unsound, so it is skipped in that configuration.
    fn prefilter_rejects(&self, query: &Phrase, candidate: &Phrase) -> bool {
        if self.config.distance.word_indel_cost == 0 {
            return false;
        }
        query.word_count().abs_diff(candidate.word_count()) > self.config.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::WordCountPolicy;

    fn dictionary() -> PhraseDictionary {
        PhraseDictionary::from_phrases([
            "thank you miss",
            "thank you sir",
            "good morning",
            "thanks a lot",
        ])
    }

    #[test]
    fn test_rank_basic_typo() {
        let ranker = SuggestionRanker::new();
        let suggestions = ranker.rank("thank you mis", &dictionary());

        assert_eq!(suggestions[0].phrase, "thank you miss");
        assert_eq!(suggestions[0].distance, 1);
    }

    #[test]
    fn test_rank_sorted_with_lexicographic_ties() {
        let dict = PhraseDictionary::from_phrases(["thank you mix", "thank you bis"]);
        let ranker = SuggestionRanker::new();
        // Both candidates are one substitution away from the query
        let suggestions = ranker.rank("thank you mis", &dict);

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].phrase, "thank you bis");
        assert_eq!(suggestions[1].phrase, "thank you mix");
        assert_eq!(suggestions[0].distance, suggestions[1].distance);
    }

    #[test]
    fn test_rank_threshold_zero_exact_match_only() {
        let config = RankerConfig {
            threshold: 0,
            ..Default::default()
        };
        let ranker = SuggestionRanker::with_config(config);
        let suggestions = ranker.rank("Thank  You MISS", &dictionary());

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].phrase, "thank you miss");
        assert_eq!(suggestions[0].distance, 0);
    }

    #[test]
    fn test_rank_empty_dictionary() {
        let ranker = SuggestionRanker::new();
        assert!(ranker.rank("anything", &PhraseDictionary::new()).is_empty());
    }

    #[test]
    fn test_rank_no_match_within_threshold() {
        let ranker = SuggestionRanker::new();
        let suggestions = ranker.rank("completely unrelated phrase", &dictionary());
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_rank_reports_original_spelling() {
        let dict = PhraseDictionary::from_phrases(["Thank  You  MISS"]);
        let ranker = SuggestionRanker::new();
        let suggestions = ranker.rank("thank you mis", &dict);

        assert_eq!(suggestions[0].phrase, "Thank  You  MISS");
    }

    #[test]
    fn test_rank_duplicates_scored_independently() {
        let dict = PhraseDictionary::from_phrases(["thank you miss", "thank you miss"]);
        let ranker = SuggestionRanker::new();
        let suggestions = ranker.rank("thank you mis", &dict);

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0], suggestions[1]);
    }

    #[test]
    fn test_prefilter_skips_distant_word_counts() {
        let dict = PhraseDictionary::from_phrases(["a b c d e f"]);
        let ranker = SuggestionRanker::new();
        // Word-count difference of 5 exceeds the default threshold of 2
        assert!(ranker.rank("a", &dict).is_empty());
    }

    #[test]
    fn test_prefilter_disabled_at_zero_indel_cost() {
        let config = RankerConfig {
            threshold: 0,
            distance: PhraseDistanceConfig {
                word_indel_cost: 0,
                word_count_policy: WordCountPolicy::Penalize,
            },
            ..Default::default()
        };
        let ranker = SuggestionRanker::with_config(config);
        let dict = PhraseDictionary::from_phrases(["thank you miss"]);
        // Free word indels make the extra word costless, and the prefilter
        // must not reject what the distance would accept
        let suggestions = ranker.rank("thank you miss please", &dict);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].distance, 0);
    }

    #[test]
    fn test_rank_reject_policy_drops_mismatched_counts() {
        let config = RankerConfig {
            distance: PhraseDistanceConfig {
                word_count_policy: WordCountPolicy::Reject,
                ..Default::default()
            },
            ..Default::default()
        };
        let ranker = SuggestionRanker::with_config(config);
        let dict = PhraseDictionary::from_phrases(["thank you", "thank you miss"]);
        let suggestions = ranker.rank("thank you mis", &dict);

        // "thank you" has two words and is incomparable; only the
        // three-word candidate survives
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].phrase, "thank you miss");
    }

    #[test]
    fn test_rank_fast_approximate_mode() {
        let config = RankerConfig {
            mode: DistanceMode::FastApproximate,
            ..Default::default()
        };
        let ranker = SuggestionRanker::with_config(config);
        let suggestions = ranker.rank("thank you mis", &dictionary());

        assert_eq!(suggestions[0].phrase, "thank you miss");
        assert_eq!(suggestions[0].distance, 1);
        // Word-count mismatches never appear in this mode
        assert!(suggestions.iter().all(|s| s.phrase.split_whitespace().count() == 3));
    }

    #[test]
    fn test_suggestion_ordering() {
        let mut suggestions = vec![
            Suggestion::new("beta".to_string(), 2),
            Suggestion::new("alpha".to_string(), 2),
            Suggestion::new("zeta".to_string(), 0),
        ];
        suggestions.sort();

        assert_eq!(suggestions[0].phrase, "zeta");
        assert_eq!(suggestions[1].phrase, "alpha");
        assert_eq!(suggestions[2].phrase, "beta");
    }
}
