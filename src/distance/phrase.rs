//! Word-level edit distance between phrases.

use std::cmp::min;

use serde::{Deserialize, Serialize};

use crate::analysis::Phrase;
use crate::distance::levenshtein::word_distance;

/// How phrases with differing word counts are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordCountPolicy {
    /// Pay for the mismatch through whole-word insertions and deletions.
    Penalize,
    /// Treat phrases with differing word counts as incomparable.
    Reject,
}

/// Configuration for phrase-level distance computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseDistanceConfig {
    /// Cost of inserting or deleting a whole word. Removing or adding a word
    /// is costlier than a single-character edit, hence the default of 2.
    pub word_indel_cost: usize,
    /// Policy for phrases with differing word counts.
    pub word_count_policy: WordCountPolicy,
}

impl Default for PhraseDistanceConfig {
    fn default() -> Self {
        PhraseDistanceConfig {
            word_indel_cost: 2,
            word_count_policy: WordCountPolicy::Penalize,
        }
    }
}

/// Calculate the edit distance between two phrases over word positions.
///
/// The dynamic program has the same structure as the character-level one,
/// with parameterized costs: inserting or deleting a whole word costs
/// `config.word_indel_cost`, and substituting one word for another costs
/// their character-level distance, clamped to at least 1. Words that compare
/// equal (both sides are expected to be normalized already) carry the
/// diagonal cost unchanged.
///
/// Returns `None` when the phrases are incomparable under
/// [`WordCountPolicy::Reject`]; under [`WordCountPolicy::Penalize`] every
/// pair of phrases has a finite distance.
pub fn phrase_distance(p: &Phrase, q: &Phrase, config: &PhraseDistanceConfig) -> Option<usize> {
    if config.word_count_policy == WordCountPolicy::Reject && p.word_count() != q.word_count() {
        return None;
    }

    let p_words = p.words();
    let q_words = q.words();
    let indel = config.word_indel_cost;

    let mut matrix = vec![vec![0; q_words.len() + 1]; p_words.len() + 1];

    // Base row and column: all-insertions / all-deletions against an empty phrase
    for i in 0..=p_words.len() {
        matrix[i][0] = i * indel;
    }
    for j in 0..=q_words.len() {
        matrix[0][j] = j * indel;
    }

    for i in 1..=p_words.len() {
        for j in 1..=q_words.len() {
            let substitution = if p_words[i - 1] == q_words[j - 1] {
                matrix[i - 1][j - 1]
            } else {
                // A substitution between distinct words costs at least 1
                matrix[i - 1][j - 1] + word_distance(&p_words[i - 1], &q_words[j - 1]).max(1)
            };

            matrix[i][j] = min(
                min(
                    matrix[i - 1][j] + indel, // word deletion
                    matrix[i][j - 1] + indel, // word insertion
                ),
                substitution,
            );
        }
    }

    Some(matrix[p_words.len()][q_words.len()])
}

/// Fast approximate phrase distance: a positional sum of word distances with
/// an early exit once the running total exceeds `cutoff`.
///
/// Phrases with differing word counts are incomparable here, and whole-word
/// insertions and deletions are never considered, so this can disagree with
/// [`phrase_distance`] on borderline phrases. It exists as a cheaper,
/// explicitly separate mode; callers choose it knowingly.
pub fn phrase_distance_accumulating(p: &Phrase, q: &Phrase, cutoff: usize) -> Option<usize> {
    if p.word_count() != q.word_count() {
        return None;
    }

    let mut total = 0;
    for (w1, w2) in p.words().iter().zip(q.words()) {
        total += word_distance(w1, w2);
        if total > cutoff {
            return None;
        }
    }

    Some(total)
}
