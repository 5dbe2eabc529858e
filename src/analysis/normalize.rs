//! Phrase normalization and tokenization.

use std::fmt;

/// A phrase normalized for comparison: an ordered sequence of lower-cased
/// words with all whitespace folded away.
///
/// Phrases are compared positionally, the i-th word of one against the i-th
/// word of the other; there is no alignment across positions. A string that
/// contains only whitespace normalizes to an empty phrase, which is a valid
/// value (it matches other empty phrases at distance 0).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phrase {
    words: Vec<String>,
}

impl Phrase {
    /// Normalize a raw string into a phrase.
    ///
    /// Lower-cases the input and splits it on whitespace runs, discarding
    /// empty tokens, so any amount of surrounding or internal whitespace
    /// acts as a single separator.
    pub fn normalize(text: &str) -> Self {
        let words = text
            .split_whitespace()
            .map(|word| word.to_lowercase())
            .collect();

        Phrase { words }
    }

    /// The words of this phrase, in order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words in this phrase.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Check whether normalization produced no words at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" "))
    }
}
