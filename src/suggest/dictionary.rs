//! Candidate phrase dictionaries.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;

/// An ordered, read-only collection of candidate phrases.
///
/// Entries keep their original spelling; normalization happens at ranking
/// time, and the original strings are what suggestions report back.
/// Duplicate entries are legal and are scored independently.
#[derive(Debug, Clone, Default)]
pub struct PhraseDictionary {
    phrases: Vec<String>,
}

impl PhraseDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        PhraseDictionary {
            phrases: Vec::new(),
        }
    }

    /// Build a dictionary from candidate phrases, preserving their order.
    pub fn from_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PhraseDictionary {
            phrases: phrases.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a dictionary from lines of text, one phrase per line.
    /// Lines are trimmed and blank lines are skipped.
    pub fn from_lines(text: &str) -> Self {
        PhraseDictionary {
            phrases: text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Load a dictionary from a text file with one phrase per line.
    /// Lines are trimmed and blank lines are skipped.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut phrases = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let phrase = line.trim();
            if !phrase.is_empty() {
                phrases.push(phrase.to_string());
            }
        }

        Ok(PhraseDictionary { phrases })
    }

    /// The candidate phrases, in dictionary order.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Number of candidate phrases.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Check whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Iterate over the candidate phrases in order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.phrases.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for PhraseDictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        PhraseDictionary::from_phrases(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_phrases_preserves_order_and_duplicates() {
        let dict = PhraseDictionary::from_phrases(["thank you", "good morning", "thank you"]);
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.phrases()[0], "thank you");
        assert_eq!(dict.phrases()[2], "thank you");
    }

    #[test]
    fn test_from_lines_skips_blanks() {
        let dict = PhraseDictionary::from_lines("thank you miss\n\n  good morning  \n\t\n");
        assert_eq!(dict.phrases(), &["thank you miss", "good morning"]);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("dictionary.txt");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "thank you miss").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  good morning").unwrap();
        drop(file);

        let dict = PhraseDictionary::load_from_file(&path).unwrap();
        assert_eq!(dict.phrases(), &["thank you miss", "good morning"]);
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = PhraseDictionary::load_from_file("/does/not/exist.txt");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = PhraseDictionary::new();
        assert!(dict.is_empty());
        assert_eq!(dict.len(), 0);
        assert_eq!(dict.iter().count(), 0);
    }
}
