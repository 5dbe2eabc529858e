//! # Phraze
//!
//! A fast fuzzy phrase matching and suggestion library for Rust.
//!
//! Given a user-typed query phrase and a dictionary of candidate phrases,
//! Phraze ranks the candidates by a two-tier edit distance: classic
//! Levenshtein distance between the characters of individual words, and a
//! word-level edit distance across whole phrases in which substituting one
//! word for another costs their character-level distance.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Character-level and word-level edit distances
//! - Word-count pruning to skip hopeless candidates cheaply
//! - Configurable thresholds, costs, and mismatch policies
//! - Optional parallel candidate evaluation

pub mod analysis;
pub mod cli;
pub mod distance;
pub mod error;
pub mod suggest;

pub mod prelude {
    pub use crate::analysis::Phrase;
    pub use crate::error::{PhrazeError, Result};
    pub use crate::suggest::{
        PhraseCorrector, PhraseDictionary, RankerConfig, Suggestion, SuggestionRanker,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
