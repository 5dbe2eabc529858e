//! Text normalization for phrase comparison.
//!
//! Queries and dictionary candidates are normalized the same way before any
//! distance is computed: lower-cased and split on whitespace runs. The
//! original strings are kept aside for presentation.

pub mod normalize;

// Re-export commonly used types
pub use normalize::*;
