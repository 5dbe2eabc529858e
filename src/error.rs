//! Error types for the Phraze library.
//!
//! Distance computation and ranking are total functions and never fail; the
//! fallible surface is limited to I/O around dictionary files and output
//! encoding. All errors are represented by the [`PhrazeError`] enum.
//!
//! # Examples
//!
//! ```
//! use phraze::error::{PhrazeError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PhrazeError::dictionary("empty dictionary file"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Phraze operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for creating specific error types.
#[derive(Error, Debug)]
pub enum PhrazeError {
    /// I/O errors (dictionary files, output streams)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dictionary-related errors
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with PhrazeError.
pub type Result<T> = std::result::Result<T, PhrazeError>;

impl PhrazeError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        PhrazeError::Dictionary(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PhrazeError::Other(msg.into())
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        PhrazeError::Other(format!("Internal error: {}", msg.into()))
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        PhrazeError::Other(format!("Invalid argument: {}", msg.into()))
    }
}
