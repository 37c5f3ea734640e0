//! Error types for sequence transformations

use thiserror::Error;

/// Errors raised by the transformation functions
///
/// Every error is detected before any item is processed, so a failing call
/// never yields a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A structurally invalid argument (zero chunk size, empty pattern set)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A pattern that does not compile under the declared syntax
    #[error("Invalid pattern '{pattern}': {reason}")]
    Pattern {
        /// The offending pattern, as supplied by the caller
        pattern: String,
        /// Why the pattern was rejected
        reason: String,
    },
}

impl Error {
    /// The offending pattern, if this is a pattern error
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Error::Pattern { pattern, .. } => Some(pattern),
            Error::Validation(_) => None,
        }
    }
}

/// Result type for transformation operations
pub type Result<T> = std::result::Result<T, Error>;
