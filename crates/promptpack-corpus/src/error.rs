//! Error types for corpus operations

use thiserror::Error;

/// Corpus and document-store errors
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Requested path absent from the store
    #[error("Document '{path}' not found in store")]
    NotFound {
        /// Store path that was requested
        path: String,
    },

    /// Corpus root missing or not a directory
    #[error("Corpus root '{root}' is not a readable directory")]
    BadRoot {
        /// Configured corpus root
        root: String,
    },

    /// Frontmatter block missing or unparseable
    #[error("Invalid frontmatter in '{path}': {reason}")]
    Frontmatter {
        /// File the frontmatter came from
        path: String,
        /// Parse failure detail
        reason: String,
    },

    /// Internal pattern compilation error
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Directory walk error
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, CorpusError>;
