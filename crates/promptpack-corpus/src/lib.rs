//! Promptpack corpus: on-disk document loading and the in-memory store
//!
//! The corpus is a directory tree of Markdown instruction documents —
//! agent personas, skills with YAML frontmatter, and the reference files
//! they cite. `CorpusLoader` reads the tree once at startup into a
//! `DocumentStore`; the store is read-only for the life of the process.

pub mod error;
pub mod loader;
pub mod store;

pub use error::{CorpusError, Result};
pub use loader::CorpusLoader;
pub use store::DocumentStore;
