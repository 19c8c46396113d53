//! In-memory document store with stable iteration order

use crate::error::{CorpusError, Result};
use promptpack_types::Document;
use std::collections::BTreeMap;

/// Read-only lookup table of every corpus document, keyed by path.
///
/// Backed by a `BTreeMap` so iteration is lexicographic by path; matching
/// ties and listings stay deterministic across loads.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: BTreeMap<String, Document>,
}

impl DocumentStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            documents: BTreeMap::new(),
        }
    }

    /// Insert a document, replacing any previous entry at the same path.
    ///
    /// Used by the loader during the initial sweep and by tests building
    /// synthetic stores; nothing inserts after startup.
    pub fn insert(&mut self, document: Document) -> Option<Document> {
        self.documents.insert(document.path.clone(), document)
    }

    /// Look up a document by path
    pub fn get(&self, path: &str) -> Result<&Document> {
        self.documents.get(path).ok_or_else(|| CorpusError::NotFound {
            path: path.to_string(),
        })
    }

    /// Whether a path exists in the store
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.documents.contains_key(path)
    }

    /// All documents in lexicographic path order; restartable
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    /// Agent and Skill documents only, in lexicographic path order
    pub fn matchable(&self) -> impl Iterator<Item = &Document> {
        self.documents.values().filter(|d| d.kind.is_matchable())
    }

    /// Number of documents
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store holds no documents
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
