//! Assembled instruction bundles

use crate::document::Document;
use serde::{Deserialize, Serialize};

/// Separator between document bodies in the concatenated bundle text
const BODY_SEPARATOR: &str = "\n\n";

/// The ordered, size-bounded set of documents assembled for one request,
/// together with the counters a caller needs to audit what was and was not
/// included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    /// Included documents in traversal order (seeds first, then their
    /// links breadth-first)
    pub documents: Vec<Document>,
    /// Number of documents included
    pub documents_included: usize,
    /// Documents reachable from the seeds but left out by a budget cap
    pub documents_omitted: usize,
    /// Total body bytes of the included documents
    pub bytes_used: usize,
    /// Link targets that resolved to no store path, in encounter order
    pub unresolved_links: Vec<String>,
}

impl Bundle {
    /// An empty bundle
    #[must_use]
    pub fn empty() -> Self {
        Self {
            documents: Vec::new(),
            documents_included: 0,
            documents_omitted: 0,
            bytes_used: 0,
            unresolved_links: Vec::new(),
        }
    }

    /// Concatenate the included bodies into the instruction text handed to
    /// the invoker, in bundle order
    #[must_use]
    pub fn concatenate(&self) -> String {
        let bodies: Vec<&str> = self.documents.iter().map(|d| d.body.as_str()).collect();
        bodies.join(BODY_SEPARATOR)
    }

    /// True when nothing was omitted and every link resolved
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.documents_omitted == 0 && self.unresolved_links.is_empty()
    }
}

impl Default for Bundle {
    fn default() -> Self {
        Self::empty()
    }
}
