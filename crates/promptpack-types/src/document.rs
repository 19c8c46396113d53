//! Instruction documents and their classification

use serde::{Deserialize, Serialize};

/// Classification of a corpus document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Top-level persona definition
    Agent,
    /// Reusable workflow definition
    Skill,
    /// Supporting material, reachable only through links
    Reference,
}

impl DocumentKind {
    /// Whether documents of this kind participate in request matching
    #[must_use]
    pub fn is_matchable(self) -> bool {
        matches!(self, DocumentKind::Agent | DocumentKind::Skill)
    }
}

/// A single instruction document loaded from the corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Corpus-root-relative path with `/` separators; unique store key
    pub path: String,
    /// Document classification
    pub kind: DocumentKind,
    /// Natural-language description used for matching; always empty for
    /// Reference documents
    pub trigger_text: String,
    /// Full content, frontmatter stripped for Agent/Skill documents
    pub body: String,
    /// Store paths this document references, in order of first mention
    pub links: Vec<String>,
}

impl Document {
    /// Create an Agent or Skill document with no links
    pub fn new(
        path: impl Into<String>,
        kind: DocumentKind,
        trigger_text: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            kind,
            trigger_text: trigger_text.into(),
            body: body.into(),
            links: Vec::new(),
        }
    }

    /// Create a Reference document (no trigger text)
    pub fn reference(path: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: DocumentKind::Reference,
            trigger_text: String::new(),
            body: body.into(),
            links: Vec::new(),
        }
    }

    /// Attach outgoing links
    #[must_use]
    pub fn with_links(mut self, links: Vec<String>) -> Self {
        self.links = links;
        self
    }

    /// One-line summary for listings and prompts
    /// Format: "- {path}: {trigger_text}"
    #[must_use]
    pub fn summary(&self) -> String {
        format!("- {}: {}", self.path, self.trigger_text)
    }
}

/// A ranked result from the matcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMatch {
    /// Store path of the matched document
    pub path: String,
    /// Relevance score; strictly positive, higher is better
    pub score: f64,
}

impl DocumentMatch {
    /// Create a match result
    pub fn new(path: impl Into<String>, score: f64) -> Self {
        Self {
            path: path.into(),
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matchable_kinds() {
        assert!(DocumentKind::Agent.is_matchable());
        assert!(DocumentKind::Skill.is_matchable());
        assert!(!DocumentKind::Reference.is_matchable());
    }

    #[test]
    fn test_reference_has_no_trigger() {
        let doc = Document::reference("skills/x/references/GUIDE.md", "guide body");
        assert_eq!(doc.kind, DocumentKind::Reference);
        assert!(doc.trigger_text.is_empty());
        assert!(doc.links.is_empty());
    }

    #[test]
    fn test_summary_format() {
        let doc = Document::new(
            "agents/devops-engineer.md",
            DocumentKind::Agent,
            "CI/CD and Kubernetes work",
            "body",
        );
        assert_eq!(
            doc.summary(),
            "- agents/devops-engineer.md: CI/CD and Kubernetes work"
        );
    }
}
