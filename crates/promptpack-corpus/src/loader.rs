//! Corpus loader: one startup sweep of a Markdown document tree
//!
//! Corpus conventions (best-effort — the documents were written for
//! humans, not for automated resolution):
//! - any file under a `references/` directory is a Reference document
//! - `AGENT.md`, or any `.md` directly under an `agents/` directory, is an
//!   Agent document
//! - every other `.md` with YAML frontmatter (`name`, `description`) is a
//!   Skill document; the description becomes its trigger text
//!
//! Files that fail the frontmatter convention are skipped with a debug
//! log, never fatal to the load.

use crate::error::{CorpusError, Result};
use crate::store::DocumentStore;
use promptpack_types::{Document, DocumentKind};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Frontmatter metadata carried by Agent and Skill documents
#[derive(Debug, Clone, Deserialize)]
struct Frontmatter {
    name: String,
    description: String,
}

/// Reads a corpus root into a `DocumentStore`.
///
/// Holds the compiled extraction patterns; construct once and reuse.
pub struct CorpusLoader {
    frontmatter_re: Regex,
    md_link_re: Regex,
    mention_re: Regex,
}

impl CorpusLoader {
    /// Create a loader with compiled extraction patterns
    pub fn new() -> Result<Self> {
        Ok(Self {
            frontmatter_re: Regex::new(r"^---\s*\n([\s\S]*?)\n---\s*\n?([\s\S]*)$")?,
            md_link_re: Regex::new(r"\]\(([^()\s]+)\)")?,
            mention_re: Regex::new(r"\breferences/[A-Za-z0-9_./-]+\.md")?,
        })
    }

    /// Load every `.md` file under `root` into a fresh store
    pub fn load(&self, root: &Path) -> Result<DocumentStore> {
        if !root.is_dir() {
            return Err(CorpusError::BadRoot {
                root: root.display().to_string(),
            });
        }

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(root) {
            let entry = entry?;
            if entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == "md")
            {
                files.push(entry.into_path());
            }
        }
        // Deterministic load order; the store is ordered anyway, this just
        // keeps skip logs stable.
        files.sort();

        let mut store = DocumentStore::new();
        let (mut agents, mut skills, mut references) = (0usize, 0usize, 0usize);
        for file in &files {
            match self.load_file(root, file) {
                Ok(document) => {
                    match document.kind {
                        DocumentKind::Agent => agents += 1,
                        DocumentKind::Skill => skills += 1,
                        DocumentKind::Reference => references += 1,
                    }
                    store.insert(document);
                }
                Err(CorpusError::Frontmatter { path, reason }) => {
                    debug!("Skipping {}: {}", path, reason);
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            "Loaded {} documents from {} ({} agents, {} skills, {} references)",
            store.len(),
            root.display(),
            agents,
            skills,
            references
        );
        Ok(store)
    }

    /// Read and classify a single file
    fn load_file(&self, root: &Path, file: &Path) -> Result<Document> {
        let content = fs::read_to_string(file)?;
        let rel = store_path(root, file);
        let dir = parent_dir(&rel);

        let document = match classify(&rel) {
            DocumentKind::Reference => Document::reference(rel, content.clone())
                .with_links(self.extract_links(&dir, &content)),
            kind => {
                let (meta, body) = self.split_frontmatter(&rel, &content)?;
                debug!("Discovered {} ({})", rel, meta.name);
                let links = self.extract_links(&dir, &body);
                Document::new(rel, kind, meta.description, body).with_links(links)
            }
        };
        Ok(document)
    }

    /// Split a document into frontmatter metadata and body text
    fn split_frontmatter(&self, path: &str, content: &str) -> Result<(Frontmatter, String)> {
        let captures =
            self.frontmatter_re
                .captures(content)
                .ok_or_else(|| CorpusError::Frontmatter {
                    path: path.to_string(),
                    reason: "no YAML frontmatter block".to_string(),
                })?;

        let yaml = captures.get(1).map(|m| m.as_str()).unwrap_or("");
        let body = captures.get(2).map(|m| m.as_str()).unwrap_or("");

        let meta: Frontmatter =
            serde_yaml::from_str(yaml).map_err(|e| CorpusError::Frontmatter {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        Ok((meta, body.to_string()))
    }

    /// Extract outgoing links from a document body, resolved to store
    /// paths, first mention wins
    fn extract_links(&self, doc_dir: &str, body: &str) -> Vec<String> {
        let mut found: Vec<(usize, &str)> = Vec::new();
        for cap in self.md_link_re.captures_iter(body) {
            if let Some(m) = cap.get(1) {
                found.push((m.start(), m.as_str()));
            }
        }
        for m in self.mention_re.find_iter(body) {
            found.push((m.start(), m.as_str()));
        }
        found.sort_by_key(|(pos, _)| *pos);

        let mut seen: HashSet<String> = HashSet::new();
        let mut links = Vec::new();
        for (_, target) in found {
            if let Some(resolved) = resolve_link(doc_dir, target) {
                if seen.insert(resolved.clone()) {
                    links.push(resolved);
                }
            }
        }
        links
    }
}

/// Corpus-root-relative path with `/` separators
fn store_path(root: &Path, file: &Path) -> String {
    let rel = file.strip_prefix(root).unwrap_or(file);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Directory portion of a store path, empty for top-level files
fn parent_dir(store_path: &str) -> String {
    match store_path.rsplit_once('/') {
        Some((dir, _)) => dir.to_string(),
        None => String::new(),
    }
}

/// Kind heuristic from the path convention
fn classify(store_path: &str) -> DocumentKind {
    let components: Vec<&str> = store_path.split('/').collect();
    let (file_name, dirs) = match components.split_last() {
        Some((name, dirs)) => (*name, dirs),
        None => return DocumentKind::Reference,
    };

    if dirs.contains(&"references") {
        DocumentKind::Reference
    } else if file_name == "AGENT.md" || dirs.last() == Some(&"agents") {
        DocumentKind::Agent
    } else {
        DocumentKind::Skill
    }
}

/// Resolve a link target against the linking document's directory.
///
/// Returns `None` for web URLs, fragments, non-Markdown targets, and
/// targets that climb out of the corpus root.
fn resolve_link(doc_dir: &str, target: &str) -> Option<String> {
    if target.starts_with("http://") || target.starts_with("https://") || target.starts_with('#') {
        return None;
    }
    if !target.ends_with(".md") {
        return None;
    }

    // A leading slash means corpus-root relative.
    let (base, target) = match target.strip_prefix('/') {
        Some(rest) => ("", rest),
        None => (doc_dir, target),
    };

    let mut parts: Vec<&str> = if base.is_empty() {
        Vec::new()
    } else {
        base.split('/').collect()
    };
    for component in target.split('/') {
        match component {
            "" | "." => {}
            ".." => {
                if parts.pop().is_none() {
                    return None;
                }
            }
            other => parts.push(other),
        }
    }
    Some(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_frontmatter() {
        let loader = CorpusLoader::new().unwrap();
        let content = "---\nname: code-review\ndescription: Reviews code for defects.\n---\n\n# Code Review\n";
        let (meta, body) = loader.split_frontmatter("x.md", content).unwrap();
        assert_eq!(meta.name, "code-review");
        assert_eq!(meta.description, "Reviews code for defects.");
        assert!(body.contains("# Code Review"));
        assert!(!body.contains("---"));
    }

    #[test]
    fn test_split_frontmatter_missing_is_error() {
        let loader = CorpusLoader::new().unwrap();
        let err = loader.split_frontmatter("x.md", "# Just a heading\n").unwrap_err();
        assert!(matches!(err, CorpusError::Frontmatter { .. }));
    }

    #[test]
    fn test_classify_by_path_convention() {
        assert_eq!(
            classify("skills/code-review/SKILL.md"),
            DocumentKind::Skill
        );
        assert_eq!(
            classify("skills/code-review/references/GUIDE.md"),
            DocumentKind::Reference
        );
        assert_eq!(classify("agents/devops-engineer.md"), DocumentKind::Agent);
        assert_eq!(
            classify("skills/product-architect/AGENT.md"),
            DocumentKind::Agent
        );
    }

    #[test]
    fn test_resolve_link_relative_and_parent() {
        assert_eq!(
            resolve_link("skills/code-review", "references/GUIDE.md"),
            Some("skills/code-review/references/GUIDE.md".to_string())
        );
        assert_eq!(
            resolve_link("skills/code-review", "../shared/NOTES.md"),
            Some("skills/shared/NOTES.md".to_string())
        );
        assert_eq!(
            resolve_link("", "/agents/devops-engineer.md"),
            Some("agents/devops-engineer.md".to_string())
        );
    }

    #[test]
    fn test_resolve_link_rejects_non_corpus_targets() {
        assert_eq!(resolve_link("skills/x", "https://example.com/page.md"), None);
        assert_eq!(resolve_link("skills/x", "#section"), None);
        assert_eq!(resolve_link("skills/x", "scripts/run.py"), None);
        assert_eq!(resolve_link("skills/x", "../../../etc/passwd.md"), None);
    }

    #[test]
    fn test_extract_links_in_mention_order_deduplicated() {
        let loader = CorpusLoader::new().unwrap();
        let body = "See [guide](references/GUIDE.md) and references/PATTERNS.md.\n\
                    The guide (references/GUIDE.md) covers the rest.\n";
        let links = loader.extract_links("skills/review", body);
        assert_eq!(
            links,
            vec![
                "skills/review/references/GUIDE.md".to_string(),
                "skills/review/references/PATTERNS.md".to_string(),
            ]
        );
    }
}
