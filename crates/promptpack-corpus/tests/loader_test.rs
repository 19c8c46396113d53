//! Loader integration tests against a real on-disk corpus

use promptpack_corpus::{CorpusError, CorpusLoader};
use promptpack_types::DocumentKind;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A small corpus in the shape the real one uses:
/// skills/<persona>/<skill>/SKILL.md with a references/ subdirectory.
fn build_corpus(root: &Path) {
    write(
        root,
        "skills/qa-engineer/code-review/SKILL.md",
        "---\nname: code-review\ndescription: Reviews code for defects and security issues.\n---\n\n\
         # Code Review\n\n\
         Follow the [analysis guide](references/ANALYSIS_GUIDE.md) first,\n\
         then apply references/SECURITY_PATTERNS.md.\n\
         Details: [broken](references/MISSING.md)\n",
    );
    write(
        root,
        "skills/qa-engineer/code-review/references/ANALYSIS_GUIDE.md",
        "# Analysis Guide\n\nStep-by-step review checklist.\n",
    );
    write(
        root,
        "skills/qa-engineer/code-review/references/SECURITY_PATTERNS.md",
        "# Security Patterns\n\nCommon vulnerability patterns.\n",
    );
    write(
        root,
        "agents/devops-engineer.md",
        "---\nname: devops-engineer\ndescription: Sets up CI/CD pipelines, GitHub Actions workflows, and Kubernetes.\n---\n\n\
         # DevOps Engineer\n",
    );
    // No frontmatter: skipped by the loader, not fatal.
    write(root, "skills/qa-engineer/notes.md", "# Loose notes\n");
    // Not Markdown: ignored by the sweep.
    write(root, "skills/qa-engineer/code-review/scripts/run.py", "print('hi')\n");
}

#[test]
fn test_load_classifies_and_links() {
    let dir = TempDir::new().unwrap();
    build_corpus(dir.path());

    let loader = CorpusLoader::new().unwrap();
    let store = loader.load(dir.path()).unwrap();

    // notes.md skipped, run.py ignored
    assert_eq!(store.len(), 4);

    let skill = store.get("skills/qa-engineer/code-review/SKILL.md").unwrap();
    assert_eq!(skill.kind, DocumentKind::Skill);
    assert_eq!(
        skill.trigger_text,
        "Reviews code for defects and security issues."
    );
    assert!(skill.body.starts_with("\n# Code Review") || skill.body.starts_with("# Code Review"));
    assert!(!skill.body.contains("name: code-review"));
    assert_eq!(
        skill.links,
        vec![
            "skills/qa-engineer/code-review/references/ANALYSIS_GUIDE.md".to_string(),
            "skills/qa-engineer/code-review/references/SECURITY_PATTERNS.md".to_string(),
            "skills/qa-engineer/code-review/references/MISSING.md".to_string(),
        ]
    );

    let agent = store.get("agents/devops-engineer.md").unwrap();
    assert_eq!(agent.kind, DocumentKind::Agent);
    assert!(agent.trigger_text.contains("CI/CD"));

    let reference = store
        .get("skills/qa-engineer/code-review/references/ANALYSIS_GUIDE.md")
        .unwrap();
    assert_eq!(reference.kind, DocumentKind::Reference);
    assert!(reference.trigger_text.is_empty());
}

#[test]
fn test_load_is_deterministic() {
    let dir = TempDir::new().unwrap();
    build_corpus(dir.path());

    let loader = CorpusLoader::new().unwrap();
    let first = loader.load(dir.path()).unwrap();
    let second = loader.load(dir.path()).unwrap();

    let a: Vec<_> = first.documents().cloned().collect();
    let b: Vec<_> = second.documents().cloned().collect();
    assert_eq!(a, b);
}

#[test]
fn test_load_missing_root_is_bad_root() {
    let loader = CorpusLoader::new().unwrap();
    let err = loader.load(Path::new("/nonexistent/promptpack-corpus")).unwrap_err();
    assert!(matches!(err, CorpusError::BadRoot { .. }));
}
