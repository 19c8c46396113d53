//! End-to-end pipeline over a real on-disk corpus:
//! load → match → assemble, the full request data flow.

use promptpack_assemble::{ContextAssembler, Limits};
use promptpack_corpus::CorpusLoader;
use promptpack_match::Matcher;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_request_resolves_to_skill_and_its_references() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "skills/code-review/SKILL.md",
        "---\nname: code-review\ndescription: Reviews pull requests and diffs for defects.\n---\n\n\
         # Code Review\n\n\
         Start with [the analysis guide](references/ANALYSIS_GUIDE.md),\n\
         then check references/SECURITY_PATTERNS.md.\n",
    );
    write(
        dir.path(),
        "skills/code-review/references/ANALYSIS_GUIDE.md",
        "# Analysis Guide\n",
    );
    write(
        dir.path(),
        "skills/code-review/references/SECURITY_PATTERNS.md",
        "# Security Patterns\n",
    );
    write(
        dir.path(),
        "agents/product-architect.md",
        "---\nname: product-architect\ndescription: Writes user stories and roadmap documents.\n---\n\n\
         # Product Architect\n",
    );

    let store = CorpusLoader::new().unwrap().load(dir.path()).unwrap();
    let matcher = Matcher::new(&store);

    let matches = matcher.rank("review this pull request diff", 1);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].path, "skills/code-review/SKILL.md");

    let assembler = ContextAssembler::new(&store);
    let bundle = assembler.assemble(&[matches[0].path.clone()], Limits::default());

    let included: Vec<&str> = bundle.documents.iter().map(|d| d.path.as_str()).collect();
    assert_eq!(
        included,
        vec![
            "skills/code-review/SKILL.md",
            "skills/code-review/references/ANALYSIS_GUIDE.md",
            "skills/code-review/references/SECURITY_PATTERNS.md",
        ]
    );
    assert!(bundle.is_complete());

    let text = bundle.concatenate();
    assert!(text.contains("# Code Review"));
    assert!(text.contains("# Analysis Guide"));
    assert!(text.contains("# Security Patterns"));
}
