//! Request-to-document matching
//!
//! Ranks Agent and Skill documents against a free-text request by
//! case-insensitive token overlap with their trigger texts. Shared tokens
//! are weighted by inverse document frequency so words that appear in
//! every trigger ("code", "use") rarely decide a ranking. Scoring is a
//! pure function of the request and the store; ties break by path order.

use promptpack_corpus::DocumentStore;
use promptpack_types::DocumentMatch;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Tokens shorter than this carry no signal and are dropped
const MIN_TOKEN_LEN: usize = 2;

/// Split text into a case-insensitive set of word tokens
#[must_use]
pub fn tokenize(text: &str) -> BTreeSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() >= MIN_TOKEN_LEN)
        .map(str::to_lowercase)
        .collect()
}

/// One matchable document's precomputed trigger tokens
struct Candidate {
    path: String,
    tokens: BTreeSet<String>,
}

/// Precomputed matching index over a store's Agent and Skill documents.
///
/// Reference documents are never candidates; they are reachable only
/// through links at assembly time.
pub struct Matcher {
    candidates: Vec<Candidate>,
    idf: HashMap<String, f64>,
}

impl Matcher {
    /// Build the index from the store's matchable documents
    #[must_use]
    pub fn new(store: &DocumentStore) -> Self {
        let candidates: Vec<Candidate> = store
            .matchable()
            .map(|d| Candidate {
                path: d.path.clone(),
                tokens: tokenize(&d.trigger_text),
            })
            .collect();

        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        for candidate in &candidates {
            for token in &candidate.tokens {
                *document_frequency.entry(token.clone()).or_insert(0) += 1;
            }
        }

        let total = candidates.len() as f64;
        let idf = document_frequency
            .into_iter()
            .map(|(token, df)| (token, (total / df as f64).ln() + 1.0))
            .collect();

        debug!("Matcher indexed {} candidate documents", candidates.len());
        Self { candidates, idf }
    }

    /// Number of indexed candidates
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Rank candidates against a request, best first, at most `top_k`.
    ///
    /// An empty or token-free request yields an empty ranking; so does a
    /// request sharing no token with any trigger text. Both are ordinary
    /// outcomes, not errors — the caller picks its own fallback.
    #[must_use]
    pub fn rank(&self, request: &str, top_k: usize) -> Vec<DocumentMatch> {
        if top_k == 0 {
            return Vec::new();
        }
        let request_tokens = tokenize(request);
        if request_tokens.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<DocumentMatch> = self
            .candidates
            .iter()
            .filter_map(|candidate| {
                let score: f64 = candidate
                    .tokens
                    .intersection(&request_tokens)
                    .filter_map(|token| self.idf.get(token))
                    .sum();
                (score > 0.0).then(|| DocumentMatch::new(candidate.path.clone(), score))
            })
            .collect();

        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.path.cmp(&b.path))
        });
        matches.truncate(top_k);
        matches
    }
}
