//! Context assembly: bounded breadth-first expansion of document links
//!
//! Seeds come first in the order given, then their links in link order,
//! then second-degree links — that ordering is a contract, because
//! instruction precedence can matter to whatever consumes the bundle.
//! Budget overruns and dangling links degrade the bundle, never fail it;
//! the counters on `Bundle` say exactly what was left out.

use promptpack_corpus::DocumentStore;
use promptpack_types::Bundle;
use std::collections::{HashSet, VecDeque};
use tracing::{debug, warn};

/// Budget caps for a single assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of documents included
    pub max_documents: usize,
    /// Maximum total body bytes included
    pub max_bytes: usize,
}

impl Limits {
    /// No caps at all
    pub const UNBOUNDED: Limits = Limits {
        max_documents: usize::MAX,
        max_bytes: usize::MAX,
    };

    /// Explicit caps
    #[must_use]
    pub fn new(max_documents: usize, max_bytes: usize) -> Self {
        Self {
            max_documents,
            max_bytes,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_documents: 16,
            max_bytes: 256 * 1024,
        }
    }
}

/// Assembles instruction bundles from a populated store.
///
/// Holds only a shared reference; assembly keeps all traversal state
/// (queue, visited set, remaining budget) local to one call, so a single
/// assembler can serve concurrent callers.
pub struct ContextAssembler<'a> {
    store: &'a DocumentStore,
}

impl<'a> ContextAssembler<'a> {
    /// Create an assembler over a store
    #[must_use]
    pub fn new(store: &'a DocumentStore) -> Self {
        Self { store }
    }

    /// Assemble a bundle from seed paths under the given budgets.
    ///
    /// Each reachable document is visited at most once, so accidental link
    /// cycles terminate like any other revisit. A document whose body
    /// would push past `max_bytes` is omitted whole — never truncated —
    /// and ends the traversal; reaching `max_documents` ends it too.
    /// Everything still queued at that point is counted into
    /// `documents_omitted` (or `unresolved_links` if it resolves to
    /// nothing).
    #[must_use]
    pub fn assemble(&self, seeds: &[String], limits: Limits) -> Bundle {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        for seed in seeds {
            if visited.insert(seed) {
                queue.push_back(seed);
            }
        }

        let mut bundle = Bundle::empty();
        let mut stopped = false;

        while let Some(path) = queue.pop_front() {
            let document = match self.store.get(path) {
                Ok(d) => d,
                Err(_) => {
                    bundle.unresolved_links.push(path.to_string());
                    continue;
                }
            };

            if stopped || bundle.documents.len() >= limits.max_documents {
                stopped = true;
                bundle.documents_omitted += 1;
                continue;
            }

            let body_bytes = document.body.len();
            if body_bytes > limits.max_bytes - bundle.bytes_used {
                warn!(
                    "Omitting {} ({} bytes): byte budget exhausted at {}",
                    path, body_bytes, bundle.bytes_used
                );
                bundle.documents_omitted += 1;
                stopped = true;
                continue;
            }

            bundle.bytes_used += body_bytes;
            for link in &document.links {
                if visited.insert(link) {
                    queue.push_back(link);
                }
            }
            bundle.documents.push(document.clone());
        }

        bundle.documents_included = bundle.documents.len();
        if !bundle.is_complete() {
            debug!(
                "Bundle incomplete: {} included, {} omitted, {} unresolved",
                bundle.documents_included,
                bundle.documents_omitted,
                bundle.unresolved_links.len()
            );
        }
        bundle
    }
}
