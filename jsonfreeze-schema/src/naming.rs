//! Collision-free class name allocation.

use std::collections::{HashMap, HashSet};

/// Hands out unique class identifiers during one decomposition.
///
/// The first request for a candidate returns it unchanged. Later requests for
/// the same candidate return `candidate2`, `candidate3`, and so on. An
/// identifier that was already handed out is never returned again, even when
/// a different candidate would spell it.
#[derive(Debug, Default)]
pub struct NameAllocator {
    counts: HashMap<String, usize>,
    issued: HashSet<String>,
}

impl NameAllocator {
    /// Creates an empty allocator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a unique identifier for `candidate`.
    pub fn allocate(&mut self, candidate: &str) -> String {
        if !self.counts.contains_key(candidate) && self.issued.insert(candidate.to_string()) {
            self.counts.insert(candidate.to_string(), 1);
            return candidate.to_string();
        }

        let count = self.counts.entry(candidate.to_string()).or_insert(1);
        loop {
            *count += 1;
            let name = format!("{candidate}{count}");
            if self.issued.insert(name.clone()) {
                return name;
            }
        }
    }

    /// Returns how many times `candidate` has been requested.
    #[must_use]
    pub fn count(&self, candidate: &str) -> usize {
        self.counts.get(candidate).copied().unwrap_or(0)
    }

    /// Returns true if `name` has already been handed out.
    #[must_use]
    pub fn is_issued(&self, name: &str) -> bool {
        self.issued.contains(name)
    }
}
