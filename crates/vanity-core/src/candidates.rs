//! Insertion-ordered candidate accumulator.

use std::collections::HashSet;

/// A set of vanity candidates that remembers discovery order.
///
/// Ranking breaks ties by discovery order, so the set must hand candidates
/// back in the order they were first inserted. Re-inserting a known
/// candidate is a no-op.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl CandidateSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a candidate, returning `true` if it was new.
    pub fn insert(&mut self, candidate: String) -> bool {
        if self.seen.contains(&candidate) {
            return false;
        }
        self.seen.insert(candidate.clone());
        self.order.push(candidate);
        true
    }

    /// Whether `candidate` has been inserted.
    pub fn contains(&self, candidate: &str) -> bool {
        self.seen.contains(candidate)
    }

    /// Number of distinct candidates.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no candidate has been inserted.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Candidates in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Consume the set, yielding candidates in discovery order.
    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

impl Extend<String> for CandidateSet {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        for candidate in iter {
            self.insert(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_insertion_order() {
        let mut set = CandidateSet::new();
        assert!(set.insert("B".into()));
        assert!(set.insert("A".into()));
        assert!(!set.insert("B".into()));
        assert_eq!(set.len(), 2);
        assert_eq!(set.into_vec(), vec!["B", "A"]);
    }

    #[test]
    fn extend_dedups() {
        let mut set = CandidateSet::new();
        set.extend(["X".to_string(), "Y".to_string(), "X".to_string()]);
        assert!(set.contains("X"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["X", "Y"]);
    }
}
