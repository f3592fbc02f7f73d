//! Grouping lexical matches into resolved or ambiguous concept sets.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{LexigraphError, Result};
use crate::graph::ConceptId;
use crate::lexicon::LexicalEntry;

/// An ordered, non-empty collection of candidates sharing the same surface
/// text. Size one means the reading is resolved; anything larger is left for
/// context to disambiguate. First-seen order is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmbiguousSet<T> {
    items: Vec<T>,
}

impl<T> AmbiguousSet<T> {
    /// Build a set from candidates. An empty input is a contract violation:
    /// the caller must guarantee at least one candidate.
    pub fn new(items: Vec<T>) -> Result<Self> {
        if items.is_empty() {
            return Err(LexigraphError::contract(
                "an ambiguous set requires at least one candidate",
            ));
        }
        Ok(AmbiguousSet { items })
    }

    /// A resolved, size-one set.
    pub fn single(item: T) -> Self {
        AmbiguousSet { items: vec![item] }
    }

    /// Number of candidates (always at least one).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether exactly one candidate remains.
    pub fn is_resolved(&self) -> bool {
        self.items.len() == 1
    }

    /// The first candidate in first-seen order.
    pub fn first(&self) -> &T {
        &self.items[0]
    }

    /// Candidates in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Candidates as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a AmbiguousSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Group lexical matches by their owning concept, preserving the order in
/// which each distinct concept was first seen. A single match yields a
/// resolved set; an empty input is a contract violation.
pub fn resolve<'a, I>(matches: I) -> Result<AmbiguousSet<ConceptId>>
where
    I: IntoIterator<Item = &'a LexicalEntry>,
{
    let mut seen = AHashSet::new();
    let mut concepts = Vec::new();
    for entry in matches {
        if seen.insert(entry.concept) {
            concepts.push(entry.concept);
        }
    }
    AmbiguousSet::new(concepts)
}
