//! # lexigraph
//!
//! An in-memory word-sense network: a directed concept graph combined with a
//! fuzzy lexical lookup, used to resolve ambiguous word matches, answer
//! "is an X a Y" taxonomic queries and find common semantic ancestors
//! between word senses.
//!
//! ## Features
//!
//! - Exact and edit-distance-bounded lexical matching with ranked results
//! - Cycle-tolerant graph traversal and approximate topological ordering
//! - Ambiguity-aware taxonomic verdicts with presentation-ready wording
//! - One-shot validated load from a JSON ontology document, then lock-free
//!   concurrent queries

pub mod error;
pub mod graph;
pub mod lexicon;
pub mod ontology;
pub mod query;
pub mod util;

pub mod prelude {
    //! Convenience re-exports for typical usage.
    pub use crate::error::{LexigraphError, Result};
    pub use crate::graph::{ConceptGraph, ConceptId, RelationKind};
    pub use crate::lexicon::{Lexicon, MatchSensitivity, WordForm};
    pub use crate::ontology::{Ontology, OntologyBuilder};
    pub use crate::query::{AmbiguousSet, TaxonomicQueryEngine, Verdict};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
