//! The word-sense graph: concepts, typed relation edges, traversal and
//! cycle-tolerant ordering.

pub mod concept;
pub mod graph;

pub use concept::{Concept, ConceptId, NounForms, RelationEdge, RelationKind};
pub use graph::ConceptGraph;
