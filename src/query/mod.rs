//! Query-side components: ambiguity resolution, taxonomic verdicts and sense
//! descriptions.

pub mod ambiguity;
pub mod describe;
pub mod taxonomy;

pub use ambiguity::{AmbiguousSet, resolve};
pub use describe::{RelationSummary, SenseDescription, describe, describe_ambiguous};
pub use taxonomy::{TaxonomicQueryEngine, Verdict};
