//! The ontology façade: a frozen concept graph plus lexicon, built once and
//! then queried read-only.

pub mod builder;
pub mod source;

use std::path::Path;
use std::sync::Arc;

pub use builder::OntologyBuilder;
pub use source::{ConceptDoc, EntryDoc, OntologyDoc, RelationDoc};

use crate::error::Result;
use crate::graph::{ConceptGraph, ConceptId};
use crate::lexicon::{Lexicon, MatchSensitivity, ScoredEntry, Suggestion};
use crate::query::{self, AmbiguousSet, SenseDescription, TaxonomicQueryEngine, Verdict};

/// A frozen word-sense network.
///
/// Holds the concept graph and the lexicon built during a single load phase.
/// Every method takes `&self` and performs pure in-memory computation, so a
/// published `Arc<Ontology>` can be queried from any number of threads
/// without locking.
#[derive(Debug, Clone)]
pub struct Ontology {
    graph: ConceptGraph,
    lexicon: Lexicon,
}

impl Ontology {
    pub(crate) fn from_parts(graph: ConceptGraph, lexicon: Lexicon) -> Self {
        Ontology { graph, lexicon }
    }

    /// Load from a JSON ontology document string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        source::from_json_str(json)
    }

    /// Load from a JSON ontology document file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        source::from_json_file(path)
    }

    /// The concept graph.
    pub fn graph(&self) -> &ConceptGraph {
        &self.graph
    }

    /// The lexicon.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Wrap in an `Arc` for publication to reader threads.
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Fuzzy lexical lookup; see [`Lexicon::fuzzy_match`].
    pub fn fuzzy_match<'a>(
        &'a self,
        input: &str,
        sensitivity: &MatchSensitivity,
    ) -> Vec<ScoredEntry<'a>> {
        self.lexicon.fuzzy_match(input, sensitivity)
    }

    /// Ranked correction suggestions; see [`Lexicon::suggest`].
    pub fn suggest(
        &self,
        input: &str,
        sensitivity: &MatchSensitivity,
        limit: usize,
    ) -> Vec<Suggestion> {
        self.lexicon.suggest(input, sensitivity, limit)
    }

    /// The senses a surface text can refer to under the given sensitivity,
    /// grouped by concept in first-seen match order. `None` when the text
    /// matches nothing.
    pub fn senses(
        &self,
        input: &str,
        sensitivity: &MatchSensitivity,
    ) -> Option<AmbiguousSet<ConceptId>> {
        let matches = self.lexicon.fuzzy_match(input, sensitivity);
        if matches.is_empty() {
            return None;
        }
        // resolve only fails on empty input, which is excluded above.
        query::resolve(matches.iter().map(|m| m.entry)).ok()
    }

    /// Answer "is an X a Y" over two possibly ambiguous sets of senses; see
    /// [`TaxonomicQueryEngine::find_connection`].
    pub fn find_connection(
        &self,
        nouns: &AmbiguousSet<ConceptId>,
        classes: &AmbiguousSet<ConceptId>,
    ) -> Result<Verdict> {
        TaxonomicQueryEngine::new(&self.graph).find_connection(nouns, classes)
    }

    /// Answer "is an X a Y" for a single resolved pair; see
    /// [`TaxonomicQueryEngine::is_a`].
    pub fn is_a(&self, noun: ConceptId, class: ConceptId) -> Result<Verdict> {
        TaxonomicQueryEngine::new(&self.graph).is_a(noun, class)
    }

    /// Describe every sense of a surface text in first-seen order. An
    /// unknown text yields an empty list, not an error.
    pub fn describe_text(&self, text: &str) -> Result<Vec<SenseDescription>> {
        let entries: Vec<_> = self.lexicon.entries_for_text(text).collect();
        if entries.is_empty() {
            return Ok(Vec::new());
        }
        query::describe_ambiguous(&self.graph, &self.lexicon, &entries)
    }
}
