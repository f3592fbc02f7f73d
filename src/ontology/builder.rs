//! Bulk construction and validation of an ontology.

use ahash::AHashMap;
use tracing::debug;

use crate::error::{LexigraphError, Result};
use crate::graph::{Concept, ConceptGraph, ConceptId, NounForms, RelationEdge, RelationKind};
use crate::lexicon::{EntryId, Lexicon, WordForm};
use crate::ontology::Ontology;

/// Builder for the one-shot load phase.
///
/// Concepts, entries and relations are accumulated with the fluent methods
/// below; [`build`](OntologyBuilder::build) validates the whole batch and
/// either publishes a complete ontology or fails without exposing anything.
/// Violations are collected as they are noticed so a bad source reports its
/// first problem rather than panicking mid-load.
#[derive(Debug, Default)]
pub struct OntologyBuilder {
    concepts: Vec<Concept>,
    by_key: AHashMap<String, ConceptId>,
    edges: Vec<Vec<RelationEdge>>,
    lexicon: Lexicon,
    violations: Vec<String>,
}

impl OntologyBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        OntologyBuilder::default()
    }

    /// Register a concept under a unique source key. Reusing a key is a load
    /// violation reported by [`build`](OntologyBuilder::build).
    pub fn concept(&mut self, key: &str, name: &str) -> ConceptId {
        let id = ConceptId(self.concepts.len() as u32);
        if self.by_key.insert(key.to_string(), id).is_some() {
            self.violations
                .push(format!("duplicate concept key `{key}`"));
        }
        self.concepts.push(Concept {
            id,
            key: key.to_string(),
            name: name.to_string(),
            definition: None,
            noun_forms: NounForms::default(),
            entries: Vec::new(),
        });
        self.edges.push(Vec::new());
        id
    }

    /// Attach a dictionary gloss to a concept.
    pub fn definition(&mut self, concept: ConceptId, text: &str) {
        match self.concepts.get_mut(concept.as_usize()) {
            Some(c) => c.definition = Some(text.to_string()),
            None => self
                .violations
                .push(format!("definition for unknown concept id {}", concept.0)),
        }
    }

    /// Add a lexical entry to a concept.
    ///
    /// The first singular-capable entry becomes the concept's singular
    /// display form and the first plural-capable entry its plural form, so
    /// no word forms need to be synthesized at query time.
    pub fn entry(&mut self, concept: ConceptId, text: &str, forms: Vec<WordForm>) -> EntryId {
        if text.is_empty() {
            self.violations
                .push(format!("empty entry text for concept id {}", concept.0));
        }

        match self.concepts.get_mut(concept.as_usize()) {
            Some(c) => {
                if c.entries
                    .iter()
                    .any(|&id| self.lexicon.entry(id).text == text)
                {
                    self.violations.push(format!(
                        "duplicate entry text `{text}` for concept `{}`",
                        c.key
                    ));
                }

                if c.noun_forms.singular.is_none()
                    && forms
                        .iter()
                        .any(|&f| f == WordForm::NounSingular || f == WordForm::ProperNoun)
                {
                    c.noun_forms.singular = Some(text.to_string());
                }
                if c.noun_forms.plural.is_none() && forms.contains(&WordForm::NounPlural) {
                    c.noun_forms.plural = Some(text.to_string());
                }

                let id = self.lexicon.insert(text.to_string(), concept, forms);
                c.entries.push(id);
                id
            }
            None => {
                self.violations
                    .push(format!("entry `{text}` for unknown concept id {}", concept.0));
                // Keep id assignment monotone even on a doomed build.
                self.lexicon.insert(text.to_string(), concept, forms)
            }
        }
    }

    /// Add a typed relation edge between two concepts.
    pub fn relate(&mut self, source: ConceptId, kind: RelationKind, target: ConceptId) {
        if source.as_usize() >= self.concepts.len() {
            self.violations
                .push(format!("relation source id {} is unknown", source.0));
            return;
        }
        if target.as_usize() >= self.concepts.len() {
            self.violations
                .push(format!("relation target id {} is unknown", target.0));
            return;
        }
        self.edges[source.as_usize()].push(RelationEdge {
            source,
            kind,
            target,
        });
    }

    /// Validate the accumulated batch and publish the ontology.
    ///
    /// Any recorded violation fails the whole load; a partially built
    /// ontology is never returned.
    pub fn build(self) -> Result<Ontology> {
        if let Some(first) = self.violations.first() {
            return Err(LexigraphError::load(format!(
                "{first} ({} violation(s) total)",
                self.violations.len()
            )));
        }

        debug!(
            concepts = self.concepts.len(),
            entries = self.lexicon.len(),
            edges = self.edges.iter().map(Vec::len).sum::<usize>(),
            "ontology built"
        );

        let graph = ConceptGraph::from_parts(self.concepts, self.by_key, self.edges);
        Ok(Ontology::from_parts(graph, self.lexicon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_minimal_ontology() {
        let mut builder = OntologyBuilder::new();
        let fox = builder.concept("t:fox", "fox");
        let mammal = builder.concept("t:mammal", "mammal");
        builder.entry(fox, "fox", vec![WordForm::NounSingular]);
        builder.entry(fox, "foxes", vec![WordForm::NounPlural]);
        builder.entry(mammal, "mammal", vec![WordForm::NounSingular]);
        builder.relate(fox, RelationKind::IsA, mammal);

        let ontology = builder.build().unwrap();
        assert_eq!(ontology.graph().len(), 2);
        assert_eq!(ontology.lexicon().len(), 3);

        let concept = ontology.graph().concept_by_key("t:fox").unwrap();
        assert_eq!(concept.display_singular(), "fox");
        assert_eq!(concept.display_plural(), "foxes");
    }

    #[test]
    fn test_duplicate_concept_key_fails_build() {
        let mut builder = OntologyBuilder::new();
        builder.concept("t:fox", "fox");
        builder.concept("t:fox", "fox again");

        match builder.build() {
            Err(LexigraphError::Load(msg)) => assert!(msg.contains("duplicate concept key")),
            other => panic!("expected load error, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_entry_text_fails_build() {
        let mut builder = OntologyBuilder::new();
        let fox = builder.concept("t:fox", "fox");
        builder.entry(fox, "fox", vec![WordForm::NounSingular]);
        builder.entry(fox, "fox", vec![WordForm::NounSingular]);

        assert!(matches!(builder.build(), Err(LexigraphError::Load(_))));
    }

    #[test]
    fn test_dangling_relation_fails_build() {
        let mut builder = OntologyBuilder::new();
        let fox = builder.concept("t:fox", "fox");
        builder.relate(fox, RelationKind::IsA, ConceptId(42));

        match builder.build() {
            Err(LexigraphError::Load(msg)) => assert!(msg.contains("target id 42")),
            other => panic!("expected load error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_entry_text_fails_build() {
        let mut builder = OntologyBuilder::new();
        let fox = builder.concept("t:fox", "fox");
        builder.entry(fox, "", vec![]);

        assert!(matches!(builder.build(), Err(LexigraphError::Load(_))));
    }
}
