//! Human-readable descriptions of word senses ("define X").

use serde::{Deserialize, Serialize};

use ahash::AHashSet;

use crate::error::{LexigraphError, Result};
use crate::graph::{ConceptGraph, RelationKind};
use crate::lexicon::{LexicalEntry, Lexicon, WordForm};

/// One outgoing relation of a described sense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationSummary {
    pub kind: RelationKind,
    /// Name of the target concept.
    pub target: String,
}

/// Everything known about one sense of a surface word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenseDescription {
    /// The surface text that was described.
    pub text: String,
    /// Name of the owning concept.
    pub concept: String,
    /// Dictionary gloss, when the source provides one.
    pub definition: Option<String>,
    /// Other surface texts of the same concept that share at least one
    /// grammatical form with the described entry.
    pub synonyms: Vec<String>,
    /// Outgoing relation edges of the owning concept.
    pub relations: Vec<RelationSummary>,
    /// Grammatical capability tags of the described entry.
    pub forms: Vec<WordForm>,
}

/// Describe a single lexical entry: gloss, form-compatible synonyms and the
/// outgoing relations of its concept.
pub fn describe(
    graph: &ConceptGraph,
    lexicon: &Lexicon,
    entry: &LexicalEntry,
) -> Result<SenseDescription> {
    let concept = graph.concept(entry.concept)?;

    let synonyms: Vec<String> = lexicon
        .entries_for_concept(entry.concept)
        .filter(|sibling| sibling.text != entry.text && sibling.shares_form(entry))
        .map(|sibling| sibling.text.clone())
        .collect();

    let mut relations = Vec::new();
    for edge in graph.edges_from(entry.concept)? {
        relations.push(RelationSummary {
            kind: edge.kind,
            target: graph.concept(edge.target)?.name.clone(),
        });
    }

    Ok(SenseDescription {
        text: entry.text.clone(),
        concept: concept.name.clone(),
        definition: concept.definition.clone(),
        synonyms,
        relations,
        forms: entry.forms.clone(),
    })
}

/// Describe an ambiguous set of entries sharing the same surface text, one
/// description per distinct sense in first-seen order.
pub fn describe_ambiguous(
    graph: &ConceptGraph,
    lexicon: &Lexicon,
    entries: &[&LexicalEntry],
) -> Result<Vec<SenseDescription>> {
    if entries.is_empty() {
        return Err(LexigraphError::contract(
            "describe_ambiguous requires at least one entry",
        ));
    }

    // The first entry of each sense stands for the whole group.
    let mut seen = AHashSet::new();
    let mut descriptions = Vec::new();
    for &entry in entries {
        if seen.insert(entry.concept) {
            descriptions.push(describe(graph, lexicon, entry)?);
        }
    }
    Ok(descriptions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ontology::OntologyBuilder;

    #[test]
    fn test_describe_collects_synonyms_and_relations() {
        let mut builder = OntologyBuilder::new();
        let feline = builder.concept("t:feline", "feline");
        builder.definition(feline, "a carnivorous cat-like mammal");
        let mammal = builder.concept("t:mammal", "mammal");
        builder.entry(feline, "tiger", vec![WordForm::NounSingular]);
        builder.entry(feline, "big cat", vec![WordForm::NounSingular]);
        builder.entry(feline, "tigers", vec![WordForm::NounPlural]);
        builder.entry(mammal, "mammal", vec![WordForm::NounSingular]);
        builder.relate(feline, RelationKind::IsA, mammal);
        let ontology = builder.build().unwrap();

        let entry = ontology
            .lexicon()
            .entries_for_text("tiger")
            .next()
            .unwrap();
        let description = describe(ontology.graph(), ontology.lexicon(), entry).unwrap();

        assert_eq!(description.concept, "feline");
        assert_eq!(
            description.definition.as_deref(),
            Some("a carnivorous cat-like mammal")
        );
        // "tigers" is plural-only, so it does not share a form.
        assert_eq!(description.synonyms, vec!["big cat".to_string()]);
        assert_eq!(
            description.relations,
            vec![RelationSummary {
                kind: RelationKind::IsA,
                target: "mammal".to_string(),
            }]
        );
    }

    #[test]
    fn test_describe_ambiguous_one_per_sense() {
        let mut builder = OntologyBuilder::new();
        let feline = builder.concept("t:tiger-n-1", "tiger (feline)");
        let person = builder.concept("t:tiger-n-2", "tiger (fierce person)");
        builder.entry(feline, "tiger", vec![WordForm::NounSingular]);
        builder.entry(person, "tiger", vec![WordForm::NounSingular]);
        let ontology = builder.build().unwrap();

        let entries: Vec<&LexicalEntry> =
            ontology.lexicon().entries_for_text("tiger").collect();
        let descriptions =
            describe_ambiguous(ontology.graph(), ontology.lexicon(), &entries).unwrap();

        let concepts: Vec<&str> = descriptions.iter().map(|d| d.concept.as_str()).collect();
        assert_eq!(concepts, vec!["tiger (feline)", "tiger (fierce person)"]);
    }
}
