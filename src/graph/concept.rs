//! Concepts (word senses) and the typed relations between them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lexicon::EntryId;

/// Identifier of a concept inside a [`ConceptGraph`](crate::graph::ConceptGraph).
///
/// Ids are dense indexes assigned in insertion order during the load phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConceptId(pub u32);

impl ConceptId {
    /// Index into the backing concept table.
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// The kind of a semantic relation edge. A closed enumeration; anything the
/// source data expresses beyond these three maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// The source is a specific instance/subtype of the target.
    IsA,
    /// The source names the same sense as the target.
    SynonymOf,
    /// The source is a part of the target.
    PartOf,
    /// Any other relation carried through from the source data.
    Other,
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RelationKind::IsA => "is a",
            RelationKind::SynonymOf => "synonym of",
            RelationKind::PartOf => "part of",
            RelationKind::Other => "related to",
        };
        f.write_str(name)
    }
}

/// A directed, typed edge between two concepts. Multiple edges of different
/// kinds may connect the same pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationEdge {
    pub source: ConceptId,
    pub kind: RelationKind,
    pub target: ConceptId,
}

/// Display forms of a concept when used as a noun, resolved once at load
/// time from its entries' grammatical tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounForms {
    /// Singular display text, if any entry carries a singular tag.
    pub singular: Option<String>,
    /// Plural display text, if any entry carries a plural tag.
    pub plural: Option<String>,
}

/// A single word sense, grouping all surface words that share that meaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Concept {
    /// Concept id, dense in insertion order.
    pub id: ConceptId,
    /// Unique string key from the source data (URI-style, e.g. `wn:fox-n-1`).
    pub key: String,
    /// Human-readable name.
    pub name: String,
    /// Dictionary gloss, when the source provides one.
    pub definition: Option<String>,
    /// Noun display forms resolved at load time.
    pub noun_forms: NounForms,
    /// Entries owned by this concept, in insertion order.
    pub entries: Vec<EntryId>,
}

impl Concept {
    /// Singular display text, falling back to the concept name.
    pub fn display_singular(&self) -> &str {
        self.noun_forms.singular.as_deref().unwrap_or(&self.name)
    }

    /// Plural display text, falling back to the singular, then to the name.
    pub fn display_plural(&self) -> &str {
        self.noun_forms
            .plural
            .as_deref()
            .unwrap_or_else(|| self.display_singular())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_kind_display() {
        assert_eq!(RelationKind::IsA.to_string(), "is a");
        assert_eq!(RelationKind::PartOf.to_string(), "part of");
    }

    #[test]
    fn test_display_form_fallbacks() {
        let mut concept = Concept {
            id: ConceptId(0),
            key: "wn:fox-n-1".to_string(),
            name: "fox".to_string(),
            definition: None,
            noun_forms: NounForms::default(),
            entries: vec![],
        };
        assert_eq!(concept.display_singular(), "fox");
        assert_eq!(concept.display_plural(), "fox");

        concept.noun_forms.plural = Some("foxes".to_string());
        assert_eq!(concept.display_plural(), "foxes");
    }
}
