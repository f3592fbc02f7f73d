//! The JSON ontology document format and its loaders.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{LexigraphError, Result};
use crate::graph::{ConceptId, RelationKind};
use crate::lexicon::WordForm;
use crate::ontology::{Ontology, OntologyBuilder};

/// One lexical entry in a concept document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryDoc {
    /// Surface text.
    pub text: String,
    /// Grammatical capability tags.
    #[serde(default)]
    pub forms: Vec<WordForm>,
}

/// One concept in an ontology document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptDoc {
    /// Unique source key (URI-style).
    pub key: String,
    /// Human-readable name.
    pub name: String,
    /// Dictionary gloss.
    #[serde(default)]
    pub definition: Option<String>,
    /// Surface spellings of this sense.
    #[serde(default)]
    pub entries: Vec<EntryDoc>,
}

/// One relation edge in an ontology document, endpoints given by concept key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationDoc {
    pub source: String,
    pub kind: RelationKind,
    pub target: String,
}

/// A complete bulk-load document: all concepts with their entries, then the
/// relation edges between them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OntologyDoc {
    pub concepts: Vec<ConceptDoc>,
    #[serde(default)]
    pub relations: Vec<RelationDoc>,
}

impl OntologyDoc {
    /// Build and validate an ontology from this document.
    pub fn load(self) -> Result<Ontology> {
        let mut builder = OntologyBuilder::new();
        let mut ids: AHashMap<String, ConceptId> = AHashMap::new();

        for concept in &self.concepts {
            let id = builder.concept(&concept.key, &concept.name);
            ids.insert(concept.key.clone(), id);
            if let Some(definition) = &concept.definition {
                builder.definition(id, definition);
            }
            for entry in &concept.entries {
                builder.entry(id, &entry.text, entry.forms.clone());
            }
        }

        for relation in &self.relations {
            let source = *ids.get(&relation.source).ok_or_else(|| {
                LexigraphError::load(format!(
                    "relation references unknown concept key `{}`",
                    relation.source
                ))
            })?;
            let target = *ids.get(&relation.target).ok_or_else(|| {
                LexigraphError::load(format!(
                    "relation references unknown concept key `{}`",
                    relation.target
                ))
            })?;
            builder.relate(source, relation.kind, target);
        }

        let ontology = builder.build()?;
        info!(
            concepts = ontology.graph().len(),
            entries = ontology.lexicon().len(),
            "ontology document loaded"
        );
        Ok(ontology)
    }
}

/// Load an ontology from a JSON document string.
pub fn from_json_str(json: &str) -> Result<Ontology> {
    let doc: OntologyDoc = serde_json::from_str(json)?;
    doc.load()
}

/// Load an ontology from a JSON document reader.
pub fn from_json_reader<R: Read>(reader: R) -> Result<Ontology> {
    let doc: OntologyDoc = serde_json::from_reader(reader)?;
    doc.load()
}

/// Load an ontology from a JSON document file.
pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Ontology> {
    let file = File::open(path)?;
    from_json_reader(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const DOC: &str = r#"{
        "concepts": [
            {
                "key": "wn:fox-n-1",
                "name": "fox",
                "definition": "a wild carnivorous mammal with a bushy tail",
                "entries": [
                    {"text": "fox", "forms": ["noun_singular"]},
                    {"text": "foxes", "forms": ["noun_plural"]}
                ]
            },
            {
                "key": "wn:mammal-n-1",
                "name": "mammal",
                "entries": [{"text": "mammal", "forms": ["noun_singular"]}]
            }
        ],
        "relations": [
            {"source": "wn:fox-n-1", "kind": "is_a", "target": "wn:mammal-n-1"}
        ]
    }"#;

    #[test]
    fn test_load_from_json_str() {
        let ontology = from_json_str(DOC).unwrap();

        assert_eq!(ontology.graph().len(), 2);
        assert_eq!(ontology.lexicon().len(), 3);

        let fox = ontology.graph().concept_by_key("wn:fox-n-1").unwrap();
        assert_eq!(fox.display_plural(), "foxes");
        assert!(fox.definition.is_some());
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(DOC.as_bytes()).unwrap();
        file.flush().unwrap();

        let ontology = from_json_file(file.path()).unwrap();
        assert_eq!(ontology.graph().len(), 2);
    }

    #[test]
    fn test_unknown_relation_key_fails() {
        let doc = r#"{
            "concepts": [{"key": "a", "name": "a"}],
            "relations": [{"source": "a", "kind": "is_a", "target": "missing"}]
        }"#;

        match from_json_str(doc) {
            Err(LexigraphError::Load(msg)) => assert!(msg.contains("missing")),
            other => panic!("expected load error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_fails() {
        assert!(matches!(
            from_json_str("{not json"),
            Err(LexigraphError::Json(_))
        ));
    }
}
