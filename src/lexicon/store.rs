//! The in-memory lexical store and its fuzzy lookup.

use ahash::AHashMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::lexicon::entry::{EntryId, LexicalEntry};
use crate::lexicon::sensitivity::MatchSensitivity;

/// A lexical entry paired with its match score (edit distance, lower is
/// better).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredEntry<'a> {
    pub entry: &'a LexicalEntry,
    pub score: usize,
}

/// A ranked "did you mean" suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested surface text.
    pub text: String,
    /// Edit distance from the input.
    pub score: usize,
}

/// An index of all surface texts known to the ontology.
///
/// Built once during the load phase and read-only afterwards; every query
/// method takes `&self` and is safe to call from multiple threads.
#[derive(Debug, Default, Clone)]
pub struct Lexicon {
    entries: Vec<LexicalEntry>,
    by_text: AHashMap<String, Vec<EntryId>>,
    by_folded: AHashMap<String, Vec<EntryId>>,
}

impl Lexicon {
    /// Number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[LexicalEntry] {
        &self.entries
    }

    /// The entry with the given id. Ids handed out by this store are always
    /// valid, so this indexes directly.
    pub fn entry(&self, id: EntryId) -> &LexicalEntry {
        &self.entries[id.as_usize()]
    }

    /// Entries whose surface text equals `text` byte-for-byte, in insertion
    /// order.
    pub fn entries_for_text(&self, text: &str) -> impl Iterator<Item = &LexicalEntry> {
        self.by_text
            .get(text)
            .into_iter()
            .flatten()
            .map(|id| self.entry(*id))
    }

    /// Entries owned by the given concept, in insertion order.
    pub fn entries_for_concept(
        &self,
        concept: crate::graph::ConceptId,
    ) -> impl Iterator<Item = &LexicalEntry> {
        self.entries.iter().filter(move |e| e.concept == concept)
    }

    pub(crate) fn insert(&mut self, text: String, concept: crate::graph::ConceptId, forms: Vec<crate::lexicon::WordForm>) -> EntryId {
        let id = EntryId(self.entries.len() as u32);
        let folded = text.to_lowercase();
        self.by_text.entry(text.clone()).or_default().push(id);
        self.by_folded.entry(folded.clone()).or_default().push(id);
        self.entries.push(LexicalEntry {
            id,
            text,
            folded,
            concept,
            forms,
        });
        id
    }

    /// Find entries matching `input` under the given sensitivity.
    ///
    /// Results are ordered by score ascending, then by how close the
    /// candidate's length is to the input's, then by insertion order. Exact
    /// matches score zero and therefore always precede approximate ones. An
    /// empty result is a normal outcome, not an error.
    pub fn fuzzy_match<'a>(
        &'a self,
        input: &str,
        sensitivity: &MatchSensitivity,
    ) -> Vec<ScoredEntry<'a>> {
        let folded_input = if sensitivity.case_insensitive {
            input.to_lowercase()
        } else {
            String::new()
        };

        let mut matches: Vec<ScoredEntry<'a>> = if sensitivity.max_edit_distance == 0 {
            // Equality only: answer straight from the text indexes.
            let index = if sensitivity.case_insensitive {
                self.by_folded.get(folded_input.as_str())
            } else {
                self.by_text.get(input)
            };
            index
                .into_iter()
                .flatten()
                .map(|id| ScoredEntry {
                    entry: self.entry(*id),
                    score: 0,
                })
                .collect()
        } else {
            // Bounded scan over the whole store. The scan is parallel but the
            // sort below keeps the final ordering deterministic.
            self.entries
                .par_iter()
                .filter_map(|entry| {
                    sensitivity
                        .score(input, &folded_input, entry)
                        .map(|score| ScoredEntry { entry, score })
                })
                .collect()
        };

        let input_len = input.chars().count();
        matches.sort_by_key(|m| {
            (
                m.score,
                m.entry.text.chars().count().abs_diff(input_len),
                m.entry.id,
            )
        });
        matches
    }

    /// Ranked correction suggestions for `input`, capped at `limit`.
    ///
    /// Surface texts are deduplicated and ordered by length-closeness first,
    /// then by score, matching the presentation order of the original demo.
    pub fn suggest(
        &self,
        input: &str,
        sensitivity: &MatchSensitivity,
        limit: usize,
    ) -> Vec<Suggestion> {
        let input_len = input.chars().count();

        let mut suggestions: Vec<Suggestion> = Vec::new();
        for m in self.fuzzy_match(input, sensitivity) {
            if suggestions.iter().any(|s| s.text == m.entry.text) {
                continue;
            }
            suggestions.push(Suggestion {
                text: m.entry.text.clone(),
                score: m.score,
            });
        }

        suggestions
            .sort_by_key(|s| (s.text.chars().count().abs_diff(input_len), s.score));
        suggestions.truncate(limit);
        suggestions
    }
}
