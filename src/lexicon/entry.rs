//! Lexical entries and their grammatical capability tags.

use serde::{Deserialize, Serialize};

use crate::graph::ConceptId;

/// Identifier of a lexical entry inside a [`Lexicon`](crate::lexicon::Lexicon).
///
/// Ids are dense indexes assigned in insertion order during the load phase,
/// which is what makes the stable tie-break in fuzzy matching possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(pub u32);

impl EntryId {
    /// Index into the backing entry table.
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// A grammatical capability of a lexical entry.
///
/// Tags are attached explicitly at load time; nothing in the query path
/// inspects types at runtime to decide noun/verb/adjective handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordForm {
    NounSingular,
    NounPlural,
    ProperNoun,
    Adjective,
    AdjectiveComparative,
    AdjectiveSuperlative,
    Adverb,
    VerbPresent,
    VerbPresentParticiple,
    VerbPast,
    VerbPastParticiple,
    VerbInfinitive,
}

impl WordForm {
    /// True for the noun-valued tags (singular, plural, proper noun).
    pub fn is_noun(self) -> bool {
        matches!(
            self,
            WordForm::NounSingular | WordForm::NounPlural | WordForm::ProperNoun
        )
    }

    /// True for the verb tense tags.
    pub fn is_verb(self) -> bool {
        matches!(
            self,
            WordForm::VerbPresent
                | WordForm::VerbPresentParticiple
                | WordForm::VerbPast
                | WordForm::VerbPastParticiple
                | WordForm::VerbInfinitive
        )
    }
}

/// One surface-text spelling belonging to exactly one concept.
///
/// Entries are immutable after the load phase; the owning concept never
/// changes for the lifetime of the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalEntry {
    /// Entry id, dense in insertion order.
    pub id: EntryId,
    /// The surface text as written.
    pub text: String,
    /// Case-folded surface text, computed once at load time.
    pub folded: String,
    /// The owning concept.
    pub concept: ConceptId,
    /// Grammatical capability tags.
    pub forms: Vec<WordForm>,
}

impl LexicalEntry {
    /// Whether this entry carries the given grammatical tag.
    pub fn has_form(&self, form: WordForm) -> bool {
        self.forms.contains(&form)
    }

    /// Whether this entry shares at least one grammatical tag with `other`.
    ///
    /// Used when enumerating synonyms so that e.g. a plural noun is only
    /// listed against other plural nouns.
    pub fn shares_form(&self, other: &LexicalEntry) -> bool {
        self.forms.iter().any(|f| other.forms.contains(f))
    }
}
