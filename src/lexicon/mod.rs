//! Surface-text lookup: exact and edit-distance-bounded approximate matching
//! over the loaded lexical entries.

pub mod entry;
pub mod levenshtein;
pub mod sensitivity;
pub mod store;

pub use entry::{EntryId, LexicalEntry, WordForm};
pub use sensitivity::MatchSensitivity;
pub use store::{Lexicon, ScoredEntry, Suggestion};
