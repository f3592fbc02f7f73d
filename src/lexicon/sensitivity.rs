//! Match sensitivity policies for lexical lookup.

use serde::{Deserialize, Serialize};

use crate::lexicon::levenshtein::bounded_edit_distance;

/// Policy for approximate lexical matching: whether case is folded before
/// comparison and how many character edits a candidate may be away from the
/// input. Scores are edit distances, so lower is better and zero is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSensitivity {
    /// Fold case before comparing.
    pub case_insensitive: bool,
    /// Maximum accepted edit distance.
    pub max_edit_distance: usize,
}

impl MatchSensitivity {
    /// Byte-for-byte equality only.
    pub fn exact() -> Self {
        MatchSensitivity {
            case_insensitive: false,
            max_edit_distance: 0,
        }
    }

    /// Case-insensitive equality, no edits.
    pub fn insensitive() -> Self {
        MatchSensitivity {
            case_insensitive: true,
            max_edit_distance: 0,
        }
    }

    /// Case-insensitive with up to two edits; the preset used for
    /// "did you mean" style suggestions.
    pub fn insensitive_with_two_edits() -> Self {
        MatchSensitivity {
            case_insensitive: true,
            max_edit_distance: 2,
        }
    }

    /// Score a candidate against the input under this policy.
    ///
    /// Returns `None` when the candidate is out of range, otherwise the edit
    /// distance after any case folding. `input_folded` must be the
    /// case-folded input when `case_insensitive` is set (callers fold once,
    /// not per candidate).
    pub fn score(&self, input: &str, input_folded: &str, candidate: &crate::lexicon::LexicalEntry) -> Option<usize> {
        let (query, target) = if self.case_insensitive {
            (input_folded, candidate.folded.as_str())
        } else {
            (input, candidate.text.as_str())
        };

        if query == target {
            return Some(0);
        }
        if self.max_edit_distance == 0 {
            return None;
        }
        bounded_edit_distance(query, target, self.max_edit_distance)
    }
}
