//! Edit distance used to score approximate lexical matches.

/// Levenshtein distance between two strings, counted in characters.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Single-row DP: row[j] holds the distance between a[..i] and b[..j].
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, &ca) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, &cb) in b.iter().enumerate() {
            let substitution = if ca == cb { diagonal } else { diagonal + 1 };
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(row[j + 1] + 1);
        }
    }

    row[b.len()]
}

/// Levenshtein distance capped at `max`.
///
/// Returns `None` as soon as the distance is known to exceed `max`, which is
/// the common case when scanning a whole lexicon for a few-edit match.
pub fn bounded_edit_distance(a: &str, b: &str, max: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // A length difference alone already costs that many edits.
    if a.len().abs_diff(b.len()) > max {
        return None;
    }

    if a.is_empty() || b.is_empty() {
        let distance = a.len().max(b.len());
        return (distance <= max).then_some(distance);
    }

    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, &ca) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];

        for (j, &cb) in b.iter().enumerate() {
            let substitution = if ca == cb { diagonal } else { diagonal + 1 };
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(row[j + 1] + 1);
            row_min = row_min.min(row[j + 1]);
        }

        // Every later row only grows from here.
        if row_min > max {
            return None;
        }
    }

    let distance = row[b.len()];
    (distance <= max).then_some(distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("", "a"), 1);
        assert_eq!(edit_distance("a", ""), 1);
        assert_eq!(edit_distance("tiger", "tiger"), 0);
        assert_eq!(edit_distance("tiger", "tigers"), 1);
        assert_eq!(edit_distance("hllo", "hello"), 1);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_bounded_edit_distance() {
        assert_eq!(bounded_edit_distance("hllo", "hello", 2), Some(1));
        assert_eq!(bounded_edit_distance("kitten", "sitting", 2), None);
        assert_eq!(bounded_edit_distance("kitten", "sitting", 3), Some(3));
        assert_eq!(bounded_edit_distance("fox", "fox", 0), Some(0));

        // Length difference alone exceeds the cap.
        assert_eq!(bounded_edit_distance("a", "abcd", 2), None);
    }

    #[test]
    fn test_bounded_matches_unbounded() {
        let pairs = [("fox", "box"), ("mammal", "mamal"), ("hello", "goodbye")];
        for (a, b) in pairs {
            let full = edit_distance(a, b);
            assert_eq!(bounded_edit_distance(a, b, full), Some(full));
            if full > 0 {
                assert_eq!(bounded_edit_distance(a, b, full - 1), None);
            }
        }
    }

    #[test]
    fn test_multibyte_characters() {
        // Counted in characters, not bytes.
        assert_eq!(edit_distance("über", "uber"), 1);
        assert_eq!(bounded_edit_distance("naïve", "naive", 1), Some(1));
    }
}
