use super::{Prematch, Scorer, prematch, skip_past};
use crate::query::Query;
use crate::r#const::{COVERAGE_DENOMINATOR, COVERAGE_NUMERATOR};

/// Scores by the edit distance between the needle and the haystack, for queries that may be
/// misspelled. Before computing the distance, 60% of the needle's chars must be found in order
/// in the haystack, otherwise it doesn't match.
///
/// Holds the DP column, reused across every haystack it scores.
#[derive(Debug, Clone, Default)]
pub struct Levenshtein {
    column: Vec<usize>,
}

impl Levenshtein {
    pub fn new(needle: &str) -> Self {
        Self {
            column: Vec::with_capacity(needle.len() + 1),
        }
    }
}

impl Scorer for Levenshtein {
    fn for_query(query: &Query) -> Self {
        Self::new(query.needle())
    }

    fn score(&mut self, query: &Query, haystack: &str) -> Option<usize> {
        let haystack = match prematch(query, haystack) {
            Prematch::Scored(score) => return score,
            Prematch::Fuzzy { haystack, .. } => haystack,
        };

        let min_found = query.needle_len() * COVERAGE_NUMERATOR / COVERAGE_DENOMINATOR;
        if !covers(query.needle(), &haystack, min_found) {
            return None;
        }

        Some(edit_distance(
            query.needle().as_bytes(),
            haystack.as_bytes(),
            &mut self.column,
        ))
    }
}

/// Whether at least `min_found` of the needle's chars appear in order in the haystack,
/// matching each one to its first occurrence after the previous match
fn covers(needle: &str, haystack: &str, min_found: usize) -> bool {
    let mut rest = haystack;
    let mut found = 0;
    for needle_char in needle.chars() {
        if found >= min_found {
            break;
        }
        let Some((_, after)) = skip_past(rest, needle_char) else {
            return false;
        };
        rest = after;
        found += 1;
    }
    true
}

/// Levenshtein distance between two byte strings, with a cost of 1 for insertions, deletions
/// and substitutions. Keeps a single column of the DP matrix in `column`, which is resized and
/// reset on every call.
pub fn edit_distance(needle: &[u8], haystack: &[u8], column: &mut Vec<usize>) -> usize {
    column.clear();
    column.extend(0..=needle.len());

    for (x, &haystack_byte) in haystack.iter().enumerate() {
        let mut diag = column[0];
        column[0] = x + 1;

        for (y, &needle_byte) in needle.iter().enumerate() {
            let up = column[y + 1];
            let cost = usize::from(needle_byte != haystack_byte);
            column[y + 1] = (up + 1).min(column[y] + 1).min(diag + cost);
            diag = up;
        }
    }

    column[needle.len()]
}

/// Scores a single haystack against the query with the [`Levenshtein`] scorer
///
/// ```rust
/// use fuzzyfind::levenshtein_score;
///
/// assert_eq!(levenshtein_score("tset", "test"), Some(2));
/// assert_eq!(levenshtein_score("tast", "tent"), None);
/// ```
pub fn levenshtein_score(query: &str, haystack: &str) -> Option<usize> {
    let query = Query::parse(query);
    Levenshtein::for_query(&query).score(&query, haystack)
}
