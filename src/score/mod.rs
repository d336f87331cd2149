//! Scoring of a single haystack against a parsed [`Query`]. Lower scores are better, `0` being
//! an exact match, and `None` meaning the haystack doesn't match at all.
//!
//! Both scorers share the same preliminary checks, run on the filtered haystack (see
//! [`Query::filter`]):
//! - rejected by a filter, or fewer chars than the needle: no match
//! - empty needle, or needle equal to the haystack: `0`
//! - needle contained in the haystack: the number of extra chars in the haystack
//!
//! Only when none of these apply do they differ:
//! - [`Proximity`] greedily matches the needle's chars left to right and adds the number of
//!   skipped chars between them to the length difference
//! - [`Levenshtein`] requires 60% of the needle's chars to be found in order, then returns the
//!   edit distance between the needle and the haystack
//!
//! ```text
//! needle: "ca"
//!
//! haystack   proximity
//! "ca"       0            exact
//! "cat"      1            substring, 1 extra char
//! "cart"     2            substring, 2 extra chars
//! "clap"     3            2 extra chars + 1 skipped ("l")
//! "cow"      None         no "a"
//! ```

use std::borrow::Cow;

use crate::query::Query;

mod levenshtein;
mod proximity;

pub use levenshtein::{Levenshtein, edit_distance, levenshtein_score};
pub use proximity::{Proximity, match_score};

/// Scores haystacks against a query. Implementations may carry scratch state, which is why
/// scoring takes `&mut self`. The parallel finders clone one scorer per worker, so state is
/// never shared between threads.
pub trait Scorer: Clone + Send {
    /// Creates a scorer sized for the given query
    fn for_query(query: &Query) -> Self;

    fn score(&mut self, query: &Query, haystack: &str) -> Option<usize>;
}

/// Outcome of the checks shared by every scorer
pub(crate) enum Prematch<'a> {
    /// The score is known without fuzzy matching, or the haystack was rejected
    Scored(Option<usize>),
    /// The haystack requires fuzzy matching
    Fuzzy {
        haystack: Cow<'a, str>,
        haystack_len: usize,
    },
}

pub(crate) fn prematch<'a>(query: &Query, haystack: &'a str) -> Prematch<'a> {
    let Some(haystack) = query.filter(haystack) else {
        return Prematch::Scored(None);
    };

    let needle = query.needle();
    let needle_len = query.needle_len();
    let haystack_len = haystack.chars().count();

    if haystack_len < needle_len {
        Prematch::Scored(None)
    } else if needle.is_empty() || needle == haystack {
        Prematch::Scored(Some(0))
    } else if haystack.contains(needle) {
        Prematch::Scored(Some(haystack_len - needle_len))
    } else {
        Prematch::Fuzzy {
            haystack,
            haystack_len,
        }
    }
}

/// Finds the first occurrence of `c` in the haystack, returning the number of chars skipped
/// before it and the rest of the haystack after it
#[inline]
pub(crate) fn skip_past(haystack: &str, c: char) -> Option<(usize, &str)> {
    haystack
        .char_indices()
        .enumerate()
        .find(|(_, (_, haystack_char))| *haystack_char == c)
        .map(|(skipped, (idx, c))| (skipped, &haystack[idx + c.len_utf8()..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_past() {
        assert_eq!(skip_past("abc", 'a'), Some((0, "bc")));
        assert_eq!(skip_past("abc", 'c'), Some((2, "")));
        assert_eq!(skip_past("abc", 'x'), None);
        assert_eq!(skip_past("", 'x'), None);
        // Skipped count is in chars, not bytes
        assert_eq!(skip_past("ééx!", 'x'), Some((2, "!")));
    }

    fn prescore(query: &str, haystack: &str) -> Option<Option<usize>> {
        match prematch(&Query::parse(query), haystack) {
            Prematch::Scored(score) => Some(score),
            Prematch::Fuzzy { .. } => None,
        }
    }

    #[test]
    fn test_prematch() {
        assert_eq!(prescore("", "anything"), Some(Some(0)));
        assert_eq!(prescore("test", "test"), Some(Some(0)));
        assert_eq!(prescore("test", "TEST"), Some(Some(0)));
        assert_eq!(prescore("test", "testing"), Some(Some(3)));
        assert_eq!(prescore("test", "tes"), Some(None));
        assert_eq!(prescore("*xyz", "testing"), Some(None));
        assert_eq!(prescore("tst", "test"), None);
    }

    #[test]
    fn test_prematch_lengths_in_chars() {
        // "é" is two bytes but a single char
        assert_eq!(prescore("é", "éa"), Some(Some(1)));
        assert_eq!(prescore("ab", "é"), Some(None));
        assert_eq!(prescore("aé", "xaéy"), Some(Some(2)));
    }
}
