use super::{Prematch, Scorer, prematch, skip_past};
use crate::query::Query;

/// Scores by how close together, and in order, the needle's chars appear in the haystack.
///
/// The matching is greedy and leftmost first, it never looks back for a better alignment.
#[derive(Debug, Clone, Copy, Default)]
pub struct Proximity;

impl Scorer for Proximity {
    fn for_query(_query: &Query) -> Self {
        Proximity
    }

    fn score(&mut self, query: &Query, haystack: &str) -> Option<usize> {
        match prematch(query, haystack) {
            Prematch::Scored(score) => score,
            Prematch::Fuzzy {
                haystack,
                haystack_len,
            } => {
                let distance = greedy_distance(query.needle(), &haystack)?;
                Some(haystack_len - query.needle_len() + distance)
            }
        }
    }
}

/// Sum of the chars skipped between consecutive needle chars, when matching each of them to
/// its first occurrence after the previous match. Chars skipped before the first needle char
/// don't count. Returns `None` if a needle char can't be found.
pub(crate) fn greedy_distance(needle: &str, haystack: &str) -> Option<usize> {
    let mut rest = haystack;
    let mut distance = 0;
    for (i, needle_char) in needle.chars().enumerate() {
        let (skipped, after) = skip_past(rest, needle_char)?;
        if i > 0 {
            distance += skipped;
        }
        rest = after;
    }
    Some(distance)
}

/// Scores a single haystack against the query with the [`Proximity`] scorer
///
/// ```rust
/// use fuzzyfind::match_score;
///
/// assert_eq!(match_score("ca", "cart"), Some(2));
/// assert_eq!(match_score("ca", "clap"), Some(3));
/// assert_eq!(match_score("ca", "cow"), None);
/// ```
pub fn match_score(query: &str, haystack: &str) -> Option<usize> {
    Proximity.score(&Query::parse(query), haystack)
}
