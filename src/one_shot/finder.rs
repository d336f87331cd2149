use crate::query::Query;
use crate::score::{Levenshtein, Proximity, Scorer};
use crate::Match;

/// A parsed query paired with a scorer. Useful for when you want to match one query against
/// more than one list of haystacks, since the query is only parsed once and the scorer's
/// scratch space is reused.
///
/// ```rust
/// use fuzzyfind::{Finder, Match, score::Proximity};
///
/// let mut finder = Finder::<Proximity>::new("ca");
/// assert_eq!(finder.find(&["cart", "cow"]), vec![Match { score: 2, position: 0 }]);
/// assert_eq!(finder.find(&["cat"]), vec![Match { score: 1, position: 0 }]);
/// ```
#[derive(Debug, Clone)]
pub struct Finder<S> {
    query: Query,
    scorer: S,
}

impl Finder<Proximity> {
    pub fn proximity(query: &str) -> Self {
        Self::new(query)
    }
}

impl Finder<Levenshtein> {
    pub fn levenshtein(query: &str) -> Self {
        Self::new(query)
    }
}

impl<S: Scorer> Finder<S> {
    pub fn new(query: &str) -> Self {
        Self::from_query(Query::parse(query))
    }

    pub fn from_query(query: Query) -> Self {
        let scorer = S::for_query(&query);
        Self { query, scorer }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn score(&mut self, haystack: &str) -> Option<usize> {
        self.scorer.score(&self.query, haystack)
    }

    /// Scores every haystack, returning the matches in the order of the haystacks
    pub fn find<H: AsRef<str>>(&mut self, haystacks: &[H]) -> Vec<Match> {
        let mut matches = Vec::with_capacity(haystacks.len());
        self.find_into(haystacks, 0, &mut matches);
        matches
    }

    /// Scores every haystack, appending the matches to `matches` with their position offset
    /// by `position_offset`
    pub(crate) fn find_into<H: AsRef<str>>(
        &mut self,
        haystacks: &[H],
        position_offset: usize,
        matches: &mut Vec<Match>,
    ) {
        for (i, haystack) in haystacks.iter().enumerate() {
            if let Some(score) = self.score(haystack.as_ref()) {
                matches.push(Match {
                    score,
                    position: position_offset + i,
                });
            }
        }
    }
}
