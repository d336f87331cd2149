//! Fuzzyfind is a fuzzy string matcher that ranks a list of haystacks against a query. It scores
//! with one of two heuristics, both lower-is-better with `0` for an exact match:
//! - Proximity: how many extra chars the haystack has, plus how far apart the query's chars are
//!   in the haystack
//! - Levenshtein: the edit distance between the query and the haystack, for misspelled queries
//!
//! Queries may include filters, separated by spaces, which haystacks must pass before being
//! scored:
//! - `*foo`: must contain `foo`
//! - `$foo`: must end with `foo`
//! - `^foo`: must start with `foo`
//! - `?re`: must match the regex `re`
//! - `!*foo`, `!$foo`, `!^foo`, `!?re`: must not pass the filter
//!
//! Text matched by `*`, `$` and `^` is removed before scoring. Matching is case insensitive unless
//! the query (ignoring filters) contains an uppercase char. Whitespace is ignored.
//!
//! # Example: using `find`
//!
//! ```rust
//! use fuzzyfind::{find, sort_matches, Match};
//!
//! let haystacks = ["cart", "clap", "ca", "cat", "cow"];
//!
//! let mut matches = find("ca", &haystacks);
//! sort_matches(&mut matches);
//! assert_eq!(
//!     matches,
//!     [
//!         Match { score: 0, position: 2 },
//!         Match { score: 1, position: 3 },
//!         Match { score: 2, position: 0 },
//!         Match { score: 3, position: 1 },
//!     ]
//! );
//!
//! // Only haystacks ending in "t", scored without the "t"
//! let mut matches = find("$t ca", &haystacks);
//! sort_matches(&mut matches);
//! assert_eq!(matches, [Match { score: 0, position: 3 }, Match { score: 1, position: 0 }]);
//! ```
//!
//! # Example: using `chunk_find`
//!
//! For large lists of haystacks, `chunk_find` and `chunk_levenshtein_find` match chunks of the
//! list on up to 4 threads. The results are the same as their single threaded counterparts,
//! though not necessarily in the same order.
//!
//! ```rust
//! use fuzzyfind::{chunk_levenshtein_find, levenshtein_find};
//!
//! let haystacks = (0..10_000).map(|i| format!("test{i}")).collect::<Vec<_>>();
//!
//! let mut matches = chunk_levenshtein_find("tset", &haystacks)?;
//! let mut expected = levenshtein_find("tset", &haystacks);
//! matches.sort_unstable();
//! expected.sort_unstable();
//! assert_eq!(matches, expected);
//! # Ok::<(), fuzzyfind::Error>(())
//! ```
//!
//! # Example: using `Finder`
//!
//! Useful for when you want to match one query against more than one list of haystacks.
//!
//! ```rust
//! use fuzzyfind::Finder;
//!
//! let mut finder = Finder::levenshtein("tset");
//! let matches = finder.find(&["test", "example"]);
//! assert_eq!(matches[0].score, 2);
//! assert_eq!(finder.score("tsetse"), Some(2));
//! ```

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod r#const;
mod error;
mod one_shot;
pub mod query;
pub mod score;

pub use error::{Error, Result};
pub use one_shot::{
    Finder, chunk_find, chunk_find_with, chunk_levenshtein_find, chunk_levenshtein_find_with,
    find, find_with, levenshtein_find, levenshtein_find_with,
};
pub use query::Query;
pub use score::{levenshtein_score, match_score};

use r#const::*;

#[derive(Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Match {
    /// Lower is better, `0` being an exact match
    pub score: usize,
    /// Index of the match in the original list of haystacks
    pub position: usize,
}

/// Orders by score ascending, then by position ascending
impl PartialOrd for Match {
    fn partial_cmp(&self, other: &Match) -> Option<Ordering> {
        Some(std::cmp::Ord::cmp(self, other))
    }
}
impl Ord for Match {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| self.position.cmp(&other.position))
    }
}
impl PartialEq for Match {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score && self.position == other.position
    }
}
impl Eq for Match {}

/// Sorts matches by score, best first, with ties broken by position
pub fn sort_matches(matches: &mut [Match]) {
    #[cfg(feature = "parallel_sort")]
    {
        use rayon::prelude::*;
        matches.par_sort_unstable();
    }
    #[cfg(not(feature = "parallel_sort"))]
    matches.sort_unstable();
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Sort the results by score (ascending), then position
    pub sort: bool,
    /// Maximum number of threads used by the chunked finders. The number of threads is also
    /// capped to half of the available parallelism.
    pub max_workers: usize,
    /// The chunked finders only use threads when there are more than `min_chunk_len`
    /// haystacks per thread
    pub min_chunk_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sort: false,
            max_workers: MAX_WORKERS,
            min_chunk_len: MIN_CHUNK_LEN,
        }
    }
}
