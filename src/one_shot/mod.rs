use crate::error::Result;
use crate::score::{Levenshtein, Proximity, Scorer};
use crate::{Config, Match, sort_matches};

mod finder;
mod parallel;

pub use finder::Finder;

/// Finds the haystacks matching the query with the [`Proximity`] scorer, returning one
/// [`Match`] per matching haystack in the order of the haystacks. Use [`sort_matches`] to rank
/// them, or [`find_with`] with [`Config::sort`].
pub fn find<H: AsRef<str>>(query: &str, haystacks: &[H]) -> Vec<Match> {
    find_impl::<Proximity, H>(query, haystacks, &Config::default())
}

pub fn find_with<H: AsRef<str>>(query: &str, haystacks: &[H], config: &Config) -> Vec<Match> {
    find_impl::<Proximity, H>(query, haystacks, config)
}

/// Same as [`find`], but scores with the [`Levenshtein`] scorer, for queries that may be
/// misspelled. A haystack must contain 60% of the query's chars, in order, to match.
pub fn levenshtein_find<H: AsRef<str>>(query: &str, haystacks: &[H]) -> Vec<Match> {
    find_impl::<Levenshtein, H>(query, haystacks, &Config::default())
}

pub fn levenshtein_find_with<H: AsRef<str>>(
    query: &str,
    haystacks: &[H],
    config: &Config,
) -> Vec<Match> {
    find_impl::<Levenshtein, H>(query, haystacks, config)
}

/// Same as [`find`], but splits large lists of haystacks into chunks matched on up to 4
/// threads. The matches are the same as [`find`] would return, positions included.
///
/// Returns an error if one of the threads panicked.
pub fn chunk_find<H: AsRef<str> + Sync>(query: &str, haystacks: &[H]) -> Result<Vec<Match>> {
    parallel::chunk_find_impl::<Proximity, H>(query, haystacks, &Config::default())
}

pub fn chunk_find_with<H: AsRef<str> + Sync>(
    query: &str,
    haystacks: &[H],
    config: &Config,
) -> Result<Vec<Match>> {
    parallel::chunk_find_impl::<Proximity, H>(query, haystacks, config)
}

/// Same as [`levenshtein_find`], split into chunks like [`chunk_find`]
pub fn chunk_levenshtein_find<H: AsRef<str> + Sync>(
    query: &str,
    haystacks: &[H],
) -> Result<Vec<Match>> {
    parallel::chunk_find_impl::<Levenshtein, H>(query, haystacks, &Config::default())
}

pub fn chunk_levenshtein_find_with<H: AsRef<str> + Sync>(
    query: &str,
    haystacks: &[H],
    config: &Config,
) -> Result<Vec<Match>> {
    parallel::chunk_find_impl::<Levenshtein, H>(query, haystacks, config)
}

pub(crate) fn find_impl<S: Scorer, H: AsRef<str>>(
    query: &str,
    haystacks: &[H],
    config: &Config,
) -> Vec<Match> {
    let mut matches = Finder::<S>::new(query).find(haystacks);
    if config.sort {
        sort_matches(&mut matches);
    }
    matches
}
