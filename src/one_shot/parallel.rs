use itertools::Itertools;
use std::num::NonZeroUsize;
use std::thread;

use super::{Finder, find_impl};
use crate::error::{Error, Result};
use crate::score::Scorer;
use crate::{Config, Match};

/// Number of workers the chunked finders use for the given number of haystacks, or `None` if
/// the haystacks should be matched on the calling thread
pub(crate) fn worker_count(haystacks_len: usize, config: &Config) -> Option<usize> {
    let parallelism = thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1);
    workers_for(haystacks_len, config, parallelism)
}

fn workers_for(haystacks_len: usize, config: &Config, parallelism: usize) -> Option<usize> {
    let workers = config.max_workers.min(parallelism / 2);

    if workers <= 1 || haystacks_len <= workers.saturating_mul(config.min_chunk_len) {
        None
    } else {
        Some(workers)
    }
}

pub(crate) fn chunk_find_impl<S, H>(
    query: &str,
    haystacks: &[H],
    config: &Config,
) -> Result<Vec<Match>>
where
    S: Scorer,
    H: AsRef<str> + Sync,
{
    match worker_count(haystacks.len(), config) {
        Some(workers) => find_parallel(Finder::<S>::new(query), haystacks, config, workers),
        None => {
            tracing::debug!(haystacks = haystacks.len(), "matching on the calling thread");
            Ok(find_impl::<S, H>(query, haystacks, config))
        }
    }
}

/// Splits the haystacks into contiguous chunks of `len / workers` haystacks, matching each chunk
/// on its own thread with its own clone of the finder. When the length doesn't divide evenly,
/// the remainder becomes an extra, smaller chunk.
///
/// Every thread is joined before returning, so a panic in one chunk doesn't stop the others. The
/// first panicked chunk is reported as [`Error::WorkerPanicked`].
pub(crate) fn find_parallel<S, H>(
    finder: Finder<S>,
    haystacks: &[H],
    config: &Config,
    workers: usize,
) -> Result<Vec<Match>>
where
    S: Scorer,
    H: AsRef<str> + Sync,
{
    if haystacks.is_empty() {
        return Ok(vec![]);
    }

    let chunk_size = (haystacks.len() / workers.max(1)).max(1);
    tracing::debug!(
        haystacks = haystacks.len(),
        workers,
        chunk_size,
        chunks = haystacks.len().div_ceil(chunk_size),
        "matching in parallel"
    );

    let chunks: Vec<Result<Vec<Match>>> = thread::scope(|s| {
        let handles: Vec<_> = haystacks
            .chunks(chunk_size)
            .enumerate()
            .map(|(chunk_idx, haystacks_chunk)| {
                let start = chunk_idx * chunk_size;
                let mut finder = finder.clone();
                let handle = s.spawn(move || {
                    let mut local_matches = Vec::new();
                    finder.find_into(haystacks_chunk, start, &mut local_matches);

                    // Each thread sorts so that we can perform k-way merge
                    if config.sort {
                        local_matches.sort_unstable();
                    }

                    local_matches
                });
                (chunk_idx, start..start + haystacks_chunk.len(), handle)
            })
            .collect();

        handles
            .into_iter()
            .map(|(chunk_idx, range, handle)| {
                handle.join().map_err(|payload| {
                    let err = Error::worker_panicked(chunk_idx, range, payload);
                    tracing::warn!(%err, "chunk failed");
                    err
                })
            })
            .collect()
    });

    let chunks = chunks.into_iter().collect::<Result<Vec<_>>>()?;
    if config.sort {
        Ok(chunks.into_iter().kmerge().collect())
    } else {
        Ok(chunks.concat())
    }
}
