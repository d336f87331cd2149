/// Default cap on the number of worker threads used by the chunked finders
pub const MAX_WORKERS: usize = 4;
/// Minimum number of haystacks per worker before the chunked finders go parallel
pub const MIN_CHUNK_LEN: usize = 500;

/// Numerator of the share of the needle's chars (60%) the edit distance scorer requires to be
/// found in order in the haystack before running the full DP
pub const COVERAGE_NUMERATOR: usize = 3;
/// Denominator of the share of the needle's chars, see [`COVERAGE_NUMERATOR`]
pub const COVERAGE_DENOMINATOR: usize = 5;
