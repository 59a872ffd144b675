use crate::entry::Entry;
use crate::index::PrefixIndex;
use crate::preprocess::Preprocessor;

/// Hard cap on the number of results a query returns
pub const MAX_RESULTS: usize = 10;

/// Prefix query over the index.
///
/// Returns entry positions whose folded headword starts with the normalized
/// query, shortest headword first (stable on ties), at most `max_results`
/// and never more than [`MAX_RESULTS`].
/// Empty or whitespace-only queries return nothing.
pub fn search<P: Preprocessor + ?Sized>(
    entries: &[Entry],
    index: &PrefixIndex,
    query: &str,
    max_results: usize,
    preprocessor: &P,
) -> Vec<usize> {
    let normalized = preprocessor.normalize_query(query);
    if normalized.is_empty() || entries.is_empty() {
        return Vec::new();
    }

    let candidates = index.candidates(&normalized);

    // A bucket keyed by the whole query already holds exact prefix matches.
    let mut results: Vec<usize> = if normalized.chars().count() <= index.depth() {
        candidates.to_vec()
    } else {
        candidates
            .iter()
            .copied()
            .filter(|&pos| {
                entries
                    .get(pos)
                    .is_some_and(|e| preprocessor.fold(&e.headword).starts_with(&normalized))
            })
            .collect()
    };

    results.sort_by_cached_key(|&pos| entries.get(pos).map_or(usize::MAX, Entry::headword_len));
    results.truncate(max_results.min(MAX_RESULTS));
    results
}
