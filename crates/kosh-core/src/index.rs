use std::collections::HashMap;

use crate::entry::Entry;
use crate::preprocess::{Preprocessor, char_prefix};

/// Deepest prefix the index stores, in characters
pub const MAX_PREFIX_LEN: usize = 6;

/// Maps every folded headword prefix of length 1..=depth to the positions
/// of the entries that start with it. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixIndex {
    buckets: HashMap<String, Vec<usize>>,
    depth: usize,
}

impl PrefixIndex {
    pub fn build<P: Preprocessor + ?Sized>(
        entries: &[Entry],
        depth: usize,
        preprocessor: &P,
    ) -> Self {
        let depth = depth.clamp(1, MAX_PREFIX_LEN);
        let mut buckets: HashMap<String, Vec<usize>> = HashMap::new();

        for (position, entry) in entries.iter().enumerate() {
            let folded = preprocessor.fold(&entry.headword);

            for (idx, ch) in folded.char_indices().take(depth) {
                let end = idx + ch.len_utf8();
                buckets
                    .entry(folded[..end].to_string())
                    .or_default()
                    .push(position);
            }
        }

        tracing::debug!(
            "Built prefix index: {} buckets over {} entries (depth {})",
            buckets.len(),
            entries.len(),
            depth
        );

        Self { buckets, depth }
    }

    /// Positions stored under exactly `prefix`
    pub fn bucket(&self, prefix: &str) -> &[usize] {
        self.buckets.get(prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Candidates for an already normalized query, looked up by its first `depth` characters
    pub fn candidates(&self, normalized: &str) -> &[usize] {
        if normalized.is_empty() {
            return &[];
        }
        self.bucket(char_prefix(normalized, self.depth))
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of buckets
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocess::DefaultPreprocessor;

    fn entries(words: &[&str]) -> Vec<Entry> {
        words.iter().map(|w| Entry::new(*w, "")).collect()
    }

    #[test]
    fn every_prefix_up_to_depth_is_indexed() {
        let list = entries(&["Apple", "apricot", "आईबाप", "b"]);
        let index = PrefixIndex::build(&list, 6, &DefaultPreprocessor);

        for (position, entry) in list.iter().enumerate() {
            let folded = entry.headword.to_lowercase();
            for n in 1..=folded.chars().count().min(6) {
                let prefix = char_prefix(&folded, n);
                assert!(
                    index.bucket(prefix).contains(&position),
                    "{prefix} missing {position}"
                );
            }
        }
    }

    #[test]
    fn buckets_keep_entry_order() {
        let list = entries(&["ab", "b", "abc", "a"]);
        let index = PrefixIndex::build(&list, 6, &DefaultPreprocessor);

        assert_eq!(index.bucket("a"), &[0, 2, 3]);
        assert_eq!(index.bucket("ab"), &[0, 2]);
        assert_eq!(index.bucket("abc"), &[2]);
    }

    #[test]
    fn nothing_beyond_depth_or_empty() {
        let list = entries(&["abcdefgh", ""]);
        let index = PrefixIndex::build(&list, 6, &DefaultPreprocessor);

        assert_eq!(index.bucket("abcdef"), &[0]);
        assert!(index.bucket("abcdefg").is_empty());
        assert!(index.bucket("").is_empty());
        assert_eq!(index.len(), 6);
    }

    #[test]
    fn long_queries_use_truncated_key() {
        let list = entries(&["abcdefgh", "abcdefxy"]);
        let index = PrefixIndex::build(&list, 6, &DefaultPreprocessor);

        assert_eq!(index.candidates("abcdefgz"), &[0, 1]);
        assert!(index.candidates("").is_empty());
        assert!(index.candidates("zz").is_empty());
    }

    #[test]
    fn rebuild_is_deterministic() {
        let list = entries(&["आई", "आईबाप", "आईस", "Kosh", "kos"]);
        let first = PrefixIndex::build(&list, 6, &DefaultPreprocessor);
        let second = PrefixIndex::build(&list, 6, &DefaultPreprocessor);

        assert_eq!(first, second);
    }

    #[test]
    fn zero_depth_is_clamped() {
        let list = entries(&["ab"]);
        let index = PrefixIndex::build(&list, 0, &DefaultPreprocessor);

        assert_eq!(index.depth(), 1);
        assert_eq!(index.bucket("a"), &[0]);
    }

    #[test]
    fn deep_depth_is_capped() {
        let list = entries(&["abcdefghij"]);
        let index = PrefixIndex::build(&list, 9, &DefaultPreprocessor);

        assert_eq!(index.depth(), MAX_PREFIX_LEN);
        assert_eq!(index.bucket("abcdef"), &[0]);
        assert!(index.bucket("abcdefg").is_empty());
        assert_eq!(index.candidates("abcdefghi"), &[0]);
    }
}
