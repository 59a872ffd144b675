use crate::entry::Entry;
use crate::index::{MAX_PREFIX_LEN, PrefixIndex};
use crate::preprocess::{DefaultPreprocessor, NfcPreprocessor, Preprocessor};
use crate::search::{self, MAX_RESULTS};

/// Read-only dictionary snapshot
pub trait Dictionary: Send + Sync {
    /// Ranked prefix search, returns entry positions
    fn search(&self, query: &str) -> Vec<usize>;

    /// Entry by position
    fn get(&self, position: usize) -> Option<&Entry>;

    /// Query normalization used by `search`
    fn normalize_query(&self, query: &str) -> String;

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    pub max_results: usize,
    /// Index depth in characters
    pub max_prefix_len: usize,
    pub unicode_normalize: bool,
}

impl SearchOptions {
    /// Pulls `max_results` into `1..=MAX_RESULTS` and `max_prefix_len` into
    /// `1..=MAX_PREFIX_LEN`
    pub fn clamped(self) -> Self {
        Self {
            max_results: self.max_results.clamp(1, MAX_RESULTS),
            max_prefix_len: self.max_prefix_len.clamp(1, MAX_PREFIX_LEN),
            ..self
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_results: MAX_RESULTS,
            max_prefix_len: MAX_PREFIX_LEN,
            unicode_normalize: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryMetadata {
    pub name: String,
    /// Where the entries were loaded from
    pub source: String,
    pub entry_count: usize,
    /// Records dropped while loading
    pub skipped: usize,
}

/// Entries plus their prefix index, built once at load
pub struct PrefixDictionary {
    entries: Vec<Entry>,
    index: PrefixIndex,
    options: SearchOptions,
    preprocessor: Box<dyn Preprocessor>,
    name: String,
    source: String,
    skipped: usize,
}

impl PrefixDictionary {
    pub fn new(entries: Vec<Entry>, options: SearchOptions) -> Self {
        let options = options.clamped();
        let preprocessor: Box<dyn Preprocessor> = if options.unicode_normalize {
            Box::new(NfcPreprocessor)
        } else {
            Box::new(DefaultPreprocessor)
        };
        let index = PrefixIndex::build(&entries, options.max_prefix_len, preprocessor.as_ref());

        Self {
            entries,
            index,
            options,
            preprocessor,
            name: String::new(),
            source: String::new(),
            skipped: 0,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), SearchOptions::default())
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_skipped(mut self, skipped: usize) -> Self {
        self.skipped = skipped;
        self
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

impl Dictionary for PrefixDictionary {
    fn search(&self, query: &str) -> Vec<usize> {
        search::search(
            &self.entries,
            &self.index,
            query,
            self.options.max_results,
            self.preprocessor.as_ref(),
        )
    }

    fn get(&self, position: usize) -> Option<&Entry> {
        self.entries.get(position)
    }

    fn normalize_query(&self, query: &str) -> String {
        self.preprocessor.normalize_query(query)
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: self.name.clone(),
            source: self.source.clone(),
            entry_count: self.entries.len(),
            skipped: self.skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(words: &[&str], options: SearchOptions) -> PrefixDictionary {
        PrefixDictionary::new(words.iter().map(|w| Entry::new(*w, "")).collect(), options)
    }

    #[test]
    fn search_goes_through_the_index() {
        let dict = dictionary(
            &["आई", "आईबाप", "आईस", "बाबा"],
            SearchOptions::default(),
        );
        let results = dict.search("आई");

        assert_eq!(results, vec![0, 2, 1]);
        assert_eq!(dict.get(2).map(|e| e.headword.as_str()), Some("आईस"));
        assert!(dict.get(10).is_none());
    }

    #[test]
    fn max_results_comes_from_options() {
        let options = SearchOptions {
            max_results: 2,
            ..Default::default()
        };
        let dict = dictionary(&["a", "ab", "abc", "abcd"], options);

        assert_eq!(dict.search("a"), vec![0, 1]);
    }

    #[test]
    fn oversized_options_are_clamped() {
        let words: Vec<String> = (0..30).map(|i| format!("a{i}")).collect();
        let words: Vec<&str> = words.iter().map(String::as_str).collect();
        let options = SearchOptions {
            max_results: 25,
            max_prefix_len: 12,
            ..Default::default()
        };
        let dict = dictionary(&words, options);

        assert_eq!(dict.search("a").len(), MAX_RESULTS);
        assert_eq!(dict.options.max_results, MAX_RESULTS);
        assert_eq!(dict.index.depth(), MAX_PREFIX_LEN);
    }

    #[test]
    fn zero_max_results_still_returns_one() {
        let options = SearchOptions {
            max_results: 0,
            ..Default::default()
        };
        let dict = dictionary(&["a", "ab"], options);

        assert_eq!(dict.search("a"), vec![0]);
    }

    #[test]
    fn nfc_option_matches_decomposed_queries() {
        let options = SearchOptions {
            unicode_normalize: true,
            ..Default::default()
        };
        let dict = dictionary(&["\u{00e9}cole"], options);
        assert_eq!(dict.search("E\u{0301}co"), vec![0]);

        let plain = dictionary(&["\u{00e9}cole"], SearchOptions::default());
        assert!(plain.search("E\u{0301}co").is_empty());
    }

    #[test]
    fn metadata_reports_counts() {
        let dict = dictionary(&["a", "b"], SearchOptions::default())
            .with_name("test")
            .with_source("mem")
            .with_skipped(3);

        assert_eq!(
            dict.metadata(),
            DictionaryMetadata {
                name: "test".into(),
                source: "mem".into(),
                entry_count: 2,
                skipped: 3,
            }
        );
    }

    #[test]
    fn empty_dictionary_never_matches() {
        assert!(PrefixDictionary::empty().search("a").is_empty());
    }
}
