use crate::dictionary::Dictionary;

/// Query state and selection of one lookup surface
#[derive(Debug, Default, Clone)]
pub struct LookupSession {
    raw: String,
    normalized: String,
    results: Vec<usize>,
    selection: Option<usize>,
}

impl LookupSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `raw` against the dictionary and store the outcome.
    /// A query that normalizes to empty also drops the selection.
    pub fn run(&mut self, dictionary: &dyn Dictionary, raw: &str) -> &[usize] {
        self.raw = raw.to_string();
        self.normalized = dictionary.normalize_query(raw);
        self.results = dictionary.search(raw);

        if self.normalized.is_empty() {
            self.selection = None;
        }

        &self.results
    }

    /// Select the `index`-th current result, returns its entry position
    pub fn select(&mut self, index: usize) -> Option<usize> {
        let position = self.results.get(index).copied()?;
        self.selection = Some(position);
        Some(position)
    }

    pub fn clear(&mut self) {
        self.raw.clear();
        self.normalized.clear();
        self.results.clear();
        self.selection = None;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selection
    }

    pub fn results(&self) -> &[usize] {
        &self.results
    }

    pub fn query(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn has_query(&self) -> bool {
        !self.normalized.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Entry, PrefixDictionary, SearchOptions};

    fn dictionary() -> PrefixDictionary {
        let entries = ["आई", "आईबाप", "आईस", "घर"]
            .iter()
            .map(|w| Entry::new(*w, format!("definition of {w}")))
            .collect();
        PrefixDictionary::new(entries, SearchOptions::default())
    }

    #[test]
    fn run_stores_query_and_results() {
        let dict = dictionary();
        let mut session = LookupSession::new();

        assert_eq!(session.run(&dict, " आई "), &[0, 2, 1]);
        assert_eq!(session.query(), " आई ");
        assert_eq!(session.normalized(), "आई");
        assert!(session.has_query());
    }

    #[test]
    fn select_maps_result_index_to_position() {
        let dict = dictionary();
        let mut session = LookupSession::new();
        session.run(&dict, "आई");

        assert_eq!(session.select(1), Some(2));
        assert_eq!(session.selected(), Some(2));
        assert_eq!(session.select(7), None);
        assert_eq!(session.selected(), Some(2));
    }

    #[test]
    fn clearing_the_query_clears_the_selection() {
        let dict = dictionary();
        let mut session = LookupSession::new();
        session.run(&dict, "आई");
        session.select(0);

        session.clear();
        assert_eq!(session.selected(), None);
        assert!(session.results().is_empty());
        assert!(!session.has_query());
    }

    #[test]
    fn empty_settled_query_clears_the_selection() {
        let dict = dictionary();
        let mut session = LookupSession::new();
        session.run(&dict, "घ");
        session.select(0);

        assert!(session.run(&dict, "   ").is_empty());
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn new_query_keeps_selection() {
        let dict = dictionary();
        let mut session = LookupSession::new();
        session.run(&dict, "आई");
        session.select(0);

        session.run(&dict, "आईब");
        assert_eq!(session.selected(), Some(0));
    }
}
