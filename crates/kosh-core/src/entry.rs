/// One dictionary record. Identity is its position in the loaded sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    /// Lookup key, original script
    pub headword: String,
    pub romanization: Option<String>,
    /// Full definition text
    pub definition: String,
    /// Entry type / category
    pub entry_type: String,
    /// Source attribution
    pub source: String,
}

impl Entry {
    pub fn new(headword: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            headword: headword.into(),
            definition: definition.into(),
            ..Default::default()
        }
    }

    /// Headword length in characters, used for ranking
    pub fn headword_len(&self) -> usize {
        self.headword.chars().count()
    }
}
