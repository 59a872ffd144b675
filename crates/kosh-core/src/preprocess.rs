use unicode_normalization::UnicodeNormalization;

/// Folding applied to headwords and queries before they are compared.
/// Both sides must go through the same preprocessor.
pub trait Preprocessor: Send + Sync {
    /// Default folding: lowercase
    fn fold(&self, text: &str) -> String {
        text.to_lowercase()
    }

    /// Query normalization: trim, then fold
    fn normalize_query(&self, query: &str) -> String {
        self.fold(query.trim())
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Composes to NFC before lowercasing, so decomposed input matches composed headwords
pub struct NfcPreprocessor;

impl Preprocessor for NfcPreprocessor {
    fn fold(&self, text: &str) -> String {
        text.nfc().collect::<String>().to_lowercase()
    }
}

/// First `n` characters of `text`
pub fn char_prefix(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
