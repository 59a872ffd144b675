use serde::{Deserialize, Serialize};

use crate::env_parse;

fn default_debounce_ms() -> u64 {
    env_parse("KOSH_DEBOUNCE_MS").unwrap_or(150)
}

fn default_max_results() -> usize {
    env_parse("KOSH_MAX_RESULTS").unwrap_or(10)
}

fn default_max_prefix_len() -> usize {
    6
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Depth of the prefix index, in characters
    #[serde(default = "default_max_prefix_len")]
    pub max_prefix_len: usize,
    /// Apply NFC composition before lowercasing
    #[serde(default)]
    pub unicode_normalize: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            max_results: default_max_results(),
            max_prefix_len: default_max_prefix_len(),
            unicode_normalize: false,
        }
    }
}
