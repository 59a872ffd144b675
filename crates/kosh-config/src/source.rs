use std::env;

use serde::{Deserialize, Serialize};

use crate::env_parse;

fn default_location() -> String {
    env::var("KOSH_SOURCE").unwrap_or_else(|_| "data/dictionary.json".to_string())
}

fn default_timeout_seconds() -> u64 {
    env_parse("KOSH_FETCH_TIMEOUT_SECONDS").unwrap_or(30)
}

fn default_max_entries() -> usize {
    500_000
}

fn default_max_bytes() -> u64 {
    64 * 1024 * 1024
}

fn default_retry_attempts() -> u32 {
    2
}

fn default_retry_delay_ms() -> u64 {
    500
}

/// Where the dictionary data is fetched from and how much of it is accepted
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SourceConfig {
    /// File path or http(s) URL
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,
    /// Automatic attempts before reporting failure
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            location: default_location(),
            timeout_seconds: default_timeout_seconds(),
            max_entries: default_max_entries(),
            max_bytes: default_max_bytes(),
            retry_attempts: default_retry_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}
