use std::env;

use serde::{Deserialize, Serialize};

use self::search::SearchConfig;
use self::source::SourceConfig;
use self::ui::UiConfig;

pub mod search;
pub mod source;
pub mod ui;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub search: SearchConfig,
    pub ui: UiConfig,

    /// Capacity of the input -> app channel
    pub input_channel_capacity: usize,
    /// Capacity of the app -> ui channel
    pub output_channel_capacity: usize,
}

impl Config {
    /// Built-in defaults, with `KOSH_SOURCE`, `KOSH_FETCH_TIMEOUT_SECONDS`,
    /// `KOSH_DEBOUNCE_MS` and `KOSH_MAX_RESULTS` taking precedence. A config
    /// file gets the same fallback for every field it leaves out.
    pub fn new() -> Self {
        Config {
            source: SourceConfig::default(),
            search: SearchConfig::default(),
            ui: UiConfig::default(),

            input_channel_capacity: 64,
            output_channel_capacity: 256,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
