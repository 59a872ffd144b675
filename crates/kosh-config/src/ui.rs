use serde::{Deserialize, Serialize};

fn default_show_romanization() -> bool {
    true
}

fn default_preview_chars() -> usize {
    60
}

fn default_prompt() -> String {
    "शोध> ".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_show_romanization")]
    pub show_romanization: bool,
    /// Definition preview length in the result list
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_romanization: default_show_romanization(),
            preview_chars: default_preview_chars(),
            prompt: default_prompt(),
        }
    }
}
