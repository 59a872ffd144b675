use kosh_types::DisplayResult;

/// What the terminal currently shows
#[derive(Debug, Default)]
pub struct UiState {
    /// Entry in the detail panel, if any
    pub detail: Option<DisplayResult>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }
}
