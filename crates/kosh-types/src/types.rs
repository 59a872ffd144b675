#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Search box content changed
    QueryInput(String),
    /// Clear button
    ClearQuery,
    /// Result clicked, 0-based position in the current result list
    SelectResult(usize),
    /// Retry a failed dictionary load
    RetryLoad,
    UiEvent(UiEvent),
    ShowResults {
        query: String,
        results: Vec<DisplayResult>,
    },
    /// `None` hides the detail panel
    ShowDetail(Option<DisplayResult>),
    LoadStatusUpdate(LoadStatus),
    Quit,
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    ShowHelp,
    /// One-line notice, e.g. an out of range selection
    Message(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayResult {
    /// Position of the entry in the loaded dictionary
    pub position: usize,
    pub headword: String,
    pub romanization: Option<String>,
    pub definition: String,
    pub entry_type: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading {
        source: String,
        attempt: u32,
    },
    Ready {
        name: String,
        entry_count: usize,
        skipped: usize,
    },
    Failed {
        message: String,
    },
}

impl LoadStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadStatus::Ready { .. })
    }
}
