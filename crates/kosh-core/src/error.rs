#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported source: {0}")]
    UnsupportedSource(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("HTTP status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Dataset too large: {what} exceeds limit of {limit}")]
    TooLarge { what: &'static str, limit: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoadError {
    /// Transport failures may succeed on another attempt, bad data won't
    pub fn is_retryable(&self) -> bool {
        match self {
            LoadError::Http(_) | LoadError::Io(_) => true,
            LoadError::Status { status, .. } => *status >= 500 || *status == 429,
            LoadError::FileNotFound(_)
            | LoadError::UnsupportedSource(_)
            | LoadError::Parse(_)
            | LoadError::TooLarge { .. } => false,
        }
    }
}
