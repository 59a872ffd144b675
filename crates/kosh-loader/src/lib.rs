pub mod loader;
pub mod record;
pub mod source;

pub use loader::{DictionaryLoader, LoadOptions};
pub use record::{ParsedEntries, parse_entries};
pub use source::{EntrySource, FileSource, HttpSource, source_for};
