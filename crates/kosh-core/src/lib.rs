pub mod debounce;
pub mod dictionary;
pub mod entry;
pub mod error;
pub mod index;
pub mod preprocess;
pub mod search;
pub mod session;

pub use debounce::{DebounceState, Debouncer};
pub use dictionary::{Dictionary, DictionaryMetadata, PrefixDictionary, SearchOptions};
pub use entry::Entry;
pub use error::LoadError;
pub use index::{MAX_PREFIX_LEN, PrefixIndex};
pub use preprocess::{DefaultPreprocessor, NfcPreprocessor, Preprocessor};
pub use search::MAX_RESULTS;
pub use session::LookupSession;
