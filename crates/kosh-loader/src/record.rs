use kosh_core::{Entry, LoadError};
use serde::Deserialize;
use serde_json::Value;

// Accepted layouts: a bare array of records, or an object wrapping them
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Document {
    List(Vec<Value>),
    Wrapped {
        #[serde(default)]
        name: Option<String>,
        entries: Vec<Value>,
    },
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default, alias = "word")]
    headword: String,
    #[serde(default, alias = "roman")]
    romanization: Option<String>,
    #[serde(default, alias = "text", alias = "full_text")]
    definition: String,
    #[serde(default, rename = "type")]
    entry_type: String,
    #[serde(default)]
    source: String,
}

impl From<RawRecord> for Entry {
    fn from(raw: RawRecord) -> Self {
        Entry {
            headword: raw.headword,
            romanization: raw.romanization.filter(|r| !r.is_empty()),
            definition: raw.definition,
            entry_type: raw.entry_type,
            source: raw.source,
        }
    }
}

#[derive(Debug, Default)]
pub struct ParsedEntries {
    /// Name declared by the document, if any
    pub name: Option<String>,
    pub entries: Vec<Entry>,
    /// Records that could not be read as an entry
    pub skipped: usize,
}

/// Parse a JSON dictionary document.
///
/// Missing fields come through empty. Records that are not objects, or whose
/// fields have the wrong type, are skipped and counted.
pub fn parse_entries(data: &[u8], max_entries: usize) -> Result<ParsedEntries, LoadError> {
    let document: Document =
        serde_json::from_slice(data).map_err(|e| LoadError::Parse(e.to_string()))?;

    let (name, records) = match document {
        Document::List(records) => (None, records),
        Document::Wrapped { name, entries } => (name, entries),
    };

    if records.len() > max_entries {
        return Err(LoadError::TooLarge {
            what: "entry count",
            limit: max_entries as u64,
        });
    }

    let mut parsed = ParsedEntries {
        name,
        entries: Vec::with_capacity(records.len()),
        skipped: 0,
    };

    for (idx, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<RawRecord>(record) {
            Ok(raw) => parsed.entries.push(raw.into()),
            Err(e) => {
                tracing::warn!("Skipping record {}: {}", idx, e);
                parsed.skipped += 1;
            }
        }
    }

    if parsed.skipped > 0 {
        tracing::warn!(
            "Skipped {} malformed records out of {}",
            parsed.skipped,
            parsed.skipped + parsed.entries.len()
        );
    }

    Ok(parsed)
}
