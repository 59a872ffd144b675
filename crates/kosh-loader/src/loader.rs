use std::time::Duration;

use kosh_config::source::SourceConfig;
use kosh_core::{LoadError, PrefixDictionary, SearchOptions};

use crate::record::parse_entries;
use crate::source::{EntrySource, source_for};

#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub timeout: Duration,
    pub max_entries: usize,
    pub max_bytes: u64,
    /// Total attempts, at least one is always made
    pub retry_attempts: u32,
    pub retry_delay: Duration,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::from(&SourceConfig::default())
    }
}

impl From<&SourceConfig> for LoadOptions {
    fn from(config: &SourceConfig) -> Self {
        Self {
            timeout: Duration::from_secs(config.timeout_seconds),
            max_entries: config.max_entries,
            max_bytes: config.max_bytes,
            retry_attempts: config.retry_attempts,
            retry_delay: Duration::from_millis(config.retry_delay_ms),
        }
    }
}

/// Fetches a dictionary document and builds the searchable snapshot
pub struct DictionaryLoader {
    source: Box<dyn EntrySource>,
    options: LoadOptions,
    search: SearchOptions,
}

impl DictionaryLoader {
    pub fn new(source: Box<dyn EntrySource>, options: LoadOptions, search: SearchOptions) -> Self {
        Self {
            source,
            options,
            search,
        }
    }

    /// Loader for a configured location (path or URL)
    pub fn from_location(
        location: &str,
        options: LoadOptions,
        search: SearchOptions,
    ) -> Result<Self, LoadError> {
        let source = source_for(location, options.timeout, options.max_bytes)?;
        Ok(Self::new(source, options, search))
    }

    pub fn describe(&self) -> String {
        self.source.describe()
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Single fetch + parse + index build
    pub async fn load_once(&self) -> Result<PrefixDictionary, LoadError> {
        let data = self.source.fetch().await?;

        let max_entries = self.options.max_entries;
        let search = self.search;
        let fallback_name = self.source.name();
        let source = self.source.describe();

        // Parsing and indexing are CPU bound
        tokio::task::spawn_blocking(move || -> Result<PrefixDictionary, LoadError> {
            let parsed = parse_entries(&data, max_entries)?;
            let name = parsed.name.unwrap_or(fallback_name);

            tracing::info!(
                "Building index for {} entries from {}",
                parsed.entries.len(),
                source
            );

            Ok(PrefixDictionary::new(parsed.entries, search)
                .with_name(name)
                .with_source(source)
                .with_skipped(parsed.skipped))
        })
        .await
        .map_err(|e| LoadError::Io(std::io::Error::other(e)))?
    }

    /// Load with retries on transport errors
    pub async fn load(&self) -> Result<PrefixDictionary, LoadError> {
        self.load_with_progress(|_| {}).await
    }

    /// Like `load`, calling `on_attempt` with the 1-based attempt number before each try
    pub async fn load_with_progress(
        &self,
        mut on_attempt: impl FnMut(u32) + Send,
    ) -> Result<PrefixDictionary, LoadError> {
        let attempts = self.options.retry_attempts.max(1);
        let mut attempt = 1;

        loop {
            on_attempt(attempt);
            tracing::info!(
                "Loading dictionary from {} (attempt {}/{})",
                self.source.describe(),
                attempt,
                attempts
            );

            match self.load_once().await {
                Ok(dict) => {
                    tracing::info!("Loaded {} dictionary entries", dict.entry_count());
                    return Ok(dict);
                }
                Err(e) if e.is_retryable() && attempt < attempts => {
                    tracing::warn!("Dictionary load failed, retrying: {}", e);
                    attempt += 1;
                    tokio::time::sleep(self.options.retry_delay).await;
                }
                Err(e) => {
                    tracing::error!("Failed to load dictionary: {}", e);
                    return Err(e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;
    use kosh_core::Dictionary;

    use super::*;

    /// Fails with a transport error a fixed number of times, then serves `data`
    struct FlakySource {
        failures: u32,
        calls: Arc<AtomicU32>,
        data: &'static str,
    }

    #[async_trait]
    impl EntrySource for FlakySource {
        async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                Err(LoadError::Http("connection refused".to_string()))
            } else {
                Ok(self.data.as_bytes().to_vec())
            }
        }

        fn describe(&self) -> String {
            "memory://flaky.json".to_string()
        }
    }

    fn options(retry_attempts: u32) -> LoadOptions {
        LoadOptions {
            retry_attempts,
            retry_delay: Duration::from_millis(1),
            ..Default::default()
        }
    }

    fn flaky(failures: u32, data: &'static str) -> (Box<dyn EntrySource>, Arc<AtomicU32>) {
        let calls = Arc::new(AtomicU32::new(0));
        let source = FlakySource {
            failures,
            calls: calls.clone(),
            data,
        };
        (Box::new(source), calls)
    }

    const DATA: &str = r#"[{"headword": "आई"}, {"headword": "आईबाप"}, {"headword": "आईस"}, 5]"#;

    #[tokio::test]
    async fn builds_a_searchable_snapshot() {
        let (source, _) = flaky(0, DATA);
        let loader = DictionaryLoader::new(source, options(1), SearchOptions::default());
        let dict = loader.load().await.unwrap();

        assert_eq!(dict.search("आई"), vec![0, 2, 1]);

        let metadata = dict.metadata();
        assert_eq!(metadata.name, "flaky");
        assert_eq!(metadata.source, "memory://flaky.json");
        assert_eq!(metadata.entry_count, 3);
        assert_eq!(metadata.skipped, 1);
    }

    #[tokio::test]
    async fn retries_transport_errors() {
        let (source, calls) = flaky(2, DATA);
        let loader = DictionaryLoader::new(source, options(3), SearchOptions::default());

        let mut seen = Vec::new();
        let dict = loader.load_with_progress(|n| seen.push(n)).await.unwrap();

        assert_eq!(dict.entry_count(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(seen, [1, 2, 3]);
    }

    #[tokio::test]
    async fn gives_up_after_configured_attempts() {
        let (source, calls) = flaky(5, DATA);
        let loader = DictionaryLoader::new(source, options(2), SearchOptions::default());

        assert!(matches!(loader.load().await, Err(LoadError::Http(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn parse_errors_are_not_retried() {
        let (source, calls) = flaky(0, "{ broken");
        let loader = DictionaryLoader::new(source, options(3), SearchOptions::default());

        assert!(matches!(loader.load().await, Err(LoadError::Parse(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn loads_from_a_file_location() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shabda.json");
        std::fs::write(
            &path,
            r#"{"name": "Shabda", "entries": [{"word": "घर", "text": "house"}]}"#,
        )
        .unwrap();

        let loader = DictionaryLoader::from_location(
            path.to_str().unwrap(),
            options(1),
            SearchOptions::default(),
        )
        .unwrap();
        let dict = loader.load().await.unwrap();

        assert_eq!(dict.metadata().name, "Shabda");
        assert_eq!(dict.get(0).map(|e| e.definition.as_str()), Some("house"));
    }

    #[tokio::test]
    async fn missing_file_fails_without_retry() {
        let dir = tempfile::tempdir().unwrap();
        let location = dir.path().join("missing.json");
        let loader = DictionaryLoader::from_location(
            location.to_str().unwrap(),
            options(3),
            SearchOptions::default(),
        )
        .unwrap();

        assert!(matches!(loader.load().await, Err(LoadError::FileNotFound(_))));
    }
}
