use std::io::ErrorKind;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use kosh_core::LoadError;

/// Where the raw dictionary document comes from
#[async_trait]
pub trait EntrySource: Send + Sync {
    /// Fetch the whole document
    async fn fetch(&self) -> Result<Vec<u8>, LoadError>;

    /// Human readable location, for logs and metadata
    fn describe(&self) -> String;

    /// Short name derived from the location
    fn name(&self) -> String {
        let described = self.describe();
        let last = described
            .trim_end_matches('/')
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or_default()
            .to_string();
        Path::new(&last)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or(last)
    }
}

pub struct FileSource {
    path: PathBuf,
    max_bytes: u64,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>, max_bytes: u64) -> Self {
        Self {
            path: path.into(),
            max_bytes,
        }
    }
}

#[async_trait]
impl EntrySource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let metadata = match tokio::fs::metadata(&self.path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(LoadError::FileNotFound(self.path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        if metadata.len() > self.max_bytes {
            return Err(LoadError::TooLarge {
                what: "file size",
                limit: self.max_bytes,
            });
        }

        tracing::debug!("Reading {} bytes from {}", metadata.len(), self.path.display());
        Ok(tokio::fs::read(&self.path).await?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

pub struct HttpSource {
    url: String,
    client: reqwest::Client,
    max_bytes: u64,
}

impl HttpSource {
    pub fn new(
        url: impl Into<String>,
        timeout: Duration,
        max_bytes: u64,
    ) -> Result<Self, LoadError> {
        let url = url.into();
        let mut builder = reqwest::Client::builder().timeout(timeout);
        if is_loopback(&url) {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| LoadError::Http(e.to_string()))?;

        Ok(Self {
            url,
            client,
            max_bytes,
        })
    }

    fn too_large(&self) -> LoadError {
        LoadError::TooLarge {
            what: "response size",
            limit: self.max_bytes,
        }
    }
}

#[async_trait]
impl EntrySource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let mut response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        if response
            .content_length()
            .is_some_and(|len| len > self.max_bytes)
        {
            return Err(self.too_large());
        }

        // chunked replies carry no length, so the limit is enforced while reading
        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| LoadError::Http(e.to_string()))?
        {
            if (body.len() + chunk.len()) as u64 > self.max_bytes {
                return Err(self.too_large());
            }
            body.extend_from_slice(&chunk);
        }

        tracing::debug!("Fetched {} bytes from {}", body.len(), self.url);
        Ok(body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Local servers are never reached through a proxy
fn is_loopback(url: &str) -> bool {
    let Some(host) = reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
    else {
        return false;
    };
    let host = host.trim_start_matches('[').trim_end_matches(']');
    host.eq_ignore_ascii_case("localhost")
        || host.parse::<IpAddr>().is_ok_and(|ip| ip.is_loopback())
}

/// Pick a source for a configured location: `http(s)://` URLs go over the
/// network, `file://` URLs and plain paths are read from disk.
pub fn source_for(
    location: &str,
    timeout: Duration,
    max_bytes: u64,
) -> Result<Box<dyn EntrySource>, LoadError> {
    let location = location.trim();
    if location.is_empty() {
        return Err(LoadError::UnsupportedSource("empty location".to_string()));
    }

    if location.starts_with("http://") || location.starts_with("https://") {
        return Ok(Box::new(HttpSource::new(location, timeout, max_bytes)?));
    }

    if let Some(path) = location.strip_prefix("file://") {
        return Ok(Box::new(FileSource::new(path, max_bytes)));
    }

    if location.contains("://") {
        return Err(LoadError::UnsupportedSource(location.to_string()));
    }

    Ok(Box::new(FileSource::new(location, max_bytes)))
}
