//! Document fetching.
//!
//! Locations are either `http(s)://` URLs or filesystem paths. The loader
//! only talks to a [`DocumentFetcher`], so tests can count or fake fetches.

use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;

use crate::content::error::FetchError;

#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Fetch and parse one JSON document.
    async fn fetch(&self, location: &str) -> Result<Value, FetchError>;

    /// Whether a document exists at `location`.
    async fn exists(&self, location: &str) -> bool;
}

fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Default fetcher: tokio filesystem access for paths, reqwest for URLs.
#[derive(Debug, Clone, Default)]
pub struct StdFetcher {
    client: reqwest::Client,
}

impl StdFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn fetch_remote(&self, location: &str) -> Result<Value, FetchError> {
        let res = self
            .client
            .get(location)
            .send()
            .await
            .map_err(|source| FetchError::Http {
                location: location.to_string(),
                source,
            })?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                location: location.to_string(),
                status: status.as_u16(),
            });
        }

        let text = res.text().await.map_err(|source| FetchError::Http {
            location: location.to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| FetchError::Parse {
            location: location.to_string(),
            source,
        })
    }

    async fn fetch_local(&self, location: &str) -> Result<Value, FetchError> {
        let bytes = tokio::fs::read(location)
            .await
            .map_err(|source| FetchError::Io {
                location: location.to_string(),
                source,
            })?;
        serde_json::from_slice(&bytes).map_err(|source| FetchError::Parse {
            location: location.to_string(),
            source,
        })
    }
}

#[async_trait]
impl DocumentFetcher for StdFetcher {
    async fn fetch(&self, location: &str) -> Result<Value, FetchError> {
        tracing::debug!(location = %location, "Fetching content document");
        if is_remote(location) {
            self.fetch_remote(location).await
        } else {
            self.fetch_local(location).await
        }
    }

    async fn exists(&self, location: &str) -> bool {
        if is_remote(location) {
            match self.client.get(location).send().await {
                Ok(res) => res.status().is_success(),
                Err(_) => false,
            }
        } else {
            tokio::fs::try_exists(Path::new(location)).await.unwrap_or(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_fetch_and_exists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        std::fs::write(&path, r#"{ "name": "Night Owls" }"#).unwrap();
        let location = path.to_string_lossy().to_string();

        let fetcher = StdFetcher::new();
        let value = fetcher.fetch(&location).await.unwrap();
        assert_eq!(value["name"], "Night Owls");
        assert!(fetcher.exists(&location).await);

        let missing = dir.path().join("missing.json").to_string_lossy().to_string();
        assert!(!fetcher.exists(&missing).await);
        assert!(matches!(fetcher.fetch(&missing).await, Err(FetchError::Io { .. })));
    }

    #[tokio::test]
    async fn test_local_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ broken").unwrap();

        let result = StdFetcher::new().fetch(&path.to_string_lossy()).await;
        assert!(matches!(result, Err(FetchError::Parse { .. })));
    }
}
