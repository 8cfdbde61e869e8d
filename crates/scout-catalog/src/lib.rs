//! # scout-catalog
//!
//! Loader for the Scout catalog document.
//!
//! The catalog is a single static JSON document
//! (`{ "servers": [...], "categories": {...} }`) fetched once at startup,
//! either over HTTP or from a local file. Loading is all-or-nothing: on any
//! failure the error is logged and surfaced to the user, the catalog stays
//! empty, and there is no retry for that run.

mod error;
mod http;

pub use error::CatalogError;

use scout_core::Catalog;

/// Where the catalog document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Fetch over HTTP with a single GET request.
    Url(String),
    /// Read from a local file path.
    File(std::path::PathBuf),
}

/// HTTP client for fetching the catalog document.
pub struct CatalogClient {
    http: reqwest::Client,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogClient {
    /// Create a new catalog client with default settings.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("scout/0.1")
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client should build"),
        }
    }

    /// Load the catalog from the given source.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the request or file read fails, the host
    /// returns a non-success status, or the document is malformed.
    pub async fn load(&self, source: &CatalogSource) -> Result<Catalog, CatalogError> {
        let result = match source {
            CatalogSource::Url(url) => self.fetch(url).await,
            CatalogSource::File(path) => Self::load_file(path).await,
        };
        if let Err(error) = &result {
            tracing::error!(%error, "failed to load catalog");
        }
        result
    }

    /// Fetch the catalog document from a URL.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on transport failure, non-success status, or
    /// a malformed document.
    pub async fn fetch(&self, url: &str) -> Result<Catalog, CatalogError> {
        tracing::debug!(url, "fetching catalog");
        let resp = http::check_response(self.http.get(url).send().await?).await?;
        let body = resp.text().await?;
        Ok(parse_document(&body)?)
    }

    /// Read the catalog document from a local file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file cannot be read or the document
    /// is malformed.
    pub async fn load_file(path: &std::path::Path) -> Result<Catalog, CatalogError> {
        tracing::debug!(path = %path.display(), "reading catalog file");
        let body = tokio::fs::read_to_string(path).await?;
        Ok(parse_document(&body)?)
    }
}

/// Parse a raw catalog document.
fn parse_document(body: &str) -> Result<Catalog, serde_json::Error> {
    serde_json::from_str(body)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use scout_core::ServerType;

    use super::*;

    const FIXTURE: &str = r#"{
        "servers": [
            {
                "name": "Git",
                "description": "Tools to read, search, and manipulate Git repositories",
                "category": "dev",
                "type": "Local",
                "repository": "https://github.com/modelcontextprotocol/servers"
            }
        ],
        "categories": {
            "dev": { "name": "Developer Tools", "icon": "fas fa-code" }
        }
    }"#;

    #[test]
    fn parse_document_maps_fields() {
        let catalog = parse_document(FIXTURE).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.servers[0].name, "Git");
        assert_eq!(catalog.servers[0].server_type, ServerType::Local);
        assert_eq!(catalog.category_info("dev").unwrap().name, "Developer Tools");
    }

    #[test]
    fn parse_document_rejects_malformed_json() {
        assert!(parse_document("{ not json").is_err());
        assert!(parse_document(r#"{"servers": "oops"}"#).is_err());
    }

    #[test]
    fn catalog_client_default() {
        let _client = CatalogClient::default();
    }

    #[tokio::test]
    async fn load_file_reads_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("servers.json");
        tokio::fs::write(&path, FIXTURE).await.unwrap();

        let catalog = CatalogClient::load_file(&path).await.unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[tokio::test]
    async fn load_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CatalogClient::load_file(&dir.path().join("absent.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[tokio::test]
    async fn load_file_malformed_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("servers.json");
        tokio::fs::write(&path, "nope").await.unwrap();

        let err = CatalogClient::load_file(&path).await.unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
