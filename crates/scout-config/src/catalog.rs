//! Catalog source configuration.

use serde::{Deserialize, Serialize};

/// Where the catalog document is loaded from.
///
/// Either `url` or `path` should be set; `path` wins when both are present
/// so a local copy can shadow a remote catalog during development.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// HTTP(S) URL of the catalog document.
    #[serde(default)]
    pub url: String,

    /// Local file path of the catalog document.
    #[serde(default)]
    pub path: String,
}

impl CatalogConfig {
    /// Whether any catalog source is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() || !self.path.is_empty()
    }
}
