//! Catalog loading error types.

use thiserror::Error;

/// Errors that can occur while loading the catalog document.
///
/// Loading is all-or-nothing: any of these leaves the catalog empty and is
/// surfaced to the user as a static error panel. There is no retry path.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog host returned a non-success status code.
    #[error("catalog request failed ({status}): {message}")]
    Api {
        /// HTTP status code returned by the host.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The document could not be parsed as a catalog.
    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Failed to read a local catalog file.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Neither a catalog URL nor a file path was provided.
    #[error("no catalog source configured (set a catalog URL or file path)")]
    NoSource,
}
