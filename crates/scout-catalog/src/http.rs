//! HTTP response helper for the catalog fetch.
//!
//! Maps non-success statuses to [`CatalogError::Api`] so the loader stays
//! focused on request construction and document parsing.

use crate::error::CatalogError;

/// Check an HTTP response for error statuses.
///
/// Returns the response unchanged on success; otherwise returns
/// [`CatalogError::Api`] carrying the status code and response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, CatalogError> {
    if !resp.status().is_success() {
        return Err(CatalogError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "{}");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_not_found() {
        let resp = mock_response(404, "no such catalog");
        let err = check_response(resp).await.unwrap_err();
        match err {
            CatalogError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "no such catalog");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn check_response_server_error() {
        let resp = mock_response(500, "");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, CatalogError::Api { status: 500, .. }));
    }
}
