//! HttpTransport trait for mocking
//!
//! This trait abstracts the HTTP GET used by the pager so that pagination can be
//! exercised against scripted responses. The concrete `HttpClient` implements it,
//! and tests use `MockTransport`.

use crate::error::NetBoxError;

/// Raw HTTP response as seen by the pager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Full response body
    pub body: String,
}

impl RawResponse {
    /// Create a response from a status code and body
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Trait for the GET-only transport the device pager runs on
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    /// Issue a GET on `path` with url-encoded `query` parameters.
    ///
    /// Any status code is returned as-is; interpreting it is the caller's job.
    /// Connection-level failures surface as `NetBoxError::Http`.
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<RawResponse, NetBoxError>;
}
