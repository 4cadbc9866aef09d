//! NetBox client errors

use thiserror::Error;

/// Errors that can occur when interacting with the NetBox API
#[derive(Debug, Error)]
pub enum NetBoxError {
    /// Transport-level failure (connection refused, DNS, TLS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// NetBox answered with anything other than `200 OK`
    #[error("NetBox returned HTTP {status} for {path}")]
    UnexpectedStatus {
        /// Status code returned by the server
        status: u16,
        /// Path (or cursor URL) that was being fetched
        path: String,
    },

    /// Response body was not the expected JSON shape
    #[error("Failed to decode response for {path}: {message}")]
    Decode {
        /// Path (or cursor URL) that was being fetched
        path: String,
        /// Decoder error plus a prefix of the offending body
        message: String,
    },

    /// Base URL cannot be used to reach NetBox
    #[error("Invalid NetBox URL '{url}': {reason}")]
    InvalidUrl {
        /// The rejected URL
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// Invalid request (e.g., a token that cannot be sent as a header)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl NetBoxError {
    /// Status code carried by the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
