//! Common utilities for NetBox API client
//!
//! Provides the HTTP adapter shared by every request in a fetch cycle.

pub mod query;

use crate::error::NetBoxError;
use crate::netbox_trait::{HttpTransport, RawResponse};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default request timeout, matching what NetBox deployments usually tolerate
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Paginated response wrapper from NetBox API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Total number of objects across all pages
    #[serde(default)]
    pub count: Option<u64>,
    /// Cursor of the following page; `None` on the last page
    #[serde(default)]
    pub next: Option<String>,
    /// Cursor of the preceding page
    #[serde(default)]
    pub previous: Option<String>,
    /// Objects on this page, in server order
    pub results: Vec<T>,
}

/// Transport selected from the base URL scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// `http://`
    Plain,
    /// `https://`, TLS via rustls
    Tls,
}

impl Scheme {
    fn from_url(url: &Url) -> Option<Self> {
        match url.scheme() {
            "http" => Some(Self::Plain),
            "https" => Some(Self::Tls),
            _ => None,
        }
    }
}

/// HTTP client wrapper with authentication
///
/// Holds one pooled `reqwest::Client`, so every page of a fetch cycle reuses
/// the same connection to the NetBox host.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    origin: String,
    scheme: Scheme,
    headers: HeaderMap,
}

impl HttpClient {
    /// Create a new HTTP client wrapper
    ///
    /// # Arguments
    /// * `base_url` - NetBox base URL including scheme (e.g., "https://netbox.local")
    /// * `token` - API token; the `Authorization` header is only set when non-empty
    /// * `timeout` - Per-request timeout, `DEFAULT_TIMEOUT` when `None`
    pub fn new(base_url: &str, token: Option<&str>, timeout: Option<Duration>) -> Result<Self, NetBoxError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed).map_err(|e| NetBoxError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        let scheme = Scheme::from_url(&parsed).ok_or_else(|| NetBoxError::InvalidUrl {
            url: base_url.to_string(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        })?;
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(NetBoxError::InvalidUrl {
                url: base_url.to_string(),
                reason: "missing host".to_string(),
            });
        }

        let headers = auth_headers(token)?;
        let client = Client::builder()
            .default_headers(headers.clone())
            .https_only(scheme == Scheme::Tls)
            .pool_max_idle_per_host(1)
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()?;

        debug!(
            "NetBox client for {} ({:?}, authenticated: {})",
            trimmed,
            scheme,
            headers.contains_key(AUTHORIZATION)
        );

        Ok(Self {
            client,
            base_url: trimmed.to_string(),
            origin: parsed.origin().ascii_serialization(),
            scheme,
            headers,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Transport chosen for this host
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Headers sent with every request
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Build a full URL from a path or a `next` cursor
    ///
    /// Relative paths are joined to the base URL. Absolute cursors keep only
    /// their path and query and are re-rooted on the configured origin, so
    /// a request never reaches a host other than the configured one.
    pub fn build_url(&self, path: &str) -> Result<String, NetBoxError> {
        if path.starts_with('/') {
            return Ok(format!("{}{}", self.base_url, path));
        }

        let cursor = Url::parse(path).map_err(|e| NetBoxError::InvalidUrl {
            url: path.to_string(),
            reason: e.to_string(),
        })?;
        let cursor_origin = cursor.origin().ascii_serialization();
        if cursor_origin != self.origin {
            debug!("cursor origin {} differs from {}, keeping path only", cursor_origin, self.origin);
        }

        let mut url = format!("{}{}", self.origin, cursor.path());
        if let Some(query) = cursor.query() {
            url.push('?');
            url.push_str(query);
        }
        Ok(url)
    }
}

fn auth_headers(token: Option<&str>) -> Result<HeaderMap, NetBoxError> {
    let mut headers = HeaderMap::new();
    if let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) {
        let mut value = HeaderValue::from_str(&format!("Token {token}"))
            .map_err(|e| NetBoxError::InvalidRequest(format!("token is not a valid header value: {e}")))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }
    Ok(headers)
}

#[async_trait::async_trait]
impl HttpTransport for HttpClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<RawResponse, NetBoxError> {
        let url = query::append_query(&self.build_url(path)?, query);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}
