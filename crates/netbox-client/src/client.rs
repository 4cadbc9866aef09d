//! NetBox API client
//!
//! Entry point for DCIM device listings.
//! Based on NetBox API structure: /api/dcim/devices/

use crate::common::HttpClient;
use crate::error::NetBoxError;
use crate::netbox_trait::HttpTransport;
use crate::pagination::DevicePager;
use std::time::Duration;

/// Device listing endpoint, the first page of every fetch cycle
pub const DEVICES_PATH: &str = "/api/dcim/devices/";

/// NetBox API client
///
/// Generic over the transport so tests can drive it with a scripted
/// `MockTransport`; production code uses the reqwest-backed `HttpClient`.
#[derive(Debug)]
pub struct NetBoxClient<T: HttpTransport = HttpClient> {
    transport: T,
}

impl NetBoxClient<HttpClient> {
    /// Create a new NetBox client
    ///
    /// # Arguments
    /// * `base_url` - NetBox base URL (e.g., "https://netbox.local")
    /// * `token` - Optional API token for authentication
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self, NetBoxError> {
        Ok(Self::from_transport(HttpClient::new(base_url, token, None)?))
    }

    /// Create a new NetBox client with a custom request timeout
    pub fn with_timeout(base_url: &str, token: Option<&str>, timeout: Duration) -> Result<Self, NetBoxError> {
        Ok(Self::from_transport(HttpClient::new(base_url, token, Some(timeout))?))
    }
}

impl<T: HttpTransport> NetBoxClient<T> {
    /// Wrap an existing transport
    pub fn from_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Get the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Lazily page through every device
    pub fn devices(&self) -> DevicePager<'_, T> {
        DevicePager::new(&self.transport, DEVICES_PATH)
    }

    /// Lazily page through devices matching NetBox filter parameters
    ///
    /// # Arguments
    /// * `filters` - Query parameters (e.g., [("status", "active")])
    pub fn devices_filtered(&self, filters: &[(String, String)]) -> DevicePager<'_, T> {
        self.devices().with_query(filters.to_vec())
    }
}
