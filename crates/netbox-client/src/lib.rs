//! NetBox REST API Client
//!
//! A small client for walking NetBox's DCIM device listing.
//! Devices are fetched lazily, one page at a time, by following the
//! `next` cursor NetBox returns with every page.
//!
//! # Example
//!
//! ```no_run
//! use netbox_client::NetBoxClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client
//! let client = NetBoxClient::new("https://netbox.local", Some("your-api-token"))?;
//!
//! // Walk every device
//! let mut devices = client.devices();
//! while let Some(device) = devices.next_record().await? {
//!     println!("{:?} {:?}", device.name(), device.primary_address());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Lazy pagination**: the next page is requested only once the current one is consumed
//! - **Fail-stop**: any status other than `200 OK` ends the walk with an error
//! - **Pass-through records**: every raw device field stays reachable
//! - **`test-util`**: a scripted `MockTransport` for unit tests

pub mod client;
pub mod common;
pub mod error;
pub mod models;
pub mod pagination;
#[path = "trait.rs"]
pub mod netbox_trait;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;

pub use client::{DEVICES_PATH, NetBoxClient};
pub use common::{HttpClient, PaginatedResponse, Scheme};
pub use error::NetBoxError;
pub use models::DeviceRecord;
pub use netbox_trait::{HttpTransport, RawResponse};
pub use pagination::DevicePager;
#[cfg(any(test, feature = "test-util"))]
pub use mock::{MockTransport, RecordedRequest};
