//! NetBox device inventory
//!
//! Turns NetBox DCIM devices into hosts for an orchestration runtime:
//! - `host`: projects a raw device into a hostname plus connection variables
//! - `registry`: the `HostRegistry` seam and an in-memory `Inventory`
//! - `assembly`: drives the device pager into a registry
//! - `config`: layered source-file / environment / flag configuration
//!
//! # Example
//!
//! ```no_run
//! use netbox_client::NetBoxClient;
//! use netbox_inventory::{Inventory, populate};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = NetBoxClient::new("https://netbox.local", Some("your-api-token"))?;
//! let mut inventory = Inventory::new();
//! populate(&client, &[], &mut inventory).await?;
//! println!("{}", inventory.to_list_json());
//! # Ok(())
//! # }
//! ```

pub mod assembly;
pub mod config;
pub mod error;
pub mod host;
pub mod registry;

pub use assembly::{populate, register};
pub use config::{InventoryConfig, Settings};
pub use error::InventoryError;
pub use host::{ANSIBLE_PORT, ANSIBLE_USER, HostEntry, project};
pub use registry::{HostRegistry, Inventory};
