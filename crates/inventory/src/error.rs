//! Inventory error types.
//!
//! Every variant is fatal to an inventory run; nothing is retried or
//! downgraded to a warning.

use netbox_client::NetBoxError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building the inventory.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// NetBox transport or protocol error
    #[error("NetBox error: {0}")]
    NetBox(#[from] NetBoxError),

    /// A device record lacks a field the projection needs
    #[error("Device '{host}' is missing required field '{field}'")]
    MalformedRecord {
        /// Device name, or `<unnamed>` when the name itself is missing
        host: String,
        /// Dotted path of the missing field
        field: &'static str,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read
    #[error("Failed to read {path}: {source}")]
    ConfigRead {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Configuration file is not valid YAML for this plugin
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}
