//! NetBox API models
//!
//! Devices are kept as raw JSON objects: only a handful of fields are read
//! by the inventory, and everything else is passed through untouched.
//! See: netbox/netbox/dcim/api/serializers_/devices.py

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A device as returned by `/api/dcim/devices/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceRecord(Map<String, Value>);

impl DeviceRecord {
    /// Device name (`name`)
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// The `primary_ip` object, `None` when absent or null
    pub fn primary_ip(&self) -> Option<&Map<String, Value>> {
        self.0.get("primary_ip").and_then(Value::as_object)
    }

    /// CIDR-suffixed primary address (`primary_ip.address`, e.g. "10.0.0.1/24")
    pub fn primary_address(&self) -> Option<&str> {
        self.primary_ip()
            .and_then(|ip| ip.get("address"))
            .and_then(Value::as_str)
    }

    /// Tags exactly as NetBox sent them
    pub fn tags(&self) -> Option<&Value> {
        self.0.get("tags")
    }

    /// Status value (`status.value`, e.g. "active")
    pub fn status_value(&self) -> Option<&str> {
        self.0
            .get("status")
            .and_then(|s| s.get("value"))
            .and_then(Value::as_str)
    }

    /// Any raw top-level field
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The complete raw object
    pub fn raw(&self) -> &Map<String, Value> {
        &self.0
    }
}
