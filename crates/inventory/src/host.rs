//! Projection of NetBox devices into inventory hosts.

use crate::error::InventoryError;
use netbox_client::DeviceRecord;
use serde_json::Value;
use std::collections::BTreeMap;

/// SSH port assigned to every host.
pub const ANSIBLE_PORT: u16 = 22;

/// SSH user assigned to every host.
pub const ANSIBLE_USER: &str = "root";

/// Variable names set on every host.
pub mod vars {
    /// Connection port
    pub const ANSIBLE_PORT: &str = "ansible_port";
    /// Address to connect to, CIDR suffix stripped
    pub const ANSIBLE_HOST: &str = "ansible_host";
    /// Remote user
    pub const ANSIBLE_USER: &str = "ansible_user";
    /// Device tags as NetBox returned them
    pub const NETBOX_TAGS: &str = "netbox_tags";
    /// Device status value
    pub const NETBOX_STATUS: &str = "netbox_status";
}

const UNNAMED: &str = "<unnamed>";

/// A device projected into an inventory host.
///
/// Built once per fetch cycle and never mutated. The source record is kept
/// so callers can reach fields the projection does not interpret.
#[derive(Debug, Clone, PartialEq)]
pub struct HostEntry {
    name: String,
    variables: BTreeMap<String, Value>,
    record: DeviceRecord,
}

impl HostEntry {
    /// Inventory hostname
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Host variables, ordered by name
    pub fn variables(&self) -> &BTreeMap<String, Value> {
        &self.variables
    }

    /// A single host variable
    pub fn variable(&self, key: &str) -> Option<&Value> {
        self.variables.get(key)
    }

    /// The raw NetBox device this host was projected from
    pub fn record(&self) -> &DeviceRecord {
        &self.record
    }
}

/// Project a device into a host.
///
/// Fails when `name`, `primary_ip.address`, `tags` or `status.value` is
/// missing; a device without a primary IP cannot be reached and is an error,
/// not a host to skip.
pub fn project(record: DeviceRecord) -> Result<HostEntry, InventoryError> {
    let malformed = |host: &str, field| InventoryError::MalformedRecord {
        host: host.to_string(),
        field,
    };

    let name = record.name().ok_or_else(|| malformed(UNNAMED, "name"))?.to_string();
    if record.primary_ip().is_none() {
        return Err(malformed(&name, "primary_ip"));
    }
    let address = record
        .primary_address()
        .ok_or_else(|| malformed(&name, "primary_ip.address"))?;
    let tags = record.tags().ok_or_else(|| malformed(&name, "tags"))?.clone();
    let status = record
        .status_value()
        .ok_or_else(|| malformed(&name, "status.value"))?
        .to_string();

    let variables = BTreeMap::from([
        (vars::ANSIBLE_PORT.to_string(), Value::from(ANSIBLE_PORT)),
        (vars::ANSIBLE_HOST.to_string(), Value::from(strip_prefix_length(address))),
        (vars::ANSIBLE_USER.to_string(), Value::from(ANSIBLE_USER)),
        (vars::NETBOX_TAGS.to_string(), tags),
        (vars::NETBOX_STATUS.to_string(), Value::from(status)),
    ]);

    Ok(HostEntry {
        name,
        variables,
        record,
    })
}

/// "10.0.0.1/24" -> "10.0.0.1"; an address without a prefix length is returned whole
fn strip_prefix_length(address: &str) -> &str {
    address.split_once('/').map_or(address, |(ip, _)| ip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> DeviceRecord {
        serde_json::from_value(value).expect("device record")
    }

    fn sw1() -> Value {
        json!({
            "name": "sw1",
            "primary_ip": {"address": "10.1.1.5/24"},
            "tags": ["core"],
            "status": {"value": "active"}
        })
    }

    #[test]
    fn test_project_sets_fixed_variable_set() {
        let entry = project(record(sw1())).expect("projection");

        assert_eq!(entry.name(), "sw1");
        let expected = BTreeMap::from([
            ("ansible_port".to_string(), json!(22)),
            ("ansible_host".to_string(), json!("10.1.1.5")),
            ("ansible_user".to_string(), json!("root")),
            ("netbox_tags".to_string(), json!(["core"])),
            ("netbox_status".to_string(), json!("active")),
        ]);
        assert_eq!(entry.variables(), &expected);
    }

    #[test]
    fn test_record_stays_reachable() {
        let mut value = sw1();
        value["serial"] = json!("FOC1234");
        let entry = project(record(value)).expect("projection");
        assert_eq!(entry.record().field("serial"), Some(&json!("FOC1234")));
    }

    #[test]
    fn test_missing_primary_ip_fails() {
        let mut value = sw1();
        value.as_object_mut().expect("object").remove("primary_ip");

        let err = project(record(value)).expect_err("primary_ip is required");
        assert!(matches!(
            err,
            InventoryError::MalformedRecord { ref host, field: "primary_ip" } if host == "sw1"
        ));
    }

    #[test]
    fn test_null_primary_ip_fails() {
        let mut value = sw1();
        value["primary_ip"] = Value::Null;
        assert!(project(record(value)).is_err());
    }

    #[test]
    fn test_missing_name_fails() {
        let mut value = sw1();
        value["name"] = Value::Null;
        let err = project(record(value)).expect_err("name is required");
        assert!(matches!(err, InventoryError::MalformedRecord { field: "name", .. }));
    }

    #[test]
    fn test_tags_pass_through_verbatim() {
        let mut value = sw1();
        value["tags"] = json!([{"id": 1, "name": "Core", "slug": "core"}]);
        let entry = project(record(value)).expect("projection");
        assert_eq!(
            entry.variable(vars::NETBOX_TAGS),
            Some(&json!([{"id": 1, "name": "Core", "slug": "core"}]))
        );
    }

    #[test]
    fn test_strip_prefix_length() {
        assert_eq!(strip_prefix_length("10.0.0.1/24"), "10.0.0.1");
        assert_eq!(strip_prefix_length("2001:db8::1/64"), "2001:db8::1");
        assert_eq!(strip_prefix_length("10.0.0.1"), "10.0.0.1");
    }
}
