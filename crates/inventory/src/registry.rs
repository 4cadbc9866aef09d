//! Host registry seam and the in-memory inventory behind it.
//!
//! The orchestration runtime owns the real registry; `HostRegistry` is the
//! two-call surface it exposes. `Inventory` implements it in memory and renders
//! the JSON documents the runtime's dynamic-inventory script protocol expects.

use serde_json::{Map, Value, json};
use std::collections::{BTreeMap, HashMap};

/// Group every host lands in; this inventory does no grouping of its own.
pub const UNGROUPED: &str = "ungrouped";

/// Registry the projected hosts are handed to.
pub trait HostRegistry {
    /// Register a host by name
    fn add_host(&mut self, name: &str);

    /// Set one variable on a host
    fn set_variable(&mut self, host: &str, key: &str, value: Value);
}

/// In-memory host registry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    hosts: Vec<String>,
    hostvars: HashMap<String, BTreeMap<String, Value>>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Hostnames in registration order
    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    /// Variables of one host
    pub fn host_vars(&self, name: &str) -> Option<&BTreeMap<String, Value>> {
        self.hostvars.get(name)
    }

    /// Number of hosts
    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    /// Whether no host has been registered
    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Document answered to `--list`
    ///
    /// ```json
    /// {"_meta": {"hostvars": {...}}, "all": {"children": ["ungrouped"]}, "ungrouped": {"hosts": [...]}}
    /// ```
    pub fn to_list_json(&self) -> Value {
        let hostvars: Map<String, Value> = self
            .hosts
            .iter()
            .map(|name| (name.clone(), self.host_json(name)))
            .collect();

        json!({
            "_meta": { "hostvars": hostvars },
            "all": { "children": [UNGROUPED] },
            (UNGROUPED): { "hosts": self.hosts },
        })
    }

    /// Document answered to `--host <name>`; `{}` for unknown hosts
    pub fn host_json(&self, name: &str) -> Value {
        let vars: Map<String, Value> = self
            .hostvars
            .get(name)
            .map(|vars| vars.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default();
        Value::Object(vars)
    }
}

impl HostRegistry for Inventory {
    fn add_host(&mut self, name: &str) {
        if !self.hostvars.contains_key(name) {
            self.hosts.push(name.to_string());
            self.hostvars.insert(name.to_string(), BTreeMap::new());
        }
    }

    fn set_variable(&mut self, host: &str, key: &str, value: Value) {
        self.add_host(host);
        if let Some(vars) = self.hostvars.get_mut(host) {
            vars.insert(key.to_string(), value);
        }
    }
}
