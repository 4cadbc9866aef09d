//! Inventory source configuration.
//!
//! Settings come from three layers, later layers winning:
//! 1. A YAML source file (`plugin: netbox_devices`, `netbox_host_url: ...`)
//! 2. Environment variables `NETBOX_URL` / `NETBOX_TOKEN`
//! 3. Explicit overrides (command-line flags)

use crate::error::InventoryError;
use netbox_client::common::DEFAULT_TIMEOUT;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Plugin names a source file may declare
pub const PLUGIN_NAMES: [&str; 2] = [
    "netbox_devices",
    "zedr.simple_netbox_inventory_plugin.netbox_devices",
];

/// Environment variable holding the NetBox URL
pub const ENV_URL: &str = "NETBOX_URL";

/// Environment variable holding the NetBox API token
pub const ENV_TOKEN: &str = "NETBOX_TOKEN";

/// Raw, layered configuration as read from file, env and flags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Declared plugin name; must be one of [`PLUGIN_NAMES`] when present
    #[serde(default)]
    pub plugin: Option<String>,

    /// NetBox base URL including scheme, e.g. `https://netbox.local`
    #[serde(default)]
    pub netbox_host_url: Option<String>,

    /// API token sent as `Authorization: Token <token>`
    #[serde(default)]
    pub netbox_auth_token: Option<String>,

    /// Accepted for compatibility; results are never cached
    #[serde(default)]
    pub cache: bool,

    /// Per-request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Device filters, e.g. `[{status: active}, {role: leaf}]`
    #[serde(default)]
    pub query_filters: Vec<BTreeMap<String, serde_yaml::Value>>,
}

/// Validated settings for one inventory run
#[derive(Clone, PartialEq)]
pub struct Settings {
    /// NetBox base URL
    pub netbox_host_url: String,
    /// API token, if any
    pub netbox_auth_token: Option<String>,
    /// Cache flag as configured
    pub cache: bool,
    /// Per-request timeout
    pub timeout: Duration,
    /// Device filters as query parameters
    pub query_filters: Vec<(String, String)>,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("netbox_host_url", &self.netbox_host_url)
            .field("netbox_auth_token", &self.netbox_auth_token.as_ref().map(|_| "<redacted>"))
            .field("cache", &self.cache)
            .field("timeout", &self.timeout)
            .field("query_filters", &self.query_filters)
            .finish()
    }
}

impl InventoryConfig {
    /// Parse a YAML source document
    pub fn from_yaml_str(yaml: &str) -> Result<Self, InventoryError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a YAML source file
    pub fn load(path: &Path) -> Result<Self, InventoryError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| InventoryError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded inventory source {}", path.display());
        Self::from_yaml_str(&yaml)
    }

    /// Overlay `NETBOX_URL` / `NETBOX_TOKEN` looked up through `lookup`
    #[must_use]
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_URL) {
            self.netbox_host_url = Some(url);
        }
        if let Some(token) = lookup(ENV_TOKEN) {
            self.netbox_auth_token = Some(token);
        }
        self
    }

    /// Overlay explicitly supplied values
    #[must_use]
    pub fn with_overrides(mut self, url: Option<String>, token: Option<String>) -> Self {
        if url.is_some() {
            self.netbox_host_url = url;
        }
        if token.is_some() {
            self.netbox_auth_token = token;
        }
        self
    }

    /// Validate and produce the settings for a run
    pub fn resolve(self) -> Result<Settings, InventoryError> {
        if let Some(plugin) = self.plugin.as_deref() {
            if !PLUGIN_NAMES.contains(&plugin) {
                return Err(InventoryError::InvalidConfig(format!(
                    "plugin '{}' is not handled here (expected one of: {})",
                    plugin,
                    PLUGIN_NAMES.join(", ")
                )));
            }
        }

        let netbox_host_url = self
            .netbox_host_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                InventoryError::InvalidConfig(format!(
                    "netbox_host_url is required (set it in the source file, {ENV_URL}, or --netbox-host-url)"
                ))
            })?;

        let timeout = self.timeout_secs.map_or(DEFAULT_TIMEOUT, Duration::from_secs);
        if timeout.is_zero() {
            return Err(InventoryError::InvalidConfig(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }

        let query_filters = flatten_filters(self.query_filters)?;

        if self.cache {
            debug!("cache option accepted but results are never cached");
        }

        Ok(Settings {
            netbox_host_url,
            netbox_auth_token: self.netbox_auth_token.filter(|t| !t.trim().is_empty()),
            cache: self.cache,
            timeout,
            query_filters,
        })
    }
}

/// `[{status: active}, {site_id: 3}]` -> `[("status", "active"), ("site_id", "3")]`
fn flatten_filters(
    filters: Vec<BTreeMap<String, serde_yaml::Value>>,
) -> Result<Vec<(String, String)>, InventoryError> {
    let mut flat = Vec::new();
    for filter in filters {
        for (key, value) in filter {
            let value = match value {
                serde_yaml::Value::String(s) => s,
                serde_yaml::Value::Number(n) => n.to_string(),
                serde_yaml::Value::Bool(b) => b.to_string(),
                other => {
                    return Err(InventoryError::InvalidConfig(format!(
                        "query filter '{key}' must be a scalar, got {other:?}"
                    )));
                }
            };
            flat.push((key, value));
        }
    }
    Ok(flat)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_parse_full_source_file() {
        let config = InventoryConfig::from_yaml_str(
            r"
plugin: netbox_devices
netbox_host_url: https://netbox.local
netbox_auth_token: abc123
cache: true
timeout_secs: 10
query_filters:
  - status: active
  - site_id: 3
",
        )
        .expect("yaml");

        let settings = config.resolve().expect("settings");
        assert_eq!(settings.netbox_host_url, "https://netbox.local");
        assert_eq!(settings.netbox_auth_token.as_deref(), Some("abc123"));
        assert!(settings.cache);
        assert_eq!(settings.timeout, Duration::from_secs(10));
        assert_eq!(
            settings.query_filters,
            vec![
                ("status".to_string(), "active".to_string()),
                ("site_id".to_string(), "3".to_string())
            ]
        );
    }

    #[test]
    fn test_fully_qualified_plugin_name_accepted() {
        let config = InventoryConfig::from_yaml_str(
            "plugin: zedr.simple_netbox_inventory_plugin.netbox_devices\nnetbox_host_url: http://nb\n",
        )
        .expect("yaml");
        assert!(config.resolve().is_ok());
    }

    #[test]
    fn test_foreign_plugin_rejected() {
        let config = InventoryConfig::from_yaml_str("plugin: aws_ec2\nnetbox_host_url: http://nb\n").expect("yaml");
        assert!(matches!(config.resolve(), Err(InventoryError::InvalidConfig(_))));
    }

    #[test]
    fn test_missing_url_rejected() {
        let err = InventoryConfig::default().resolve().expect_err("url is required");
        assert!(err.to_string().contains("netbox_host_url"));
    }

    #[test]
    fn test_layering_precedence() {
        let file = InventoryConfig::from_yaml_str("netbox_host_url: http://from-file\nnetbox_auth_token: file-token\n")
            .expect("yaml");

        let env = |key: &str| (key == ENV_URL).then(|| "http://from-env".to_string());
        let settings = file.clone().with_env(env).resolve().expect("settings");
        assert_eq!(settings.netbox_host_url, "http://from-env");
        assert_eq!(settings.netbox_auth_token.as_deref(), Some("file-token"));

        let settings = file
            .with_env(env)
            .with_overrides(Some("http://from-flag".to_string()), None)
            .resolve()
            .expect("settings");
        assert_eq!(settings.netbox_host_url, "http://from-flag");
    }

    #[test]
    fn test_defaults() {
        let settings = InventoryConfig::default()
            .with_env(no_env)
            .with_overrides(Some("http://nb".to_string()), Some("  ".to_string()))
            .resolve()
            .expect("settings");

        assert!(settings.netbox_auth_token.is_none(), "blank token means no token");
        assert!(!settings.cache);
        assert_eq!(settings.timeout, DEFAULT_TIMEOUT);
        assert!(settings.query_filters.is_empty());
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(InventoryConfig::from_yaml_str("\n").expect("yaml"), InventoryConfig::default());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = InventoryConfig::from_yaml_str("netbox_host_url: http://nb\ntimeout_secs: 0\n").expect("yaml");
        assert!(config.resolve().is_err());
    }

    #[test]
    fn test_nested_filter_rejected() {
        let config = InventoryConfig::from_yaml_str("netbox_host_url: http://nb\nquery_filters:\n  - site: [a, b]\n")
            .expect("yaml");
        assert!(config.resolve().is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let settings = InventoryConfig::default()
            .with_overrides(Some("http://nb".to_string()), Some("s3cr3t".to_string()))
            .resolve()
            .expect("settings");
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("s3cr3t"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = InventoryConfig::load(Path::new("/nonexistent/netbox.yml")).expect_err("no such file");
        assert!(err.to_string().contains("/nonexistent/netbox.yml"));
    }
}
