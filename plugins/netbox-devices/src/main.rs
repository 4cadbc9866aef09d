//! NetBox Devices Inventory
//!
//! Dynamic inventory for Ansible backed by NetBox DCIM devices:
//! - Pages through /api/dcim/devices/ following NetBox's `next` cursor
//! - Projects each device into a host with connection variables
//! - Prints the inventory document on stdout
//!
//! Any failure (transport, non-200 status, malformed device) aborts the run
//! with a non-zero exit code; partial inventories are never printed.

mod cli;
mod logging;

use anyhow::Context;
use cli::{Cli, Mode};
use netbox_client::NetBoxClient;
use netbox_inventory::{Inventory, InventoryConfig, populate};
use std::env;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    logging::init(cli.verbose)?;

    info!("Starting NetBox devices inventory");

    // Load configuration: source file, then environment, then flags
    let config = match cli.config.as_deref() {
        Some(path) => InventoryConfig::load(path)?,
        None => InventoryConfig::default(),
    };
    let settings = config
        .with_env(|key| env::var(key).ok())
        .with_overrides(cli.netbox_host_url.clone(), cli.netbox_auth_token.clone())
        .resolve()?;

    info!("Configuration:");
    info!("  NetBox URL: {}", settings.netbox_host_url);
    info!("  Authenticated: {}", settings.netbox_auth_token.is_some());
    info!("  Filters: {:?}", settings.query_filters);

    let client = NetBoxClient::with_timeout(
        &settings.netbox_host_url,
        settings.netbox_auth_token.as_deref(),
        settings.timeout,
    )?;

    let mut inventory = Inventory::new();
    populate(&client, &settings.query_filters, &mut inventory)
        .await
        .with_context(|| format!("failed to build inventory from {}", settings.netbox_host_url))?;

    let document = match cli.mode() {
        Mode::List => inventory.to_list_json(),
        Mode::Host(name) => inventory.host_json(&name),
    };
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    println!("{rendered}");

    Ok(())
}
