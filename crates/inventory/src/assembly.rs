//! Inventory assembly: pager -> projection -> registry.

use crate::error::InventoryError;
use crate::host::{HostEntry, project};
use crate::registry::HostRegistry;
use netbox_client::{HttpTransport, NetBoxClient};
use tracing::{debug, info};

/// Hand one host to the registry: `add_host`, then one `set_variable` per variable.
pub fn register<R: HostRegistry + ?Sized>(registry: &mut R, entry: &HostEntry) {
    registry.add_host(entry.name());
    for (key, value) in entry.variables() {
        registry.set_variable(entry.name(), key, value.clone());
    }
}

/// Run one fetch cycle, registering every device NetBox returns.
///
/// Returns the number of hosts registered. The first error aborts the cycle;
/// hosts registered before it stay in the registry.
///
/// # Arguments
/// * `client` - NetBox client to page through
/// * `filters` - Device filters sent with the first page request
/// * `registry` - Destination for the projected hosts
pub async fn populate<T, R>(
    client: &NetBoxClient<T>,
    filters: &[(String, String)],
    registry: &mut R,
) -> Result<usize, InventoryError>
where
    T: HttpTransport,
    R: HostRegistry + ?Sized,
{
    let mut pager = client.devices_filtered(filters);
    let mut registered = 0;

    while let Some(record) = pager.next_record().await? {
        let entry = project(record)?;
        debug!("Registering host {}", entry.name());
        register(registry, &entry);
        registered += 1;
    }

    info!(
        "Registered {} hosts from {} ({} pages)",
        registered,
        client.base_url(),
        pager.pages_fetched()
    );
    Ok(registered)
}
