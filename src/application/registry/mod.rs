//! Network Registry
//!
//! Owns the network-id → record table and keeps it in step with the switch.
//! Each operation lives in its own submodule as an `impl NetworkRegistry`
//! block.
//!
//! Every operation holds the table lock for its full duration, including the
//! awaited driver call, so check, switch change and table mutation form one
//! unit with respect to other callers.

mod create_network;
mod delete_network;
mod get_network_details;
mod list_networks;
mod ports;
mod rename_network;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::gateways::SwitchDriver;
use crate::domain::models::network::{NetworkId, NetworkRecord};
use crate::domain::models::switch::SwitchEndpoint;
use crate::shared::errors::RegistryError;

type NetworkTable = HashMap<NetworkId, NetworkRecord>;

/// Registry of networks provisioned on a single managed switch
pub struct NetworkRegistry {
    driver: Arc<dyn SwitchDriver>,
    switch: SwitchEndpoint,
    networks: Mutex<NetworkTable>,
}

impl NetworkRegistry {
    /// Create an empty registry bound to one switch
    #[must_use]
    pub fn new(driver: Arc<dyn SwitchDriver>, switch: SwitchEndpoint) -> Self {
        Self {
            driver,
            switch,
            networks: Mutex::new(HashMap::new()),
        }
    }

    /// The switch this registry provisions VLANs on
    #[must_use]
    pub fn switch(&self) -> &SwitchEndpoint {
        &self.switch
    }
}

fn not_found(network_id: &NetworkId) -> RegistryError {
    tracing::warn!(network_id = %network_id, "Network not found");
    RegistryError::NetworkNotFound {
        network_id: network_id.to_string(),
    }
}

/// Resolve a network by id alone; tenants share one namespace.
fn resolve<'a>(networks: &'a NetworkTable, network_id: &NetworkId) -> Result<&'a NetworkRecord, RegistryError> {
    networks.get(network_id).ok_or_else(|| not_found(network_id))
}

fn resolve_mut<'a>(
    networks: &'a mut NetworkTable,
    network_id: &NetworkId,
) -> Result<&'a mut NetworkRecord, RegistryError> {
    networks.get_mut(network_id).ok_or_else(|| not_found(network_id))
}

#[cfg(test)]
mod test_support {
    use std::sync::Arc;

    use super::NetworkRegistry;
    use crate::domain::gateways::switch_driver::MockSwitchDriver;
    use crate::domain::models::network::{CreateNetworkData, NetworkId, TenantId, VlanId};
    use crate::domain::models::switch::{SwitchCredentials, SwitchEndpoint};

    pub const SWITCH_ADDRESS: &str = "10.0.0.1";
    pub const SWITCH_PORT: &str = "3/23";

    pub fn endpoint() -> SwitchEndpoint {
        SwitchEndpoint::new(SWITCH_ADDRESS, SwitchCredentials::new("admin", "nexus"), SWITCH_PORT)
    }

    pub fn tenant() -> TenantId {
        TenantId::new("tenant-a")
    }

    pub fn registry(driver: MockSwitchDriver) -> NetworkRegistry {
        NetworkRegistry::new(Arc::new(driver), endpoint())
    }

    pub fn network_data(network_id: &str, name: &str, vlan_id: u16) -> CreateNetworkData {
        CreateNetworkData {
            network_id: NetworkId::new(network_id),
            name: name.to_string(),
            vlan_name: format!("vlan{vlan_id}"),
            vlan_id: VlanId::new(vlan_id).unwrap(),
        }
    }

    /// Driver that accepts any number of create and delete calls
    pub fn permissive_driver() -> MockSwitchDriver {
        let mut driver = MockSwitchDriver::new();
        driver.expect_create_vlan().returning(|_, _, _, _, _| Ok(()));
        driver.expect_delete_vlan().returning(|_, _, _| Ok(()));
        driver
    }
}
