//! Delete Network
//!
//! Tears the VLAN down on the switch, then drops the record.

use crate::domain::models::network::{NetworkId, NetworkRecord, TenantId};
use crate::shared::errors::RegistryError;

use super::{not_found, resolve, NetworkRegistry};

impl NetworkRegistry {
    /// Delete a network and its VLAN, returning the removed record
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NetworkNotFound` before any switch interaction
    /// if the id is unknown. Returns `RegistryError::Driver` unchanged if the
    /// switch call fails, in which case the record is kept.
    pub async fn delete_network(
        &self,
        tenant_id: &TenantId,
        network_id: &NetworkId,
    ) -> Result<NetworkRecord, RegistryError> {
        tracing::info!(tenant_id = %tenant_id, network_id = %network_id, "Deleting network");

        let mut networks = self.networks.lock().await;

        let vlan_id = resolve(&networks, network_id)?.vlan_id();

        self.driver
            .delete_vlan(vlan_id, self.switch.address(), self.switch.credentials())
            .await?;

        let removed = networks.remove(network_id).ok_or_else(|| not_found(network_id))?;

        tracing::info!(network_id = %network_id, vlan_id = %vlan_id, "Network deleted");
        Ok(removed)
    }
}
