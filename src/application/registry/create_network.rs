//! Create Network
//!
//! Provisions the VLAN on the switch, then records the network.

use crate::domain::models::network::{CreateNetworkData, NetworkRecord, TenantId};
use crate::shared::errors::RegistryError;

use super::NetworkRegistry;

impl NetworkRegistry {
    /// Create a network backed by a new VLAN
    ///
    /// An existing record with the same id is replaced. The VLAN it pointed
    /// at is left on the switch.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Driver` unchanged if the switch call fails; the
    /// table is not touched in that case.
    pub async fn create_network(
        &self,
        tenant_id: &TenantId,
        data: CreateNetworkData,
    ) -> Result<NetworkRecord, RegistryError> {
        tracing::info!(
            tenant_id = %tenant_id,
            network_id = %data.network_id,
            vlan_id = %data.vlan_id,
            vlan_name = %data.vlan_name,
            "Creating network"
        );

        let mut networks = self.networks.lock().await;

        self.driver
            .create_vlan(
                &data.vlan_name,
                data.vlan_id,
                self.switch.address(),
                self.switch.credentials(),
                self.switch.port(),
            )
            .await?;

        let record = NetworkRecord::new(data);
        if let Some(previous) = networks.insert(record.network_id().clone(), record.clone()) {
            tracing::debug!(
                network_id = %previous.network_id(),
                previous_vlan_id = %previous.vlan_id(),
                "Replaced existing network record"
            );
        }

        tracing::info!(network_id = %record.network_id(), vlan_id = %record.vlan_id(), "Network created");
        Ok(record)
    }
}
