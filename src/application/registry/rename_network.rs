//! Rename Network
//!
//! Registry-local: the switch is never contacted.

use crate::domain::models::network::{NetworkId, NetworkRecord, TenantId};
use crate::shared::errors::RegistryError;

use super::{resolve_mut, NetworkRegistry};

impl NetworkRegistry {
    /// Change the display name of a network, returning the updated record
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NetworkNotFound` if the id is unknown.
    pub async fn rename_network(
        &self,
        tenant_id: &TenantId,
        network_id: &NetworkId,
        new_name: &str,
    ) -> Result<NetworkRecord, RegistryError> {
        tracing::info!(tenant_id = %tenant_id, network_id = %network_id, new_name = %new_name, "Renaming network");

        let mut networks = self.networks.lock().await;
        let record = resolve_mut(&mut networks, network_id)?;
        record.rename(new_name);

        tracing::info!(network_id = %network_id, "Network renamed");
        Ok(record.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{network_data, registry, tenant};
    use crate::domain::gateways::switch_driver::MockSwitchDriver;
    use crate::domain::models::network::NetworkId;
    use crate::shared::errors::RegistryError;

    #[tokio::test]
    async fn should_change_only_the_name() {
        let mut driver = MockSwitchDriver::new();
        driver.expect_create_vlan().times(1).returning(|_, _, _, _, _| Ok(()));
        driver.expect_delete_vlan().never();
        let registry = registry(driver);
        let created = registry
            .create_network(&tenant(), network_data("net-1", "web", 100))
            .await
            .unwrap();

        let renamed = registry
            .rename_network(&tenant(), &NetworkId::new("net-1"), "frontend")
            .await
            .unwrap();

        assert_eq!(renamed.name(), "frontend");
        assert_eq!(renamed.network_id(), created.network_id());
        assert_eq!(renamed.vlan_name(), created.vlan_name());
        assert_eq!(renamed.vlan_id(), created.vlan_id());

        let stored = registry
            .get_network_details(&tenant(), &NetworkId::new("net-1"))
            .await
            .unwrap();
        assert_eq!(stored.name(), "frontend");
    }

    #[tokio::test]
    async fn should_return_not_found_when_network_does_not_exist() {
        let registry = registry(MockSwitchDriver::new());

        let result = registry
            .rename_network(&tenant(), &NetworkId::new("ghost"), "x")
            .await;

        assert!(matches!(
            result,
            Err(RegistryError::NetworkNotFound { ref network_id }) if network_id == "ghost"
        ));
    }
}
