//! Get Network Details

use crate::domain::models::network::{NetworkId, NetworkRecord, TenantId};
use crate::shared::errors::RegistryError;

use super::{resolve, NetworkRegistry};

impl NetworkRegistry {
    /// Look up a single network
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NetworkNotFound` if the id is unknown.
    pub async fn get_network_details(
        &self,
        tenant_id: &TenantId,
        network_id: &NetworkId,
    ) -> Result<NetworkRecord, RegistryError> {
        tracing::debug!(tenant_id = %tenant_id, network_id = %network_id, "Getting network details");

        let networks = self.networks.lock().await;
        resolve(&networks, network_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{network_data, permissive_driver, registry, tenant};
    use crate::domain::models::network::{NetworkId, TenantId};
    use crate::shared::errors::RegistryError;

    #[tokio::test]
    async fn should_return_record_when_found() {
        let registry = registry(permissive_driver());
        registry
            .create_network(&tenant(), network_data("net-1", "web", 100))
            .await
            .unwrap();

        let record = registry
            .get_network_details(&tenant(), &NetworkId::new("net-1"))
            .await
            .unwrap();

        assert_eq!(record.network_id().as_str(), "net-1");
        assert_eq!(record.name(), "web");
        assert_eq!(record.vlan_id().get(), 100);
    }

    #[tokio::test]
    async fn should_ignore_tenant_when_resolving() {
        let registry = registry(permissive_driver());
        registry
            .create_network(&tenant(), network_data("net-1", "web", 100))
            .await
            .unwrap();

        let record = registry
            .get_network_details(&TenantId::new("tenant-b"), &NetworkId::new("net-1"))
            .await
            .unwrap();

        assert_eq!(record.name(), "web");
    }

    #[tokio::test]
    async fn should_return_not_found_when_network_does_not_exist() {
        let registry = registry(permissive_driver());

        let result = registry
            .get_network_details(&tenant(), &NetworkId::new("net-404"))
            .await;

        assert!(matches!(
            result,
            Err(RegistryError::NetworkNotFound { ref network_id }) if network_id == "net-404"
        ));
    }
}
