//! List Networks

use crate::domain::models::network::{NetworkRecord, TenantId};

use super::NetworkRegistry;

impl NetworkRegistry {
    /// Snapshot of every network in the registry
    ///
    /// The tenant is not used as a filter: all records are returned. Order is
    /// unspecified.
    pub async fn list_networks(&self, tenant_id: &TenantId) -> Vec<NetworkRecord> {
        tracing::debug!(tenant_id = %tenant_id, "Listing networks");

        let networks = self.networks.lock().await;
        let snapshot: Vec<NetworkRecord> = networks.values().cloned().collect();

        tracing::debug!(count = snapshot.len(), "Found networks");
        snapshot
    }
}
