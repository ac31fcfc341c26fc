//! Port Operations
//!
//! Part of the generic network-plugin surface but not meaningful for a
//! VLAN-per-network switch plugin. Every call reports `Unsupported` and
//! leaves the registry untouched.

use crate::domain::models::network::{NetworkId, PortId, PortState, TenantId};
use crate::shared::errors::RegistryError;

use super::NetworkRegistry;

fn unsupported(operation: &'static str, tenant_id: &TenantId, network_id: &NetworkId) -> RegistryError {
    tracing::debug!(tenant_id = %tenant_id, network_id = %network_id, operation, "Port operation not supported");
    RegistryError::Unsupported { operation }
}

impl NetworkRegistry {
    /// # Errors
    ///
    /// Always returns `RegistryError::Unsupported`.
    pub async fn get_all_ports(&self, tenant_id: &TenantId, network_id: &NetworkId) -> Result<(), RegistryError> {
        Err(unsupported("get_all_ports", tenant_id, network_id))
    }

    /// # Errors
    ///
    /// Always returns `RegistryError::Unsupported`.
    pub async fn create_port(
        &self,
        tenant_id: &TenantId,
        network_id: &NetworkId,
        _port_state: PortState,
        _port_id: &PortId,
    ) -> Result<(), RegistryError> {
        Err(unsupported("create_port", tenant_id, network_id))
    }

    /// # Errors
    ///
    /// Always returns `RegistryError::Unsupported`.
    pub async fn delete_port(
        &self,
        tenant_id: &TenantId,
        network_id: &NetworkId,
        _port_id: &PortId,
    ) -> Result<(), RegistryError> {
        Err(unsupported("delete_port", tenant_id, network_id))
    }

    /// # Errors
    ///
    /// Always returns `RegistryError::Unsupported`.
    pub async fn update_port(
        &self,
        tenant_id: &TenantId,
        network_id: &NetworkId,
        _port_id: &PortId,
        _port_state: PortState,
    ) -> Result<(), RegistryError> {
        Err(unsupported("update_port", tenant_id, network_id))
    }

    /// # Errors
    ///
    /// Always returns `RegistryError::Unsupported`.
    pub async fn get_port_details(
        &self,
        tenant_id: &TenantId,
        network_id: &NetworkId,
        _port_id: &PortId,
    ) -> Result<(), RegistryError> {
        Err(unsupported("get_port_details", tenant_id, network_id))
    }

    /// # Errors
    ///
    /// Always returns `RegistryError::Unsupported`.
    pub async fn plug_interface(
        &self,
        tenant_id: &TenantId,
        network_id: &NetworkId,
        _port_id: &PortId,
        _remote_interface_id: &str,
    ) -> Result<(), RegistryError> {
        Err(unsupported("plug_interface", tenant_id, network_id))
    }

    /// # Errors
    ///
    /// Always returns `RegistryError::Unsupported`.
    pub async fn unplug_interface(
        &self,
        tenant_id: &TenantId,
        network_id: &NetworkId,
        _port_id: &PortId,
    ) -> Result<(), RegistryError> {
        Err(unsupported("unplug_interface", tenant_id, network_id))
    }
}
