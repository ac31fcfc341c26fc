//! Switch Driver Gateway
//!
//! Abstract trait for the component that pushes VLAN configuration to the
//! physical switch. The device protocol lives entirely behind this trait.

use async_trait::async_trait;

use crate::domain::models::network::VlanId;
use crate::domain::models::switch::SwitchCredentials;
use crate::shared::errors::DriverError;

/// Driver trait for VLAN provisioning on a managed switch
///
/// Calls are awaited to completion by the registry. A driver that never
/// resolves stalls the registry; timeouts belong in the driver.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SwitchDriver: Send + Sync {
    /// Create `vlan_id` named `vlan_name` and trunk it onto `switch_port`
    async fn create_vlan(
        &self,
        vlan_name: &str,
        vlan_id: VlanId,
        switch_address: &str,
        credentials: &SwitchCredentials,
        switch_port: &str,
    ) -> Result<(), DriverError>;

    /// Remove `vlan_id` from the switch
    async fn delete_vlan(
        &self,
        vlan_id: VlanId,
        switch_address: &str,
        credentials: &SwitchCredentials,
    ) -> Result<(), DriverError>;
}
