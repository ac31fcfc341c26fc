//! In-Memory Switch Driver
//!
//! Simulated switch that tracks provisioned VLANs per switch address. Used
//! when no device is attached and as a realistic stand-in for tests.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::gateways::SwitchDriver;
use crate::domain::models::network::VlanId;
use crate::domain::models::switch::SwitchCredentials;
use crate::shared::errors::DriverError;

/// A VLAN as configured on the simulated switch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedVlan {
    pub vlan_id: VlanId,
    pub name: String,
    /// Interfaces the VLAN is trunked onto
    pub trunk_ports: Vec<String>,
}

/// Switch driver backed by an in-process VLAN table
pub struct InMemorySwitchDriver {
    credentials: SwitchCredentials,
    switches: RwLock<HashMap<String, BTreeMap<VlanId, ProvisionedVlan>>>,
}

impl InMemorySwitchDriver {
    /// Create a driver that accepts only `credentials`
    #[must_use]
    pub fn new(credentials: SwitchCredentials) -> Self {
        Self {
            credentials,
            switches: RwLock::new(HashMap::new()),
        }
    }

    /// VLANs currently provisioned on `switch_address`, ordered by id
    pub async fn provisioned_vlans(&self, switch_address: &str) -> Vec<ProvisionedVlan> {
        self.switches
            .read()
            .await
            .get(switch_address)
            .map(|vlans| vlans.values().cloned().collect())
            .unwrap_or_default()
    }

    fn authenticate(&self, switch_address: &str, credentials: &SwitchCredentials) -> Result<(), DriverError> {
        if *credentials == self.credentials {
            Ok(())
        } else {
            tracing::warn!(switch = %switch_address, username = %credentials.username(), "Switch login rejected");
            Err(DriverError::Authentication {
                address: switch_address.to_string(),
            })
        }
    }
}

#[async_trait]
impl SwitchDriver for InMemorySwitchDriver {
    async fn create_vlan(
        &self,
        vlan_name: &str,
        vlan_id: VlanId,
        switch_address: &str,
        credentials: &SwitchCredentials,
        switch_port: &str,
    ) -> Result<(), DriverError> {
        self.authenticate(switch_address, credentials)?;

        let mut switches = self.switches.write().await;
        let vlans = switches.entry(switch_address.to_string()).or_default();

        if let Some(existing) = vlans.get_mut(&vlan_id) {
            tracing::warn!(
                switch = %switch_address,
                vlan_id = %vlan_id,
                existing_name = %existing.name,
                "VLAN already provisioned, updating name"
            );
            existing.name = vlan_name.to_string();
            if !existing.trunk_ports.iter().any(|p| p == switch_port) {
                existing.trunk_ports.push(switch_port.to_string());
            }
            return Ok(());
        }

        vlans.insert(
            vlan_id,
            ProvisionedVlan {
                vlan_id,
                name: vlan_name.to_string(),
                trunk_ports: vec![switch_port.to_string()],
            },
        );
        tracing::debug!(switch = %switch_address, vlan_id = %vlan_id, port = %switch_port, "VLAN provisioned");
        Ok(())
    }

    async fn delete_vlan(
        &self,
        vlan_id: VlanId,
        switch_address: &str,
        credentials: &SwitchCredentials,
    ) -> Result<(), DriverError> {
        self.authenticate(switch_address, credentials)?;

        let mut switches = self.switches.write().await;
        let removed = switches
            .get_mut(switch_address)
            .and_then(|vlans| vlans.remove(&vlan_id));

        match removed {
            Some(_) => {
                tracing::debug!(switch = %switch_address, vlan_id = %vlan_id, "VLAN removed");
                Ok(())
            }
            None => Err(DriverError::Rejected {
                address: switch_address.to_string(),
                reason: format!("VLAN {vlan_id} is not configured"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SWITCH: &str = "10.0.0.1";

    fn credentials() -> SwitchCredentials {
        SwitchCredentials::new("admin", "nexus")
    }

    fn vlan(id: u16) -> VlanId {
        VlanId::new(id).unwrap()
    }

    #[tokio::test]
    async fn should_provision_and_remove_vlan() {
        let driver = InMemorySwitchDriver::new(credentials());

        driver
            .create_vlan("vlan100", vlan(100), SWITCH, &credentials(), "3/23")
            .await
            .unwrap();
        let vlans = driver.provisioned_vlans(SWITCH).await;
        assert_eq!(vlans.len(), 1);
        assert_eq!(vlans[0].name, "vlan100");
        assert_eq!(vlans[0].trunk_ports, vec!["3/23".to_string()]);

        driver.delete_vlan(vlan(100), SWITCH, &credentials()).await.unwrap();
        assert!(driver.provisioned_vlans(SWITCH).await.is_empty());
    }

    #[tokio::test]
    async fn should_tolerate_duplicate_vlan_creation() {
        let driver = InMemorySwitchDriver::new(credentials());

        driver
            .create_vlan("vlan100", vlan(100), SWITCH, &credentials(), "3/23")
            .await
            .unwrap();
        driver
            .create_vlan("web", vlan(100), SWITCH, &credentials(), "3/23")
            .await
            .unwrap();

        let vlans = driver.provisioned_vlans(SWITCH).await;
        assert_eq!(vlans.len(), 1);
        assert_eq!(vlans[0].name, "web");
        assert_eq!(vlans[0].trunk_ports.len(), 1);
    }

    #[tokio::test]
    async fn should_reject_delete_of_unknown_vlan() {
        let driver = InMemorySwitchDriver::new(credentials());

        let result = driver.delete_vlan(vlan(300), SWITCH, &credentials()).await;

        assert!(matches!(result, Err(DriverError::Rejected { ref address, .. }) if address == SWITCH));
    }

    #[tokio::test]
    async fn should_reject_wrong_credentials() {
        let driver = InMemorySwitchDriver::new(credentials());
        let wrong = SwitchCredentials::new("admin", "guess");

        let result = driver.create_vlan("vlan100", vlan(100), SWITCH, &wrong, "3/23").await;

        assert!(matches!(result, Err(DriverError::Authentication { .. })));
        assert!(driver.provisioned_vlans(SWITCH).await.is_empty());
    }

    #[tokio::test]
    async fn should_keep_switches_separate() {
        let driver = InMemorySwitchDriver::new(credentials());

        driver
            .create_vlan("vlan100", vlan(100), SWITCH, &credentials(), "3/23")
            .await
            .unwrap();

        assert!(driver.provisioned_vlans("10.0.0.2").await.is_empty());
        assert!(driver.delete_vlan(vlan(100), "10.0.0.2", &credentials()).await.is_err());
    }
}
