//! Network Domain Model
//!
//! A logical network bound to one VLAN on the managed switch.

use std::collections::BTreeMap;

use crate::shared::errors::DomainError;

/// Lowest usable 802.1Q VLAN id
pub const MIN_VLAN_ID: u16 = 1;

/// Highest usable 802.1Q VLAN id (4095 is reserved)
pub const MAX_VLAN_ID: u16 = 4094;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

string_id!(
    /// Caller-supplied network identifier, unique within the registry
    NetworkId
);

string_id!(
    /// Tenant identifier. Accepted on every operation, never used as a partition key.
    TenantId
);

string_id!(
    /// Port identifier within a network
    PortId
);

/// VLAN identifier on the switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VlanId(u16);

impl VlanId {
    /// Create a VLAN id, rejecting values outside 1..=4094
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidVlanId` when the value is out of range.
    pub fn new(id: u16) -> Result<Self, DomainError> {
        if (MIN_VLAN_ID..=MAX_VLAN_ID).contains(&id) {
            Ok(Self(id))
        } else {
            Err(DomainError::InvalidVlanId(u32::from(id)))
        }
    }

    #[must_use]
    pub fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<u32> for VlanId {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        let id = u16::try_from(value).map_err(|_| DomainError::InvalidVlanId(value))?;
        Self::new(id)
    }
}

impl From<VlanId> for u16 {
    fn from(vlan_id: VlanId) -> Self {
        vlan_id.0
    }
}

impl std::fmt::Display for VlanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Administrative state of a port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortState {
    Active,
    Down,
}

impl PortState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Down => "DOWN",
        }
    }
}

impl std::str::FromStr for PortState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ACTIVE" => Ok(Self::Active),
            "DOWN" => Ok(Self::Down),
            other => Err(DomainError::InvalidPortState(other.to_string())),
        }
    }
}

/// Data required to create a new network
#[derive(Debug, Clone)]
pub struct CreateNetworkData {
    pub network_id: NetworkId,
    pub name: String,
    pub vlan_name: String,
    pub vlan_id: VlanId,
}

/// Network record held by the registry
///
/// `network_id`, `vlan_name` and `vlan_id` are fixed at creation. Only the
/// display name changes over the record's lifetime. `ports` is never
/// populated; it keeps the record shape callers expect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRecord {
    network_id: NetworkId,
    name: String,
    vlan_name: String,
    vlan_id: VlanId,
    ports: BTreeMap<PortId, PortState>,
}

impl NetworkRecord {
    /// Create a record with an empty port mapping
    #[must_use]
    pub fn new(data: CreateNetworkData) -> Self {
        Self {
            network_id: data.network_id,
            name: data.name,
            vlan_name: data.vlan_name,
            vlan_id: data.vlan_id,
            ports: BTreeMap::new(),
        }
    }

    /// Replace the display name
    pub fn rename(&mut self, new_name: impl Into<String>) {
        self.name = new_name.into();
    }

    // Getters

    #[must_use]
    pub fn network_id(&self) -> &NetworkId {
        &self.network_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn vlan_name(&self) -> &str {
        &self.vlan_name
    }

    #[must_use]
    pub fn vlan_id(&self) -> VlanId {
        self.vlan_id
    }

    #[must_use]
    pub fn ports(&self) -> &BTreeMap<PortId, PortState> {
        &self.ports
    }
}
