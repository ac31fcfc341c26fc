//! Domain Models
//!
//! Network records and switch connection parameters.

pub mod network;
pub mod switch;

pub use network::{CreateNetworkData, NetworkId, NetworkRecord, PortId, PortState, TenantId, VlanId};
pub use switch::{SwitchCredentials, SwitchEndpoint};
