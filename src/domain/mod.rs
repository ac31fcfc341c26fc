//! Domain Layer
//!
//! Contains the core domain models and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::switch_driver::SwitchDriver;
pub use models::network::{CreateNetworkData, NetworkId, NetworkRecord, PortId, PortState, TenantId, VlanId};
pub use models::switch::{SwitchCredentials, SwitchEndpoint};
