//! Application Layer
//!
//! Contains the network registry that coordinates the in-memory network table
//! with the switch driver. Depends on domain gateways, not concrete drivers.

pub mod registry;

pub use registry::NetworkRegistry;
