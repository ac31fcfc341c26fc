//! Switch Driver Adapters
//!
//! Implementations of the `SwitchDriver` gateway.

pub mod in_memory;

pub use in_memory::{InMemorySwitchDriver, ProvisionedVlan};
