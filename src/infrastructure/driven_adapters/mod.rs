//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Switch drivers
//! - Configuration

pub mod config;
pub mod switch_driver;

pub use config::AppConfig;
pub use switch_driver::InMemorySwitchDriver;
