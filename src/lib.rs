//! Switch Network Registry API
//!
//! Keeps an in-memory registry of logical networks, each backed by a VLAN on
//! a single managed switch, and keeps that registry in step with the switch
//! through a driver. Laid out following Clean/Hexagonal Architecture.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
