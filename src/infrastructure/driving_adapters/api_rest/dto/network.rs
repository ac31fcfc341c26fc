//! Network DTOs
//!
//! Data transfer objects for network and port API endpoints.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::network::{CreateNetworkData, NetworkId, NetworkRecord, VlanId};
use crate::shared::errors::DomainError;

lazy_static! {
    /// VLAN names accepted by the switch: 1-32 of letters, digits, `-`, `_`, `.`
    static ref VLAN_NAME_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_.\-]{1,32}$").expect("valid regex");
}

/// Validates a VLAN name against switch naming rules
fn validate_vlan_name(name: &str) -> Result<(), validator::ValidationError> {
    if VLAN_NAME_REGEX.is_match(name) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("vlan_name");
        error.message = Some("vlan_name must be 1-32 characters of letters, digits, '-', '_' or '.'".into());
        Err(error)
    }
}

/// Validates an opaque identifier has no surrounding whitespace or path separators
fn validate_identifier(id: &str) -> Result<(), validator::ValidationError> {
    if id.trim() != id || id.contains('/') {
        let mut error = validator::ValidationError::new("identifier");
        error.message = Some("identifier must not contain '/' or surrounding whitespace".into());
        return Err(error);
    }
    Ok(())
}

/// DTO for creating a new network
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateNetworkDto {
    #[validate(length(min = 1, max = 64, message = "network_id must be between 1 and 64 characters"))]
    #[validate(custom(function = "validate_identifier"))]
    pub network_id: String,

    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(custom(function = "validate_vlan_name"))]
    pub vlan_name: String,

    #[validate(range(min = 1, max = 4094, message = "vlan_id must be between 1 and 4094"))]
    pub vlan_id: u32,
}

impl TryFrom<CreateNetworkDto> for CreateNetworkData {
    type Error = DomainError;

    fn try_from(dto: CreateNetworkDto) -> Result<Self, Self::Error> {
        Ok(Self {
            network_id: NetworkId::from(dto.network_id),
            name: dto.name,
            vlan_name: dto.vlan_name,
            vlan_id: VlanId::try_from(dto.vlan_id)?,
        })
    }
}

/// DTO for renaming a network (PUT)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RenameNetworkDto {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: String,
}

/// Network response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkResponseDto {
    pub network_id: String,
    pub name: String,
    pub vlan_name: String,
    pub vlan_id: u16,
    pub ports: BTreeMap<String, String>,
}

impl From<&NetworkRecord> for NetworkResponseDto {
    fn from(record: &NetworkRecord) -> Self {
        Self {
            network_id: record.network_id().to_string(),
            name: record.name().to_string(),
            vlan_name: record.vlan_name().to_string(),
            vlan_id: record.vlan_id().get(),
            ports: record
                .ports()
                .iter()
                .map(|(port_id, state)| (port_id.to_string(), state.as_str().to_string()))
                .collect(),
        }
    }
}

impl From<NetworkRecord> for NetworkResponseDto {
    fn from(record: NetworkRecord) -> Self {
        Self::from(&record)
    }
}

/// DTO for creating a port
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePortDto {
    #[validate(length(min = 1, max = 64, message = "port_id must be between 1 and 64 characters"))]
    pub port_id: String,
    pub port_state: String,
}

/// DTO for updating a port's state
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePortDto {
    pub port_state: String,
}

/// DTO for plugging a remote interface into a port
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlugInterfaceDto {
    #[validate(length(min = 1, max = 255, message = "remote_interface_id must be between 1 and 255 characters"))]
    pub remote_interface_id: String,
}
