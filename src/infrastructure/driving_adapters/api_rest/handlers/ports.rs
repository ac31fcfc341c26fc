//! Port Handlers
//!
//! Port and attachment endpoints of the generic network-plugin API. The
//! switch plugin does not manage ports, so each of these answers
//! 501 Not Implemented once the request itself is valid.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::domain::models::network::{NetworkId, PortId, PortState, TenantId};
use crate::infrastructure::driving_adapters::api_rest::dto::network::{
    CreatePortDto, PlugInterfaceDto, UpdatePortDto,
};
use crate::infrastructure::driving_adapters::api_rest::middleware::auth::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

type NetworkPath = Path<(String, String)>;
type PortPath = Path<(String, String, String)>;

/// GET /tenants/:tenant_id/networks/:network_id/ports
pub(super) async fn get_all_ports(
    _auth: JwtAuth,
    State(state): State<AppState>,
    Path((tenant_id, network_id)): NetworkPath,
) -> Result<StatusCode, ApiError> {
    state
        .registry
        .get_all_ports(&TenantId::from(tenant_id), &NetworkId::from(network_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /tenants/:tenant_id/networks/:network_id/ports
pub(super) async fn create_port(
    _auth: JwtAuth,
    State(state): State<AppState>,
    Path((tenant_id, network_id)): NetworkPath,
    Json(dto): Json<CreatePortDto>,
) -> Result<StatusCode, ApiError> {
    dto.validate()?;
    let port_state: PortState = dto.port_state.parse()?;

    state
        .registry
        .create_port(
            &TenantId::from(tenant_id),
            &NetworkId::from(network_id),
            port_state,
            &PortId::from(dto.port_id),
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /tenants/:tenant_id/networks/:network_id/ports/:port_id
pub(super) async fn get_port_details(
    _auth: JwtAuth,
    State(state): State<AppState>,
    Path((tenant_id, network_id, port_id)): PortPath,
) -> Result<StatusCode, ApiError> {
    state
        .registry
        .get_port_details(
            &TenantId::from(tenant_id),
            &NetworkId::from(network_id),
            &PortId::from(port_id),
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /tenants/:tenant_id/networks/:network_id/ports/:port_id
pub(super) async fn update_port(
    _auth: JwtAuth,
    State(state): State<AppState>,
    Path((tenant_id, network_id, port_id)): PortPath,
    Json(dto): Json<UpdatePortDto>,
) -> Result<StatusCode, ApiError> {
    let port_state: PortState = dto.port_state.parse()?;

    state
        .registry
        .update_port(
            &TenantId::from(tenant_id),
            &NetworkId::from(network_id),
            &PortId::from(port_id),
            port_state,
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /tenants/:tenant_id/networks/:network_id/ports/:port_id
pub(super) async fn delete_port(
    _auth: JwtAuth,
    State(state): State<AppState>,
    Path((tenant_id, network_id, port_id)): PortPath,
) -> Result<StatusCode, ApiError> {
    state
        .registry
        .delete_port(
            &TenantId::from(tenant_id),
            &NetworkId::from(network_id),
            &PortId::from(port_id),
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /tenants/:tenant_id/networks/:network_id/ports/:port_id/attachment
pub(super) async fn plug_interface(
    _auth: JwtAuth,
    State(state): State<AppState>,
    Path((tenant_id, network_id, port_id)): PortPath,
    Json(dto): Json<PlugInterfaceDto>,
) -> Result<StatusCode, ApiError> {
    dto.validate()?;

    state
        .registry
        .plug_interface(
            &TenantId::from(tenant_id),
            &NetworkId::from(network_id),
            &PortId::from(port_id),
            &dto.remote_interface_id,
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /tenants/:tenant_id/networks/:network_id/ports/:port_id/attachment
pub(super) async fn unplug_interface(
    _auth: JwtAuth,
    State(state): State<AppState>,
    Path((tenant_id, network_id, port_id)): PortPath,
) -> Result<StatusCode, ApiError> {
    state
        .registry
        .unplug_interface(
            &TenantId::from(tenant_id),
            &NetworkId::from(network_id),
            &PortId::from(port_id),
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
