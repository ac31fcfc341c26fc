//! Network Handlers
//!
//! HTTP handlers for the network lifecycle.
//! All endpoints require JWT authentication.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::domain::models::network::{CreateNetworkData, NetworkId, TenantId};
use crate::infrastructure::driving_adapters::api_rest::dto::network::{
    CreateNetworkDto, NetworkResponseDto, RenameNetworkDto,
};
use crate::infrastructure::driving_adapters::api_rest::middleware::auth::JwtAuth;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// GET /tenants/:tenant_id/networks - List all networks
///
/// # Responses
///
/// * 200 OK - Every network in the registry, sorted by network id
/// * 401 Unauthorized - Missing or invalid JWT token
#[axum::debug_handler]
pub(super) async fn list_networks(
    _auth: JwtAuth,
    State(state): State<AppState>,
    Path(tenant_id): Path<String>,
) -> Result<Json<Vec<NetworkResponseDto>>, ApiError> {
    let mut networks = state.registry.list_networks(&TenantId::from(tenant_id)).await;
    networks.sort_by(|a, b| a.network_id().cmp(b.network_id()));

    let response: Vec<NetworkResponseDto> = networks.into_iter().map(NetworkResponseDto::from).collect();
    Ok(Json(response))
}

/// POST /tenants/:tenant_id/networks - Create a network and its VLAN
///
/// # Responses
///
/// * 201 Created - VLAN provisioned and network recorded
/// * 400 Bad Request - Validation error
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 409 Conflict - Switch rejected the VLAN
/// * 502 Bad Gateway - Switch unreachable or login failed
#[axum::debug_handler]
pub(super) async fn create_network(
    _auth: JwtAuth,
    State(state): State<AppState>,
    Path(tenant_id): Path<String>,
    Json(dto): Json<CreateNetworkDto>,
) -> Result<(StatusCode, Json<NetworkResponseDto>), ApiError> {
    dto.validate()?;
    let data = CreateNetworkData::try_from(dto)?;

    let record = state
        .registry
        .create_network(&TenantId::from(tenant_id), data)
        .await?;

    Ok((StatusCode::CREATED, Json(NetworkResponseDto::from(record))))
}

/// GET /tenants/:tenant_id/networks/:network_id - Get network details
///
/// # Responses
///
/// * 200 OK - Network found
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 404 Not Found - Network does not exist
#[axum::debug_handler]
pub(super) async fn get_network_details(
    _auth: JwtAuth,
    State(state): State<AppState>,
    Path((tenant_id, network_id)): Path<(String, String)>,
) -> Result<Json<NetworkResponseDto>, ApiError> {
    let record = state
        .registry
        .get_network_details(&TenantId::from(tenant_id), &NetworkId::from(network_id))
        .await?;

    Ok(Json(NetworkResponseDto::from(record)))
}

/// PUT /tenants/:tenant_id/networks/:network_id - Rename a network
///
/// # Responses
///
/// * 200 OK - Network renamed
/// * 400 Bad Request - Validation error
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 404 Not Found - Network does not exist
#[axum::debug_handler]
pub(super) async fn rename_network(
    _auth: JwtAuth,
    State(state): State<AppState>,
    Path((tenant_id, network_id)): Path<(String, String)>,
    Json(dto): Json<RenameNetworkDto>,
) -> Result<Json<NetworkResponseDto>, ApiError> {
    dto.validate()?;

    let record = state
        .registry
        .rename_network(&TenantId::from(tenant_id), &NetworkId::from(network_id), &dto.name)
        .await?;

    Ok(Json(NetworkResponseDto::from(record)))
}

/// DELETE /tenants/:tenant_id/networks/:network_id - Delete a network and its VLAN
///
/// # Responses
///
/// * 200 OK - The removed network
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 404 Not Found - Network does not exist
/// * 409 Conflict - Switch rejected the VLAN removal
/// * 502 Bad Gateway - Switch unreachable or login failed
#[axum::debug_handler]
pub(super) async fn delete_network(
    _auth: JwtAuth,
    State(state): State<AppState>,
    Path((tenant_id, network_id)): Path<(String, String)>,
) -> Result<Json<NetworkResponseDto>, ApiError> {
    let record = state
        .registry
        .delete_network(&TenantId::from(tenant_id), &NetworkId::from(network_id))
        .await?;

    Ok(Json(NetworkResponseDto::from(record)))
}
