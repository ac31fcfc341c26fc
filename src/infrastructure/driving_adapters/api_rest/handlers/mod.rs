//! HTTP Handlers
//!
//! Route table for everything under `/tenants/{tenant_id}/networks`.

mod networks;
mod ports;

use axum::{
    routing::{get, put},
    Router,
};

use crate::infrastructure::driving_adapters::api_rest::AppState;

/// Create the router for network and port endpoints
///
/// All routes require JWT authentication via the `JwtAuth` extractor.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(networks::list_networks).post(networks::create_network))
        .route(
            "/{network_id}",
            get(networks::get_network_details)
                .put(networks::rename_network)
                .delete(networks::delete_network),
        )
        .route("/{network_id}/ports", get(ports::get_all_ports).post(ports::create_port))
        .route(
            "/{network_id}/ports/{port_id}",
            get(ports::get_port_details)
                .put(ports::update_port)
                .delete(ports::delete_port),
        )
        .route(
            "/{network_id}/ports/{port_id}/attachment",
            put(ports::plug_interface).delete(ports::unplug_interface),
        )
}
