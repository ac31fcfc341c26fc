//! Error Types
//!
//! Layered error types with HTTP status code mapping for the REST surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::infrastructure::driving_adapters::api_rest::middleware::request_id::current_request_id;

/// Domain-level errors for values that violate model constraints
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("VLAN id {0} is outside the usable range 1-4094")]
    InvalidVlanId(u32),

    #[error("Invalid port state: {0}")]
    InvalidPortState(String),
}

/// Failures reported by a switch driver
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    #[error("Switch {address} unreachable: {reason}")]
    Transport { address: String, reason: String },

    #[error("Switch {address} rejected the request: {reason}")]
    Rejected { address: String, reason: String },

    #[error("Authentication to switch {address} failed")]
    Authentication { address: String },
}

/// Errors returned by the network registry
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network {network_id} could not be found")]
    NetworkNotFound { network_id: String },

    #[error("Operation '{operation}' is not supported by this plugin")]
    Unsupported { operation: &'static str },

    #[error(transparent)]
    Driver(#[from] DriverError),
}

impl RegistryError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NetworkNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unsupported { .. } => StatusCode::NOT_IMPLEMENTED,
            Self::Driver(DriverError::Rejected { .. }) => StatusCode::CONFLICT,
            Self::Driver(DriverError::Transport { .. } | DriverError::Authentication { .. }) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NetworkNotFound { .. } => "NETWORK_NOT_FOUND",
            Self::Unsupported { .. } => "NOT_IMPLEMENTED",
            Self::Driver(DriverError::Rejected { .. }) => "SWITCH_REJECTED",
            Self::Driver(DriverError::Authentication { .. }) => "SWITCH_AUTH_FAILED",
            Self::Driver(DriverError::Transport { .. }) => "SWITCH_UNAVAILABLE",
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Unauthorized(&'static str),
}

impl ApiError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Registry(err) => err.status_code(),
            Self::Validation(_) | Self::Domain(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Registry(err) => err.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Domain(DomainError::InvalidVlanId(_)) => "INVALID_VLAN_ID",
            Self::Domain(DomainError::InvalidPortState(_)) => "INVALID_PORT_STATE",
            Self::Unauthorized(_) => "UNAUTHORIZED",
        }
    }
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level error for validation errors
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl ErrorResponse {
    /// Build a response body stamped with the current time and, inside a
    /// request, that request's id
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>, details: Option<Vec<FieldError>>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                details,
            },
            request_id: current_request_id().map(|id| id.0),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let details = match &self {
            ApiError::Validation(errors) => Some(
                errors
                    .iter()
                    .map(|e| {
                        let (field, message) = e.split_once(": ").unwrap_or(("", e.as_str()));
                        FieldError {
                            field: field.to_string(),
                            message: message.to_string(),
                        }
                    })
                    .collect(),
            ),
            ApiError::Registry(RegistryError::Driver(driver_error)) => {
                tracing::warn!(error = %driver_error, "Switch driver call failed");
                None
            }
            _ => None,
        };

        let body = ErrorResponse::new(self.error_code(), self.to_string(), details);
        (self.status_code(), Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        ApiError::Validation(messages)
    }
}
