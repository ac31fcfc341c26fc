//! JWT Authentication Middleware
//!
//! Extracts and validates bearer tokens against the configured HS256 secret.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (operator or service account)
    pub sub: String,
    /// Role
    pub role: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// Caller identity extracted from a valid token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: String,
    pub role: String,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            role: claims.role,
        }
    }
}

/// JWT authentication extractor
pub struct JwtAuth(pub AuthenticatedUser);

/// Decode and validate a bearer token
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` if the signature, algorithm or expiry check fails.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, ApiError> {
    // Pin the algorithm so a token cannot pick its own
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 60;

    decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
        .map(|data| data.claims)
        .map_err(|err| {
            tracing::debug!(error = %err, "Token rejected");
            ApiError::Unauthorized("Invalid or expired token")
        })
}

impl FromRequestParts<AppState> for JwtAuth {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Invalid Authorization header format"))?;

        let claims = verify_token(token, &state.config.jwt.secret)?;
        tracing::debug!(subject = %claims.sub, role = %claims.role, "Request authenticated");

        Ok(JwtAuth(claims.into()))
    }
}
