//! Common test utilities for e2e tests
//!
//! Builds the full HTTP application around an in-memory switch driver and
//! mints JWTs for authenticated requests.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tower::util::ServiceExt;

use switch_network_registry::application::NetworkRegistry;
use switch_network_registry::infrastructure::driven_adapters::config::AppConfig;
use switch_network_registry::infrastructure::driven_adapters::switch_driver::InMemorySwitchDriver;
use switch_network_registry::infrastructure::driving_adapters::api_rest::{self, AppState};

/// Test JWT secret (minimum 32 characters)
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-key-for-e2e-testing-only-min-32-chars";

pub const SWITCH_ADDRESS: &str = "192.0.2.10";

/// JWT claims for test tokens
#[derive(Debug, Serialize, Deserialize)]
pub struct TestClaims {
    pub sub: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub driver: Arc<InMemorySwitchDriver>,
    pub jwt_token: String,
}

impl TestApp {
    /// Create a new test application with an empty registry and switch
    pub fn new() -> Self {
        let config = create_test_config();
        let switch = config.switch.endpoint();

        let driver = Arc::new(InMemorySwitchDriver::new(switch.credentials().clone()));
        let registry = Arc::new(NetworkRegistry::new(driver.clone(), switch));

        let app_state = AppState {
            config: Arc::new(config),
            registry,
        };

        Self {
            router: api_rest::app(app_state),
            driver,
            jwt_token: generate_test_token(),
        }
    }

    /// Get the authorization header value for requests
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.jwt_token)
    }

    /// Send an authenticated request with an optional JSON body
    pub async fn send<B: Serialize>(&self, method: Method, uri: &str, body: Option<&B>) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, self.auth_header());

        let body = match body {
            Some(body) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_string(body).unwrap())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    /// Send an authenticated request without a body
    pub async fn send_empty(&self, method: Method, uri: &str) -> (StatusCode, Vec<u8>) {
        self.send::<()>(method, uri, None).await
    }

    /// Create a network through the API, asserting it succeeds
    pub async fn create_network(&self, tenant: &str, request: &CreateNetworkRequest) -> NetworkResponse {
        let (status, body) = self
            .send(Method::POST, &format!("/tenants/{tenant}/networks"), Some(request))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", String::from_utf8_lossy(&body));
        parse(&body)
    }
}

/// Deserialize a JSON response body
pub fn parse<T: DeserializeOwned>(body: &[u8]) -> T {
    serde_json::from_slice(body).unwrap()
}

/// Create a test configuration
fn create_test_config() -> AppConfig {
    let config_str = format!(
        r#"
[server]
host = "127.0.0.1"
port = 0

[switch]
address = "{SWITCH_ADDRESS}"
username = "admin"
password = "nexus"
port = "3/23"

[jwt]
secret = "{TEST_JWT_SECRET}"
"#
    );

    AppConfig::from_toml(&config_str).expect("Failed to build test config")
}

fn token_with_expiry(exp_offset: i64) -> String {
    let now = Utc::now().timestamp();
    let claims = TestClaims {
        sub: "test-operator".to_string(),
        role: "admin".to_string(),
        iat: now,
        exp: now + exp_offset,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("Failed to generate test JWT token")
}

/// Generate a valid JWT token for testing
pub fn generate_test_token() -> String {
    token_with_expiry(3600)
}

/// Generate an expired JWT token for testing unauthorized scenarios
pub fn generate_expired_token() -> String {
    token_with_expiry(-3600)
}

/// Helper struct for creating network request bodies
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNetworkRequest {
    pub network_id: String,
    pub name: String,
    pub vlan_name: String,
    pub vlan_id: u32,
}

impl Default for CreateNetworkRequest {
    fn default() -> Self {
        Self {
            network_id: "net-1".to_string(),
            name: "web".to_string(),
            vlan_name: "vlan100".to_string(),
            vlan_id: 100,
        }
    }
}

impl CreateNetworkRequest {
    pub fn with_network_id(mut self, network_id: &str) -> Self {
        self.network_id = network_id.to_string();
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_vlan(mut self, vlan_id: u32) -> Self {
        self.vlan_id = vlan_id;
        self.vlan_name = format!("vlan{vlan_id}");
        self
    }
}

/// Helper struct for rename request bodies
#[derive(Debug, Serialize)]
pub struct RenameNetworkRequest {
    pub name: String,
}

/// Network response structure for deserialization
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkResponse {
    pub network_id: String,
    pub name: String,
    pub vlan_name: String,
    pub vlan_id: u16,
    pub ports: serde_json::Map<String, serde_json::Value>,
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub request_id: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<Vec<FieldError>>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
