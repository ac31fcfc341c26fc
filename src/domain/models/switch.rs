//! Switch Connection Model
//!
//! Connection parameters for the single managed switch a registry drives.

use serde::Deserialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Login credentials for the switch
///
/// The password is wiped from memory when the value is dropped and is never
/// printed by `Debug`.
#[derive(Clone, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct SwitchCredentials {
    username: String,
    password: String,
}

impl SwitchCredentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl PartialEq for SwitchCredentials {
    fn eq(&self, other: &Self) -> bool {
        self.username == other.username && self.password == other.password
    }
}

impl Eq for SwitchCredentials {}

impl std::fmt::Debug for SwitchCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwitchCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Fixed connection parameters for the managed switch
#[derive(Debug, Clone)]
pub struct SwitchEndpoint {
    address: String,
    credentials: SwitchCredentials,
    port: String,
}

impl SwitchEndpoint {
    /// `port` is the switch interface new VLANs are trunked onto, e.g. `3/23`.
    #[must_use]
    pub fn new(address: impl Into<String>, credentials: SwitchCredentials, port: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            credentials,
            port: port.into(),
        }
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub fn credentials(&self) -> &SwitchCredentials {
        &self.credentials
    }

    #[must_use]
    pub fn port(&self) -> &str {
        &self.port
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_password() {
        let credentials = SwitchCredentials::new("admin", "s3cret");
        let printed = format!("{credentials:?}");

        assert!(printed.contains("admin"));
        assert!(!printed.contains("s3cret"));
    }

    #[test]
    fn test_endpoint_accessors() {
        let endpoint = SwitchEndpoint::new("10.0.0.1", SwitchCredentials::new("admin", "pw"), "3/23");

        assert_eq!(endpoint.address(), "10.0.0.1");
        assert_eq!(endpoint.credentials().username(), "admin");
        assert_eq!(endpoint.credentials().password(), "pw");
        assert_eq!(endpoint.port(), "3/23");
    }
}
