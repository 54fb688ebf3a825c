//! External token-validation service configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the external auth service.
///
/// The service is consumed, never implemented: one GET per validation
/// with the token in the `access-token` header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// URL of the token-validation endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Outbound request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

fn default_endpoint() -> String {
    "http://auth:8080/check".to_string()
}

fn default_request_timeout() -> u64 {
    10
}
