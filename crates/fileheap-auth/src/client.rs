//! Remote token validation over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use fileheap_core::config::auth::AuthConfig;
use fileheap_core::error::{AppError, ErrorKind};
use fileheap_core::result::AppResult;
use fileheap_core::traits::token_validator::{ACCESS_TOKEN_HEADER, TokenValidator};
use fileheap_core::types::id::UserId;

/// Successful validation payload returned by the auth service.
#[derive(Debug, Deserialize)]
struct TokenClaims {
    user: Uuid,
}

/// Validates tokens against the external auth endpoint.
///
/// One outbound GET per invocation; no caching, no retry. The request
/// timeout comes from [`AuthConfig::request_timeout_seconds`].
#[derive(Debug, Clone)]
pub struct RemoteTokenValidator {
    http: reqwest::Client,
    endpoint: String,
}

impl RemoteTokenValidator {
    /// Build the validator from configuration.
    pub fn new(config: &AuthConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    "Failed to build auth HTTP client",
                    e,
                )
            })?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl TokenValidator for RemoteTokenValidator {
    async fn validate(&self, token: &str) -> AppResult<UserId> {
        // An absent token never becomes an outbound call.
        if token.is_empty() {
            return Err(AppError::authentication("Missing access token"));
        }

        let response = self
            .http
            .get(&self.endpoint)
            .header(ACCESS_TOKEN_HEADER, token)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Auth service is unreachable", e)
            })?;

        if !response.status().is_success() {
            debug!(status = %response.status(), "Token rejected by auth service");
            return Err(AppError::authentication("Invalid access token"));
        }

        let claims: TokenClaims = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                "Unexpected response from auth service",
                e,
            )
        })?;

        Ok(UserId::from_uuid(claims.user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> RemoteTokenValidator {
        RemoteTokenValidator::new(&AuthConfig {
            // Discard port; nothing listens there.
            endpoint: "http://127.0.0.1:9/check".to_string(),
            request_timeout_seconds: 1,
        })
        .expect("client should build")
    }

    #[tokio::test]
    async fn test_empty_token_rejected_without_network() {
        let err = validator().validate("").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[tokio::test]
    async fn test_transport_failure_is_not_a_rejection() {
        let err = validator().validate("T1").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::ExternalService);
    }

    #[test]
    fn test_claims_parse() {
        let claims: TokenClaims =
            serde_json::from_str(r#"{"user":"6f2c0a34-4f2e-4f7e-9f8a-0a1b2c3d4e5f"}"#)
                .expect("parse");
        assert_eq!(
            claims.user.to_string(),
            "6f2c0a34-4f2e-4f7e-9f8a-0a1b2c3d4e5f"
        );
    }

    #[test]
    fn test_claims_reject_non_uuid_user() {
        assert!(serde_json::from_str::<TokenClaims>(r#"{"user":"u-1"}"#).is_err());
    }
}
