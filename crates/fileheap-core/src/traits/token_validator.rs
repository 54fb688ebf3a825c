//! Token validation trait for the external authentication service.

use std::fmt;

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::id::UserId;

/// Header carrying the opaque access token, both on inbound requests and
/// on the outbound validation call.
pub const ACCESS_TOKEN_HEADER: &str = "access-token";

/// Resolves an opaque bearer token to a user identity.
///
/// Rejections (invalid, expired, or missing token) are reported as
/// [`ErrorKind::Authentication`](crate::error::ErrorKind::Authentication);
/// transport failures talking to the auth service as
/// `ErrorKind::ExternalService` — a transport error is never an identity.
/// Validation results are not cached across requests.
#[async_trait]
pub trait TokenValidator: Send + Sync + fmt::Debug + 'static {
    /// Validate a token and return the user it belongs to.
    async fn validate(&self, token: &str) -> AppResult<UserId>;
}
