//! `AuthUser` extractor — resolves the `access-token` header through the
//! external validator.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;

use fileheap_core::traits::token_validator::ACCESS_TOKEN_HEADER;
use fileheap_core::types::id::UserId;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated caller of the current request.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub UserId);

/// Pulls the access token out of the request headers.
///
/// A missing or unreadable header resolves to the empty string, which the
/// validator rejects without an outbound call — there is no anonymous
/// access.
pub fn access_token(headers: &HeaderMap) -> &str {
    headers
        .get(ACCESS_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = access_token(&parts.headers);
        let user_id = state.token_validator.validate(token).await?;
        Ok(AuthUser(user_id))
    }
}
