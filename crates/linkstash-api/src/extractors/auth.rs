//! `AuthUser` extractor — reads the identity the auth gateway injects.
//!
//! Linkstash sits behind a gateway that terminates authentication and
//! forwards the verified account ID in `x-user-id`. Requests reaching
//! this service without that header are rejected outright.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use linkstash_core::error::AppError;
use linkstash_core::types::UserId;
use linkstash_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id: UserId = parts
            .headers
            .get("x-user-id")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authorization("Missing x-user-id header"))?
            .parse()
            .map_err(|_| AppError::authorization("Invalid x-user-id header"))?;

        let ip_address = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
            .to_string();

        let user_agent = parts
            .headers
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        Ok(AuthUser(RequestContext::new(user_id, ip_address, user_agent)))
    }
}
