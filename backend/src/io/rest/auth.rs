//! Caller identity for authenticated routes
//!
//! Token issuance lives outside this service. Handlers only see a
//! [`Caller`] resolved from `Authorization: Bearer <token>` through the
//! [`IdentityResolver`] held in the application state.

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use tracing::warn;

use super::api_error::ApiError;
use crate::AppState;

/// Turns a bearer token into the id of the parent account it belongs to
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// None when the token is not recognised
    async fn resolve(&self, token: &str) -> Option<String>;
}

/// Treats the bearer token itself as the account id.
/// Suitable behind a gateway that has already validated the token.
#[derive(Debug, Clone, Copy, Default)]
pub struct BearerAccountIdentity;

#[async_trait]
impl IdentityResolver for BearerAccountIdentity {
    async fn resolve(&self, token: &str) -> Option<String> {
        let token = token.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }
}

/// Authenticated parent account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub account_id: String,
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if scheme.eq_ignore_ascii_case("Bearer") {
        Some(token.trim())
    } else {
        None
    }
}

#[async_trait]
impl FromRequestParts<AppState> for Caller {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(ApiError::Unauthenticated)?;

        match state.identity.resolve(token).await {
            Some(account_id) => Ok(Caller { account_id }),
            None => {
                warn!("Rejected unresolvable bearer token on {}", parts.uri.path());
                Err(ApiError::Unauthenticated)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_parsing() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer parent-1"));
        assert_eq!(bearer_token(&headers), Some("parent-1"));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("bearer  parent-2 "));
        assert_eq!(bearer_token(&headers), Some("parent-2"));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));
        assert_eq!(bearer_token(&headers), None);
    }

    #[tokio::test]
    async fn test_bearer_account_identity() {
        let resolver = BearerAccountIdentity;
        assert_eq!(resolver.resolve("parent-1").await.as_deref(), Some("parent-1"));
        assert_eq!(resolver.resolve("   ").await, None);
    }
}
