//! Bearer-token authentication for HTTP routes.
//!
//! # Usage
//!
//! ```rust,ignore
//! async fn handler(Auth(owner): Auth) -> impl IntoResponse {
//!     format!("Hello, account {owner}")
//! }
//! ```

use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use worldbuilder_domain::AccountId;

use super::error::ApiError;
use crate::app::App;
use crate::infrastructure::ports::{TokenError, TokenPort};

/// Why a request could not be attributed to an account.
#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    #[error("Authorization header missing")]
    MissingToken,
    #[error("Authorization header is not a bearer token")]
    MalformedHeader,
    #[error("Bearer token rejected: {0}")]
    Rejected(#[from] TokenError),
}

/// Router state that can verify bearer tokens.
pub trait AuthState: Send + Sync {
    fn tokens(&self) -> &dyn TokenPort;
}

impl AuthState for Arc<App> {
    fn tokens(&self) -> &dyn TokenPort {
        self.tokens.as_ref()
    }
}

/// The acting owner, taken from a verified `Authorization: Bearer` token.
///
/// Handlers that take this extractor reject unauthenticated requests with 401
/// before any other work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Auth(pub AccountId);

impl<S> FromRequestParts<S> for Auth
where
    S: AuthState,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let result = bearer_token(parts)
            .and_then(|token| state.tokens().verify(token).map_err(AccessError::from));

        match result {
            Ok(account_id) => Ok(Auth(account_id)),
            Err(e) => {
                tracing::debug!(error = %e, "Rejected unauthenticated request");
                Err(e.into())
            }
        }
    }
}

fn bearer_token(parts: &Parts) -> Result<&str, AccessError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or(AccessError::MissingToken)?
        .to_str()
        .map_err(|_| AccessError::MalformedHeader)?;

    let (scheme, token) = header
        .split_once(' ')
        .ok_or(AccessError::MalformedHeader)?;
    let token = token.trim();
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return Err(AccessError::MalformedHeader);
    }
    Ok(token)
}
