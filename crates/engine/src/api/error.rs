//! Mapping of use-case failures onto HTTP responses.
//!
//! This is the only place business errors meet status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use worldbuilder_shared::{ErrorCode, ErrorResponse};

use super::auth::AccessError;
use crate::use_cases::{AuthError, WorldError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    World(#[from] WorldError),
    #[error(transparent)]
    Access(#[from] AccessError),
}

const UNAVAILABLE_MESSAGE: &str = "Service temporarily unavailable, try again later";

impl ApiError {
    fn status_and_body(&self) -> (StatusCode, ErrorResponse) {
        match self {
            Self::Auth(e) => match e {
                AuthError::InvalidInput { field, .. } => invalid_input(field, e),
                AuthError::WeakPassword { unmet } => {
                    let rules = unmet.iter().map(ToString::to_string).collect::<Vec<_>>();
                    (
                        StatusCode::BAD_REQUEST,
                        ErrorResponse::new(
                            ErrorCode::WeakPassword,
                            format!("Password must contain {}", rules.join(", ")),
                        )
                        .with_field("password"),
                    )
                }
                AuthError::UsernameTaken => conflict(ErrorCode::UsernameTaken, e),
                AuthError::InvalidCredentials => (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse::new(ErrorCode::InvalidCredentials, e.to_string()),
                ),
                AuthError::Unavailable(_) => unavailable(),
            },
            Self::World(e) => match e {
                WorldError::InvalidInput { field, .. } => invalid_input(field, e),
                WorldError::QuotaExceeded { .. } => conflict(ErrorCode::QuotaExceeded, e),
                WorldError::DuplicateName => conflict(ErrorCode::DuplicateName, e),
                WorldError::NotFound => (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new(ErrorCode::NotFound, e.to_string()),
                ),
                WorldError::OutOfBounds { .. } => (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(ErrorCode::OutOfBounds, e.to_string()),
                ),
                WorldError::Unavailable(_) => unavailable(),
            },
            Self::Access(_) => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new(ErrorCode::Unauthenticated, "Missing or invalid bearer token"),
            ),
        }
    }
}

fn invalid_input(field: &str, e: &impl ToString) -> (StatusCode, ErrorResponse) {
    (
        StatusCode::BAD_REQUEST,
        ErrorResponse::new(ErrorCode::InvalidInput, e.to_string()).with_field(field),
    )
}

fn conflict(code: ErrorCode, e: &impl ToString) -> (StatusCode, ErrorResponse) {
    (StatusCode::CONFLICT, ErrorResponse::new(code, e.to_string()))
}

fn unavailable() -> (StatusCode, ErrorResponse) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        ErrorResponse::new(ErrorCode::Unavailable, UNAVAILABLE_MESSAGE),
    )
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        if status == StatusCode::SERVICE_UNAVAILABLE {
            // storage detail stays in the log
            tracing::error!(error = %self, "Request failed");
        }
        (status, Json(body)).into_response()
    }
}
