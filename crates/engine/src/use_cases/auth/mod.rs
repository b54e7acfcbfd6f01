//! Account registration and login.

mod login;
mod register;

pub use login::Login;
pub use register::Register;

use worldbuilder_domain::{DomainError, PasswordRule};

use crate::infrastructure::ports::{Constraint, HashError, RepoError, TokenError};

/// Failures of the auth use cases.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    #[error("Password is not strong enough")]
    WeakPassword { unmet: Vec<PasswordRule> },
    #[error("Username already taken")]
    UsernameTaken,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

impl From<DomainError> for AuthError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidField { field, reason } => Self::InvalidInput { field, reason },
            DomainError::WeakPassword { unmet } => Self::WeakPassword { unmet },
        }
    }
}

impl From<RepoError> for AuthError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::ConstraintViolation(Constraint::UniqueUsername) => Self::UsernameTaken,
            other => Self::Unavailable(other.to_string()),
        }
    }
}

impl From<HashError> for AuthError {
    fn from(e: HashError) -> Self {
        Self::Unavailable(e.to_string())
    }
}

impl From<TokenError> for AuthError {
    fn from(e: TokenError) -> Self {
        Self::Unavailable(e.to_string())
    }
}

/// Container for auth use cases.
pub struct AuthUseCases {
    pub register: Register,
    pub login: Login,
}

impl AuthUseCases {
    pub fn new(register: Register, login: Login) -> Self {
        Self { register, login }
    }
}
