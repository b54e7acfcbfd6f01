//! World management use cases.
//!
//! Every operation is scoped to the acting owner; worlds of other accounts
//! are reported as not found.

mod crud;
mod objects;

pub use crud::WorldCrud;
pub use objects::AddObject;

use worldbuilder_domain::DomainError;

use crate::infrastructure::ports::{Constraint, RepoError};

/// Shared error type for world use cases.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    #[error("World limit of {limit} reached")]
    QuotaExceeded { limit: u32 },
    #[error("A world with this name already exists")]
    DuplicateName,
    #[error("World not found")]
    NotFound,
    #[error("Position ({x}, {y}) is outside the world's {width}x{height} bounds")]
    OutOfBounds {
        x: f64,
        y: f64,
        width: u32,
        height: u32,
    },
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

impl From<DomainError> for WorldError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidField { field, reason } => Self::InvalidInput { field, reason },
            // no world operation takes a password
            other @ DomainError::WeakPassword { .. } => Self::InvalidInput {
                field: "password",
                reason: other.to_string(),
            },
        }
    }
}

impl From<RepoError> for WorldError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound { .. } => Self::NotFound,
            RepoError::ConstraintViolation(Constraint::WorldQuota { limit }) => {
                Self::QuotaExceeded { limit }
            }
            RepoError::ConstraintViolation(Constraint::UniqueWorldName) => Self::DuplicateName,
            other => Self::Unavailable(other.to_string()),
        }
    }
}

/// Container for world use cases.
pub struct WorldUseCases {
    pub crud: WorldCrud,
    pub add_object: AddObject,
}

impl WorldUseCases {
    pub fn new(crud: WorldCrud, add_object: AddObject) -> Self {
        Self { crud, add_object }
    }
}
