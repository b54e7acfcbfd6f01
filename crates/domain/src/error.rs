//! Unified error type for the domain layer
//!
//! Value objects validate on construction and report failures through
//! `DomainError`, so adapters never have to inspect strings to find out which
//! rule was broken.

use thiserror::Error;

use crate::value_objects::PasswordRule;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A client-supplied field violates a static constraint.
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// The candidate password does not satisfy the password policy.
    #[error("Password is not strong enough: {}", describe_rules(.unmet))]
    WeakPassword { unmet: Vec<PasswordRule> },
}

impl DomainError {
    /// Creates a field validation error.
    ///
    /// # Example
    /// ```ignore
    /// if name.is_empty() {
    ///     return Err(DomainError::invalid_field("name", "must not be empty"));
    /// }
    /// ```
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending field, if this is a field validation error.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidField { field, .. } => Some(*field),
            Self::WeakPassword { .. } => None,
        }
    }
}

fn describe_rules(rules: &[PasswordRule]) -> String {
    rules
        .iter()
        .map(|rule| rule.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
