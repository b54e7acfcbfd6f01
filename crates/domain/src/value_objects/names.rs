//! Validated name newtypes for domain entities
//!
//! These newtypes ensure that names are valid by construction. Lengths are
//! counted in characters, not bytes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for account usernames
pub const MAX_USERNAME_LENGTH: usize = 50;

/// Maximum length for world names
pub const MAX_WORLD_NAME_LENGTH: usize = 25;

// ============================================================================
// Username
// ============================================================================

/// A validated, case-sensitive account username.
///
/// Stored exactly as given: no trimming and no case folding, so `Alice` and
/// `alice` are different accounts. Surrounding whitespace is rejected rather
/// than silently stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// # Errors
    ///
    /// Returns `DomainError::InvalidField` if:
    /// - The username is empty
    /// - The username has leading or trailing whitespace
    /// - The username exceeds 50 characters
    pub fn new(username: impl Into<String>) -> Result<Self, DomainError> {
        let username = username.into();
        if username.is_empty() {
            return Err(DomainError::invalid_field("username", "must not be empty"));
        }
        if username.trim() != username {
            return Err(DomainError::invalid_field(
                "username",
                "must not start or end with whitespace",
            ));
        }
        if username.chars().count() > MAX_USERNAME_LENGTH {
            return Err(DomainError::invalid_field(
                "username",
                format!("must be at most {} characters", MAX_USERNAME_LENGTH),
            ));
        }
        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Username {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Username> for String {
    fn from(name: Username) -> String {
        name.0
    }
}

// ============================================================================
// WorldName
// ============================================================================

/// A validated world name (1-25 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WorldName(String);

impl WorldName {
    /// Create a new validated world name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidField` if:
    /// - The name is empty after trimming
    /// - The name exceeds 25 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_field("name", "must not be empty"));
        }
        if trimmed.chars().count() > MAX_WORLD_NAME_LENGTH {
            return Err(DomainError::invalid_field(
                "name",
                format!("must be between 1 and {} characters", MAX_WORLD_NAME_LENGTH),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for WorldName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<WorldName> for String {
    fn from(name: WorldName) -> String {
        name.0
    }
}
