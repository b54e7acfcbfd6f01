//! Credential port traits (password hashing, bearer tokens).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use worldbuilder_domain::AccountId;

use super::error::{HashError, TokenError};

// =============================================================================
// Password Hashing
// =============================================================================

/// One-way, salted password hashing.
///
/// Implementations are deliberately slow; callers should not hold locks
/// across these calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasherPort: Send + Sync {
    /// Produce a self-describing hash (algorithm, parameters and salt included).
    async fn hash(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` on mismatch; `Err` only when `password_hash` cannot be parsed.
    async fn verify(&self, password: &str, password_hash: &str) -> Result<bool, HashError>;

    /// Same cost as `verify` against a fixed hash. Used when no account
    /// matched so that response time does not reveal which usernames exist.
    async fn verify_dummy(&self, password: &str) -> Result<(), HashError>;
}

// =============================================================================
// Tokens
// =============================================================================

/// A freshly signed bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub account_id: AccountId,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[cfg_attr(test, mockall::automock)]
pub trait TokenPort: Send + Sync {
    fn issue(&self, account_id: AccountId) -> Result<IssuedToken, TokenError>;

    /// The subject of a token that is well-formed, correctly signed and not
    /// yet expired.
    fn verify(&self, token: &str) -> Result<AccountId, TokenError>;
}
