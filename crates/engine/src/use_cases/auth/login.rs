//! Login use case.

use std::sync::Arc;

use worldbuilder_domain::Username;

use crate::infrastructure::ports::{AccountRepo, IssuedToken, PasswordHasherPort, TokenPort};

use super::AuthError;

/// Verifies credentials and issues a bearer token.
///
/// An unknown username and a wrong password fail identically, and both cost
/// one hash verification.
pub struct Login {
    accounts: Arc<dyn AccountRepo>,
    hasher: Arc<dyn PasswordHasherPort>,
    tokens: Arc<dyn TokenPort>,
}

impl Login {
    pub fn new(
        accounts: Arc<dyn AccountRepo>,
        hasher: Arc<dyn PasswordHasherPort>,
        tokens: Arc<dyn TokenPort>,
    ) -> Self {
        Self {
            accounts,
            hasher,
            tokens,
        }
    }

    pub async fn execute(&self, username: &str, password: &str) -> Result<IssuedToken, AuthError> {
        // A username that could never have been registered cannot match.
        let account = match Username::new(username) {
            Ok(username) => self.accounts.find_by_username(&username).await?,
            Err(_) => None,
        };

        let Some(account) = account else {
            self.hasher.verify_dummy(password).await?;
            tracing::warn!("Login rejected: unknown username");
            return Err(AuthError::InvalidCredentials);
        };

        if !self.hasher.verify(password, &account.password_hash).await? {
            tracing::warn!(account_id = %account.id, "Login rejected: wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let issued = self.tokens.issue(account.id)?;
        tracing::info!(account_id = %account.id, expires_at = %issued.expires_at, "Issued token");
        Ok(issued)
    }
}
