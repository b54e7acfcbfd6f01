//! Account entity - a registered principal

use crate::{AccountId, Username};

/// A registered account as held by the credential store.
/// Not `Serialize`; the password hash never leaves the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub username: Username,
    /// PHC-formatted one-way hash of the password.
    pub password_hash: String,
}
