//! Repository port traits.
//!
//! Every world-scoped operation takes the owner explicitly; a world that
//! exists but belongs to someone else is indistinguishable from one that does
//! not exist.

use async_trait::async_trait;
use worldbuilder_domain::{
    Account, AccountId, NewWorld, NewWorldObject, Username, World, WorldId, WorldObject,
    WorldObjectId,
};

use super::RepoError;

// =============================================================================
// Account Repository
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepo: Send + Sync {
    /// Insert a new account.
    ///
    /// Fails with `Constraint::UniqueUsername` if the username is taken,
    /// including when two registrations race.
    async fn create(&self, username: &Username, password_hash: &str)
        -> Result<AccountId, RepoError>;

    /// Exact, case-sensitive lookup.
    async fn find_by_username(&self, username: &Username) -> Result<Option<Account>, RepoError>;
}

// =============================================================================
// World Repository
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorldRepo: Send + Sync {
    /// All worlds of `owner`, ordered by id.
    async fn list_for_owner(&self, owner: AccountId) -> Result<Vec<World>, RepoError>;

    async fn get_for_owner(&self, owner: AccountId, id: WorldId)
        -> Result<Option<World>, RepoError>;

    /// Count, name check and insert as one atomic step.
    ///
    /// Fails with `Constraint::WorldQuota` when `owner` already holds `quota`
    /// worlds and with `Constraint::UniqueWorldName` when the name is taken.
    /// Quota is checked first.
    async fn create_for_owner(
        &self,
        owner: AccountId,
        world: &NewWorld,
        quota: u32,
    ) -> Result<World, RepoError>;

    /// Removes the world and all of its objects.
    ///
    /// Fails with `RepoError::NotFound` if nothing owned by `owner` matched.
    async fn delete_for_owner(&self, owner: AccountId, id: WorldId) -> Result<(), RepoError>;
}

// =============================================================================
// World Object Repository
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorldObjectRepo: Send + Sync {
    /// Objects of one world, ordered by id.
    async fn list_in_world(&self, world_id: WorldId) -> Result<Vec<WorldObject>, RepoError>;

    /// Fails with `RepoError::NotFound` if the world no longer exists.
    async fn insert(
        &self,
        world_id: WorldId,
        object: &NewWorldObject,
    ) -> Result<WorldObjectId, RepoError>;
}
