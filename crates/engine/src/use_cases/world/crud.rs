//! World CRUD operations.

use std::sync::Arc;

use worldbuilder_domain::{
    AccountId, NewWorld, World, WorldDimensions, WorldId, WorldName, WorldWithObjects,
    WORLD_QUOTA,
};

use crate::infrastructure::ports::{WorldObjectRepo, WorldRepo};

use super::WorldError;

pub struct WorldCrud {
    world: Arc<dyn WorldRepo>,
    world_object: Arc<dyn WorldObjectRepo>,
}

impl WorldCrud {
    pub fn new(world: Arc<dyn WorldRepo>, world_object: Arc<dyn WorldObjectRepo>) -> Self {
        Self {
            world,
            world_object,
        }
    }

    pub async fn list(&self, owner: AccountId) -> Result<Vec<World>, WorldError> {
        let worlds = self.world.list_for_owner(owner).await?;
        tracing::debug!(account_id = %owner, count = worlds.len(), "Listed worlds");
        Ok(worlds)
    }

    /// Validates the request, then creates the world atomically against the
    /// owner's quota and existing names.
    pub async fn create(
        &self,
        owner: AccountId,
        name: &str,
        width: i64,
        height: i64,
    ) -> Result<World, WorldError> {
        let name = WorldName::new(name)?;
        let dimensions = WorldDimensions::new(width, height)?;

        let world = self
            .world
            .create_for_owner(owner, &NewWorld::new(name, dimensions), WORLD_QUOTA)
            .await
            .map_err(WorldError::from)
            .inspect_err(|e| {
                if let WorldError::QuotaExceeded { limit } = e {
                    tracing::warn!(account_id = %owner, limit, "World quota reached");
                }
            })?;

        tracing::info!(account_id = %owner, world_id = %world.id, name = %world.name, "Created world");
        Ok(world)
    }

    pub async fn get(
        &self,
        owner: AccountId,
        world_id: WorldId,
    ) -> Result<WorldWithObjects, WorldError> {
        let world = self
            .world
            .get_for_owner(owner, world_id)
            .await?
            .ok_or(WorldError::NotFound)?;
        let objects = self.world_object.list_in_world(world.id).await?;

        Ok(WorldWithObjects { world, objects })
    }

    /// Deletes the world and, by cascade, every object in it.
    pub async fn delete(&self, owner: AccountId, world_id: WorldId) -> Result<(), WorldError> {
        self.world.delete_for_owner(owner, world_id).await?;
        tracing::info!(account_id = %owner, world_id = %world_id, "Deleted world");
        Ok(())
    }
}
