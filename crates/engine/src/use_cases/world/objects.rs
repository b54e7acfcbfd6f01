//! Placing objects inside a world.

use std::sync::Arc;

use worldbuilder_domain::{AccountId, NewWorldObject, Position, WorldId, WorldObjectId};

use crate::infrastructure::ports::{WorldObjectRepo, WorldRepo};

use super::WorldError;

/// Adds an object to one of the owner's worlds.
///
/// Bounds are checked against the world looked up for this owner. Lookup and
/// insert are separate statements; world dimensions never change, and a world
/// deleted in between surfaces as `NotFound` from the insert.
pub struct AddObject {
    world: Arc<dyn WorldRepo>,
    world_object: Arc<dyn WorldObjectRepo>,
}

impl AddObject {
    pub fn new(world: Arc<dyn WorldRepo>, world_object: Arc<dyn WorldObjectRepo>) -> Self {
        Self {
            world,
            world_object,
        }
    }

    pub async fn execute(
        &self,
        owner: AccountId,
        world_id: WorldId,
        object_type: &str,
        x: f64,
        y: f64,
    ) -> Result<WorldObjectId, WorldError> {
        let world = self
            .world
            .get_for_owner(owner, world_id)
            .await?
            .ok_or(WorldError::NotFound)?;

        let position = Position::new(x, y);
        if !world.contains(position) {
            return Err(WorldError::OutOfBounds {
                x,
                y,
                width: world.width(),
                height: world.height(),
            });
        }

        let object_id = self
            .world_object
            .insert(world.id, &NewWorldObject::new(object_type, position))
            .await?;

        tracing::info!(
            account_id = %owner,
            world_id = %world.id,
            object_id = %object_id,
            "Added object"
        );
        Ok(object_id)
    }
}
