//! World entity - a bounded 2-D space owned by one account

use serde::{Deserialize, Serialize};

use crate::{AccountId, Position, WorldDimensions, WorldId, WorldName, WorldObject};

/// Maximum number of worlds a single account may own at once.
pub const WORLD_QUOTA: u32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct World {
    pub id: WorldId,
    pub owner_id: AccountId,
    pub name: WorldName,
    pub dimensions: WorldDimensions,
}

impl World {
    pub fn width(&self) -> u32 {
        self.dimensions.width()
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }
}

/// A validated request to create a world, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorld {
    pub name: WorldName,
    pub dimensions: WorldDimensions,
}

impl NewWorld {
    pub fn new(name: WorldName, dimensions: WorldDimensions) -> Self {
        Self { name, dimensions }
    }

    /// Attach the store-assigned identity.
    pub fn into_world(self, id: WorldId, owner_id: AccountId) -> World {
        World {
            id,
            owner_id,
            name: self.name,
            dimensions: self.dimensions,
        }
    }
}

/// A world together with everything placed in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldWithObjects {
    pub world: World,
    pub objects: Vec<WorldObject>,
}
