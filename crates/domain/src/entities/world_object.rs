//! WorldObject entity - a typed, positioned thing inside a world

use serde::{Deserialize, Serialize};

use crate::{Position, WorldId, WorldObjectId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldObject {
    pub id: WorldObjectId,
    pub world_id: WorldId,
    /// Free-form type tag chosen by the client (e.g. "tree", "house").
    pub object_type: String,
    pub position: Position,
}

/// An object about to be placed, before the store assigns an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorldObject {
    pub object_type: String,
    pub position: Position,
}

impl NewWorldObject {
    pub fn new(object_type: impl Into<String>, position: Position) -> Self {
        Self {
            object_type: object_type.into(),
            position,
        }
    }
}
