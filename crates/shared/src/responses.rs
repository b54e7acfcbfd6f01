//! Response bodies returned by the HTTP API.
//!
//! Ids are raw integers here; domain id newtypes stay inside the engine.

use serde::{Deserialize, Serialize};
use worldbuilder_domain::{AccountId, World, WorldObject, WorldObjectId, WorldWithObjects};

// =============================================================================
// Errors
// =============================================================================

/// Stable, machine-readable error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidInput,
    WeakPassword,
    UsernameTaken,
    InvalidCredentials,
    Unauthenticated,
    NotFound,
    QuotaExceeded,
    DuplicateName,
    OutOfBounds,
    Unavailable,

    /// Unknown variant for forward compatibility
    #[serde(other)]
    Unknown,
}

/// JSON body of every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub code: ErrorCode,
    /// Human-readable message, safe to show to end users.
    pub error: String,
    /// Offending request field, for `invalid_input`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, error: impl Into<String>) -> Self {
        Self {
            code,
            error: error.into(),
            field: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

// =============================================================================
// Auth
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub account_id: i64,
}

impl From<AccountId> for RegisterResponse {
    fn from(id: AccountId) -> Self {
        Self {
            account_id: id.as_i64(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub account_id: i64,
    pub token: String,
    /// RFC 3339 instant after which the token is rejected.
    pub expires_at: String,
}

// =============================================================================
// Worlds
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldData {
    pub id: i64,
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl From<&World> for WorldData {
    fn from(world: &World) -> Self {
        Self {
            id: world.id.as_i64(),
            name: world.name.as_str().to_string(),
            width: world.width(),
            height: world.height(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldObjectData {
    pub id: i64,
    #[serde(rename = "type")]
    pub object_type: String,
    pub x: f64,
    pub y: f64,
}

impl From<&WorldObject> for WorldObjectData {
    fn from(object: &WorldObject) -> Self {
        Self {
            id: object.id.as_i64(),
            object_type: object.object_type.clone(),
            x: object.position.x,
            y: object.position.y,
        }
    }
}

/// Body of `GET /api/worlds/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldDetailsResponse {
    pub world: WorldData,
    pub objects: Vec<WorldObjectData>,
}

impl From<&WorldWithObjects> for WorldDetailsResponse {
    fn from(details: &WorldWithObjects) -> Self {
        Self {
            world: WorldData::from(&details.world),
            objects: details.objects.iter().map(WorldObjectData::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectCreatedResponse {
    pub object_id: i64,
}

impl From<WorldObjectId> for ObjectCreatedResponse {
    fn from(id: WorldObjectId) -> Self {
        Self {
            object_id: id.as_i64(),
        }
    }
}
