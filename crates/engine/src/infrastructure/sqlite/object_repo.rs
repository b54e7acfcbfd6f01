//! World object persistence.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use worldbuilder_domain::{NewWorldObject, Position, WorldId, WorldObject, WorldObjectId};

use super::is_foreign_key_violation;
use crate::infrastructure::ports::{RepoError, WorldObjectRepo};

pub struct SqliteWorldObjectRepo {
    pool: SqlitePool,
}

impl SqliteWorldObjectRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorldObjectRepo for SqliteWorldObjectRepo {
    async fn list_in_world(&self, world_id: WorldId) -> Result<Vec<WorldObject>, RepoError> {
        let rows = sqlx::query(
            "SELECT id, object_type, x, y FROM world_objects WHERE world_id = ? ORDER BY id",
        )
        .bind(world_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("world_object.list_in_world", e))?;

        rows.iter()
            .map(|row| -> Result<WorldObject, RepoError> {
                let decode = |e: sqlx::Error| RepoError::database("world_object.decode", e);
                Ok(WorldObject {
                    id: WorldObjectId::from_i64(row.try_get("id").map_err(decode)?),
                    world_id,
                    object_type: row.try_get("object_type").map_err(decode)?,
                    position: Position::new(
                        row.try_get("x").map_err(decode)?,
                        row.try_get("y").map_err(decode)?,
                    ),
                })
            })
            .collect()
    }

    async fn insert(
        &self,
        world_id: WorldId,
        object: &NewWorldObject,
    ) -> Result<WorldObjectId, RepoError> {
        let result = sqlx::query(
            "INSERT INTO world_objects (world_id, object_type, x, y) VALUES (?, ?, ?, ?)",
        )
        .bind(world_id.as_i64())
        .bind(&object.object_type)
        .bind(object.position.x)
        .bind(object.position.y)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(WorldObjectId::from_i64(done.last_insert_rowid())),
            // world deleted after the caller looked it up
            Err(e) if is_foreign_key_violation(&e) => Err(RepoError::not_found("World", world_id)),
            Err(e) => Err(RepoError::database("world_object.insert", e)),
        }
    }
}
