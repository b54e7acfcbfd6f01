//! World persistence with owner-scoped access.
//!
//! Creation runs inside a `BEGIN IMMEDIATE` transaction: the write lock is
//! taken before the quota count is read, so concurrent creates for the same
//! owner serialize and each sees every world committed before it.

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use worldbuilder_domain::{AccountId, NewWorld, World, WorldDimensions, WorldId, WorldName};

use super::is_unique_violation;
use crate::infrastructure::ports::{Constraint, RepoError, WorldRepo};

pub struct SqliteWorldRepo {
    pool: SqlitePool,
}

impl SqliteWorldRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_world(row: &SqliteRow) -> Result<World, RepoError> {
        let decode = |e: sqlx::Error| RepoError::database("world.decode", e);
        let id: i64 = row.try_get("id").map_err(decode)?;
        let owner_id: i64 = row.try_get("owner_id").map_err(decode)?;
        let name: String = row.try_get("name").map_err(decode)?;
        let width: i64 = row.try_get("width").map_err(decode)?;
        let height: i64 = row.try_get("height").map_err(decode)?;

        Ok(World {
            id: WorldId::from_i64(id),
            owner_id: AccountId::from_i64(owner_id),
            name: WorldName::new(name).map_err(|e| RepoError::database("world.decode", e))?,
            dimensions: WorldDimensions::new(width, height)
                .map_err(|e| RepoError::database("world.decode", e))?,
        })
    }
}

#[async_trait]
impl WorldRepo for SqliteWorldRepo {
    async fn list_for_owner(&self, owner: AccountId) -> Result<Vec<World>, RepoError> {
        let rows = sqlx::query(
            "SELECT id, owner_id, name, width, height FROM worlds WHERE owner_id = ? ORDER BY id",
        )
        .bind(owner.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("world.list_for_owner", e))?;

        rows.iter().map(Self::row_to_world).collect()
    }

    async fn get_for_owner(
        &self,
        owner: AccountId,
        id: WorldId,
    ) -> Result<Option<World>, RepoError> {
        let row = sqlx::query(
            "SELECT id, owner_id, name, width, height FROM worlds WHERE id = ? AND owner_id = ?",
        )
        .bind(id.as_i64())
        .bind(owner.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepoError::database("world.get_for_owner", e))?;

        row.as_ref().map(Self::row_to_world).transpose()
    }

    async fn create_for_owner(
        &self,
        owner: AccountId,
        world: &NewWorld,
        quota: u32,
    ) -> Result<World, RepoError> {
        let db = |e: sqlx::Error| RepoError::database("world.create_for_owner", e);

        // Dropping `tx` on any early return rolls back.
        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await.map_err(db)?;

        let owned: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM worlds WHERE owner_id = ?")
            .bind(owner.as_i64())
            .fetch_one(&mut *tx)
            .await
            .map_err(db)?;
        if owned >= i64::from(quota) {
            return Err(RepoError::constraint(Constraint::WorldQuota { limit: quota }));
        }

        let name_taken: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM worlds WHERE owner_id = ? AND name = ?)",
        )
        .bind(owner.as_i64())
        .bind(world.name.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(db)?;
        if name_taken {
            return Err(RepoError::constraint(Constraint::UniqueWorldName));
        }

        let inserted =
            sqlx::query("INSERT INTO worlds (owner_id, name, width, height) VALUES (?, ?, ?, ?)")
                .bind(owner.as_i64())
                .bind(world.name.as_str())
                .bind(i64::from(world.dimensions.width()))
                .bind(i64::from(world.dimensions.height()))
                .execute(&mut *tx)
                .await;
        let id = match inserted {
            Ok(done) => WorldId::from_i64(done.last_insert_rowid()),
            Err(e) if is_unique_violation(&e) => {
                return Err(RepoError::constraint(Constraint::UniqueWorldName));
            }
            Err(e) => return Err(db(e)),
        };

        tx.commit().await.map_err(db)?;

        Ok(world.clone().into_world(id, owner))
    }

    async fn delete_for_owner(&self, owner: AccountId, id: WorldId) -> Result<(), RepoError> {
        let done = sqlx::query("DELETE FROM worlds WHERE id = ? AND owner_id = ?")
            .bind(id.as_i64())
            .bind(owner.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("world.delete_for_owner", e))?;

        if done.rows_affected() == 0 {
            return Err(RepoError::not_found("World", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{AccountRepo, WorldObjectRepo};
    use crate::infrastructure::sqlite::{temp_database, SqliteAccountRepo, SqliteWorldObjectRepo};
    use std::sync::Arc;
    use worldbuilder_domain::{NewWorldObject, Position, Username, WORLD_QUOTA};

    async fn account(pool: &SqlitePool, name: &str) -> AccountId {
        SqliteAccountRepo::new(pool.clone())
            .create(&Username::new(name).unwrap(), "hash")
            .await
            .unwrap()
    }

    fn new_world(name: &str) -> NewWorld {
        NewWorld::new(
            WorldName::new(name).unwrap(),
            WorldDimensions::new(50, 40).unwrap(),
        )
    }

    #[tokio::test]
    async fn created_world_is_visible_only_to_its_owner() {
        let (_dir, pool) = temp_database(1).await;
        let alice = account(&pool, "alice").await;
        let bob = account(&pool, "bob").await;
        let repo = SqliteWorldRepo::new(pool);

        let world = repo
            .create_for_owner(alice, &new_world("Midgard"), WORLD_QUOTA)
            .await
            .unwrap();

        assert_eq!(world.owner_id, alice);
        assert_eq!(world.width(), 50);
        assert_eq!(
            repo.get_for_owner(alice, world.id).await.unwrap(),
            Some(world.clone())
        );
        assert_eq!(repo.get_for_owner(bob, world.id).await.unwrap(), None);
        assert_eq!(repo.list_for_owner(alice).await.unwrap(), vec![world]);
        assert!(repo.list_for_owner(bob).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn sixth_world_exceeds_quota() {
        let (_dir, pool) = temp_database(1).await;
        let alice = account(&pool, "alice").await;
        let repo = SqliteWorldRepo::new(pool);

        for i in 0..WORLD_QUOTA {
            repo.create_for_owner(alice, &new_world(&format!("World {i}")), WORLD_QUOTA)
                .await
                .unwrap();
        }
        let err = repo
            .create_for_owner(alice, &new_world("One too many"), WORLD_QUOTA)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RepoError::ConstraintViolation(Constraint::WorldQuota { limit: 5 })
        ));
        assert_eq!(repo.list_for_owner(alice).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn quota_is_checked_before_name() {
        let (_dir, pool) = temp_database(1).await;
        let alice = account(&pool, "alice").await;
        let repo = SqliteWorldRepo::new(pool);

        repo.create_for_owner(alice, &new_world("Only"), 1)
            .await
            .unwrap();
        let err = repo
            .create_for_owner(alice, &new_world("Only"), 1)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RepoError::ConstraintViolation(Constraint::WorldQuota { limit: 1 })
        ));
    }

    #[tokio::test]
    async fn names_are_unique_per_owner_not_globally() {
        let (_dir, pool) = temp_database(1).await;
        let alice = account(&pool, "alice").await;
        let bob = account(&pool, "bob").await;
        let repo = SqliteWorldRepo::new(pool);

        repo.create_for_owner(alice, &new_world("Midgard"), WORLD_QUOTA)
            .await
            .unwrap();
        let err = repo
            .create_for_owner(alice, &new_world("Midgard"), WORLD_QUOTA)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RepoError::ConstraintViolation(Constraint::UniqueWorldName)
        ));

        repo.create_for_owner(bob, &new_world("Midgard"), WORLD_QUOTA)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn concurrent_creates_never_exceed_quota() {
        let (_dir, pool) = temp_database(4).await;
        let alice = account(&pool, "alice").await;
        let bob = account(&pool, "bob").await;
        let repo = Arc::new(SqliteWorldRepo::new(pool));

        let attempts: Vec<_> = (0..8)
            .flat_map(|i| [(alice, i), (bob, i)])
            .map(|(owner, i)| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.create_for_owner(owner, &new_world(&format!("W{i}")), WORLD_QUOTA)
                        .await
                })
            })
            .collect();

        let mut quota_hits = 0;
        for attempt in attempts {
            match attempt.await.unwrap() {
                Ok(_) => {}
                Err(RepoError::ConstraintViolation(Constraint::WorldQuota { .. })) => {
                    quota_hits += 1
                }
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert_eq!(quota_hits, 6);
        assert_eq!(repo.list_for_owner(alice).await.unwrap().len(), 5);
        assert_eq!(repo.list_for_owner(bob).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn concurrent_creates_with_same_name_admit_exactly_one() {
        let (_dir, pool) = temp_database(4).await;
        let alice = account(&pool, "alice").await;
        let repo = Arc::new(SqliteWorldRepo::new(pool));

        let attempts: Vec<_> = (0..4)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.create_for_owner(alice, &new_world("Asgard"), WORLD_QUOTA)
                        .await
                })
            })
            .collect();

        let mut created = 0;
        for attempt in attempts {
            match attempt.await.unwrap() {
                Ok(_) => created += 1,
                Err(RepoError::ConstraintViolation(Constraint::UniqueWorldName)) => {}
                Err(other) => panic!("unexpected error: {other}"),
            }
        }
        assert_eq!(created, 1);
    }

    #[tokio::test]
    async fn delete_is_owner_scoped_and_cascades_to_objects() {
        let (_dir, pool) = temp_database(1).await;
        let alice = account(&pool, "alice").await;
        let bob = account(&pool, "bob").await;
        let repo = SqliteWorldRepo::new(pool.clone());
        let objects = SqliteWorldObjectRepo::new(pool.clone());

        let world = repo
            .create_for_owner(alice, &new_world("Midgard"), WORLD_QUOTA)
            .await
            .unwrap();
        for x in [1.0, 2.0, 3.0] {
            objects
                .insert(world.id, &NewWorldObject::new("tree", Position::new(x, 1.0)))
                .await
                .unwrap();
        }

        assert!(repo.delete_for_owner(bob, world.id).await.unwrap_err().is_not_found());
        repo.delete_for_owner(alice, world.id).await.unwrap();
        assert!(repo.delete_for_owner(alice, world.id).await.unwrap_err().is_not_found());

        let orphans: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM world_objects")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(orphans, 0);
    }

    #[tokio::test]
    async fn deleted_world_frees_a_quota_slot_and_its_name() {
        let (_dir, pool) = temp_database(1).await;
        let alice = account(&pool, "alice").await;
        let repo = SqliteWorldRepo::new(pool);

        let world = repo
            .create_for_owner(alice, &new_world("Midgard"), 1)
            .await
            .unwrap();
        repo.delete_for_owner(alice, world.id).await.unwrap();
        let again = repo
            .create_for_owner(alice, &new_world("Midgard"), 1)
            .await
            .unwrap();

        assert_ne!(again.id, world.id);
    }
}
