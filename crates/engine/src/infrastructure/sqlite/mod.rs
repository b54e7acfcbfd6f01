//! SQLite implementations of the storage ports.

use std::str::FromStr;
use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::infrastructure::config::DatabaseSettings;
use crate::infrastructure::ports::RepoError;

mod account_repo;
mod object_repo;
mod schema;
mod world_repo;

pub use account_repo::SqliteAccountRepo;
pub use object_repo::SqliteWorldObjectRepo;
pub use schema::ensure_schema;
pub use world_repo::SqliteWorldRepo;

/// Open a pool with foreign keys enforced on every connection.
pub async fn connect(settings: &DatabaseSettings) -> Result<SqlitePool, RepoError> {
    let options = SqliteConnectOptions::from_str(&settings.url)
        .map_err(|e| RepoError::database("connect", e))?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(settings.busy_timeout);

    SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect_with(options)
        .await
        .map_err(|e| RepoError::database("connect", e))
}

/// Create all SQLite repositories from one pool.
pub struct SqliteRepositories {
    pub account: Arc<SqliteAccountRepo>,
    pub world: Arc<SqliteWorldRepo>,
    pub world_object: Arc<SqliteWorldObjectRepo>,
}

impl SqliteRepositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            account: Arc::new(SqliteAccountRepo::new(pool.clone())),
            world: Arc::new(SqliteWorldRepo::new(pool.clone())),
            world_object: Arc::new(SqliteWorldObjectRepo::new(pool)),
        }
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}

/// A schema-initialised database in a temporary directory. The directory
/// lives as long as the returned guard.
#[cfg(test)]
pub(crate) async fn temp_database(max_connections: u32) -> (tempfile::TempDir, SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let mut settings =
        DatabaseSettings::new(format!("sqlite:{}", dir.path().join("worlds.db").display()));
    settings.max_connections = max_connections;

    let pool = connect(&settings).await.unwrap();
    ensure_schema(&pool).await.unwrap();
    (dir, pool)
}
