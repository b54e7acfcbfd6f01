//! SQLite schema initialization - tables, constraints and indexes.

use sqlx::SqlitePool;

use crate::infrastructure::ports::RepoError;

const STATEMENTS: &[&str] = &[
    // Usernames compare with BINARY collation, so uniqueness is case-sensitive.
    r#"
    CREATE TABLE IF NOT EXISTS accounts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL
    )
    "#,
    // UNIQUE (owner_id, name) backs up the in-transaction name check.
    r#"
    CREATE TABLE IF NOT EXISTS worlds (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        owner_id INTEGER NOT NULL REFERENCES accounts (id),
        name TEXT NOT NULL,
        width INTEGER NOT NULL CHECK (width BETWEEN 20 AND 200),
        height INTEGER NOT NULL CHECK (height BETWEEN 10 AND 100),
        UNIQUE (owner_id, name)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS world_objects (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        world_id INTEGER NOT NULL REFERENCES worlds (id) ON DELETE CASCADE,
        object_type TEXT NOT NULL,
        x REAL NOT NULL,
        y REAL NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS world_objects_world_id ON world_objects (world_id)",
];

/// Initialize the schema. Idempotent; called once on startup.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), RepoError> {
    for statement in STATEMENTS {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| RepoError::database("ensure_schema", e))?;
    }

    tracing::info!("SQLite schema initialized (tables and indexes ensured)");
    Ok(())
}
