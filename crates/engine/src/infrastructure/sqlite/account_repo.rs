//! Account persistence (credential store).

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use worldbuilder_domain::{Account, AccountId, Username};

use super::is_unique_violation;
use crate::infrastructure::ports::{AccountRepo, Constraint, RepoError};

pub struct SqliteAccountRepo {
    pool: SqlitePool,
}

impl SqliteAccountRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepo for SqliteAccountRepo {
    async fn create(
        &self,
        username: &Username,
        password_hash: &str,
    ) -> Result<AccountId, RepoError> {
        let result = sqlx::query("INSERT INTO accounts (username, password_hash) VALUES (?, ?)")
            .bind(username.as_str())
            .bind(password_hash)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => Ok(AccountId::from_i64(done.last_insert_rowid())),
            Err(e) if is_unique_violation(&e) => {
                Err(RepoError::constraint(Constraint::UniqueUsername))
            }
            Err(e) => Err(RepoError::database("account.create", e)),
        }
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<Account>, RepoError> {
        let row = sqlx::query("SELECT id, password_hash FROM accounts WHERE username = ?")
            .bind(username.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("account.find_by_username", e))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let id: i64 = row
            .try_get("id")
            .map_err(|e| RepoError::database("account.find_by_username", e))?;
        let password_hash: String = row
            .try_get("password_hash")
            .map_err(|e| RepoError::database("account.find_by_username", e))?;

        Ok(Some(Account {
            id: AccountId::from_i64(id),
            username: username.clone(),
            password_hash,
        }))
    }
}
