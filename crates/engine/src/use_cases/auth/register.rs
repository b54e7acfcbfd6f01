//! Register use case.

use std::sync::Arc;

use worldbuilder_domain::{AccountId, PasswordPolicy, Username};

use crate::infrastructure::ports::{AccountRepo, PasswordHasherPort};

use super::AuthError;

/// Creates an account after the password policy and username rules pass.
pub struct Register {
    accounts: Arc<dyn AccountRepo>,
    hasher: Arc<dyn PasswordHasherPort>,
}

impl Register {
    pub fn new(accounts: Arc<dyn AccountRepo>, hasher: Arc<dyn PasswordHasherPort>) -> Self {
        Self { accounts, hasher }
    }

    pub async fn execute(&self, username: &str, password: &str) -> Result<AccountId, AuthError> {
        PasswordPolicy::check(password)?;
        let username = Username::new(username)?;

        let password_hash = self.hasher.hash(password).await?;
        let account_id = self.accounts.create(&username, &password_hash).await?;

        tracing::info!(account_id = %account_id, "Registered account");
        Ok(account_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{
        Constraint, MockAccountRepo, MockPasswordHasherPort, RepoError,
    };
    use mockall::predicate::*;
    use worldbuilder_domain::PasswordRule;

    #[tokio::test]
    async fn stores_hash_and_returns_new_id() {
        let mut accounts = MockAccountRepo::new();
        let mut hasher = MockPasswordHasherPort::new();

        hasher
            .expect_hash()
            .with(eq("GoodPass1!"))
            .returning(|_| Ok("$argon2id$stub".into()));
        accounts
            .expect_create()
            .withf(|username, hash| username.as_str() == "alice" && hash == "$argon2id$stub")
            .times(1)
            .returning(|_, _| Ok(AccountId::from_i64(1)));

        let use_case = Register::new(Arc::new(accounts), Arc::new(hasher));
        let id = use_case.execute("alice", "GoodPass1!").await.unwrap();

        assert_eq!(id, AccountId::from_i64(1));
    }

    #[tokio::test]
    async fn weak_password_is_rejected_before_any_store_access() {
        let mut accounts = MockAccountRepo::new();
        let mut hasher = MockPasswordHasherPort::new();
        accounts.expect_create().never();
        hasher.expect_hash().never();

        let use_case = Register::new(Arc::new(accounts), Arc::new(hasher));

        for weak in [
            "Short1!",
            "goodpass1!",
            "GOODPASS1!",
            "GoodPassword!",
            "GoodPass12",
            "Goodpass²!",
        ] {
            let err = use_case.execute("alice", weak).await.unwrap_err();
            assert!(
                matches!(err, AuthError::WeakPassword { .. }),
                "{weak} should be weak"
            );
        }
    }

    #[tokio::test]
    async fn weak_password_lists_unmet_rules() {
        let use_case = Register::new(
            Arc::new(MockAccountRepo::new()),
            Arc::new(MockPasswordHasherPort::new()),
        );

        match use_case.execute("alice", "alllowercase").await.unwrap_err() {
            AuthError::WeakPassword { unmet } => assert_eq!(
                unmet,
                vec![
                    PasswordRule::Uppercase,
                    PasswordRule::Digit,
                    PasswordRule::Symbol
                ]
            ),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn malformed_username_is_invalid_input() {
        let use_case = Register::new(
            Arc::new(MockAccountRepo::new()),
            Arc::new(MockPasswordHasherPort::new()),
        );

        let err = use_case.execute(" alice", "GoodPass1!").await.unwrap_err();
        assert!(matches!(
            err,
            AuthError::InvalidInput {
                field: "username",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn taken_username_is_reported() {
        let mut accounts = MockAccountRepo::new();
        let mut hasher = MockPasswordHasherPort::new();
        hasher.expect_hash().returning(|_| Ok("h".into()));
        accounts
            .expect_create()
            .returning(|_, _| Err(RepoError::constraint(Constraint::UniqueUsername)));

        let use_case = Register::new(Arc::new(accounts), Arc::new(hasher));
        let err = use_case.execute("alice", "OtherPass2!").await.unwrap_err();

        assert!(matches!(err, AuthError::UsernameTaken));
    }

    #[tokio::test]
    async fn store_failure_is_unavailable() {
        let mut accounts = MockAccountRepo::new();
        let mut hasher = MockPasswordHasherPort::new();
        hasher.expect_hash().returning(|_| Ok("h".into()));
        accounts
            .expect_create()
            .returning(|_, _| Err(RepoError::database("account.create", "disk I/O error")));

        let use_case = Register::new(Arc::new(accounts), Arc::new(hasher));
        let err = use_case.execute("alice", "GoodPass1!").await.unwrap_err();

        assert!(matches!(err, AuthError::Unavailable(_)));
    }
}
