//! Argon2id password hashing.
//!
//! Hashes are PHC strings carrying algorithm, parameters and salt, so
//! verification uses whatever parameters the stored hash was made with.
//! Hashing is CPU-bound and runs on tokio's blocking pool.

use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};
use async_trait::async_trait;

use crate::infrastructure::ports::{HashError, PasswordHasherPort};

const DUMMY_PASSWORD: &str = "no account has this password";

pub struct Argon2PasswordHasher {
    params: Params,
    dummy_hash: String,
}

impl Argon2PasswordHasher {
    /// Hasher with the library's recommended Argon2id cost.
    pub fn new() -> Result<Self, HashError> {
        Self::with_params(Params::default())
    }

    /// Hasher with explicit cost parameters. The dummy hash used for
    /// unknown usernames is computed here, once.
    pub fn with_params(params: Params) -> Result<Self, HashError> {
        let dummy_hash = hash_with(&params, DUMMY_PASSWORD)?;
        Ok(Self { params, dummy_hash })
    }

    /// Minimum-cost parameters, for tests only.
    #[cfg(test)]
    pub fn fast() -> Self {
        let params = Params::new(Params::MIN_M_COST, 1, 1, None).expect("valid argon2 params");
        Self::with_params(params).expect("dummy hash")
    }

    async fn run_blocking<T, F>(task: F) -> Result<T, HashError>
    where
        T: Send + 'static,
        F: FnOnce() -> Result<T, HashError> + Send + 'static,
    {
        tokio::task::spawn_blocking(task)
            .await
            .map_err(|e| HashError::Hashing(e.to_string()))?
    }
}

fn hash_with(params: &Params, password: &str) -> Result<String, HashError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::new(Algorithm::Argon2id, Version::V0x13, params.clone())
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| HashError::Hashing(e.to_string()))
}

fn verify_with(password: &str, password_hash: &str) -> Result<bool, HashError> {
    let parsed =
        PasswordHash::new(password_hash).map_err(|e| HashError::MalformedHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[async_trait]
impl PasswordHasherPort for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, HashError> {
        let params = self.params.clone();
        let password = password.to_owned();
        Self::run_blocking(move || hash_with(&params, &password)).await
    }

    async fn verify(&self, password: &str, password_hash: &str) -> Result<bool, HashError> {
        let password = password.to_owned();
        let password_hash = password_hash.to_owned();
        Self::run_blocking(move || verify_with(&password, &password_hash)).await
    }

    async fn verify_dummy(&self, password: &str) -> Result<(), HashError> {
        let password = password.to_owned();
        let dummy_hash = self.dummy_hash.clone();
        Self::run_blocking(move || verify_with(&password, &dummy_hash).map(|_| ())).await
    }
}
