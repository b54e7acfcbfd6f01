//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    ports::{AccountRepo, PasswordHasherPort, TokenPort, WorldObjectRepo, WorldRepo},
    sqlite::SqliteRepositories,
};
use crate::use_cases;
use crate::use_cases::auth::{Login, Register};
use crate::use_cases::world::{AddObject, WorldCrud};

/// Main application state.
///
/// Holds the use cases and the token verifier.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
    /// Verifies bearer tokens for the `Auth` extractor.
    pub tokens: Arc<dyn TokenPort>,
}

/// Container for all use cases.
pub struct UseCases {
    pub auth: use_cases::AuthUseCases,
    pub world: use_cases::WorldUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        repos: SqliteRepositories,
        hasher: Arc<dyn PasswordHasherPort>,
        tokens: Arc<dyn TokenPort>,
    ) -> Self {
        let accounts: Arc<dyn AccountRepo> = repos.account;
        let worlds: Arc<dyn WorldRepo> = repos.world;
        let world_objects: Arc<dyn WorldObjectRepo> = repos.world_object;

        let auth = use_cases::AuthUseCases::new(
            Register::new(accounts.clone(), hasher.clone()),
            Login::new(accounts, hasher, tokens.clone()),
        );
        let world = use_cases::WorldUseCases::new(
            WorldCrud::new(worlds.clone(), world_objects.clone()),
            AddObject::new(worlds, world_objects),
        );

        Self {
            use_cases: UseCases { auth, world },
            tokens,
        }
    }
}
