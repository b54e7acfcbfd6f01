//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.

pub mod auth;
pub mod world;

pub use auth::{AuthError, AuthUseCases};
pub use world::{WorldError, WorldUseCases};
