//! Request bodies accepted by the HTTP API.

mod auth;
mod world;

pub use auth::{LoginRequest, RegisterRequest};
pub use world::{AddObjectRequest, CreateWorldRequest};
