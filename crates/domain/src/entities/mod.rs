//! Domain entities - Core business objects with identity

mod account;
mod world;
mod world_object;

pub use account::Account;
pub use world::{NewWorld, World, WorldWithObjects, WORLD_QUOTA};
pub use world_object::{NewWorldObject, WorldObject};
