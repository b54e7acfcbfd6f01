//! Worldbuilder Domain - accounts, worlds and the objects placed in them.
//!
//! Everything here is pure: no I/O, no clocks, no randomness. Invariants that
//! can be checked without the store (name lengths, world extents, password
//! strength, object containment) are enforced by construction.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{
    Account, NewWorld, NewWorldObject, World, WorldObject, WorldWithObjects, WORLD_QUOTA,
};

pub use error::DomainError;

pub use ids::{AccountId, WorldId, WorldObjectId};

pub use value_objects::{
    PasswordPolicy, PasswordRule, Position, Username, WorldDimensions, WorldName,
};
