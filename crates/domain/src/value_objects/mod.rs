//! Value objects - Immutable objects defined by their attributes

mod dimensions;
mod names;
mod password;

pub use dimensions::{
    Position, WorldDimensions, MAX_WORLD_HEIGHT, MAX_WORLD_WIDTH, MIN_WORLD_HEIGHT,
    MIN_WORLD_WIDTH,
};
pub use names::{Username, WorldName, MAX_USERNAME_LENGTH, MAX_WORLD_NAME_LENGTH};
pub use password::{PasswordPolicy, PasswordRule, MIN_PASSWORD_LENGTH};
