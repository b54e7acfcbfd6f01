//! World extents and positions inside them.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

pub const MIN_WORLD_WIDTH: u32 = 20;
pub const MAX_WORLD_WIDTH: u32 = 200;
pub const MIN_WORLD_HEIGHT: u32 = 10;
pub const MAX_WORLD_HEIGHT: u32 = 100;

/// Width and height of a world, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldDimensions {
    width: u32,
    height: u32,
}

impl WorldDimensions {
    /// # Errors
    ///
    /// Returns `DomainError::InvalidField` naming `width` or `height` when a
    /// value is outside its range. Width is checked first.
    pub fn new(width: i64, height: i64) -> Result<Self, DomainError> {
        let width = check_range("width", width, MIN_WORLD_WIDTH, MAX_WORLD_WIDTH)?;
        let height = check_range("height", height, MIN_WORLD_HEIGHT, MAX_WORLD_HEIGHT)?;
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Inclusive on both edges; non-finite coordinates are never inside.
    pub fn contains(&self, position: Position) -> bool {
        (0.0..=f64::from(self.width)).contains(&position.x)
            && (0.0..=f64::from(self.height)).contains(&position.y)
    }
}

fn check_range(field: &'static str, value: i64, min: u32, max: u32) -> Result<u32, DomainError> {
    if value < i64::from(min) || value > i64::from(max) {
        return Err(DomainError::invalid_field(
            field,
            format!("must be between {min} and {max}"),
        ));
    }
    // in range, so it fits
    Ok(value as u32)
}

/// A point inside a world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_range_edges() {
        assert!(WorldDimensions::new(20, 10).is_ok());
        assert!(WorldDimensions::new(200, 100).is_ok());
    }

    #[test]
    fn names_the_offending_field() {
        assert_eq!(WorldDimensions::new(19, 50).unwrap_err().field(), Some("width"));
        assert_eq!(WorldDimensions::new(500, 50).unwrap_err().field(), Some("width"));
        assert_eq!(WorldDimensions::new(50, 9).unwrap_err().field(), Some("height"));
        assert_eq!(WorldDimensions::new(50, 101).unwrap_err().field(), Some("height"));
        assert_eq!(WorldDimensions::new(-1, 50).unwrap_err().field(), Some("width"));
    }

    #[test]
    fn containment_is_inclusive() {
        let dims = WorldDimensions::new(50, 40).unwrap();
        assert!(dims.contains(Position::new(0.0, 0.0)));
        assert!(dims.contains(Position::new(50.0, 40.0)));
        assert!(!dims.contains(Position::new(51.0, 10.0)));
        assert!(!dims.contains(Position::new(10.0, 40.5)));
        assert!(!dims.contains(Position::new(-0.1, 10.0)));
    }

    #[test]
    fn non_finite_positions_are_outside() {
        let dims = WorldDimensions::new(50, 40).unwrap();
        assert!(!dims.contains(Position::new(f64::NAN, 1.0)));
        assert!(!dims.contains(Position::new(1.0, f64::INFINITY)));
    }
}
