use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Direction, Position};

/// Largest supported value for either grid bound.
pub const MAX_BOUND: i32 = 50;

/// Represents errors that can occur within the grid operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error(
        "Grid bounds ({max_x}, {max_y}) are outside the supported range 0..={MAX_BOUND}"
    )]
    BoundsOutOfRange { max_x: i32, max_y: i32 },
    #[error("Coordinates ({x}, {y}) are out of bounds for grid bounds ({max_x}, {max_y})")]
    OutOfBounds {
        x: i32,
        y: i32,
        max_x: i32,
        max_y: i32,
    },
}

/// A scent left where a robot fell off the grid.
///
/// Keyed on both position and heading: a scent only suppresses loss for the
/// exact edge cell and facing it was recorded at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scent {
    pub position: Position,
    pub facing: Direction,
}

/// The bounded world robots move on.
///
/// Bounds are fixed at construction; the lower-left corner is always the
/// origin. Scents accumulate monotonically over the lifetime of a session and
/// are never removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    max_x: i32,
    max_y: i32,
    scents: HashSet<Scent>,
}

impl Grid {
    /// Creates a grid whose upper-right corner is `(max_x, max_y)`.
    ///
    /// Returns `Err(GridError::BoundsOutOfRange)` if either bound is negative
    /// or greater than [`MAX_BOUND`].
    pub fn new(max_x: i32, max_y: i32) -> Result<Self, GridError> {
        if !(0..=MAX_BOUND).contains(&max_x) || !(0..=MAX_BOUND).contains(&max_y) {
            return Err(GridError::BoundsOutOfRange { max_x, max_y });
        }
        Ok(Grid {
            max_x,
            max_y,
            scents: HashSet::new(),
        })
    }

    /// Returns the x coordinate of the upper-right corner.
    #[inline]
    pub fn max_x(&self) -> i32 {
        self.max_x
    }

    /// Returns the y coordinate of the upper-right corner.
    #[inline]
    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    /// Checks if the given coordinates are within the grid boundaries.
    #[inline]
    pub fn is_in_bounds(&self, x: i32, y: i32) -> bool {
        (0..=self.max_x).contains(&x) && (0..=self.max_y).contains(&y)
    }

    /// Records a scent at `position` facing `facing`.
    ///
    /// Returns `Ok(())` on success, or `Err(GridError::OutOfBounds)` if the
    /// position lies outside the grid. Recording an already-present scent is
    /// a no-op.
    pub fn record_scent(&mut self, position: Position, facing: Direction) -> Result<(), GridError> {
        if !self.is_in_bounds(position.x, position.y) {
            return Err(GridError::OutOfBounds {
                x: position.x,
                y: position.y,
                max_x: self.max_x,
                max_y: self.max_y,
            });
        }
        self.scents.insert(Scent { position, facing });
        Ok(())
    }

    /// Reports whether a scent exists at `position` facing `facing`.
    ///
    /// Never errors; any out-of-bounds position simply has no scent.
    pub fn has_scent(&self, position: Position, facing: Direction) -> bool {
        self.scents.contains(&Scent { position, facing })
    }

    /// Returns the number of scents recorded so far.
    pub fn scent_count(&self) -> usize {
        self.scents.len()
    }
}
