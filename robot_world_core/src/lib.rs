use serde::{Deserialize, Serialize};

pub mod grid;
pub mod mission;
pub mod robot;

/// Represents a 2D coordinate.
///
/// Signed so that candidate positions one step beyond a grid edge are
/// representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Returns the position one cell ahead when facing `facing`.
    ///
    /// The result may lie outside any grid; bounds are the grid's concern.
    pub fn stepped(self, facing: Direction) -> Position {
        let (dx, dy) = facing.step();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A cardinal heading, cyclically ordered N -> E -> S -> W -> N.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// The heading after a single clockwise (right) turn.
    pub fn turned_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// The heading after a single counter-clockwise (left) turn.
    pub fn turned_left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// Unit step vector for this heading: North is +y, East is +x.
    pub fn step(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    /// Parses the one-letter heading code used by session scripts.
    ///
    /// Expects an uppercase letter; callers normalize case beforehand.
    pub fn from_char(value: char) -> Option<Direction> {
        match value {
            'N' => Some(Direction::North),
            'E' => Some(Direction::East),
            'S' => Some(Direction::South),
            'W' => Some(Direction::West),
            _ => None,
        }
    }

    /// The one-letter heading code used in result lines.
    pub fn as_char(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }
}
