use serde::{Deserialize, Serialize};

use crate::{
    Direction, Position,
    grid::{Grid, GridError},
};

/// Holds the state of a single robot during a run.
///
/// A robot is created fresh for each run and mutated in place as instructions
/// are interpreted. Once `lost` is set, every later instruction leaves the
/// robot untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    pub position: Position,
    pub facing: Direction,
    pub lost: bool,
}

impl Robot {
    pub fn new(position: Position, facing: Direction) -> Self {
        Robot {
            position,
            facing,
            lost: false,
        }
    }
}

/// A single interpretable instruction.
///
/// The instruction set is closed; adding a letter means adding a variant here
/// and a mapping in [`Instruction::from_char`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    TurnLeft,
    TurnRight,
    MoveForward,
}

impl Instruction {
    /// Maps an instruction letter to its operation.
    ///
    /// Expects an uppercase letter; the orchestrator normalizes case before
    /// dispatch.
    pub fn from_char(value: char) -> Option<Instruction> {
        match value {
            'L' => Some(Instruction::TurnLeft),
            'R' => Some(Instruction::TurnRight),
            'F' => Some(Instruction::MoveForward),
            _ => None,
        }
    }

    /// Applies this instruction to `robot` on `grid`.
    ///
    /// Turns rotate in place and cannot fail. A forward move onto an
    /// in-bounds cell updates the position; a forward move off the grid
    /// either marks the robot lost and records a scent at the abandoned edge
    /// cell, or is ignored entirely when such a scent already exists. The
    /// robot never occupies the off-grid candidate cell.
    pub fn apply(self, robot: &mut Robot, grid: &mut Grid) -> Result<(), GridError> {
        if robot.lost {
            // Lost is terminal; direct calls must not bypass that.
            return Ok(());
        }

        match self {
            Instruction::TurnLeft => robot.facing = robot.facing.turned_left(),
            Instruction::TurnRight => robot.facing = robot.facing.turned_right(),
            Instruction::MoveForward => {
                let candidate = robot.position.stepped(robot.facing);
                if grid.is_in_bounds(candidate.x, candidate.y) {
                    robot.position = candidate;
                } else if !grid.has_scent(robot.position, robot.facing) {
                    robot.lost = true;
                    grid.record_scent(robot.position, robot.facing)?;
                }
                // A scent at (position, facing) means a robot was already
                // lost here; the move is skipped and interpretation goes on.
            }
        }
        Ok(())
    }
}
