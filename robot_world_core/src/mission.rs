use serde::{Deserialize, Serialize};

use crate::{
    Direction, Position,
    grid::{Grid, GridError},
    robot::{Instruction, Robot},
};

/// Longest accepted instruction sequence, in characters.
pub const MAX_INSTRUCTIONS: usize = 99;

/// Represents errors that end a single robot's run.
///
/// None of these corrupt the grid or affect robots that ran earlier in the
/// same session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MissionError {
    #[error("Start position ({x}, {y}) is outside grid bounds ({max_x}, {max_y})")]
    InvalidStartPosition {
        x: i32,
        y: i32,
        max_x: i32,
        max_y: i32,
    },
    #[error(
        "Instruction sequence of {length} characters exceeds the limit of {MAX_INSTRUCTIONS}"
    )]
    InstructionsTooLong { length: usize },
    #[error("Unrecognized instruction character '{instruction}'")]
    UnrecognizedInstruction { instruction: char },
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Immutable snapshot of a robot's final state, produced once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub position: Position,
    pub facing: Direction,
    pub lost: bool,
}

/// A robot's declared start and instruction sequence, parsed from a session
/// script but not yet validated against the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotPlan {
    pub start: Position,
    pub facing: Direction,
    pub instructions: String,
}

/// Manages one simulation session.
///
/// A mission owns the grid, and with it the scents every robot in the session
/// shares. Robots are run strictly one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    grid: Grid,
}

impl Mission {
    /// Creates a mission over a freshly constructed grid.
    pub fn new(grid: Grid) -> Self {
        Mission { grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Runs one robot from `start` facing `facing` through `instructions`.
    ///
    /// The start position must be in bounds and the instruction sequence at
    /// most [`MAX_INSTRUCTIONS`] characters; both are checked before any
    /// instruction is applied. Instructions are trimmed and interpreted
    /// case-insensitively, in order, until the sequence ends or the robot is
    /// lost. After a loss the remaining characters are not even validated.
    ///
    /// An unrecognized character fails the run at that point; instructions
    /// already interpreted keep their effect on the grid.
    pub fn run_robot(
        &mut self,
        start: Position,
        facing: Direction,
        instructions: &str,
    ) -> Result<RunResult, MissionError> {
        if !self.grid.is_in_bounds(start.x, start.y) {
            return Err(MissionError::InvalidStartPosition {
                x: start.x,
                y: start.y,
                max_x: self.grid.max_x(),
                max_y: self.grid.max_y(),
            });
        }
        if instructions.len() > MAX_INSTRUCTIONS {
            return Err(MissionError::InstructionsTooLong {
                length: instructions.len(),
            });
        }

        let mut robot = Robot::new(start, facing);
        for value in instructions.trim().chars() {
            if robot.lost {
                break;
            }
            let instruction = Instruction::from_char(value.to_ascii_uppercase()).ok_or(
                MissionError::UnrecognizedInstruction { instruction: value },
            )?;
            instruction.apply(&mut robot, &mut self.grid)?;
        }

        Ok(RunResult {
            position: robot.position,
            facing: robot.facing,
            lost: robot.lost,
        })
    }

    /// Runs a robot plan produced by [`load_session_from_string`].
    pub fn run_plan(&mut self, plan: &RobotPlan) -> Result<RunResult, MissionError> {
        self.run_robot(plan.start, plan.facing, &plan.instructions)
    }
}

/// Represents errors in the textual session protocol.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Session script contains no grid line")]
    Empty,
    #[error("Invalid grid line '{line}': expected two integers")]
    InvalidGridLine { line: String },
    #[error("Invalid robot line '{line}': expected 'X Y D'")]
    InvalidRobotLine { line: String },
    #[error("Unknown direction letter '{direction}'")]
    UnknownDirection { direction: String },
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Loads a session from its textual script.
///
/// The first non-blank line carries the grid's upper-right corner as two
/// integers (the lower-left corner is always the origin). Each robot then
/// takes two lines: `X Y D` with `D` one of N/E/S/W, and an instruction line
/// (possibly empty). A blank line or the end of input terminates the robot
/// list. Direction letters are accepted case-insensitively.
///
/// The returned plans are validated only syntactically; running them against
/// the mission is where start positions and instruction characters are
/// checked.
pub fn load_session_from_string(
    session: &str,
) -> Result<(Mission, Vec<RobotPlan>), SessionError> {
    let mut lines = session.lines();

    let grid_line = loop {
        match lines.next() {
            Some(line) if line.trim().is_empty() => continue,
            Some(line) => break line.trim(),
            None => return Err(SessionError::Empty),
        }
    };
    let (max_x, max_y) = parse_grid_line(grid_line)?;
    let grid = Grid::new(max_x, max_y)?;

    let mut plans = Vec::new();
    while let Some(line) = lines.next() {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        let (start, facing) = parse_robot_line(line)?;
        // A position line at the end of input gets an empty sequence.
        let instructions = lines.next().unwrap_or("").trim().to_string();
        plans.push(RobotPlan {
            start,
            facing,
            instructions,
        });
    }

    Ok((Mission::new(grid), plans))
}

fn parse_grid_line(line: &str) -> Result<(i32, i32), SessionError> {
    let invalid = || SessionError::InvalidGridLine {
        line: line.to_string(),
    };
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(invalid());
    }
    let max_x = tokens[0].parse().map_err(|_| invalid())?;
    let max_y = tokens[1].parse().map_err(|_| invalid())?;
    Ok((max_x, max_y))
}

fn parse_robot_line(line: &str) -> Result<(Position, Direction), SessionError> {
    let invalid = || SessionError::InvalidRobotLine {
        line: line.to_string(),
    };
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(invalid());
    }
    let x = tokens[0].parse().map_err(|_| invalid())?;
    let y = tokens[1].parse().map_err(|_| invalid())?;

    let letter = tokens[2].to_ascii_uppercase();
    let mut chars = letter.chars();
    let facing = match (chars.next(), chars.next()) {
        (Some(value), None) => Direction::from_char(value),
        _ => None,
    }
    .ok_or_else(|| SessionError::UnknownDirection {
        direction: tokens[2].to_string(),
    })?;

    Ok((Position::new(x, y), facing))
}
