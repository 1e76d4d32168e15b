//! Error type for fallible grid operations.

use std::fmt;

use mazeflow_core::Point;

/// Errors reported by [`Grid`](crate::Grid) operations.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Coordinates outside `[0, width) × [0, height)`. Never clamped.
    OutOfBounds { pos: Point },
    /// Maze generation requires an Entry tile.
    MissingEntry,
    /// Maze generation requires an Exit tile.
    MissingExit,
    /// Wall spawn rate outside `[0.0, 1.0)`. A rate of 1.0 or more can
    /// never produce a solvable layout.
    InvalidSpawnRate(f64),
    /// No solvable layout was found within the attempt budget.
    GenerationFailed { attempts: u32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos } => write!(f, "position {pos} is out of bounds"),
            Self::MissingEntry => write!(f, "grid has no entry tile"),
            Self::MissingExit => write!(f, "grid has no exit tile"),
            Self::InvalidSpawnRate(rate) => {
                write!(f, "wall spawn rate {rate} is outside [0.0, 1.0)")
            }
            Self::GenerationFailed { attempts } => {
                write!(f, "no solvable maze found in {attempts} attempts")
            }
        }
    }
}

impl std::error::Error for GridError {}
