//! Core type definitions for grid analysis.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Land,
    Water,
}

impl Cell {
    pub fn is_land(&self) -> bool {
        matches!(self, Cell::Land)
    }

    /// Parse a cell from its text marker (`'1'` = land, `'0'` = water)
    pub fn from_char(c: char) -> Result<Self> {
        match c {
            '1' => Ok(Cell::Land),
            '0' => Ok(Cell::Water),
            other => Err(Error::InvalidInput(format!(
                "unrecognized cell marker '{}'",
                other
            ))),
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Cell::Land => '1',
            Cell::Water => '0',
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// 2D position in a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn add(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Neighbor one step in the given direction
    pub fn step(&self, dir: Direction) -> Self {
        let (dx, dy) = dir.to_delta();
        self.add(dx, dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cardinal direction for 4-connected adjacency. Diagonals do not count
/// as adjacency, so there are no diagonal variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn to_delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// All four directions in a fixed order, so traversal is deterministic
    pub fn all() -> [Direction; 4] {
        [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ]
    }
}
