//! 2D land/water grid.

use isle_core::{Cell, Direction, Error, GridGenConfig, Position, Result};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rectangular, bounded 2D grid of land/water cells.
///
/// Cells are stored row-major. Positions outside the bounds are simply
/// not part of the grid; there is no wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-water grid. Zero dimensions are valid and produce
    /// an empty grid.
    pub fn new(width: i32, height: i32) -> Self {
        let size = (width.max(0) * height.max(0)) as usize;
        Self {
            width: width.max(0),
            height: height.max(0),
            cells: vec![Cell::Water; size],
        }
    }

    /// Build a grid from rows of cells.
    ///
    /// Rows must all have the same length; ragged input is rejected rather
    /// than truncated. An empty row set produces a 0x0 grid.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |row| row.len()) as i32;

        let mut cells = Vec::with_capacity((width * height) as usize);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() as i32 != width {
                return Err(Error::InvalidInput(format!(
                    "ragged grid: row {} has {} cells, expected {}",
                    y,
                    row.len(),
                    width
                )));
            }
            cells.extend(row);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parse a grid from text: one row per line, `1` for land, `0` for
    /// water. Blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let rows = text
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(Cell::from_char)
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_rows(rows)
    }

    /// Create a grid from generation configuration
    pub fn random(config: &GridGenConfig, rng: &mut ChaCha8Rng) -> Self {
        let mut grid = Self::new(config.width, config.height);

        for y in 0..grid.height {
            for x in 0..grid.width {
                if rng.gen::<f32>() < config.land_density {
                    grid.set(Position::new(x, y), Cell::Land);
                }
            }
        }

        grid
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    /// Get cell at position; `None` outside the bounds
    pub fn get(&self, pos: Position) -> Option<Cell> {
        if self.in_bounds(pos) {
            Some(self.cells[self.pos_to_index(pos)])
        } else {
            None
        }
    }

    /// Set cell at an in-bounds position; out-of-bounds writes are ignored
    pub fn set(&mut self, pos: Position, cell: Cell) {
        if self.in_bounds(pos) {
            let index = self.pos_to_index(pos);
            self.cells[index] = cell;
        }
    }

    /// In-bounds 4-connected neighbors of a position, in fixed direction
    /// order. The boundary check lives here, so callers never see
    /// positions outside the grid.
    pub fn neighbors4(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::all()
            .into_iter()
            .map(move |dir| pos.step(dir))
            .filter(|neighbor| self.in_bounds(*neighbor))
    }

    pub fn pos_to_index(&self, pos: Position) -> usize {
        (pos.y * self.width + pos.x) as usize
    }

    pub fn index_to_pos(&self, index: usize) -> Position {
        let x = (index as i32) % self.width;
        let y = (index as i32) / self.width;
        Position::new(x, y)
    }

    /// Iterator over all positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cells.len()).map(move |i| self.index_to_pos(i))
    }

    /// Iterator over all cells with positions, row-major
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (self.index_to_pos(i), *cell))
    }

    /// Number of land cells in the grid
    pub fn land_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_land()).count()
    }

    /// Transposed copy of the grid (rows become columns)
    pub fn transpose(&self) -> Self {
        let mut transposed = Self::new(self.height, self.width);
        for (pos, cell) in self.iter() {
            transposed.set(Position::new(pos.y, pos.x), cell);
        }
        transposed
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                write!(f, "{}", self.cells[(y * self.width + x) as usize])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
