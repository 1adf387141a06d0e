use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::graph::MazeError;

/// A position in the grid. `row` grows downward, `col` to the right.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

/// The four directions a corridor can leave a cell in.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A rectangular grid of cells where `true` means passable corridor and
/// `false` means wall. Built once from the input image and never mutated;
/// the node graph is kept in a separate structure (see [`crate::graph`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    pub rows: usize,
    pub columns: usize,
    pub cells: Vec<Vec<bool>>,
}

impl Grid {
    /// Build a grid from rows of cells. Rows must all have the same length.
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self, MazeError> {
        let rows = cells.len();
        let columns = cells.first().map_or(0, |r| r.len());

        if rows < 2 || columns < 2 {
            return Err(MazeError::GridTooSmall { rows, columns });
        }
        debug_assert!(cells.iter().all(|r| r.len() == columns));

        Ok(Self {
            rows,
            columns,
            cells,
        })
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for &cell in row {
                write!(f, "{}", if cell { " " } else { "X" })?;
            }
            write!(f, "\n")?;
        }

        Ok(())
    }
}
