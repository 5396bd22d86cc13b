//! Dense grid store for the automaton
//!
//! Holds the current cell states in a fixed-size row-major buffer. All
//! coordinate access is bounds-checked against `[0, width) x [0, height)`;
//! nothing wraps around.

use crate::cell::{Cell, CellState};
use crate::error::GridError;
use serde::{Deserialize, Serialize};

/// Per-state cell tallies for one grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateCounts {
    pub inflamable: usize,
    pub flamable: usize,
    pub burning: usize,
    pub burnt: usize,
}

impl StateCounts {
    /// Total number of cells tallied
    pub fn total(&self) -> usize {
        self.inflamable + self.flamable + self.burning + self.burnt
    }
}

/// Fixed-size 2D grid of cells, row-major order: `[y * width + x]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl CellGrid {
    /// Create a grid with every cell in the given state
    pub fn filled(width: usize, height: usize, state: CellState) -> Self {
        CellGrid {
            width,
            height,
            cells: vec![Cell::new(state); width * height],
        }
    }

    /// Build a grid from an existing cell buffer.
    ///
    /// The buffer length must equal `width * height`.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        CellGrid {
            width,
            height,
            cells,
        }
    }

    /// Grid width in cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub fn height(&self) -> usize {
        self.height
    }

    /// Grid dimensions as `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if x < self.width && y < self.height {
            Ok(y * self.width + x)
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Get the state of the cell at `(x, y)`.
    ///
    /// # Errors
    /// Fails with [`GridError::OutOfBounds`] outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Result<CellState, GridError> {
        Ok(self.cells[self.index(x, y)?].state)
    }

    /// Set the state of the cell at `(x, y)`, clearing its counters.
    ///
    /// # Errors
    /// Fails with [`GridError::OutOfBounds`] outside the grid.
    pub fn set(&mut self, x: usize, y: usize, state: CellState) -> Result<(), GridError> {
        let idx = self.index(x, y)?;
        self.cells[idx].transition(state);
        Ok(())
    }

    /// Full per-cell record (state plus counters) at `(x, y)`.
    ///
    /// # Errors
    /// Fails with [`GridError::OutOfBounds`] outside the grid.
    pub fn cell(&self, x: usize, y: usize) -> Result<&Cell, GridError> {
        let idx = self.index(x, y)?;
        Ok(&self.cells[idx])
    }

    /// Check whether `(x, y)` lies on the grid
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Iterate over `(x, y, &cell)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (i % self.width, i / self.width, cell))
    }

    /// Tally cells by state
    pub fn counts(&self) -> StateCounts {
        let mut counts = StateCounts::default();
        for cell in &self.cells {
            match cell.state {
                CellState::Inflamable => counts.inflamable += 1,
                CellState::Flamable => counts.flamable += 1,
                CellState::Burning => counts.burning += 1,
                CellState::Burnt => counts.burnt += 1,
            }
        }
        counts
    }

    /// Raw cell buffer, row-major
    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row of cells at `y`, for parallel evaluation
    pub(crate) fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }
}
