//! The placement engine: validation and placement over a [`Grid`].

use crate::common::BoardError;
use crate::grid::{Cell, Grid};
use crate::ship::Ship;

/// Board state during fleet placement: the grid plus a placed-ship count.
pub struct Board {
    grid: Grid,
    placed: usize,
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new() -> Self {
        Board {
            grid: Grid::new(),
            placed: 0,
        }
    }

    /// Immutable view of the underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of ships placed successfully so far.
    pub fn placed(&self) -> usize {
        self.placed
    }

    /// Pure predicate: can `ship` go on the board as projected?
    ///
    /// True iff every projected cell is in bounds and empty. Never mutates
    /// the grid.
    pub fn can_place(&self, ship: &Ship) -> bool {
        self.check(ship).is_ok()
    }

    /// Place `ship`, marking every projected cell as occupied.
    ///
    /// The full bounds and occupancy check is re-run here before any cell
    /// is written, so a bad descriptor fails with the first offending cell
    /// and leaves the grid untouched.
    pub fn place(&mut self, ship: &Ship) -> Result<(), BoardError> {
        self.check(ship)?;
        for (row, col) in ship.cells() {
            // check() guarantees in-bounds, so the casts are lossless.
            self.grid.set_occupied(row as usize, col as usize);
        }
        self.placed += 1;
        Ok(())
    }

    /// Shared bounds-then-occupancy check, per projected cell in offset
    /// order. Single source of truth for both `can_place` and `place`.
    fn check(&self, ship: &Ship) -> Result<(), BoardError> {
        for (row, col) in ship.cells() {
            match self.grid.cell(row, col) {
                None => return Err(BoardError::OutOfBounds { row, col }),
                Some(Cell::Occupied) => return Err(BoardError::Occupied { row, col }),
                Some(Cell::Empty) => {}
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
