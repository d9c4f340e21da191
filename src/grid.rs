//! A fixed-size board grid of cell states.
//!
//! The type is `no_std` friendly and avoids heap allocations. Cells are
//! stored as a plain `N×N` matrix; the public accessor takes signed
//! coordinates so that logically off-board positions (including negative
//! ones produced by the ascending diagonal) read back as `None` instead of
//! panicking.

use core::fmt;

use crate::config::BOARD_SIZE;

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied,
}

/// A `BOARD_SIZE × BOARD_SIZE` grid of cell states.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Grid {
    /// Create a new grid with every cell empty.
    pub fn new() -> Self {
        Grid {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Returns `true` if (`row`, `col`) lies on the board.
    #[inline]
    pub fn in_bounds(row: i32, col: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
    }

    /// Gets the cell at (`row`, `col`), or `None` if it is off the board.
    pub fn cell(&self, row: i32, col: i32) -> Option<Cell> {
        if Self::in_bounds(row, col) {
            Some(self.cells[row as usize][col as usize])
        } else {
            None
        }
    }

    /// Marks an in-bounds cell as occupied. Callers check bounds first.
    pub(crate) fn set_occupied(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Cell::Occupied;
    }

    /// Number of occupied cells on the whole board.
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == Cell::Occupied)
            .count()
    }

    /// Iterator over the grid rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE]> {
        self.cells.iter()
    }
}

impl Default for Grid {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{0}x{0}>:", BOARD_SIZE)?;
        for row in self.rows() {
            for cell in row {
                let glyph = match cell {
                    Cell::Empty => '~',
                    Cell::Occupied => 'X',
                };
                write!(f, "{} ", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
