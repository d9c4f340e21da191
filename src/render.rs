#![cfg(feature = "std")]

//! Console rendering of the final board.

use std::fmt;

use crate::config::BOARD_SIZE;
use crate::grid::{Cell, Grid};

/// Displayable view of a [`Grid`]: title, column header, one glyph per
/// cell, and the legend line.
pub struct BoardView<'a> {
    grid: &'a Grid,
}

/// Wrap a grid for display with `print!`/`format!`.
pub fn board_view(grid: &Grid) -> BoardView<'_> {
    BoardView { grid }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n=== TABULEIRO DE BATALHA NAVAL ===\n")?;

        write!(f, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(f, "{:2} ", col)?;
        }
        writeln!(f)?;

        for (row, cells) in self.grid.rows().enumerate() {
            write!(f, "{:2} ", row)?;
            for cell in cells {
                let glyph = match cell {
                    Cell::Empty => " ~ ",
                    Cell::Occupied => " X ",
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "\nLegenda: ~ = Água, X = Navio\n")
    }
}
