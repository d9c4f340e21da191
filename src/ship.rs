//! Ship descriptors and the coordinate projection rule.

use crate::config::SHIP_LENGTH;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
    /// Down-right diagonal (`\`).
    DiagonalDescending,
    /// Down-left diagonal (`/`).
    DiagonalAscending,
}

impl Orientation {
    /// Human-readable label used in the placement report.
    pub const fn label(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "Horizontal",
            Orientation::Vertical => "Vertical",
            Orientation::DiagonalDescending => "Diagonal Descendente",
            Orientation::DiagonalAscending => "Diagonal Ascendente",
        }
    }
}

/// Immutable ship descriptor: start cell plus orientation.
///
/// Coordinates are signed and unbounded here; they are validated against the
/// board bounds at placement time. The ascending diagonal subtracts from the
/// column, so a projected column can legitimately go below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    row: i32,
    col: i32,
    orientation: Orientation,
}

impl Ship {
    /// Create a ship descriptor starting at (`row`, `col`).
    pub const fn new(row: i32, col: i32, orientation: Orientation) -> Self {
        Self {
            row,
            col,
            orientation,
        }
    }

    /// Origin of the ship (row, col).
    pub fn origin(&self) -> (i32, i32) {
        (self.row, self.col)
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Project the cell at `offset` along the ship's orientation.
    ///
    /// This is the single source of the per-orientation coordinate math,
    /// shared by validation and placement.
    pub fn cell(&self, offset: usize) -> (i32, i32) {
        let i = offset as i32;
        match self.orientation {
            Orientation::Horizontal => (self.row, self.col + i),
            Orientation::Vertical => (self.row + i, self.col),
            Orientation::DiagonalDescending => (self.row + i, self.col + i),
            Orientation::DiagonalAscending => (self.row + i, self.col - i),
        }
    }

    /// Iterator over all cells the ship would occupy, in offset order.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..SHIP_LENGTH).map(move |i| self.cell(i))
    }
}
