//! Common types: placement errors.

/// Errors returned by `Board::place`.
///
/// Both variants mean the same thing to the driver (the ship cannot go
/// where it was asked to) and carry the first offending projected cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// A projected cell lies outside the board.
    OutOfBounds { row: i32, col: i32 },
    /// A projected cell is already occupied by another ship.
    Occupied { row: i32, col: i32 },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is outside the board", row, col)
            }
            BoardError::Occupied { row, col } => {
                write!(f, "cell ({}, {}) is already occupied", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
