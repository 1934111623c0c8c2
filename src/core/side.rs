//! The two sides of an Othello game.

use serde::{Deserialize, Serialize};

/// One of the two sides.
///
/// `First` is rendered "X" (black) and moves first in a standard game;
/// `Second` is rendered "O" (white). Exactly two sides exist - no neutral
/// side ever occupies a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// The wire encoding of this side (1 = First, 2 = Second).
    #[must_use]
    pub const fn encode(self) -> u8 {
        match self {
            Side::First => 1,
            Side::Second => 2,
        }
    }

    /// Both sides, First then Second.
    pub fn both() -> impl Iterator<Item = Side> {
        [Side::First, Side::Second].into_iter()
    }
}

impl std::ops::Not for Side {
    type Output = Self;

    /// The opposing side.
    fn not(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::First => write!(f, "X"),
            Side::Second => write!(f, "O"),
        }
    }
}

/// A single cell on the board: empty or taken by one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Taken(Side),
}

impl Cell {
    /// Whether the cell is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The side occupying this cell, if any.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Taken(side) => Some(side),
        }
    }

    /// The wire encoding of this cell (0 = empty, 1 = First, 2 = Second).
    #[must_use]
    pub const fn encode(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Taken(side) => side.encode(),
        }
    }

    /// Decode a wire cell value.
    pub const fn decode(value: u8) -> Result<Self, crate::Error> {
        match value {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Taken(Side::First)),
            2 => Ok(Cell::Taken(Side::Second)),
            other => Err(crate::Error::InvalidCellValue(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_flips_side() {
        assert_eq!(!Side::First, Side::Second);
        assert_eq!(!Side::Second, Side::First);
    }

    #[test]
    fn test_display() {
        assert_eq!(Side::First.to_string(), "X");
        assert_eq!(Side::Second.to_string(), "O");
    }

    #[test]
    fn test_cell_encode_decode() {
        for cell in [Cell::Empty, Cell::Taken(Side::First), Cell::Taken(Side::Second)] {
            assert_eq!(Cell::decode(cell.encode()), Ok(cell));
        }
        assert_eq!(Cell::decode(3), Err(crate::Error::InvalidCellValue(3)));
    }

    #[test]
    fn test_cell_side() {
        assert_eq!(Cell::Empty.side(), None);
        assert_eq!(Cell::Taken(Side::First).side(), Some(Side::First));
        assert!(Cell::Empty.is_empty());
        assert!(!Cell::Taken(Side::Second).is_empty());
    }
}
