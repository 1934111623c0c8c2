//! The 8x8 board value type.
//!
//! A [`Board`] is a plain `Copy` value: 64 cells, row-major. There is no
//! interior mutability and no shared state - "mutation" means producing a new
//! `Board`, so a caller holding the previous value can prove it unchanged by
//! direct comparison.
//!
//! ## Wire encoding
//!
//! Boards serialize as an 8x8 array of integers, row-major, with
//! 0 = empty, 1 = First, 2 = Second. Deserialization rejects anything else.
//! [`Board::to_grid`] / [`Board::from_grid`] expose the same encoding
//! without going through serde.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::side::{Cell, Side};
use crate::error::Error;

/// Raw wire form of a board: 8 rows of 8 cell values.
pub type Grid = [[u8; 8]; 8];

/// An 8x8 Othello board.
///
/// ## Example
///
/// ```
/// use othello_engine::core::{Board, Cell, Coord, Side};
///
/// let board = Board::new();
/// assert_eq!(board.count(Side::First), 2);
/// assert_eq!(board.count(Side::Second), 2);
///
/// let center = Coord::new(3, 4).unwrap();
/// assert_eq!(board.cell(center), Cell::Taken(Side::First));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Grid", into = "Grid")]
pub struct Board {
    cells: [Cell; 64],
}

impl Board {
    /// The starting position: four stones in the fixed diagonal pattern,
    /// Second on (3,3) and (4,4), First on (3,4) and (4,3).
    #[must_use]
    pub fn new() -> Self {
        let mut cells = [Cell::Empty; 64];
        cells[3 * 8 + 3] = Cell::Taken(Side::Second);
        cells[3 * 8 + 4] = Cell::Taken(Side::First);
        cells[4 * 8 + 3] = Cell::Taken(Side::First);
        cells[4 * 8 + 4] = Cell::Taken(Side::Second);
        Self { cells }
    }

    /// A board with every cell empty. Not reachable in play; useful for
    /// building positions.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; 64],
        }
    }

    /// The cell at `coord`.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    /// A copy of this board with one cell replaced.
    #[must_use]
    pub fn with_cell(&self, coord: Coord, cell: Cell) -> Self {
        let mut next = *self;
        next.cells[coord.index()] = cell;
        next
    }

    /// Number of stones belonging to `side`.
    #[must_use]
    pub fn count(&self, side: Side) -> u32 {
        self.cells
            .iter()
            .filter(|cell| cell.side() == Some(side))
            .count() as u32
    }

    /// Total number of occupied cells.
    #[must_use]
    pub fn occupied(&self) -> u32 {
        self.cells.iter().filter(|cell| !cell.is_empty()).count() as u32
    }

    /// Encode to the wire grid.
    #[must_use]
    pub fn to_grid(&self) -> Grid {
        let mut grid = [[0u8; 8]; 8];
        for coord in Coord::all() {
            grid[coord.row()][coord.col()] = self.cell(coord).encode();
        }
        grid
    }

    /// Decode from a wire grid, rejecting cell values outside {0, 1, 2}.
    pub fn from_grid(grid: Grid) -> Result<Self, Error> {
        let mut cells = [Cell::Empty; 64];
        for coord in Coord::all() {
            cells[coord.index()] = Cell::decode(grid[coord.row()][coord.col()])?;
        }
        Ok(Self { cells })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Grid> for Board {
    type Error = Error;

    fn try_from(grid: Grid) -> Result<Self, Error> {
        Board::from_grid(grid)
    }
}

impl From<Board> for Grid {
    fn from(board: Board) -> Grid {
        board.to_grid()
    }
}

impl std::fmt::Display for Board {
    /// Renders rows of `X`, `O`, and `.` for debugging and logs.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(8) {
            for cell in row {
                match cell.side() {
                    Some(side) => write!(f, "{}", side)?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board:\n{}", self)
    }
}
