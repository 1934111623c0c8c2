//! Range-checked board coordinates.
//!
//! A [`Coord`] is a (row, col) pair proven to lie on the 8x8 grid. The
//! constructor is the only place the `OutOfRange` condition can arise;
//! everything downstream (board access, the rules engine) takes a `Coord`
//! and never bounds-checks again.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A validated (row, col) position on the 8x8 board.
///
/// Serializes as a two-element integer pair `[row, col]`.
///
/// ## Example
///
/// ```
/// use othello_engine::core::Coord;
///
/// let c = Coord::new(2, 3).unwrap();
/// assert_eq!((c.row(), c.col()), (2, 3));
///
/// assert!(Coord::new(8, 0).is_err());
/// ```
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Create a coordinate, failing with `OutOfRange` if either component
    /// is outside `[0, 8)`.
    pub const fn new(row: u8, col: u8) -> Result<Self, Error> {
        if row >= 8 || col >= 8 {
            Err(Error::OutOfRange { row, col })
        } else {
            Ok(Self { row, col })
        }
    }

    /// Row index, `0..8`.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Column index, `0..8`.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Flat row-major index into a 64-cell array.
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// All 64 coordinates in row-major order (increasing row, then column).
    pub fn all() -> impl Iterator<Item = Coord> {
        (0u8..8).flat_map(|row| (0u8..8).map(move |col| Coord { row, col }))
    }

    /// Step one cell along a (drow, dcol) offset, or `None` off-board.
    #[must_use]
    pub(crate) fn step(self, delta: (i8, i8)) -> Option<Coord> {
        let row = self.row as i8 + delta.0;
        let col = self.col as i8 + delta.1;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Coord {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }
}

impl TryFrom<(u8, u8)> for Coord {
    type Error = Error;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Error> {
        Coord::new(row, col)
    }
}

impl From<Coord> for (u8, u8) {
    fn from(coord: Coord) -> Self {
        (coord.row, coord.col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_in_range() {
        let c = Coord::new(0, 7).unwrap();
        assert_eq!(c.row(), 0);
        assert_eq!(c.col(), 7);
    }

    #[test]
    fn test_new_out_of_range() {
        assert_eq!(Coord::new(8, 0), Err(Error::OutOfRange { row: 8, col: 0 }));
        assert_eq!(Coord::new(0, 8), Err(Error::OutOfRange { row: 0, col: 8 }));
        assert_eq!(
            Coord::new(255, 255),
            Err(Error::OutOfRange { row: 255, col: 255 })
        );
    }

    #[test]
    fn test_all_is_row_major() {
        let all: Vec<_> = Coord::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], Coord::new(0, 0).unwrap());
        assert_eq!(all[7], Coord::new(0, 7).unwrap());
        assert_eq!(all[8], Coord::new(1, 0).unwrap());
        assert_eq!(all[63], Coord::new(7, 7).unwrap());

        let mut sorted = all.clone();
        sorted.sort();
        assert_eq!(all, sorted);
    }

    #[test]
    fn test_step_stays_on_board() {
        let corner = Coord::new(0, 0).unwrap();
        assert_eq!(corner.step((-1, 0)), None);
        assert_eq!(corner.step((0, -1)), None);
        assert_eq!(corner.step((1, 1)), Some(Coord::new(1, 1).unwrap()));

        let far = Coord::new(7, 7).unwrap();
        assert_eq!(far.step((1, 0)), None);
        assert_eq!(far.step((-1, -1)), Some(Coord::new(6, 6).unwrap()));
    }

    #[test]
    fn test_serde_as_pair() {
        let c = Coord::new(2, 3).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "[2,3]");

        let back: Coord = serde_json::from_str("[2,3]").unwrap();
        assert_eq!(back, c);

        assert!(serde_json::from_str::<Coord>("[8,0]").is_err());
    }
}
