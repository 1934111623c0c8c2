//! Crate error taxonomy.
//!
//! Three kinds of failure exist, and only two of them are errors:
//!
//! - `OutOfRange`: a coordinate outside the 8x8 grid. A programming error on
//!   the caller's side; valid external input never produces it once the
//!   transport layer has shaped its payload.
//! - `IllegalMove`: an on-board coordinate that is not in the acting side's
//!   legal-move set. Expected and recoverable; the board is left untouched
//!   and the caller rejects the action.
//! - "No legal move" is *not* an error: it is an empty `Vec` from
//!   [`legal_moves`](crate::rules::legal_moves) or `None` from
//!   [`MovePolicy::select_move`](crate::opponent::MovePolicy::select_move),
//!   and the session layer consumes it to skip a turn or end the game.
//!
//! Errors always propagate; nothing in this crate converts a failure into a
//! silent board mutation.

use derive_more::{Display, Error};

use crate::core::{Coord, Side};

/// Errors surfaced by the rules engine and session layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Coordinate outside `[0,8) x [0,8)`.
    #[display(fmt = "coordinate ({}, {}) is outside the 8x8 board", row, col)]
    OutOfRange {
        #[error(not(source))]
        row: u8,
        #[error(not(source))]
        col: u8,
    },

    /// On-board coordinate that is not a legal move for the acting side.
    #[display(fmt = "{} is not a legal move for {}", coord, side)]
    IllegalMove {
        #[error(not(source))]
        coord: Coord,
        #[error(not(source))]
        side: Side,
    },

    /// A cell value in a serialized grid was not 0, 1, or 2.
    #[display(fmt = "invalid cell value {} (expected 0, 1, or 2)", _0)]
    InvalidCellValue(#[error(not(source))] u8),

    /// Session: a move was submitted before a game was started.
    #[display(fmt = "no game in progress")]
    GameNotStarted,

    /// Session: a move was submitted after the game ended.
    #[display(fmt = "the game is over")]
    GameOver,
}
