//! The Othello rules engine.
//!
//! All functions are pure: they take a board by reference, never modify it,
//! and return either plain data or a fresh board. Every operation is bounded
//! by 64 cells x 8 directions x rays of at most 8 cells.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Cell, Coord, Side};
use crate::error::Error;

/// The 8 compass offsets as (drow, dcol).
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A ray holds at most 6 flippable stones on an 8-wide board.
type Ray = SmallVec<[Coord; 6]>;

/// All stones a single move flips (at most 18 across 8 directions).
type FlipSet = SmallVec<[Coord; 18]>;

/// Stone counts for both sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub first: u32,
    pub second: u32,
}

impl Score {
    /// The count for one side.
    #[must_use]
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::First => self.first,
            Side::Second => self.second,
        }
    }
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// One side holds more stones.
    Winner(Side),
    /// Equal stone counts.
    Draw,
}

impl GameOutcome {
    /// Check whether a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameOutcome::Winner(winner) if *winner == side)
    }
}

/// Walk outward from `origin` along `direction`, collecting the maximal run
/// of opposing stones. The run counts as flippable only when it is non-empty
/// and terminated by a stone of `side` (not an empty cell, not the board
/// edge).
fn captured_ray(board: &Board, origin: Coord, direction: (i8, i8), side: Side) -> Ray {
    let mut run = Ray::new();
    let mut cursor = origin.step(direction);

    while let Some(coord) = cursor {
        match board.cell(coord) {
            Cell::Taken(s) if s == !side => {
                run.push(coord);
                cursor = coord.step(direction);
            }
            Cell::Taken(_) => return run,
            Cell::Empty => break,
        }
    }

    // Ran off the board or onto an empty cell: no same-side anchor.
    run.clear();
    run
}

/// Every stone that placing `side` at `coord` would flip. Empty when the
/// move captures nothing in any direction. Computed entirely from the given
/// board, so no direction's result can contaminate another's.
fn flips_for(board: &Board, coord: Coord, side: Side) -> FlipSet {
    let mut flips = FlipSet::new();
    for direction in DIRECTIONS {
        flips.extend(captured_ray(board, coord, direction, side));
    }
    flips
}

/// Whether placing `side` at `coord` is legal: the cell is empty and at
/// least one direction holds a flippable run.
#[must_use]
pub fn is_legal_move(board: &Board, coord: Coord, side: Side) -> bool {
    board.cell(coord).is_empty()
        && DIRECTIONS
            .iter()
            .any(|&direction| !captured_ray(board, coord, direction, side).is_empty())
}

/// All legal moves for `side`, in row-major order (increasing row, then
/// column). An empty result is the no-move signal the session layer uses to
/// skip a turn or end the game - it is not an error.
#[must_use]
pub fn legal_moves(board: &Board, side: Side) -> Vec<Coord> {
    Coord::all()
        .filter(|&coord| is_legal_move(board, coord, side))
        .collect()
}

/// Apply a move for `side` at `coord`, returning the resulting board.
///
/// Validates on entry: an illegal move fails with [`Error::IllegalMove`] and
/// the input board is untouched (it is never modified in any case - boards
/// are values). On success the new board has `side` on the target cell and
/// on every captured stone.
pub fn apply_move(board: &Board, coord: Coord, side: Side) -> Result<Board, Error> {
    let flips = flips_for(board, coord, side);
    if !board.cell(coord).is_empty() || flips.is_empty() {
        return Err(Error::IllegalMove { coord, side });
    }

    let mut next = board.with_cell(coord, Cell::Taken(side));
    for flipped in flips {
        next = next.with_cell(flipped, Cell::Taken(side));
    }
    Ok(next)
}

/// Whether the game is over: neither side has a legal move.
///
/// One side being stuck while the other can still move is *not* terminal;
/// the stuck side's turn is skipped by the session layer.
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    Side::both().all(|side| legal_moves(board, side).is_empty())
}

/// Stone counts for both sides. Empty cells count for neither.
#[must_use]
pub fn score(board: &Board) -> Score {
    Score {
        first: board.count(Side::First),
        second: board.count(Side::Second),
    }
}

/// The game's outcome, or `None` while either side can still move.
#[must_use]
pub fn outcome(board: &Board) -> Option<GameOutcome> {
    if !is_terminal(board) {
        return None;
    }

    let totals = score(board);
    Some(match totals.first.cmp(&totals.second) {
        std::cmp::Ordering::Greater => GameOutcome::Winner(Side::First),
        std::cmp::Ordering::Less => GameOutcome::Winner(Side::Second),
        std::cmp::Ordering::Equal => GameOutcome::Draw,
    })
}
