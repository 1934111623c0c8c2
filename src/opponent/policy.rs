//! Move-selection policies.

use crate::core::{Board, Coord, GameRng, Side};
use crate::rules::{apply_move, legal_moves};

/// Policy for selecting a move for one side on a given board.
pub trait MovePolicy {
    /// Select a move, or `None` if the side has no legal move.
    ///
    /// `None` is a skip-turn signal for the caller, not an error.
    fn select_move(&mut self, board: &Board, side: Side) -> Option<Coord>;
}

/// Greedy single-ply policy: pick the move that flips the most stones.
///
/// For each legal move, the gain is the mover's stone count on the resulting
/// board minus their count on the original - that is, 1 for the placed stone
/// plus one per flip. The maximal-gain move wins; ties break uniformly at
/// random via the injected [`GameRng`], so a fixed seed gives a fixed move
/// sequence.
///
/// Deliberately weak: no lookahead, no positional weighting. The immediate
/// stone differential is the whole evaluation.
///
/// ## Example
///
/// ```
/// use othello_engine::core::{Board, Side};
/// use othello_engine::opponent::{GreedyPolicy, MovePolicy};
///
/// let mut policy = GreedyPolicy::new(42);
/// let opening = policy.select_move(&Board::new(), Side::First);
/// assert!(opening.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct GreedyPolicy {
    rng: GameRng,
}

impl GreedyPolicy {
    /// Create a policy whose tie-breaks are driven by the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Create a policy around an existing RNG.
    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        Self { rng }
    }

    /// The moves tied for maximal immediate gain, in row-major order.
    fn best_moves(board: &Board, side: Side) -> Vec<Coord> {
        let before = board.count(side);
        let mut best: Vec<Coord> = Vec::new();
        let mut best_gain = 0;

        for coord in legal_moves(board, side) {
            let next = apply_move(board, coord, side)
                .expect("moves from legal_moves always apply");
            let gain = next.count(side) - before;

            if gain > best_gain {
                best_gain = gain;
                best.clear();
                best.push(coord);
            } else if gain == best_gain {
                best.push(coord);
            }
        }

        best
    }
}

impl MovePolicy for GreedyPolicy {
    fn select_move(&mut self, board: &Board, side: Side) -> Option<Coord> {
        let candidates = Self::best_moves(board, side);
        self.rng.choose(&candidates).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    fn at(row: u8, col: u8) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_no_moves_returns_none() {
        let mut policy = GreedyPolicy::new(0);
        assert_eq!(policy.select_move(&Board::empty(), Side::First), None);
    }

    #[test]
    fn test_unique_maximum_is_deterministic() {
        // A horizontal run of three O's anchored by X: taking (0,4) flips 3.
        // Every other legal move on this board flips at most 1.
        let board = Board::empty()
            .with_cell(at(0, 0), Cell::Taken(Side::First))
            .with_cell(at(0, 1), Cell::Taken(Side::Second))
            .with_cell(at(0, 2), Cell::Taken(Side::Second))
            .with_cell(at(0, 3), Cell::Taken(Side::Second))
            .with_cell(at(5, 5), Cell::Taken(Side::Second))
            .with_cell(at(5, 6), Cell::Taken(Side::First));

        for seed in 0..20 {
            let mut policy = GreedyPolicy::new(seed);
            assert_eq!(policy.select_move(&board, Side::First), Some(at(0, 4)));
        }
    }

    #[test]
    fn test_tie_break_is_seeded() {
        // The fresh board: all four openings flip exactly one stone.
        let board = Board::new();

        let mut a = GreedyPolicy::new(7);
        let mut b = GreedyPolicy::new(7);
        assert_eq!(
            a.select_move(&board, Side::First),
            b.select_move(&board, Side::First)
        );
    }

    #[test]
    fn test_selection_is_always_legal() {
        let board = Board::new();
        let mut policy = GreedyPolicy::new(3);
        let coord = policy.select_move(&board, Side::Second).unwrap();
        assert!(legal_moves(&board, Side::Second).contains(&coord));
    }
}
