//! Pure rule functions over [`Board`](crate::core::Board) values:
//! legal-move enumeration, move application with flips, terminal detection,
//! and scoring.
//!
//! Nothing here tracks whose turn it is. Turn alternation (including
//! skipping a side with no legal move) belongs to the session layer; the
//! engine only reports that a side's legal-move set is empty.

pub mod engine;

pub use engine::{
    apply_move, is_legal_move, is_terminal, legal_moves, outcome, score, GameOutcome, Score,
};
