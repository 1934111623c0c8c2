//! # othello-engine
//!
//! Rules engine and computer opponent for 8x8 Othello (Reversi), built to
//! sit behind a session/transport layer that talks to a single remote
//! player.
//!
//! ## Design Principles
//!
//! 1. **Values, not state**: `Board` is a `Copy` value; applying a move
//!    produces a new board and can never mutate the caller's. The crate
//!    holds no global state of any kind.
//!
//! 2. **Pure rules**: legal-move enumeration, move application, terminal
//!    detection, and scoring are free functions over board values -
//!    synchronous, total, and bounded by 64 cells x 8 directions.
//!
//! 3. **Injected randomness**: the opponent's only nondeterminism (its
//!    tie-break among equally good moves) comes from a caller-supplied
//!    seed, so play is reproducible under test.
//!
//! ## Modules
//!
//! - `core`: sides, cells, coordinates, boards, RNG
//! - `rules`: legal moves, move application, terminal detection, score
//! - `opponent`: greedy move-selection policy behind a trait
//! - `session`: human-versus-computer orchestration and turn skipping
//! - `error`: `OutOfRange`, `IllegalMove`, and session rejections

pub mod core;
pub mod error;
pub mod opponent;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Board, Cell, Coord, GameRng, GameRngState, Grid, Side};
pub use crate::error::Error;
pub use crate::opponent::{GreedyPolicy, MovePolicy};
pub use crate::rules::{
    apply_move, is_legal_move, is_terminal, legal_moves, outcome, score, GameOutcome, Score,
};
pub use crate::session::{GameSession, SessionView, Starter, TurnReport};
