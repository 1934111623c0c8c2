//! Core value types: sides, cells, coordinates, boards, RNG.
//!
//! Everything here is a plain value. Boards are `Copy`; "mutating" one means
//! producing a new value, so the rules engine can be (and is) a set of pure
//! functions over these types.

pub mod board;
pub mod coord;
pub mod rng;
pub mod side;

pub use board::{Board, Grid};
pub use coord::Coord;
pub use rng::{GameRng, GameRngState};
pub use side::{Cell, Side};
