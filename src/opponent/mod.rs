//! The computer opponent.
//!
//! Policies are trait-based so a session can swap in a different move
//! selector without touching the rules engine. The one shipped policy is
//! [`GreedyPolicy`]: maximize the immediate stone differential, nothing
//! deeper.

pub mod policy;

pub use policy::{GreedyPolicy, MovePolicy};
