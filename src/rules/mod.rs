//! Robotory rules.
//!
//! - `queries`: legality checks and read-only views of a `GameState`
//! - `mutations`: refill, placement, robot moves, turn changes
//! - `win`: the pool-exhaustion win condition
//! - `selection`: the interaction state machine driven by player selections
//! - `engine`: the `RulesEngine` trait and its `Robotory` implementation

pub mod engine;
mod mutations;
mod queries;
mod selection;
mod win;

pub use engine::{GameResult, Robotory, RulesEngine};
