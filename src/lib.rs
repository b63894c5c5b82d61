//! # robotory
//!
//! Rules engine for Robotory, a two-player board game. Players place black
//! and white disks on a 24-tile board and steer three shared robots that
//! capture disks as they move. When the neutral disk pool runs out of a
//! color, the robots' positions decide the winner.
//!
//! ## Design Principles
//!
//! 1. **Pure engine**: no rendering, input, files, or globals. A caller owns
//!    a `GameState` and drives it with queries and mutations.
//!
//! 2. **Checked mutations**: every mutation validates its preconditions and
//!    returns `RulesError` instead of corrupting state. A finished game
//!    rejects all further mutation.
//!
//! 3. **Explicit interaction**: multi-step turns (pick a disk then a tile,
//!    pick a robot then its steps) are an `Interaction` sum type advanced by
//!    discrete `Action` selections.
//!
//! ## Modules
//!
//! - `board`: tile ids, territory owners, adjacency
//! - `pieces`: disks and robots
//! - `core`: players, colors, actions, configuration, errors, game state
//! - `rules`: queries, mutations, win condition, state machine, `RulesEngine`
//! - `playout`: seeded random self-play
//!
//! ## Example
//!
//! ```
//! use robotory::{init_game, Action, PlayerId, TileId};
//!
//! let mut game = init_game();
//! let disk = game.disks_of(Some(PlayerId::ONE), None)[0].id;
//!
//! game.select(Action::PickDisk(disk)).unwrap();
//! game.select(Action::PickTile(TileId::new(0))).unwrap();
//!
//! assert!(game.tile_disk(TileId::new(0)).is_some());
//! assert_eq!(game.current_player(), PlayerId::TWO);
//! ```

pub mod board;
pub mod core;
pub mod pieces;
pub mod playout;
pub mod rules;

pub use crate::board::{Board, TileId, TileSpec, TILE_COUNT};

pub use crate::core::{
    Action, ActionRecord, DiskColor, DiskId, GameConfig, GameRng, GameState, Interaction, Player,
    PlayerId, PlayerMap, RobotColor, RulesError,
};

pub use crate::pieces::{Disk, Robot};

pub use crate::rules::{GameResult, Robotory, RulesEngine};

pub use crate::playout::{Playout, PlayoutConfig, PlayoutReport, PlayoutStats};

/// Set up a standard game: player 1 to move, robots on their start tiles,
/// 4 disks per player and 16 in the neutral pool.
#[must_use]
pub fn init_game() -> GameState {
    GameState::standard()
}
