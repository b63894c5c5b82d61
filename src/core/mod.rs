//! Core engine types: players, colors, disk ids, actions, interaction,
//! configuration, errors, RNG, and the game state aggregate.

pub mod action;
pub mod color;
pub mod config;
pub mod entity;
pub mod error;
pub mod interaction;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use color::{DiskColor, RobotColor};
pub use config::GameConfig;
pub use entity::DiskId;
pub use error::RulesError;
pub use interaction::Interaction;
pub use player::{Player, PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use state::GameState;
