//! Rules engine trait and the Robotory implementation.
//!
//! Drivers (a UI loop, the playout runner, tests) talk to the game through
//! `RulesEngine`:
//! - What selections are legal
//! - How a selection modifies state
//! - Whether the game is over

use tracing::trace;

use crate::core::{Action, GameConfig, GameState, PlayerId, RulesError};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub winner: PlayerId,
    /// Robots on player 1 territory when the pool ran out.
    pub robots_on_player_one: usize,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: empty once the game is over
/// - `apply_action`: must be deterministic and must leave the state
///   untouched when it returns an error
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Set up a fresh game.
    fn new_game(&self) -> GameState;

    /// Selections the current player may make.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// Apply a selection on behalf of the current player.
    fn apply_action(&self, state: &mut GameState, action: &Action) -> Result<(), RulesError>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;
}

/// The standard Robotory rules.
#[derive(Clone, Debug, Default)]
pub struct Robotory {
    config: GameConfig,
}

impl Robotory {
    /// Rules for a validated configuration.
    pub fn new(config: GameConfig) -> Result<Self, RulesError> {
        config.validate()?;
        Ok(Self { config })
    }
}

impl RulesEngine for Robotory {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn new_game(&self) -> GameState {
        GameState::build(self.config.clone())
    }

    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        state.legal_selections()
    }

    fn apply_action(&self, state: &mut GameState, action: &Action) -> Result<(), RulesError> {
        let record = state.stamp_action(*action);
        state.select(*action)?;
        trace!(player = %record.player, %action, turn = record.turn, "applied");
        state.record_action(record);
        Ok(())
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.winner().map(|winner| GameResult {
            winner,
            robots_on_player_one: state.robots_on_territory(PlayerId::ONE),
        })
    }
}
