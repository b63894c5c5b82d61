//! Random self-play over any `RulesEngine`.

use tracing::debug;

use crate::core::{GameRng, RulesError};
use crate::rules::{GameResult, RulesEngine};

use super::stats::PlayoutStats;

/// Configuration for random playouts.
#[derive(Clone, Debug)]
pub struct PlayoutConfig {
    /// Base seed; game `i` uses the `i`-th fork of it.
    pub seed: u64,

    /// Maximum selections per game before it is abandoned.
    pub max_steps: usize,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_steps: 2_000,
        }
    }
}

impl PlayoutConfig {
    /// Set the base seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set maximum selections per game.
    #[must_use]
    pub fn with_max_steps(mut self, max: usize) -> Self {
        self.max_steps = max;
        self
    }
}

/// Outcome of one playout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayoutReport {
    /// `None` if the step limit was hit first.
    pub result: Option<GameResult>,

    /// Selections applied.
    pub steps: usize,

    /// Turn number the game ended on.
    pub turns: u32,
}

/// Plays games by picking uniformly among legal selections.
pub struct Playout<E: RulesEngine> {
    engine: E,
    config: PlayoutConfig,
}

impl<E: RulesEngine> Playout<E> {
    pub fn new(engine: E, config: PlayoutConfig) -> Self {
        Self { engine, config }
    }

    /// Get the engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Play one game with the given RNG.
    ///
    /// A legal selection that the engine then rejects is a rules bug and is
    /// returned as an error.
    pub fn play_game(&self, rng: &mut GameRng) -> Result<PlayoutReport, RulesError> {
        let mut state = self.engine.new_game();
        let mut steps = 0;

        while steps < self.config.max_steps {
            if self.engine.is_terminal(&state).is_some() {
                break;
            }
            let actions = self.engine.legal_actions(&state);
            let Some(action) = rng.choose(&actions) else {
                break;
            };
            self.engine.apply_action(&mut state, action)?;
            steps += 1;
        }

        let report = PlayoutReport {
            result: self.engine.is_terminal(&state),
            steps,
            turns: state.turn_number(),
        };
        debug!(seed = rng.seed(), result = ?report.result, steps, "playout finished");
        Ok(report)
    }

    /// Play `games` games from the configured seed and aggregate them.
    pub fn run(&self, games: usize) -> Result<PlayoutStats, RulesError> {
        let mut base = GameRng::new(self.config.seed);
        let mut stats = PlayoutStats::new();

        for _ in 0..games {
            let mut rng = base.fork();
            let report = self.play_game(&mut rng)?;
            stats.record(&report);
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Robotory;

    #[test]
    fn test_play_game_finishes() {
        let playout = Playout::new(Robotory::default(), PlayoutConfig::default());
        let report = playout.play_game(&mut GameRng::new(1)).unwrap();

        assert!(report.result.is_some());
        assert!(report.steps > 0);
        assert!(report.turns > 1);
    }

    #[test]
    fn test_step_limit() {
        let config = PlayoutConfig::default().with_max_steps(3);
        let playout = Playout::new(Robotory::default(), config);
        let report = playout.play_game(&mut GameRng::new(1)).unwrap();

        assert_eq!(report.steps, 3);
        assert!(report.result.is_none());
    }

    #[test]
    fn test_same_seed_same_game() {
        let playout = Playout::new(Robotory::default(), PlayoutConfig::default());
        let a = playout.play_game(&mut GameRng::new(99)).unwrap();
        let b = playout.play_game(&mut GameRng::new(99)).unwrap();
        assert_eq!(a, b);
    }
}
