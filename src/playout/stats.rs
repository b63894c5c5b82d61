//! Aggregated results across many playouts.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};

use super::runner::PlayoutReport;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutStats {
    /// Games won per player.
    pub wins: PlayerMap<u32>,

    /// Games that hit the step limit.
    pub unfinished: u32,

    /// Selections applied across all games.
    pub total_steps: u64,
}

impl Default for PlayoutStats {
    fn default() -> Self {
        Self {
            wins: PlayerMap::with_default(),
            unfinished: 0,
            total_steps: 0,
        }
    }
}

impl PlayoutStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one game into the totals.
    pub fn record(&mut self, report: &PlayoutReport) {
        match report.result {
            Some(result) => self.wins[result.winner] += 1,
            None => self.unfinished += 1,
        }
        self.total_steps += report.steps as u64;
    }

    #[must_use]
    pub fn games(&self) -> u32 {
        self.wins.iter().map(|(_, w)| w).sum::<u32>() + self.unfinished
    }

    /// Fraction of finished games won by `player`.
    #[must_use]
    pub fn win_rate(&self, player: PlayerId) -> f64 {
        let finished = self.games() - self.unfinished;
        if finished == 0 {
            0.0
        } else {
            self.wins[player] as f64 / finished as f64
        }
    }
}
