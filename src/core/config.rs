//! Game configuration.
//!
//! `GameConfig::default()` is the standard Robotory setup. The other values
//! exist so tests and playouts can explore smaller pools or different robot
//! placements; they are always built in code, never loaded from disk.

use serde::{Deserialize, Serialize};

use super::color::{DiskColor, RobotColor};
use super::error::RulesError;
use super::player::PLAYER_COUNT;
use crate::board::TileId;

/// Configuration for a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Maximum disks a player may hold before refilling is refused.
    pub refill_capacity: usize,

    /// Disks of each color each player owns at the start.
    pub starting_disks_per_color: usize,

    /// Disks of each color in the neutral pool at the start.
    pub neutral_disks_per_color: usize,

    /// Starting tile per robot, indexed by `RobotColor::index`.
    pub robot_start: [TileId; 3],

    /// Robots on player 1 territory needed for player 1 to win.
    pub win_threshold: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            refill_capacity: 4,
            starting_disks_per_color: 2,
            neutral_disks_per_color: 8,
            robot_start: [TileId::new(12), TileId::new(17), TileId::new(6)],
            win_threshold: 2,
        }
    }
}

impl GameConfig {
    /// Set the refill capacity.
    #[must_use]
    pub fn with_refill_capacity(mut self, capacity: usize) -> Self {
        self.refill_capacity = capacity;
        self
    }

    /// Set the per-color starting disks of each player.
    #[must_use]
    pub fn with_starting_disks_per_color(mut self, count: usize) -> Self {
        self.starting_disks_per_color = count;
        self
    }

    /// Set the per-color size of the neutral pool.
    #[must_use]
    pub fn with_neutral_disks_per_color(mut self, count: usize) -> Self {
        self.neutral_disks_per_color = count;
        self
    }

    /// Set a robot's starting tile.
    #[must_use]
    pub fn with_robot_start(mut self, robot: RobotColor, tile: TileId) -> Self {
        self.robot_start[robot.index()] = tile;
        self
    }

    /// Set the player 1 win threshold.
    #[must_use]
    pub fn with_win_threshold(mut self, threshold: usize) -> Self {
        self.win_threshold = threshold;
        self
    }

    /// Total number of disks created at setup.
    #[must_use]
    pub fn total_disks(&self) -> usize {
        let per_color = PLAYER_COUNT * self.starting_disks_per_color + self.neutral_disks_per_color;
        per_color * DiskColor::ALL.len()
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.refill_capacity == 0 {
            return Err(RulesError::InvalidConfig("refill capacity must be positive".into()));
        }
        let starting = self.starting_disks_per_color * DiskColor::ALL.len();
        if starting > self.refill_capacity {
            return Err(RulesError::InvalidConfig(format!(
                "players start with {starting} disks but may hold only {}",
                self.refill_capacity
            )));
        }
        if self.neutral_disks_per_color == 0 {
            return Err(RulesError::InvalidConfig("neutral pool must not start empty".into()));
        }
        if self.win_threshold > RobotColor::ALL.len() {
            return Err(RulesError::InvalidConfig(format!(
                "win threshold {} exceeds robot count",
                self.win_threshold
            )));
        }

        let [a, b, c] = self.robot_start;
        if a == b || b == c || a == c {
            return Err(RulesError::InvalidConfig("robots must start on distinct tiles".into()));
        }

        Ok(())
    }
}
