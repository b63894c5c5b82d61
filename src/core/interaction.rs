//! The pending multi-step interaction, if any.

use serde::{Deserialize, Serialize};

use super::color::RobotColor;
use super::entity::DiskId;
use super::player::PlayerId;
use crate::board::TileId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interaction {
    /// Nothing pending.
    #[default]
    Idle,
    /// A disk has been picked and waits for its tile.
    Placing { disk: DiskId },
    /// The player refilled and still has capacity; only further refills
    /// (or a cancel) are accepted.
    RefillPending { player: PlayerId },
    /// A robot is being moved. `start_tile` is where it stood when picked.
    MovingRobot { robot: RobotColor, start_tile: TileId },
}

impl Interaction {
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }
}

impl std::fmt::Display for Interaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Interaction::Idle => write!(f, "idle"),
            Interaction::Placing { disk } => write!(f, "placing {disk}"),
            Interaction::RefillPending { player } => write!(f, "{player} is refilling"),
            Interaction::MovingRobot { robot, start_tile } => {
                write!(f, "moving the {robot} robot from {start_tile}")
            }
        }
    }
}
