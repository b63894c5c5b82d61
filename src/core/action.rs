//! Action representation: one discrete player selection.
//!
//! A turn is built from a short sequence of selections: pick a disk, then a
//! tile; or pick a robot, then one or more tiles, then the robot again to
//! stop. `Cancel` abandons whatever is pending. The rules engine interprets
//! each selection against the current `Interaction`.

use serde::{Deserialize, Serialize};

use super::color::RobotColor;
use super::entity::DiskId;
use super::player::PlayerId;
use crate::board::TileId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Select a disk: one of your own to place, or a neutral one to refill.
    PickDisk(DiskId),
    /// Select a tile: the placement target or the next robot step.
    PickTile(TileId),
    /// Select a robot: start moving it, or stop/cancel the current move.
    PickRobot(RobotColor),
    /// Drop the pending interaction without ending the turn.
    Cancel,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::PickDisk(disk) => write!(f, "pick {disk}"),
            Action::PickTile(tile) => write!(f, "pick {tile}"),
            Action::PickRobot(robot) => write!(f, "pick {robot} robot"),
            Action::Cancel => write!(f, "cancel"),
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Action::PickDisk(DiskId(3)).to_string(), "pick Disk(3)");
        assert_eq!(Action::PickTile(TileId::new(4)).to_string(), "pick Tile(4)");
        assert_eq!(Action::PickRobot(RobotColor::Red).to_string(), "pick red robot");
        assert_eq!(Action::Cancel.to_string(), "cancel");
    }

    #[test]
    fn test_action_record() {
        let record = ActionRecord::new(PlayerId::TWO, Action::Cancel, 3, 1);

        assert_eq!(record.player, PlayerId::TWO);
        assert_eq!(record.action, Action::Cancel);
        assert_eq!(record.turn, 3);
        assert_eq!(record.sequence, 1);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(PlayerId::ONE, Action::PickTile(TileId::new(9)), 2, 0);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
