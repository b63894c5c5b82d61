//! Rule violations reported by the engine.
//!
//! Every variant is a caller contract violation: a presentation layer that
//! only offers choices taken from the query surface never sees one. The
//! engine still checks them so that misuse surfaces instead of corrupting
//! state. A rejected call leaves the game state unchanged.

use thiserror::Error;

use super::{Action, DiskColor, DiskId, Interaction, PlayerId, RobotColor};
use crate::board::TileId;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("unknown tile {0}")]
    UnknownTile(u8),
    #[error("unknown {0}")]
    UnknownDisk(DiskId),
    #[error("game is over, {winner} won")]
    GameOver { winner: PlayerId },
    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),
    #[error("{disk} does not belong to {player}")]
    DiskNotOwned { disk: DiskId, player: PlayerId },
    #[error("{0} is not in the neutral pool")]
    DiskNotNeutral(DiskId),
    #[error("{0} cannot refill any more disks")]
    RefillCapacityReached(PlayerId),
    #[error("{tile} already holds a {color} disk")]
    TileOccupied { tile: TileId, color: DiskColor },
    #[error("{tile} holds the {robot} robot")]
    TileHasRobot { tile: TileId, robot: RobotColor },
    #[error("{to} is not adjacent to {from}")]
    NotAdjacent { from: TileId, to: TileId },
    #[error("the {robot} robot cannot move onto {tile}")]
    IllegalDestination { robot: RobotColor, tile: TileId },
    #[error("the {0} robot has no legal move")]
    RobotCannotMove(RobotColor),
    #[error("{action} is not allowed while {interaction}")]
    IllegalSelection {
        action: Action,
        interaction: Interaction,
    },
    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),
}
