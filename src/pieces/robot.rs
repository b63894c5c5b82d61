//! Robots: the three shared pieces both players steer.

use serde::{Deserialize, Serialize};

use crate::board::TileId;
use crate::core::{DiskColor, RobotColor};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Robot {
    pub color: RobotColor,
    pub tile: TileId,
}

impl Robot {
    #[must_use]
    pub const fn new(color: RobotColor, tile: TileId) -> Self {
        Self { color, tile }
    }

    /// Whether this robot may step onto a tile holding `disk`.
    ///
    /// Robots only ever move onto disks, so an empty tile is never a
    /// destination.
    #[must_use]
    pub fn can_enter(&self, disk: Option<DiskColor>) -> bool {
        disk.is_some_and(|color| self.color.moves_onto(color))
    }
}
