//! Disk and robot colors.
//!
//! Disk colors order black before white so that sorted disk listings are
//! reproducible. The red robot is wild: it may move onto either disk color.

use serde::{Deserialize, Serialize};

/// Color of a disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DiskColor {
    Black,
    White,
}

impl DiskColor {
    pub const ALL: [DiskColor; 2] = [DiskColor::Black, DiskColor::White];
}

impl std::fmt::Display for DiskColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiskColor::Black => write!(f, "black"),
            DiskColor::White => write!(f, "white"),
        }
    }
}

/// Color of a robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RobotColor {
    Black,
    White,
    Red,
}

impl RobotColor {
    pub const ALL: [RobotColor; 3] = [RobotColor::Black, RobotColor::White, RobotColor::Red];

    /// Storage index, matching the order of `ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            RobotColor::Black => 0,
            RobotColor::White => 1,
            RobotColor::Red => 2,
        }
    }

    /// Whether a robot of this color may step onto a disk of `disk` color.
    ///
    /// ```
    /// use robotory::core::{DiskColor, RobotColor};
    ///
    /// assert!(RobotColor::Red.moves_onto(DiskColor::Black));
    /// assert!(RobotColor::Red.moves_onto(DiskColor::White));
    /// assert!(!RobotColor::White.moves_onto(DiskColor::Black));
    /// ```
    #[must_use]
    pub const fn moves_onto(self, disk: DiskColor) -> bool {
        match (self, disk) {
            (RobotColor::Red, _) => true,
            (RobotColor::Black, DiskColor::Black) => true,
            (RobotColor::White, DiskColor::White) => true,
            (RobotColor::Black, DiskColor::White) | (RobotColor::White, DiskColor::Black) => false,
        }
    }
}

impl std::fmt::Display for RobotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RobotColor::Black => write!(f, "black"),
            RobotColor::White => write!(f, "white"),
            RobotColor::Red => write!(f, "red"),
        }
    }
}
