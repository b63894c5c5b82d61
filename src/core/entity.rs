//! Disk identification.
//!
//! Every disk in a game gets a unique `DiskId` when the game is set up.
//! Ids are never reused: once a disk is placed on the board its id is gone
//! for the rest of the game.

use serde::{Deserialize, Serialize};

/// Unique identifier for a disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DiskId(pub u32);

impl DiskId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for DiskId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for DiskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Disk({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", DiskId(7)), "Disk(7)");
    }

    #[test]
    fn test_ordering_follows_raw_id() {
        assert!(DiskId(1) < DiskId(2));
        assert_eq!(DiskId::from(5).raw(), 5);
    }
}
