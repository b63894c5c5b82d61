//! Disks: the tokens players refill and place.

use serde::{Deserialize, Serialize};

use crate::core::{DiskColor, DiskId, PlayerId};

/// A disk that has not been placed yet.
///
/// `owner` is `None` while the disk sits in the neutral pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Disk {
    pub id: DiskId,
    pub color: DiskColor,
    pub owner: Option<PlayerId>,
}

impl Disk {
    /// Create a disk in the neutral pool.
    #[must_use]
    pub const fn neutral(id: DiskId, color: DiskColor) -> Self {
        Self {
            id,
            color,
            owner: None,
        }
    }

    /// Create a disk owned by a player.
    #[must_use]
    pub const fn owned(id: DiskId, color: DiskColor, owner: PlayerId) -> Self {
        Self {
            id,
            color,
            owner: Some(owner),
        }
    }

    #[must_use]
    pub const fn is_neutral(&self) -> bool {
        self.owner.is_none()
    }

    #[must_use]
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ownership() {
        let neutral = Disk::neutral(DiskId(1), DiskColor::Black);
        let owned = Disk::owned(DiskId(2), DiskColor::White, PlayerId::TWO);

        assert!(neutral.is_neutral());
        assert!(!neutral.is_owned_by(PlayerId::ONE));
        assert!(!owned.is_neutral());
        assert!(owned.is_owned_by(PlayerId::TWO));
        assert!(!owned.is_owned_by(PlayerId::ONE));
    }
}
