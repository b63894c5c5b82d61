//! Win condition.
//!
//! The game ends as soon as the neutral pool runs out of either color. At
//! that moment the robots decide it: if at least `win_threshold` of them
//! stand on player 1 territory, player 1 wins, otherwise player 2.

use crate::core::{DiskColor, GameState, PlayerId};

impl GameState {
    /// Whether the neutral pool has run out of some color.
    #[must_use]
    pub fn neutral_pool_exhausted(&self) -> bool {
        DiskColor::ALL
            .iter()
            .any(|&color| self.neutral_count(color) == 0)
    }

    /// Robots currently on tiles owned by `player`.
    #[must_use]
    pub fn robots_on_territory(&self, player: PlayerId) -> usize {
        self.robots
            .iter()
            .filter(|r| self.board.territory_owner(r.tile) == player)
            .count()
    }

    /// Winner implied by the current pool and robot positions, if any.
    ///
    /// Pure: repeated calls on the same configuration agree.
    #[must_use]
    pub fn evaluate_winner(&self) -> Option<PlayerId> {
        if !self.neutral_pool_exhausted() {
            return None;
        }
        if self.robots_on_territory(PlayerId::ONE) >= self.config.win_threshold {
            Some(PlayerId::ONE)
        } else {
            Some(PlayerId::TWO)
        }
    }
}
