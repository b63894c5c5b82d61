//! Read-only rule queries over a `GameState`.

use crate::board::TileId;
use crate::core::{DiskColor, GameState, PlayerId, RobotColor};
use crate::pieces::Disk;

impl GameState {
    /// The player holding the turn.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        if self.players[PlayerId::TWO].is_playing {
            PlayerId::TWO
        } else {
            PlayerId::ONE
        }
    }

    /// Disks owned by `owner` (`None` for the neutral pool), optionally of a
    /// single color.
    ///
    /// Sorted by color, black first, then by disk id.
    #[must_use]
    pub fn disks_of(&self, owner: Option<PlayerId>, color: Option<DiskColor>) -> Vec<Disk> {
        let mut disks: Vec<Disk> = self
            .disks
            .values()
            .filter(|d| d.owner == owner && color.map_or(true, |c| d.color == c))
            .copied()
            .collect();
        disks.sort_by_key(|d| (d.color, d.id));
        disks
    }

    /// Number of disks a player currently holds.
    #[must_use]
    pub fn owned_count(&self, player: PlayerId) -> usize {
        self.disks.values().filter(|d| d.is_owned_by(player)).count()
    }

    /// Neutral disks of a color left in the pool.
    #[must_use]
    pub fn neutral_count(&self, color: DiskColor) -> usize {
        self.disks
            .values()
            .filter(|d| d.is_neutral() && d.color == color)
            .count()
    }

    /// Whether a player may take another disk from the neutral pool.
    #[must_use]
    pub fn can_refill(&self, player: PlayerId) -> bool {
        self.owned_count(player) < self.config.refill_capacity
    }

    /// Whether a robot has at least one neighboring tile it may move onto.
    #[must_use]
    pub fn can_move(&self, robot: RobotColor) -> bool {
        let robot = self.robot(robot);
        self.board
            .neighbors(robot.tile)
            .iter()
            .any(|&n| robot.can_enter(self.tile_disk(n)))
    }

    /// Whether a tile's disk is one the robot may move onto.
    ///
    /// Adjacency is not part of this check; see `legal_destinations`.
    #[must_use]
    pub fn can_move_to(&self, robot: RobotColor, tile: TileId) -> bool {
        self.robot(robot).can_enter(self.tile_disk(tile))
    }

    /// Tiles a robot may step onto right now.
    #[must_use]
    pub fn legal_destinations(&self, robot: RobotColor) -> Vec<TileId> {
        let from = self.robot(robot).tile;
        self.board
            .neighbors(from)
            .iter()
            .copied()
            .filter(|&n| self.can_move_to(robot, n))
            .collect()
    }

    /// Tiles a disk may be placed on: no disk and no robot.
    #[must_use]
    pub fn open_tiles(&self) -> Vec<TileId> {
        TileId::all()
            .filter(|&t| self.tile_disk(t).is_none() && self.robot_at(t).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DiskId;

    #[test]
    fn test_current_player_starts_with_one() {
        let state = GameState::standard();
        assert_eq!(state.current_player(), PlayerId::ONE);
    }

    #[test]
    fn test_disks_of_sorted_by_color() {
        let state = GameState::standard();
        let colors: Vec<_> = state
            .disks_of(Some(PlayerId::TWO), None)
            .iter()
            .map(|d| d.color)
            .collect();

        assert_eq!(
            colors,
            vec![DiskColor::Black, DiskColor::Black, DiskColor::White, DiskColor::White]
        );
    }

    #[test]
    fn test_disks_of_neutral_sorted_despite_interleaved_ids() {
        let state = GameState::standard();
        let neutral = state.disks_of(None, None);

        assert_eq!(neutral.len(), 16);
        assert!(neutral[..8].iter().all(|d| d.color == DiskColor::Black));
        assert!(neutral[8..].iter().all(|d| d.color == DiskColor::White));
        assert!(neutral[..8].windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn test_disks_of_color_filter() {
        let state = GameState::standard();
        let whites = state.disks_of(Some(PlayerId::ONE), Some(DiskColor::White));
        assert_eq!(whites.len(), 2);
        assert!(whites.iter().all(|d| d.color == DiskColor::White));
    }

    #[test]
    fn test_can_refill_tracks_capacity() {
        let mut state = GameState::standard();
        assert!(!state.can_refill(PlayerId::ONE));
        assert!(!state.can_refill(PlayerId::TWO));

        let own = state.disks_of(Some(PlayerId::ONE), None)[0].id;
        state.put_disk(own, TileId::new(0)).unwrap();
        assert_eq!(state.owned_count(PlayerId::ONE), 3);
        assert!(state.can_refill(PlayerId::ONE));
        assert!(!state.can_refill(PlayerId::TWO));

        state.end_turn().unwrap();
        let neutral = state.disks_of(None, None)[0].id;
        state.refill(PlayerId::ONE, neutral).unwrap();
        assert_eq!(state.owned_count(PlayerId::ONE), 4);
        assert!(!state.can_refill(PlayerId::ONE));
    }

    #[test]
    fn test_can_move_needs_matching_neighbor() {
        let mut state = GameState::standard();
        // White robot on 17; nothing around it.
        assert!(!state.can_move(RobotColor::White));

        state.occupancy[11] = Some(DiskColor::Black);
        assert!(!state.can_move(RobotColor::White));

        state.occupancy[16] = Some(DiskColor::White);
        assert!(state.can_move(RobotColor::White));
        assert_eq!(state.legal_destinations(RobotColor::White), vec![TileId::new(16)]);
    }

    #[test]
    fn test_red_is_wild() {
        let mut state = GameState::standard();
        // Red robot on 6.
        state.occupancy[5] = Some(DiskColor::Black);
        state.occupancy[7] = Some(DiskColor::White);

        assert!(state.can_move_to(RobotColor::Red, TileId::new(5)));
        assert!(state.can_move_to(RobotColor::Red, TileId::new(7)));
        assert!(!state.can_move_to(RobotColor::Red, TileId::new(1)));
        assert!(!state.can_move_to(RobotColor::Black, TileId::new(7)));
        assert_eq!(
            state.legal_destinations(RobotColor::Red),
            vec![TileId::new(5), TileId::new(7)]
        );
    }

    #[test]
    fn test_open_tiles_exclude_robots_and_disks() {
        let mut state = GameState::standard();
        state.occupancy[0] = Some(DiskColor::White);

        let open = state.open_tiles();
        assert_eq!(open.len(), 24 - 3 - 1);
        assert!(!open.contains(&TileId::new(0)));
        assert!(!open.contains(&TileId::new(6)));
    }

    #[test]
    fn test_neutral_count() {
        let state = GameState::standard();
        assert_eq!(state.neutral_count(DiskColor::Black), 8);
        assert_eq!(state.neutral_count(DiskColor::White), 8);
        assert!(state.disk(DiskId(8)).unwrap().is_neutral());
    }
}
