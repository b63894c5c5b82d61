//! Game state: everything that changes during play.
//!
//! ## GameState
//!
//! - Board topology (immutable) and per-tile disk occupancy
//! - Robot positions
//! - Active disks (owned or neutral; placed disks are gone)
//! - Player seats and turn ownership
//! - Pending interaction and winner
//! - Turn counter and action history
//!
//! Collections use `im` persistent structures so cloning a state for
//! look-ahead or snapshots is O(1).
//!
//! Rule queries and mutations live in `crate::rules`; this module only owns
//! the data and its plain accessors.

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::color::{DiskColor, RobotColor};
use super::config::GameConfig;
use super::entity::DiskId;
use super::error::RulesError;
use super::interaction::Interaction;
use super::player::{Player, PlayerId, PlayerMap};
use crate::board::{Board, TileId, TILE_COUNT};
use crate::pieces::{Disk, Robot};

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) config: GameConfig,

    /// Compiled-in topology; never serialized, rebuilt on load.
    #[serde(skip)]
    pub(crate) board: Board,

    /// Disk color on each tile, indexed by `TileId::index`.
    pub(crate) occupancy: [Option<DiskColor>; TILE_COUNT],

    /// Robots, indexed by `RobotColor::index`.
    pub(crate) robots: [Robot; 3],

    /// Disks not yet placed, keyed by id.
    pub(crate) disks: OrdMap<DiskId, Disk>,

    pub(crate) players: PlayerMap<Player>,
    pub(crate) interaction: Interaction,
    pub(crate) winner: Option<PlayerId>,

    /// Disks converted into tile occupancy so far.
    pub(crate) placed: u32,

    /// Tile disks removed by robot moves so far.
    pub(crate) captured: u32,

    /// Turn number (starts at 1).
    pub(crate) turn_number: u32,

    /// Action sequence within turn.
    pub(crate) action_sequence: u32,

    pub(crate) action_history: Vector<ActionRecord>,
}

impl GameState {
    /// Create a game from a configuration.
    pub fn new(config: &GameConfig) -> Result<Self, RulesError> {
        config.validate()?;
        Ok(Self::build(config.clone()))
    }

    /// Create the standard game.
    #[must_use]
    pub fn standard() -> Self {
        Self::build(GameConfig::default())
    }

    /// Set up a game without validating `config`.
    pub(crate) fn build(config: GameConfig) -> Self {
        let mut disks = OrdMap::new();
        let mut next_id = 0u32;
        let mut add = |color: DiskColor, owner: Option<PlayerId>| {
            let id = DiskId(next_id);
            next_id += 1;
            let disk = match owner {
                Some(player) => Disk::owned(id, color, player),
                None => Disk::neutral(id, color),
            };
            disks.insert(id, disk);
        };

        for player in PlayerId::all() {
            for color in DiskColor::ALL {
                for _ in 0..config.starting_disks_per_color {
                    add(color, Some(player));
                }
            }
        }
        for _ in 0..config.neutral_disks_per_color {
            for color in DiskColor::ALL {
                add(color, None);
            }
        }

        let robots =
            RobotColor::ALL.map(|color| Robot::new(color, config.robot_start[color.index()]));

        Self {
            board: Board::standard(),
            occupancy: [None; TILE_COUNT],
            robots,
            disks,
            players: PlayerMap::new(|id| Player::new(id, id == PlayerId::ONE)),
            interaction: Interaction::Idle,
            winner: None,
            placed: 0,
            captured: 0,
            turn_number: 1,
            action_sequence: 0,
            action_history: Vector::new(),
            config,
        }
    }

    // === Configuration & topology ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    // === Tiles ===

    /// Disk color on a tile, if any.
    #[must_use]
    pub fn tile_disk(&self, tile: TileId) -> Option<DiskColor> {
        self.occupancy[tile.index()]
    }

    /// Robot standing on a tile, if any.
    #[must_use]
    pub fn robot_at(&self, tile: TileId) -> Option<&Robot> {
        self.robots.iter().find(|r| r.tile == tile)
    }

    // === Robots ===

    #[must_use]
    pub fn robot(&self, color: RobotColor) -> &Robot {
        &self.robots[color.index()]
    }

    #[must_use]
    pub fn robots(&self) -> &[Robot; 3] {
        &self.robots
    }

    // === Disks ===

    /// Look up an active disk.
    pub fn disk(&self, id: DiskId) -> Result<&Disk, RulesError> {
        self.disks.get(&id).ok_or(RulesError::UnknownDisk(id))
    }

    /// All active disks in id order.
    pub fn disks(&self) -> impl Iterator<Item = &Disk> {
        self.disks.values()
    }

    /// Number of active disks.
    #[must_use]
    pub fn disk_count(&self) -> usize {
        self.disks.len()
    }

    /// Disks placed on the board so far.
    #[must_use]
    pub fn placed_count(&self) -> u32 {
        self.placed
    }

    /// Tile disks captured by robots so far.
    #[must_use]
    pub fn captured_count(&self) -> u32 {
        self.captured
    }

    // === Players ===

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    // === Progress ===

    #[must_use]
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Reject any mutation once the game has a winner.
    pub(crate) fn ensure_in_progress(&self) -> Result<(), RulesError> {
        match self.winner {
            Some(winner) => Err(RulesError::GameOver { winner }),
            None => Ok(()),
        }
    }

    // === Action History ===

    #[must_use]
    pub fn action_history(&self) -> &Vector<ActionRecord> {
        &self.action_history
    }

    /// Stamp `action` with the current player, turn and sequence.
    ///
    /// Taken before the action is applied, since applying it may end the
    /// turn.
    pub(crate) fn stamp_action(&self, action: Action) -> ActionRecord {
        ActionRecord::new(self.current_player(), action, self.turn_number, self.action_sequence)
    }

    /// Append a successfully applied action to the history.
    pub(crate) fn record_action(&mut self, record: ActionRecord) {
        if record.turn == self.turn_number {
            self.action_sequence = record.sequence + 1;
        }
        self.action_history.push_back(record);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_setup() {
        let state = GameState::standard();

        assert_eq!(state.disk_count(), 24);
        assert_eq!(state.turn_number(), 1);
        assert!(state.interaction().is_idle());
        assert_eq!(state.winner(), None);
        assert!(state.player(PlayerId::ONE).is_playing);
        assert!(!state.player(PlayerId::TWO).is_playing);
        assert!(TileId::all().all(|t| state.tile_disk(t).is_none()));
    }

    #[test]
    fn test_robot_start_tiles() {
        let state = GameState::standard();

        assert_eq!(state.robot(RobotColor::Black).tile, TileId::new(12));
        assert_eq!(state.robot(RobotColor::White).tile, TileId::new(17));
        assert_eq!(state.robot(RobotColor::Red).tile, TileId::new(6));
        assert_eq!(state.robot_at(TileId::new(6)).map(|r| r.color), Some(RobotColor::Red));
        assert!(state.robot_at(TileId::new(0)).is_none());
    }

    #[test]
    fn test_disk_ids_are_unique_and_dense() {
        let state = GameState::standard();
        let ids: Vec<u32> = state.disks().map(|d| d.id.raw()).collect();
        assert_eq!(ids, (0..24).collect::<Vec<_>>());

        for disk in state.disks() {
            let expected = match disk.id.raw() {
                0..=3 => Some(PlayerId::ONE),
                4..=7 => Some(PlayerId::TWO),
                _ => None,
            };
            assert_eq!(disk.owner, expected, "{}", disk.id);
        }
    }

    #[test]
    fn test_new_validates_config() {
        let bad = GameConfig::default().with_neutral_disks_per_color(0);
        assert!(matches!(GameState::new(&bad), Err(RulesError::InvalidConfig(_))));

        let small = GameConfig::default().with_neutral_disks_per_color(2);
        let state = GameState::new(&small).unwrap();
        assert_eq!(state.disk_count(), 12);
    }

    #[test]
    fn test_unknown_disk() {
        let state = GameState::standard();
        assert_eq!(state.disk(DiskId(99)), Err(RulesError::UnknownDisk(DiskId(99))));
    }

    #[test]
    fn test_record_action() {
        let mut state = GameState::standard();
        let first = state.stamp_action(Action::Cancel);
        state.record_action(first);
        let second = state.stamp_action(Action::PickTile(TileId::new(2)));
        state.record_action(second);

        let history = state.action_history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].sequence, 0);
        assert_eq!(history[1].sequence, 1);
        assert_eq!(history[1].turn, 1);
        assert_eq!(history[1].player, PlayerId::ONE);
    }

    #[test]
    fn test_clone_is_independent() {
        let state = GameState::standard();
        let mut cloned = state.clone();
        cloned.occupancy[0] = Some(DiskColor::Black);

        assert_eq!(state.tile_disk(TileId::new(0)), None);
        assert_eq!(cloned.tile_disk(TileId::new(0)), Some(DiskColor::Black));
    }

    #[test]
    fn test_state_serialization() {
        let state = GameState::standard();
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_deserialized_board_is_always_standard() {
        let state = GameState::standard();
        let mut json = serde_json::to_value(&state).unwrap();
        assert!(json.get("board").is_none());

        json["board"] = serde_json::json!({ "tiles": [] });
        let loaded: GameState = serde_json::from_value(json).unwrap();

        assert_eq!(loaded.board(), &Board::standard());
        assert!(!loaded.can_move(RobotColor::Red));
        assert_eq!(loaded, state);
    }
}
