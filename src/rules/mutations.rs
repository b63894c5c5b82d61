//! State-changing rule operations.
//!
//! Every mutation checks its preconditions first and returns an error
//! without touching the state when one fails. Once a winner exists every
//! mutation is rejected with `RulesError::GameOver`.

use tracing::{debug, info};

use crate::board::TileId;
use crate::core::{DiskId, GameState, Interaction, PlayerId, RobotColor, RulesError};

impl GameState {
    /// Move a neutral disk into `player`'s pool.
    ///
    /// The win condition is evaluated right after the disk changes hands.
    /// If the player is then at capacity the turn ends. Returns whether the
    /// player may still refill.
    pub fn refill(&mut self, player: PlayerId, disk: DiskId) -> Result<bool, RulesError> {
        self.ensure_in_progress()?;
        if player != self.current_player() {
            return Err(RulesError::NotYourTurn(player));
        }
        if !self.disk(disk)?.is_neutral() {
            return Err(RulesError::DiskNotNeutral(disk));
        }
        if !self.can_refill(player) {
            return Err(RulesError::RefillCapacityReached(player));
        }

        if let Some(entry) = self.disks.get_mut(&disk) {
            entry.owner = Some(player);
        }
        debug!(%player, %disk, "refilled");

        if let Some(winner) = self.evaluate_winner() {
            info!(%winner, turn = self.turn_number, "neutral pool exhausted");
            self.winner = Some(winner);
        }

        let can_refill = self.can_refill(player);
        if !can_refill {
            self.advance_turn();
        }
        Ok(can_refill)
    }

    /// Place one of the current player's disks on an open tile.
    ///
    /// The disk leaves the game as an entity and becomes the tile's
    /// occupancy. The turn always ends.
    pub fn put_disk(&mut self, disk: DiskId, tile: TileId) -> Result<(), RulesError> {
        self.ensure_in_progress()?;
        let player = self.current_player();
        let entry = *self.disk(disk)?;
        if !entry.is_owned_by(player) {
            return Err(RulesError::DiskNotOwned { disk, player });
        }
        if let Some(color) = self.tile_disk(tile) {
            return Err(RulesError::TileOccupied { tile, color });
        }
        if let Some(robot) = self.robot_at(tile) {
            return Err(RulesError::TileHasRobot {
                tile,
                robot: robot.color,
            });
        }

        self.occupancy[tile.index()] = Some(entry.color);
        self.disks.remove(&disk);
        self.placed += 1;
        debug!(%player, %disk, %tile, color = %entry.color, "placed disk");

        self.advance_turn();
        Ok(())
    }

    /// Step a robot onto an adjacent tile, capturing the disk there.
    ///
    /// Capture is part of the move: the destination's disk is removed from
    /// the board. If the robot has no further legal step the turn ends.
    /// Returns whether the turn ended.
    pub fn move_robot(&mut self, robot: RobotColor, tile: TileId) -> Result<bool, RulesError> {
        self.ensure_in_progress()?;
        let from = self.robot(robot).tile;
        if !self.board.are_adjacent(from, tile) {
            return Err(RulesError::NotAdjacent { from, to: tile });
        }
        if !self.can_move_to(robot, tile) {
            return Err(RulesError::IllegalDestination { robot, tile });
        }

        self.robots[robot.index()].tile = tile;
        if let Some(color) = self.occupancy[tile.index()].take() {
            self.captured += 1;
            debug!(%robot, %from, to = %tile, captured = %color, "robot moved");
        }

        let turn_over = !self.can_move(robot);
        if turn_over {
            self.advance_turn();
        }
        Ok(turn_over)
    }

    /// End the current player's turn.
    pub fn end_turn(&mut self) -> Result<(), RulesError> {
        self.ensure_in_progress()?;
        self.advance_turn();
        Ok(())
    }

    /// Drop the pending interaction without ending the turn.
    pub fn cancel(&mut self) -> Result<(), RulesError> {
        self.ensure_in_progress()?;
        self.interaction = Interaction::Idle;
        Ok(())
    }

    /// Clear the interaction and toggle turn ownership.
    ///
    /// Internal so that a refill which both decides the game and fills the
    /// player's pool still hands over the turn.
    pub(crate) fn advance_turn(&mut self) {
        self.interaction = Interaction::Idle;
        for player in self.players.values_mut() {
            player.is_playing = !player.is_playing;
        }
        self.turn_number += 1;
        self.action_sequence = 0;
        debug!(next = %self.current_player(), turn = self.turn_number, "turn ended");
    }
}
