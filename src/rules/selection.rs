//! The turn/interaction state machine.
//!
//! A presentation layer feeds player selections in one at a time. Each
//! selection is interpreted against the pending `Interaction`:
//!
//! ```text
//! Idle ── own disk ──────────▶ Placing ── open tile ──▶ (turn ends) Idle
//! Idle ── neutral disk ──────▶ RefillPending, or Idle with the turn ended
//! RefillPending ── neutral ──▶ RefillPending, or Idle with the turn ended
//! Idle ── movable robot ─────▶ MovingRobot ── destination ──▶ MovingRobot
//!                                            (turn ends when stuck)
//! MovingRobot ── same robot ─▶ Idle (not moved yet) or turn ends (moved)
//! any ── cancel ─────────────▶ Idle, turn continues
//! ```

use tracing::trace;

use crate::board::TileId;
use crate::core::{Action, DiskId, GameState, Interaction, RobotColor, RulesError};

impl GameState {
    /// Apply one selection.
    pub fn select(&mut self, action: Action) -> Result<(), RulesError> {
        trace!(%action, interaction = %self.interaction, "selection");
        match action {
            Action::PickDisk(disk) => self.pick_disk(disk),
            Action::PickTile(tile) => self.pick_tile(tile),
            Action::PickRobot(robot) => self.pick_robot(robot),
            Action::Cancel => self.cancel(),
        }
    }

    /// Pick a disk: start placing an own disk, or refill a neutral one.
    pub fn pick_disk(&mut self, disk: DiskId) -> Result<(), RulesError> {
        self.ensure_in_progress()?;
        let player = self.current_player();
        let owner = self.disk(disk)?.owner;

        match (self.interaction, owner) {
            (Interaction::Idle, Some(owner)) if owner == player => {
                self.interaction = Interaction::Placing { disk };
                Ok(())
            }
            (Interaction::Idle, Some(_)) => Err(RulesError::DiskNotOwned { disk, player }),
            (Interaction::Idle | Interaction::RefillPending { .. }, None) => {
                if self.refill(player, disk)? {
                    self.interaction = Interaction::RefillPending { player };
                }
                Ok(())
            }
            _ => Err(self.illegal(Action::PickDisk(disk))),
        }
    }

    /// Pick a tile: the target of a pending placement or robot step.
    pub fn pick_tile(&mut self, tile: TileId) -> Result<(), RulesError> {
        self.ensure_in_progress()?;
        match self.interaction {
            Interaction::Placing { disk } => self.put_disk(disk, tile),
            Interaction::MovingRobot { robot, .. } => self.move_robot(robot, tile).map(|_| ()),
            _ => Err(self.illegal(Action::PickTile(tile))),
        }
    }

    /// Pick a robot: start a move, or finish the one in progress.
    ///
    /// Re-picking the moving robot before it has left its starting tile
    /// cancels the move; after it has moved, it stops the robot and ends the
    /// turn.
    pub fn pick_robot(&mut self, robot: RobotColor) -> Result<(), RulesError> {
        self.ensure_in_progress()?;
        match self.interaction {
            Interaction::Idle => {
                if !self.can_move(robot) {
                    return Err(RulesError::RobotCannotMove(robot));
                }
                self.interaction = Interaction::MovingRobot {
                    robot,
                    start_tile: self.robot(robot).tile,
                };
                Ok(())
            }
            Interaction::MovingRobot { robot: moving, start_tile } if moving == robot => {
                if self.robot(robot).tile == start_tile {
                    self.interaction = Interaction::Idle;
                } else {
                    self.advance_turn();
                }
                Ok(())
            }
            _ => Err(self.illegal(Action::PickRobot(robot))),
        }
    }

    /// Every selection `select` would accept right now.
    #[must_use]
    pub fn legal_selections(&self) -> Vec<Action> {
        if self.is_over() {
            return Vec::new();
        }
        let player = self.current_player();

        let mut actions = Vec::new();
        match self.interaction {
            Interaction::Idle => {
                actions.extend(
                    self.disks()
                        .filter(|d| d.is_owned_by(player))
                        .map(|d| Action::PickDisk(d.id)),
                );
                if self.can_refill(player) {
                    actions.extend(self.neutral_picks());
                }
                actions.extend(
                    RobotColor::ALL
                        .into_iter()
                        .filter(|&r| self.can_move(r))
                        .map(Action::PickRobot),
                );
            }
            Interaction::Placing { .. } => {
                actions.extend(self.open_tiles().into_iter().map(Action::PickTile));
                actions.push(Action::Cancel);
            }
            Interaction::RefillPending { .. } => {
                if self.can_refill(player) {
                    actions.extend(self.neutral_picks());
                }
                actions.push(Action::Cancel);
            }
            Interaction::MovingRobot { robot, .. } => {
                actions.extend(self.legal_destinations(robot).into_iter().map(Action::PickTile));
                actions.push(Action::PickRobot(robot));
                actions.push(Action::Cancel);
            }
        }
        actions
    }

    fn neutral_picks(&self) -> impl Iterator<Item = Action> + '_ {
        self.disks()
            .filter(|d| d.is_neutral())
            .map(|d| Action::PickDisk(d.id))
    }

    fn illegal(&self, action: Action) -> RulesError {
        RulesError::IllegalSelection {
            action,
            interaction: self.interaction,
        }
    }
}
