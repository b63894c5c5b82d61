//! Board topology: tiles, territory owners, and adjacency.
//!
//! The board never changes during a game. Disk occupancy is game state and
//! lives in `GameState`, not here.

pub mod topology;

pub use topology::{Board, TileId, TileSpec, TILE_COUNT};
