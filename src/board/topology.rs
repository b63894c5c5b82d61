//! The fixed 24-tile board.
//!
//! Tiles sit on a five-column hex-like grid. Within a column, tiles are two
//! rows apart; neighboring columns are offset by one row. Two tiles are
//! adjacent when they share a column and are two rows apart, or sit in
//! neighboring columns one row apart. The table below spells that out per
//! tile and is checked for symmetry by the tests.
//!
//! ```text
//!  col:   0    1    2    3    4
//!  row 0            9
//!  row 1       4        15
//!  row 2  0        10        20
//!  row 3       5        16
//!  row 4  1        11        21
//!  row 5       6        17
//!  row 6  2        12        22
//!  row 7       7        18
//!  row 8  3        13        23
//!  row 9       8        19
//!  row 10          14
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PlayerId, RulesError};

/// Number of tiles on the board.
pub const TILE_COUNT: usize = 24;

/// Tile identifier in `0..24`.
///
/// The inner value is private, so every `TileId` in circulation refers to a
/// real tile and board lookups never fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TileId(u8);

impl TileId {
    /// Create a tile ID from a compiled-in index.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a tile on the board. Use `TileId::try_from`
    /// for ids that come from outside the engine.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < TILE_COUNT, "tile id out of range");
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Get the storage index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every tile on the board in id order.
    pub fn all() -> impl Iterator<Item = TileId> {
        (0..TILE_COUNT as u8).map(TileId)
    }
}

impl TryFrom<u8> for TileId {
    type Error = RulesError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if (id as usize) < TILE_COUNT {
            Ok(Self(id))
        } else {
            Err(RulesError::UnknownTile(id))
        }
    }
}

impl From<TileId> for u8 {
    fn from(id: TileId) -> Self {
        id.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Static description of one tile: territory owner and neighbors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileSpec {
    pub id: TileId,
    pub owner: PlayerId,
    pub neighbors: SmallVec<[TileId; 6]>,
}

/// (territory owner, neighbors) per tile id.
const LAYOUT: [(u8, &[u8]); TILE_COUNT] = [
    (1, &[1, 4, 5]),
    (1, &[0, 2, 5, 6]),
    (1, &[1, 3, 6, 7]),
    (2, &[2, 7, 8]),
    (1, &[0, 5, 9, 10]),
    (1, &[0, 1, 4, 6, 10, 11]),
    (1, &[1, 2, 5, 7, 11, 12]),
    (2, &[2, 3, 6, 8, 12, 13]),
    (2, &[3, 7, 13, 14]),
    (1, &[4, 10, 15]),
    (1, &[4, 5, 9, 11, 15, 16]),
    (1, &[5, 6, 10, 12, 16, 17]),
    (2, &[6, 7, 11, 13, 17, 18]),
    (2, &[7, 8, 12, 14, 18, 19]),
    (2, &[8, 13, 19]),
    (1, &[9, 10, 16, 20]),
    (1, &[10, 11, 15, 17, 20, 21]),
    (2, &[11, 12, 16, 18, 21, 22]),
    (2, &[12, 13, 17, 19, 22, 23]),
    (2, &[13, 14, 18, 23]),
    (1, &[15, 16, 21]),
    (2, &[16, 17, 20, 22]),
    (2, &[17, 18, 21, 23]),
    (2, &[18, 19, 22]),
];

/// Immutable board topology.
///
/// Only ever built from the compiled-in layout, so it has no serde form;
/// saved games rebuild it on load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<TileSpec>,
}

impl Board {
    /// Build the standard Robotory board.
    #[must_use]
    pub fn standard() -> Self {
        let tiles = LAYOUT
            .iter()
            .enumerate()
            .map(|(id, &(owner, neighbors))| TileSpec {
                id: TileId(id as u8),
                owner: if owner == 1 { PlayerId::ONE } else { PlayerId::TWO },
                neighbors: neighbors.iter().copied().map(TileId).collect(),
            })
            .collect();

        Self { tiles }
    }

    /// Get a tile's static description.
    #[must_use]
    pub fn tile(&self, id: TileId) -> &TileSpec {
        &self.tiles[id.index()]
    }

    /// Neighbors of a tile, in ascending id order.
    #[must_use]
    pub fn neighbors(&self, id: TileId) -> &[TileId] {
        &self.tiles[id.index()].neighbors
    }

    /// Whether two tiles are adjacent.
    #[must_use]
    pub fn are_adjacent(&self, a: TileId, b: TileId) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// The player whose side of the board a tile is on.
    #[must_use]
    pub fn territory_owner(&self, id: TileId) -> PlayerId {
        self.tiles[id.index()].owner
    }

    /// Iterate over all tiles.
    pub fn tiles(&self) -> impl Iterator<Item = &TileSpec> {
        self.tiles.iter()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_count() {
        let board = Board::standard();
        assert_eq!(board.tiles().count(), TILE_COUNT);
        for (i, tile) in board.tiles().enumerate() {
            assert_eq!(tile.id.index(), i);
        }
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let board = Board::standard();
        for a in TileId::all() {
            for &b in board.neighbors(a) {
                assert!(board.are_adjacent(b, a), "{a} lists {b} but not vice versa");
            }
        }
    }

    #[test]
    fn test_no_self_loops_and_sorted() {
        let board = Board::standard();
        for a in TileId::all() {
            let neighbors = board.neighbors(a);
            assert!(!neighbors.contains(&a));
            assert!(neighbors.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_territory_split() {
        let board = Board::standard();
        let ones = TileId::all()
            .filter(|&t| board.territory_owner(t) == PlayerId::ONE)
            .count();
        assert_eq!(ones, 12);
        assert_eq!(board.territory_owner(TileId::new(6)), PlayerId::ONE);
        assert_eq!(board.territory_owner(TileId::new(12)), PlayerId::TWO);
        assert_eq!(board.territory_owner(TileId::new(17)), PlayerId::TWO);
    }

    #[test]
    fn test_known_neighbors() {
        let board = Board::standard();
        let ids = |t: u8| -> Vec<u8> {
            board
                .neighbors(TileId::new(t))
                .iter()
                .map(|n| n.raw())
                .collect()
        };

        assert_eq!(ids(0), vec![1, 4, 5]);
        assert_eq!(ids(17), vec![11, 12, 16, 18, 21, 22]);
        assert_eq!(ids(23), vec![18, 19, 22]);
    }

    #[test]
    fn test_try_from_rejects_unknown_tile() {
        assert_eq!(TileId::try_from(23), Ok(TileId::new(23)));
        assert_eq!(TileId::try_from(24), Err(RulesError::UnknownTile(24)));
    }

    #[test]
    #[should_panic(expected = "tile id out of range")]
    fn test_new_panics_out_of_range() {
        let _ = TileId::new(30);
    }

    #[test]
    fn test_tile_id_serde_validates() {
        let json = serde_json::to_string(&TileId::new(5)).unwrap();
        assert_eq!(json, "5");
        assert!(serde_json::from_str::<TileId>("99").is_err());
    }
}
