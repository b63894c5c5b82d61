//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Robotory is strictly two-player. Ids are 1-based to match the board's
//! territory labels: `PlayerId::ONE` and `PlayerId::TWO`.
//!
//! ## PlayerMap
//!
//! Fixed-size per-player storage, indexable by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of players in a game.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier, either 1 or 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The first player. Holds the turn at the start of a game.
    pub const ONE: PlayerId = PlayerId(1);

    /// The second player.
    pub const TWO: PlayerId = PlayerId(2);

    /// Create a player ID from its 1-based number.
    ///
    /// Returns `None` for anything other than 1 or 2.
    #[must_use]
    pub const fn new(id: u8) -> Option<Self> {
        match id {
            1 | 2 => Some(Self(id)),
            _ => None,
        }
    }

    /// Get the raw 1-based id.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Get the 0-based storage index.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// The other player.
    ///
    /// ```
    /// use robotory::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::ONE.opponent(), PlayerId::TWO);
    /// assert_eq!(PlayerId::TWO.opponent(), PlayerId::ONE);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self.0 {
            1 => Self::TWO,
            _ => Self::ONE,
        }
    }

    /// Iterate over both players in id order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::ONE, Self::TWO].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player seat: id plus turn ownership.
///
/// Exactly one of the two seats in a game has `is_playing` set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub is_playing: bool,
}

impl Player {
    #[must_use]
    pub const fn new(id: PlayerId, is_playing: bool) -> Self {
        Self { id, is_playing }
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use robotory::core::{PlayerId, PlayerMap};
///
/// let mut score: PlayerMap<u32> = PlayerMap::new(|_| 0);
/// score[PlayerId::TWO] += 3;
///
/// assert_eq!(score[PlayerId::ONE], 0);
/// assert_eq!(score[PlayerId::TWO], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::ONE), factory(PlayerId::TWO)],
        }
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }

    /// Iterate over mutable values in player order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
