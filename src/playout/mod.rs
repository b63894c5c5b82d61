//! Seeded random self-play.
//!
//! Drives a `RulesEngine` with uniformly random legal selections. Useful as
//! a smoke test of the whole state machine and for rough balance numbers.
//!
//! ```
//! use robotory::playout::{Playout, PlayoutConfig};
//! use robotory::rules::Robotory;
//!
//! let playout = Playout::new(Robotory::default(), PlayoutConfig::default().with_seed(7));
//! let stats = playout.run(5).unwrap();
//! assert_eq!(stats.games(), 5);
//! ```

mod runner;
mod stats;

pub use runner::{Playout, PlayoutConfig, PlayoutReport};
pub use stats::PlayoutStats;
