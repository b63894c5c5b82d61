//! Game pieces: disks and robots.

pub mod disk;
pub mod robot;

pub use disk::Disk;
pub use robot::Robot;
