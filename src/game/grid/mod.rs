//! Maze grid module.
//!
//! The static cell grid with its collectibles, and the wall collision probe
//! shared by every moving entity.

pub mod collision;
pub mod maze;

pub use collision::*;
pub use maze::*;
