pub mod types;
pub mod state;
pub mod snapshot;

pub mod entities;
pub mod grid;
pub mod systems;
