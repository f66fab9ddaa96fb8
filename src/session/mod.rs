//! Session actor: owns the game state and schedules its ticks.

pub mod server;
pub mod messages;

pub use server::GameSession;
