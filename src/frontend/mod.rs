//! Terminal front-end: draws snapshots and forwards key presses to the session.

pub mod input;
pub mod renderer;

pub use input::read_input;
pub use renderer::{Renderer, TerminalGuard};
