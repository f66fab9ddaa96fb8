//! Game configuration constants.
//!
//! Grid dimensions, entity speeds, hit-box sizes, scoring and timer durations.

/// Width of the maze in cells.
pub const MAZE_WIDTH: usize = 20;

/// Height of the maze in cells.
pub const MAZE_HEIGHT: usize = 20;

/// Side length of one cell, in pixels.
pub const CELL_SIZE: i32 = 20;

/// Number of enemy slots filled from the layout.
pub const ENEMY_COUNT: usize = 3;

/// Player speed in pixels per tick. Doubled while power is active.
pub const PLAYER_SPEED: i32 = 2;

/// Lives at the start of a session.
pub const STARTING_LIVES: u32 = 3;

pub const DOT_SCORE: u32 = 10;
pub const PELLET_SCORE: u32 = 50;

/// Side of the square hit-box used for enemy wall probes.
pub const ENEMY_PROBE_SIZE: i32 = 16;

/// Side of the square hit-box used for enemy/player contact.
pub const ENEMY_CONTACT_SIZE: i32 = 30;

/// Cell (row, col) an eaten enemy is sent back to.
pub const RECOVERY_CELL: (usize, usize) = (10, 10);

/// Duration of one simulation tick, in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 100;

/// Duration of the power state, in milliseconds.
pub const POWER_DURATION_MS: u64 = 10_000;

/// Upper bound of the player's mouth animation, in degrees.
pub const MOUTH_MAX_ANGLE: u32 = 45;
pub const MOUTH_STEP: u32 = 5;
