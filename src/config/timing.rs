//! Session timer configuration.
//!
//! Defaults come from `config::game`; `MAZE_CHASE_TICK_MS` and `MAZE_CHASE_POWER_MS`
//! override them at startup. Missing, unparsable or zero values keep the default.
use std::time::Duration;

use super::game::{POWER_DURATION_MS, TICK_INTERVAL_MS};

pub const TICK_ENV: &str = "MAZE_CHASE_TICK_MS";
pub const POWER_ENV: &str = "MAZE_CHASE_POWER_MS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTiming {
    /// Cadence of the main tick.
    pub tick_interval: Duration,
    /// How long one power pellet keeps the power state active.
    pub power_duration: Duration,
}

impl Default for SessionTiming {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            power_duration: Duration::from_millis(POWER_DURATION_MS),
        }
    }
}

impl SessionTiming {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build timings from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            tick_interval: read_millis(&lookup, TICK_ENV).unwrap_or(defaults.tick_interval),
            power_duration: read_millis(&lookup, POWER_ENV).unwrap_or(defaults.power_duration),
        }
    }
}

fn read_millis(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<Duration> {
    lookup(key)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .map(Duration::from_millis)
}
