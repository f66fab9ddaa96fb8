use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::game::{PLAYER_SPEED, STARTING_LIVES};
use crate::game::entities::{Enemy, Player};
use crate::game::grid::Maze;
use crate::game::snapshot::RenderSnapshot;
use crate::game::systems::{collect_pickups, move_entities, resolve_contacts, ContactOutcome};
use crate::game::types::{Key, Position};

/// Complete state of one play session.
///
/// Only `tick`, `reset`, the power transitions and key input mutate it.
#[derive(Debug, Clone)]
pub struct GameState {
    pub maze: Maze,
    pub player: Player,
    pub player_start: Position,
    pub enemies: Vec<Enemy>,
    pub score: u32,
    pub lives: u32,
    pub power_active: bool,
    pub ended: bool,
    pub frame: u64,
    pub(crate) rng: StdRng,
}

/// What happened during one tick, for the scheduler driving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// False when the session was already over and nothing moved.
    pub processed: bool,
    pub points: u32,
    pub power_started: bool,
    pub contact: ContactOutcome,
    pub won: bool,
}

impl TickReport {
    fn idle(won: bool) -> Self {
        Self {
            processed: false,
            points: 0,
            power_started: false,
            contact: ContactOutcome::Clear,
            won,
        }
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Deterministic session: the same seed replays the same enemy choices.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        let layout = Maze::initialize();
        let mut state = GameState {
            player: Player::new(layout.player_start),
            player_start: layout.player_start,
            enemies: layout
                .enemy_spawns
                .iter()
                .enumerate()
                .map(|(slot, spawn)| Enemy::new(slot, *spawn))
                .collect(),
            maze: layout.maze,
            score: 0,
            lives: STARTING_LIVES,
            power_active: false,
            ended: false,
            frame: 0,
            rng,
        };
        for enemy in &mut state.enemies {
            enemy.choose_direction(&state.maze, &mut state.rng);
        }
        state
    }

    /// Rebuild the maze and start over, keeping the random source.
    pub fn reset(&mut self) {
        let rng = self.rng.clone();
        *self = Self::with_rng(rng);
    }

    /// Arrow keys buffer a turn; anything else is ignored.
    pub fn on_direction_key(&mut self, key: Key) {
        if let Some(direction) = key.direction() {
            self.player.set_next_direction(direction);
        }
    }

    /// Run one simulation step. Does nothing once the session is over.
    pub fn tick(&mut self) -> TickReport {
        if !self.is_running() {
            return TickReport::idle(self.is_won());
        }
        self.frame += 1;

        move_entities(self);
        let pickup = collect_pickups(self);
        let contact = resolve_contacts(self);

        TickReport {
            processed: true,
            points: pickup.points,
            power_started: pickup.power_up,
            contact,
            won: self.is_won(),
        }
    }

    pub fn start_power_up(&mut self) {
        self.power_active = true;
        self.player.speed = PLAYER_SPEED * 2;
    }

    pub fn end_power_up(&mut self) {
        self.power_active = false;
        self.player.speed = PLAYER_SPEED;
    }

    /// Everyone back to their spawn; enemies roll a new heading.
    pub fn respawn_all(&mut self) {
        self.player.respawn(self.player_start);
        for enemy in &mut self.enemies {
            let spawn = enemy.spawn.position;
            enemy.relocate(spawn, &self.maze, &mut self.rng);
        }
    }

    /// All collectibles eaten without running out of lives.
    pub fn is_won(&self) -> bool {
        !self.ended && self.maze.is_cleared()
    }

    pub fn is_running(&self) -> bool {
        !self.ended && !self.is_won()
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::from(self)
    }
}
