//! Enemy entity logic.
//!
//! Enemies walk one full cell per step and pick a random open heading whenever
//! they run into a wall. Randomness is injected so runs can be replayed from a seed.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::config::game::{CELL_SIZE, ENEMY_CONTACT_SIZE, ENEMY_PROBE_SIZE};
use crate::game::grid::{collides, Bounds, EnemySpawn, Maze};
use crate::game::types::{EnemyColor, Position, Rect, Velocity};

/// Candidate headings, evaluated in this order.
const HEADINGS: [Velocity; 4] = [
    Velocity { dx: CELL_SIZE, dy: 0 },
    Velocity { dx: -CELL_SIZE, dy: 0 },
    Velocity { dx: 0, dy: CELL_SIZE },
    Velocity { dx: 0, dy: -CELL_SIZE },
];

#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Position,
    pub velocity: Velocity,
    pub color: EnemyColor,
    pub spawn: EnemySpawn,
}

impl Enemy {
    pub fn new(slot: usize, spawn: EnemySpawn) -> Self {
        Self {
            pos: spawn.position,
            velocity: spawn.velocity,
            color: EnemyColor::for_slot(slot),
            spawn,
        }
    }

    /// Headings whose next cell is not a wall.
    pub fn open_headings(&self, maze: &Maze) -> Vec<Velocity> {
        HEADINGS
            .iter()
            .copied()
            .filter(|heading| !Self::blocked(heading.apply(self.pos), maze))
            .collect()
    }

    /// Pick a new heading uniformly among the open ones.
    /// A fully enclosed enemy keeps its previous velocity.
    pub fn choose_direction<R: Rng + ?Sized>(&mut self, maze: &Maze, rng: &mut R) {
        if let Some(heading) = self.open_headings(maze).choose(rng) {
            self.velocity = *heading;
        }
    }

    /// Move one cell along the current heading, or re-roll the heading when blocked.
    pub fn step<R: Rng + ?Sized>(&mut self, maze: &Maze, rng: &mut R) {
        let target = self.velocity.apply(self.pos);
        if Self::blocked(target, maze) {
            self.choose_direction(maze, rng);
        } else {
            self.pos = target.snapped();
        }
    }

    /// Put the enemy at `position` and roll a fresh heading.
    pub fn relocate<R: Rng + ?Sized>(&mut self, position: Position, maze: &Maze, rng: &mut R) {
        self.pos = position;
        self.choose_direction(maze, rng);
    }

    pub fn contact_box(&self) -> Rect {
        Rect::centered(self.pos, ENEMY_CONTACT_SIZE)
    }

    fn blocked(target: Position, maze: &Maze) -> bool {
        collides(Rect::centered(target, ENEMY_PROBE_SIZE), maze, Bounds::Clamped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::game::{MAZE_HEIGHT, MAZE_WIDTH};
    use crate::game::types::CellKind;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn enemy_at(row: usize, col: usize, velocity: Velocity) -> Enemy {
        Enemy::new(0, EnemySpawn { position: Position::cell_center(row, col), velocity })
    }

    #[test]
    fn test_open_headings_follow_walls() {
        let maze = Maze::initialize().maze;
        // (9, 5): left (9, 4) and up (8, 5) are open, right (9, 6) and down (10, 5) are walls.
        let enemy = enemy_at(9, 5, Velocity::ZERO);
        assert_eq!(
            enemy.open_headings(&maze),
            vec![Velocity::new(-CELL_SIZE, 0), Velocity::new(0, -CELL_SIZE)]
        );
    }

    #[test]
    fn test_choose_direction_only_picks_open_headings() {
        let maze = Maze::initialize().maze;
        let mut rng = seeded_rng();
        let mut enemy = enemy_at(9, 5, Velocity::ZERO);
        let open = enemy.open_headings(&maze);
        for _ in 0..50 {
            enemy.choose_direction(&maze, &mut rng);
            assert!(open.contains(&enemy.velocity));
        }
    }

    #[test]
    fn test_choose_direction_is_uniform_over_open_set() {
        let maze = Maze::initialize().maze;
        let mut rng = seeded_rng();
        // (7, 13) has open cells on all four sides.
        let mut enemy = enemy_at(7, 13, Velocity::ZERO);
        assert_eq!(enemy.open_headings(&maze).len(), 4);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            enemy.choose_direction(&maze, &mut rng);
            seen.insert(enemy.velocity);
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_step_moves_one_cell_and_stays_centered() {
        let maze = Maze::initialize().maze;
        let mut rng = seeded_rng();
        let mut enemy = enemy_at(7, 13, Velocity::new(CELL_SIZE, 0));
        enemy.step(&maze, &mut rng);
        assert_eq!(enemy.pos, Position::cell_center(7, 14));

        for _ in 0..100 {
            enemy.step(&maze, &mut rng);
            assert_eq!(enemy.pos.x.rem_euclid(CELL_SIZE), CELL_SIZE / 2);
            assert_eq!(enemy.pos.y.rem_euclid(CELL_SIZE), CELL_SIZE / 2);
        }
    }

    #[test]
    fn test_blocked_step_stays_and_rerolls() {
        let maze = Maze::initialize().maze;
        let mut rng = seeded_rng();
        // Heading right from (9, 5) runs into the wall at (9, 6).
        let mut enemy = enemy_at(9, 5, Velocity::new(CELL_SIZE, 0));
        let open = enemy.open_headings(&maze);
        enemy.step(&maze, &mut rng);
        assert_eq!(enemy.pos, Position::cell_center(9, 5));
        assert!(open.contains(&enemy.velocity));
    }

    #[test]
    fn test_enclosed_enemy_keeps_velocity() {
        let mut cells = [[CellKind::Wall; MAZE_WIDTH]; MAZE_HEIGHT];
        cells[5][5] = CellKind::Path;
        let maze = Maze::from_cells(cells);
        let mut rng = seeded_rng();
        let heading = Velocity::new(0, -CELL_SIZE);
        let mut enemy = enemy_at(5, 5, heading);

        assert!(enemy.open_headings(&maze).is_empty());
        enemy.choose_direction(&maze, &mut rng);
        assert_eq!(enemy.velocity, heading);

        enemy.step(&maze, &mut rng);
        assert_eq!(enemy.pos, Position::cell_center(5, 5));
        assert_eq!(enemy.velocity, heading);
    }

    #[test]
    fn test_step_snaps_off_grid_enemy() {
        let maze = Maze::initialize().maze;
        let mut rng = seeded_rng();
        let mut enemy = enemy_at(7, 13, Velocity::new(CELL_SIZE, 0));
        enemy.pos = enemy.pos.offset(3, -2);
        enemy.step(&maze, &mut rng);
        assert_eq!(enemy.pos, Position::cell_center(7, 14));
    }
}
