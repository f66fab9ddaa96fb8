//! Maze model.
//!
//! Builds the cell grid from the compiled-in layout and tracks which dots and
//! power pellets are still on the board.

use crate::config::game::{
    CELL_SIZE, DOT_SCORE, ENEMY_COUNT, MAZE_HEIGHT, MAZE_WIDTH, PELLET_SCORE,
};
use crate::config::layout::MAZE_LAYOUT;
use crate::game::types::{CellKind, Position, Velocity};

pub type Cells = [[CellKind; MAZE_WIDTH]; MAZE_HEIGHT];

#[derive(Debug, Clone)]
pub struct Maze {
    cells: Cells,
    dots: Vec<Position>,
    pellets: Vec<Position>,
}

/// Where an enemy slot starts and which way it initially heads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemySpawn {
    pub position: Position,
    pub velocity: Velocity,
}

/// Everything derived from one pass over the layout.
#[derive(Debug, Clone)]
pub struct MazeLayout {
    pub maze: Maze,
    pub player_start: Position,
    pub enemy_spawns: Vec<EnemySpawn>,
}

/// Points and side effects of one pickup check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreDelta {
    pub points: u32,
    pub power_up: bool,
}

impl Maze {
    /// Parse the fixed layout.
    pub fn initialize() -> MazeLayout {
        let mut cells = [[CellKind::Path; MAZE_WIDTH]; MAZE_HEIGHT];
        let mut dots = Vec::new();
        let mut pellets = Vec::new();
        let mut player_start = Position::cell_center(1, 1);
        let mut enemy_spawns: Vec<EnemySpawn> = Vec::with_capacity(ENEMY_COUNT);

        for (row, line) in MAZE_LAYOUT.iter().enumerate() {
            for (col, symbol) in line.chars().enumerate() {
                let center = Position::cell_center(row, col);
                cells[row][col] = match symbol {
                    'W' => CellKind::Wall,
                    'D' => {
                        dots.push(center);
                        CellKind::Dot
                    }
                    'N' => {
                        pellets.push(center);
                        CellKind::PowerPellet
                    }
                    'S' => {
                        player_start = center;
                        CellKind::Path
                    }
                    'E' => {
                        let slot = enemy_spawns.len();
                        if slot < ENEMY_COUNT {
                            let dx = if slot % 2 == 0 { CELL_SIZE } else { -CELL_SIZE };
                            enemy_spawns.push(EnemySpawn {
                                position: center,
                                velocity: Velocity::new(dx, 0),
                            });
                        }
                        CellKind::Path
                    }
                    _ => CellKind::Path,
                };
            }
        }

        MazeLayout {
            maze: Maze { cells, dots, pellets },
            player_start,
            enemy_spawns,
        }
    }

    /// Bare grid with nothing to collect.
    #[cfg(test)]
    pub(crate) fn from_cells(cells: Cells) -> Self {
        Maze { cells, dots: Vec::new(), pellets: Vec::new() }
    }

    pub fn cell(&self, row: usize, col: usize) -> CellKind {
        self.cells[row][col]
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    pub fn dots(&self) -> &[Position] {
        &self.dots
    }

    pub fn pellets(&self) -> &[Position] {
        &self.pellets
    }

    /// True once every dot and pellet has been eaten.
    pub fn is_cleared(&self) -> bool {
        self.dots.is_empty() && self.pellets.is_empty()
    }

    /// Eat at most one dot and at most one pellet within half a cell of `position`.
    ///
    /// Both lists are scanned in layout order and the first item in range wins,
    /// not necessarily the nearest one.
    pub fn consume(&mut self, position: Position) -> ScoreDelta {
        let mut delta = ScoreDelta::default();
        if self.take_first_within(position, Collectible::Dot) {
            delta.points += DOT_SCORE;
        }
        if self.take_first_within(position, Collectible::Pellet) {
            delta.points += PELLET_SCORE;
            delta.power_up = true;
        }
        delta
    }

    fn take_first_within(&mut self, position: Position, kind: Collectible) -> bool {
        let reach = f64::from(CELL_SIZE) / 2.0;
        let items = match kind {
            Collectible::Dot => &mut self.dots,
            Collectible::Pellet => &mut self.pellets,
        };
        let Some(index) = items.iter().position(|item| position.distance(*item) < reach) else {
            return false;
        };
        let item = items.remove(index);

        let row = item.y.div_euclid(CELL_SIZE);
        let col = item.x.div_euclid(CELL_SIZE);
        if (0..MAZE_HEIGHT as i32).contains(&row) && (0..MAZE_WIDTH as i32).contains(&col) {
            self.cells[row as usize][col as usize] = CellKind::Path;
        }
        true
    }
}

#[derive(Clone, Copy)]
enum Collectible {
    Dot,
    Pellet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_border_is_wall() {
        let maze = Maze::initialize().maze;
        for i in 0..MAZE_WIDTH {
            assert_eq!(maze.cell(0, i), CellKind::Wall);
            assert_eq!(maze.cell(MAZE_HEIGHT - 1, i), CellKind::Wall);
        }
        for i in 0..MAZE_HEIGHT {
            assert_eq!(maze.cell(i, 0), CellKind::Wall);
            assert_eq!(maze.cell(i, MAZE_WIDTH - 1), CellKind::Wall);
        }
    }

    #[test]
    fn test_layout_spawns_and_collectibles() {
        let layout = Maze::initialize();
        assert_eq!(layout.player_start, Position::new(30, 30));
        assert_eq!(layout.maze.pellets().len(), 6);
        assert_eq!(layout.maze.pellets()[0], Position::cell_center(1, 3));

        // Four spawn markers in the layout, only the first three fill a slot.
        assert_eq!(layout.enemy_spawns.len(), ENEMY_COUNT);
        assert_eq!(layout.enemy_spawns[0].position, Position::cell_center(9, 5));
        assert_eq!(layout.enemy_spawns[0].velocity, Velocity::new(CELL_SIZE, 0));
        assert_eq!(layout.enemy_spawns[1].position, Position::cell_center(9, 8));
        assert_eq!(layout.enemy_spawns[1].velocity, Velocity::new(-CELL_SIZE, 0));
        assert_eq!(layout.enemy_spawns[2].position, Position::cell_center(9, 9));

        // Start and spawn cells render as plain path.
        assert_eq!(layout.maze.cell(1, 1), CellKind::Path);
        assert_eq!(layout.maze.cell(9, 5), CellKind::Path);

        let dot_cells = layout.maze.cells().iter().flatten().filter(|c| **c == CellKind::Dot).count();
        assert_eq!(dot_cells, layout.maze.dots().len());
    }

    #[test]
    fn test_consume_dot_once() {
        let mut maze = Maze::initialize().maze;
        let before = maze.dots().len();
        let dot = Position::cell_center(1, 2);

        let delta = maze.consume(dot.offset(4, 0));
        assert_eq!(delta, ScoreDelta { points: DOT_SCORE, power_up: false });
        assert_eq!(maze.cell(1, 2), CellKind::Path);
        assert_eq!(maze.dots().len(), before - 1);

        assert_eq!(maze.consume(dot), ScoreDelta::default());
        assert_eq!(maze.dots().len(), before - 1);
    }

    #[test]
    fn test_consume_out_of_reach_is_noop() {
        let mut maze = Maze::initialize().maze;
        // Exactly half a cell away does not count.
        let delta = maze.consume(Position::cell_center(1, 2).offset(10, 0));
        assert_eq!(delta, ScoreDelta::default());
    }

    #[test]
    fn test_consume_pellet_triggers_power() {
        let mut maze = Maze::initialize().maze;
        let delta = maze.consume(Position::cell_center(1, 3));
        assert_eq!(delta, ScoreDelta { points: PELLET_SCORE, power_up: true });
        assert_eq!(maze.cell(1, 3), CellKind::Path);
        assert_eq!(maze.pellets().len(), 5);
    }

    #[test]
    fn test_cleared_after_eating_everything() {
        let mut maze = Maze::initialize().maze;
        let items: Vec<Position> = maze.dots().iter().chain(maze.pellets()).copied().collect();
        let total: u32 = items.iter().map(|p| maze.consume(*p).points).sum();
        assert!(maze.is_cleared());
        assert_eq!(total, DOT_SCORE * (items.len() as u32 - 6) + PELLET_SCORE * 6);
    }
}
