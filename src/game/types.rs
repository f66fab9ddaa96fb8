use serde::{Serialize, Deserialize};

use crate::config::game::CELL_SIZE;

/// Pixel position of an entity's centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Centre of the cell at `(row, col)`.
    pub fn cell_center(row: usize, col: usize) -> Self {
        Self {
            x: col as i32 * CELL_SIZE + CELL_SIZE / 2,
            y: row as i32 * CELL_SIZE + CELL_SIZE / 2,
        }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    /// Snap to the centre of the cell containing this position.
    pub fn snapped(self) -> Self {
        Self {
            x: self.x.div_euclid(CELL_SIZE) * CELL_SIZE + CELL_SIZE / 2,
            y: self.y.div_euclid(CELL_SIZE) * CELL_SIZE + CELL_SIZE / 2,
        }
    }

    pub fn distance(self, other: Position) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }
}

/// Per-tick displacement in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Velocity {
    pub dx: i32,
    pub dy: i32,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { dx: 0, dy: 0 };

    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// `speed` pixels along `direction`.
    pub fn along(direction: Direction, speed: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self { dx: dx * speed, dy: dy * speed }
    }

    pub fn apply(self, pos: Position) -> Position {
        pos.offset(self.dx, self.dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step along the screen axes (y grows downwards).
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A key delivered by the front-end. Anything that is not an arrow is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Other,
}

impl Key {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            Key::Other => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Wall,
    Path,
    Dot,
    PowerPellet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyColor {
    Red,
    Cyan,
    Magenta,
}

impl EnemyColor {
    pub const PALETTE: [EnemyColor; 3] = [EnemyColor::Red, EnemyColor::Cyan, EnemyColor::Magenta];

    pub fn for_slot(slot: usize) -> Self {
        Self::PALETTE[slot % Self::PALETTE.len()]
    }
}

/// Axis-aligned rectangle in pixels, used for wall probes and contact tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, width, height }
    }

    /// Square of side `size` centred on `center`.
    pub fn centered(center: Position, size: i32) -> Self {
        Self::new(center.x - size / 2, center.y - size / 2, size, size)
    }

    /// Half-open overlap test: touching edges do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.left + other.width
            && other.left < self.left + self.width
            && self.top < other.top + other.height
            && other.top < self.top + self.height
    }
}
