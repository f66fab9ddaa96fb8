//! Wall collision probe.
//!
//! Maps an axis-aligned rectangle onto the range of grid cells it overlaps and
//! reports whether any of them is a wall. A far edge lying exactly on a cell
//! boundary does not reach into the next cell.

use crate::config::game::{CELL_SIZE, MAZE_HEIGHT, MAZE_WIDTH};
use crate::game::grid::maze::Maze;
use crate::game::types::{CellKind, Rect};

/// How a probe reaching outside the grid is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounds {
    /// Outside the grid counts as a wall (player movement).
    Solid,
    /// The scanned range is clamped to the grid; edges never collide by themselves (enemies).
    Clamped,
}

/// Inclusive range of cell indices covered by `[start, start + len)` along one axis.
fn cell_span(start: i32, len: i32) -> (i32, i32) {
    let first = start.div_euclid(CELL_SIZE);
    let far_edge = start + len;
    let mut last = far_edge.div_euclid(CELL_SIZE);
    if len > 0 && far_edge.rem_euclid(CELL_SIZE) == 0 {
        last -= 1;
    }
    (first, last)
}

/// Returns true if `rect` overlaps a wall cell of `maze`.
pub fn collides(rect: Rect, maze: &Maze, bounds: Bounds) -> bool {
    let (start_col, end_col) = cell_span(rect.left, rect.width);
    let (start_row, end_row) = cell_span(rect.top, rect.height);

    let max_col = MAZE_WIDTH as i32 - 1;
    let max_row = MAZE_HEIGHT as i32 - 1;

    if bounds == Bounds::Solid
        && (start_col < 0 || start_row < 0 || end_col > max_col || end_row > max_row)
    {
        return true;
    }

    let start_col = start_col.max(0);
    let end_col = end_col.min(max_col);
    let start_row = start_row.max(0);
    let end_row = end_row.min(max_row);

    (start_row..=end_row).any(|row| {
        (start_col..=end_col).any(|col| maze.cell(row as usize, col as usize) == CellKind::Wall)
    })
}
