//! Text rendering of a snapshot.
//!
//! Produces a grid of glyphs, two columns per cell, that any terminal
//! front-end can colour and print.

use crate::config::game::CELL_SIZE;
use crate::game::snapshot::RenderSnapshot;
use crate::game::types::{CellKind, Direction, EnemyColor, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Wall,
    Empty,
    Dot,
    Pellet,
    /// Player, with its mouth open or closed for the animation.
    Player { direction: Option<Direction>, open: bool },
    Enemy(EnemyColor),
    Frightened,
}

impl Glyph {
    pub fn text(self) -> &'static str {
        match self {
            Glyph::Wall => "██",
            Glyph::Empty => "  ",
            Glyph::Dot => "· ",
            Glyph::Pellet => "● ",
            Glyph::Player { open: false, .. } => "● ",
            Glyph::Player { direction, open: true } => match direction {
                Some(Direction::Up) => "V ",
                Some(Direction::Down) => "Λ ",
                Some(Direction::Left) => "> ",
                Some(Direction::Right) | None => "< ",
            },
            Glyph::Enemy(_) => "M ",
            Glyph::Frightened => "m ",
        }
    }
}

fn cell_of(position: Position) -> Option<(usize, usize)> {
    let row = position.y.div_euclid(CELL_SIZE);
    let col = position.x.div_euclid(CELL_SIZE);
    (row >= 0 && col >= 0).then(|| (row as usize, col as usize))
}

/// Build the glyph grid. Enemies are drawn over the player, the player over the maze.
pub fn compose(snapshot: &RenderSnapshot) -> Vec<Vec<Glyph>> {
    let mut display: Vec<Vec<Glyph>> = snapshot
        .cells
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    CellKind::Wall => Glyph::Wall,
                    CellKind::Path => Glyph::Empty,
                    CellKind::Dot => Glyph::Dot,
                    CellKind::PowerPellet => Glyph::Pellet,
                })
                .collect()
        })
        .collect();

    let mut place = |position: Position, glyph: Glyph| {
        if let Some((row, col)) = cell_of(position) {
            if let Some(slot) = display.get_mut(row).and_then(|r| r.get_mut(col)) {
                *slot = glyph;
            }
        }
    };

    place(
        snapshot.player.position,
        Glyph::Player {
            direction: snapshot.player.direction,
            open: snapshot.player.mouth_angle > 0,
        },
    );
    for enemy in &snapshot.enemies {
        let glyph = if enemy.eatable { Glyph::Frightened } else { Glyph::Enemy(enemy.color) };
        place(enemy.position, glyph);
    }

    display
}

/// Status line printed under the maze.
pub fn status_line(snapshot: &RenderSnapshot) -> String {
    let mut line = format!("Score: {}   Lives: {}", snapshot.score, snapshot.lives);
    if snapshot.power_active {
        line.push_str("   POWER!");
    }
    line
}

/// End-of-session message, if any.
pub fn banner(snapshot: &RenderSnapshot) -> Option<&'static str> {
    if snapshot.won {
        Some("You win!  r: play again   q: quit")
    } else if snapshot.ended {
        Some("Game over!  r: try again   q: quit")
    } else {
        None
    }
}
