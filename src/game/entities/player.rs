//! Player entity logic.
//!
//! The player moves a few pixels per tick and buffers the last requested turn
//! until it becomes geometrically legal.

use crate::config::game::{CELL_SIZE, MOUTH_MAX_ANGLE, MOUTH_STEP, PLAYER_SPEED};
use crate::game::grid::{collides, Bounds, Maze};
use crate::game::types::{Direction, Position, Rect, Velocity};

#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Position,
    /// Direction actually being travelled, `None` while halted.
    pub direction: Option<Direction>,
    /// Most recent turn request, not yet taken.
    pub next_direction: Option<Direction>,
    pub speed: i32,
    pub mouth_angle: u32,
    mouth_opening: bool,
}

impl Player {
    /// A player at `spawn`, facing right with no turn buffered.
    pub fn new(spawn: Position) -> Self {
        Self {
            pos: spawn,
            direction: Some(Direction::Right),
            next_direction: None,
            speed: PLAYER_SPEED,
            mouth_angle: 0,
            mouth_opening: true,
        }
    }

    /// Send the player back to `spawn` with a right turn buffered, so it
    /// starts moving on the next tick. Speed, heading and animation are kept.
    pub fn respawn(&mut self, spawn: Position) {
        self.pos = spawn;
        self.next_direction = Some(Direction::Right);
    }

    /// Buffer a turn, replacing any earlier request.
    pub fn set_next_direction(&mut self, direction: Direction) {
        self.next_direction = Some(direction);
    }

    pub fn hitbox(&self) -> Rect {
        Rect::centered(self.pos, CELL_SIZE)
    }

    /// Advance one tick.
    ///
    /// The buffered turn is taken as soon as the destination is free. Failing
    /// that the player keeps its current heading, and halts when both are blocked.
    pub fn move_in(&mut self, maze: &Maze) {
        let turned = self.displaced(self.next_direction);
        if self.is_free(turned, maze) {
            self.direction = self.next_direction;
            self.pos = turned;
        } else {
            let ahead = self.displaced(self.direction);
            if self.direction != self.next_direction && self.is_free(ahead, maze) {
                self.pos = ahead;
            } else {
                self.direction = None;
            }
        }
        self.animate();
    }

    fn displaced(&self, direction: Option<Direction>) -> Position {
        direction
            .map(|d| Velocity::along(d, self.speed))
            .unwrap_or(Velocity::ZERO)
            .apply(self.pos)
    }

    fn is_free(&self, target: Position, maze: &Maze) -> bool {
        !collides(Rect::centered(target, CELL_SIZE), maze, Bounds::Solid)
    }

    fn animate(&mut self) {
        if self.mouth_opening {
            self.mouth_angle = (self.mouth_angle + MOUTH_STEP).min(MOUTH_MAX_ANGLE);
            if self.mouth_angle >= MOUTH_MAX_ANGLE {
                self.mouth_opening = false;
            }
        } else {
            self.mouth_angle = self.mouth_angle.saturating_sub(MOUTH_STEP);
            if self.mouth_angle == 0 {
                self.mouth_opening = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Player, Maze) {
        let layout = Maze::initialize();
        (Player::new(layout.player_start), layout.maze)
    }

    #[test]
    fn test_buffered_turn_taken_when_free() {
        let (mut player, maze) = setup();
        player.set_next_direction(Direction::Down);
        player.move_in(&maze);
        assert_eq!(player.direction, Some(Direction::Down));
        assert_eq!(player.pos, Position::new(30, 32));
    }

    #[test]
    fn test_keeps_heading_when_turn_blocked() {
        let (mut player, maze) = setup();
        player.set_next_direction(Direction::Right);
        player.move_in(&maze);
        assert_eq!(player.pos, Position::new(32, 30));

        // Mid-corridor, cell (0, *) above is wall: the turn stays buffered.
        player.set_next_direction(Direction::Up);
        player.move_in(&maze);
        assert_eq!(player.direction, Some(Direction::Right));
        assert_eq!(player.next_direction, Some(Direction::Up));
        assert_eq!(player.pos, Position::new(34, 30));
    }

    #[test]
    fn test_halts_when_everything_blocked() {
        let (mut player, maze) = setup();
        player.direction = Some(Direction::Left);
        player.set_next_direction(Direction::Up);
        player.move_in(&maze);
        assert_eq!(player.direction, None);
        assert_eq!(player.pos, Position::new(30, 30));
    }

    #[test]
    fn test_blocked_same_direction_halts() {
        let (mut player, maze) = setup();
        player.direction = Some(Direction::Left);
        player.set_next_direction(Direction::Left);
        player.move_in(&maze);
        assert_eq!(player.direction, None);
        assert_eq!(player.pos, Position::new(30, 30));
    }

    #[test]
    fn test_no_buffered_turn_halts_in_place() {
        let (mut player, maze) = setup();
        player.move_in(&maze);
        assert_eq!(player.direction, None);
        assert_eq!(player.pos, Position::new(30, 30));
    }

    #[test]
    fn test_mouth_ping_pongs() {
        let (mut player, maze) = setup();
        let angles: Vec<u32> = (0..11)
            .map(|_| {
                player.move_in(&maze);
                player.mouth_angle
            })
            .collect();
        assert_eq!(angles, vec![5, 10, 15, 20, 25, 30, 35, 40, 45, 40, 35]);
    }
}
