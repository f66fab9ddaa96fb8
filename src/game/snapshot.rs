use serde::Serialize;

use crate::game::state::GameState;
use crate::game::types::{CellKind, Direction, EnemyColor, Position};

/// Read-only copy of everything a front-end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub cells: Vec<Vec<CellKind>>,
    pub dots: Vec<Position>,
    pub pellets: Vec<Position>,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub score: u32,
    pub lives: u32,
    pub power_active: bool,
    pub ended: bool,
    pub won: bool,
    pub frame: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub position: Position,
    pub direction: Option<Direction>,
    pub mouth_angle: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnemyView {
    pub position: Position,
    pub color: EnemyColor,
    /// Drawn frightened: the player is powered up.
    pub eatable: bool,
}

impl From<&GameState> for RenderSnapshot {
    fn from(state: &GameState) -> Self {
        RenderSnapshot {
            cells: state.maze.cells().iter().map(|row| row.to_vec()).collect(),
            dots: state.maze.dots().to_vec(),
            pellets: state.maze.pellets().to_vec(),
            player: PlayerView {
                position: state.player.pos,
                direction: state.player.direction,
                mouth_angle: state.player.mouth_angle,
            },
            enemies: state
                .enemies
                .iter()
                .map(|enemy| EnemyView {
                    position: enemy.pos,
                    color: enemy.color,
                    eatable: state.power_active,
                })
                .collect(),
            score: state.score,
            lives: state.lives,
            power_active: state.power_active,
            ended: state.ended,
            won: state.is_won(),
            frame: state.frame,
        }
    }
}
