use serde::Serialize;

use crate::config::game::RECOVERY_CELL;
use crate::game::grid::ScoreDelta;
use crate::game::state::GameState;
use crate::game::types::Position;

/// Result of checking the player against every enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContactOutcome {
    Clear,
    /// Powered-up player ate this many enemies.
    Eaten(usize),
    LifeLost,
    GameOver,
}

/// Eat whatever lies under the player and credit the score.
pub fn collect_pickups(game_state: &mut GameState) -> ScoreDelta {
    let delta = game_state.maze.consume(game_state.player.pos);
    game_state.score += delta.points;
    if delta.power_up {
        game_state.start_power_up();
    }
    delta
}

/// Resolve player/enemy overlaps.
///
/// While powered up every touching enemy is sent to the recovery cell.
/// Otherwise the first touching enemy costs a life and no further enemy is checked.
pub fn resolve_contacts(game_state: &mut GameState) -> ContactOutcome {
    let player_box = game_state.player.hitbox();
    let recovery = Position::cell_center(RECOVERY_CELL.0, RECOVERY_CELL.1);
    let mut eaten = 0;

    for index in 0..game_state.enemies.len() {
        if !game_state.enemies[index].contact_box().intersects(&player_box) {
            continue;
        }

        if game_state.power_active {
            game_state.enemies[index].relocate(recovery, &game_state.maze, &mut game_state.rng);
            eaten += 1;
            continue;
        }

        game_state.lives = game_state.lives.saturating_sub(1);
        if game_state.lives == 0 {
            game_state.ended = true;
            return ContactOutcome::GameOver;
        }
        game_state.respawn_all();
        return ContactOutcome::LifeLost;
    }

    if eaten > 0 {
        ContactOutcome::Eaten(eaten)
    } else {
        ContactOutcome::Clear
    }
}
