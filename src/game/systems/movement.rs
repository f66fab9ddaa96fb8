//! Movement system.
//!
//! Advances the player and every enemy by one tick.

use crate::game::state::GameState;

/// Move the player first, then each enemy in slot order.
pub fn move_entities(game_state: &mut GameState) {
    game_state.player.move_in(&game_state.maze);

    for enemy in &mut game_state.enemies {
        enemy.step(&game_state.maze, &mut game_state.rng);
    }
}
