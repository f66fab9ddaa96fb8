//! Main entry point for the maze-chase game.
//!
//! Starts the session actor, subscribes the terminal renderer to it and reads
//! keys until the player quits.

use std::io;

use actix::Actor;
use log::info;

use config::render::RenderMode;
use config::timing::SessionTiming;
use frontend::{Renderer, TerminalGuard, read_input};
use game::state::GameState;
use session::GameSession;
use session::messages::Subscribe;

pub mod config;
mod frontend;
mod game;
mod session;

#[actix::main]
async fn main() -> io::Result<()> {
    // Initialize logger from environment variable.
    env_logger::init();

    let timing = SessionTiming::from_env();
    let mode = RenderMode::from_env();
    info!("[Main] Starting with {:?} rendering, {:?}", mode, timing);

    let _terminal = TerminalGuard::enter(mode)?;

    let session = GameSession::new(GameState::new(), timing).start();
    let renderer = Renderer::new(mode).start();
    session.do_send(Subscribe(renderer.recipient()));

    // The key reader blocks, keep it off the actor threads.
    let input_session = session.clone();
    tokio::task::spawn_blocking(move || read_input(input_session))
        .await
        .map_err(io::Error::other)??;

    info!("[Main] Bye");
    Ok(())
}
