use std::io;
use std::time::Duration;

use actix::Addr;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::info;

use crate::game::types::Key;
use crate::session::GameSession;
use crate::session::messages::{DirectionKey, Reset};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Key(Key),
    Reset,
    Quit,
}

pub fn map_key(event: KeyEvent) -> Command {
    match event.code {
        KeyCode::Up => Command::Key(Key::Up),
        KeyCode::Down => Command::Key(Key::Down),
        KeyCode::Left => Command::Key(Key::Left),
        KeyCode::Right => Command::Key(Key::Right),
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Reset,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        _ => Command::Key(Key::Other),
    }
}

/// Blocking key loop. Returns when the player quits.
///
/// Run it on a blocking thread; it only talks to the session through its mailbox.
pub fn read_input(session: Addr<GameSession>) -> io::Result<()> {
    loop {
        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match map_key(key) {
            Command::Quit => {
                info!("[Input] Quit requested");
                return Ok(());
            }
            Command::Reset => session.do_send(Reset),
            Command::Key(k) => session.do_send(DirectionKey(k)),
        }
    }
}
