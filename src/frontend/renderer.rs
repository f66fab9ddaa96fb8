use std::io::{self, Stdout, Write, stdout};

use actix::prelude::*;
use crossterm::{
    QueueableCommand, cursor, execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use log::{debug, warn};

use crate::config::render::RenderMode;
use crate::game::snapshot::RenderSnapshot;
use crate::game::systems::{Glyph, banner, compose, status_line};
use crate::game::types::EnemyColor;
use crate::session::messages::StateUpdate;

/// Puts the terminal in raw mode for the lifetime of the value.
///
/// Text mode also switches to the alternate screen and hides the cursor.
pub struct TerminalGuard {
    mode: RenderMode,
}

impl TerminalGuard {
    pub fn enter(mode: RenderMode) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if mode == RenderMode::Text {
            execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        }
        Ok(Self { mode })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.mode == RenderMode::Text {
            let _ = execute!(stdout(), ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
    }
}

fn glyph_color(glyph: Glyph) -> Color {
    match glyph {
        Glyph::Wall => Color::Blue,
        Glyph::Empty | Glyph::Dot => Color::White,
        Glyph::Pellet => Color::Yellow,
        Glyph::Player { .. } => Color::Yellow,
        Glyph::Enemy(EnemyColor::Red) => Color::Red,
        Glyph::Enemy(EnemyColor::Cyan) => Color::Cyan,
        Glyph::Enemy(EnemyColor::Magenta) => Color::Magenta,
        Glyph::Frightened => Color::DarkBlue,
    }
}

/// Subscriber that draws every `StateUpdate` it receives.
pub struct Renderer {
    mode: RenderMode,
    out: Stdout,
}

impl Renderer {
    pub fn new(mode: RenderMode) -> Self {
        Self { mode, out: stdout() }
    }

    fn draw(&mut self, snapshot: &RenderSnapshot) -> io::Result<()> {
        match self.mode {
            RenderMode::Text => self.draw_text(snapshot),
            RenderMode::Json => self.draw_json(snapshot),
        }
    }

    fn draw_text(&mut self, snapshot: &RenderSnapshot) -> io::Result<()> {
        let grid = compose(snapshot);
        let out = &mut self.out;

        out.queue(cursor::MoveTo(0, 0))?;
        out.queue(terminal::Clear(ClearType::All))?;
        for (y, row) in grid.iter().enumerate() {
            out.queue(cursor::MoveTo(0, y as u16))?;
            for glyph in row {
                out.queue(SetForegroundColor(glyph_color(*glyph)))?;
                out.queue(Print(glyph.text()))?;
            }
        }

        let mut line = grid.len() as u16 + 1;
        out.queue(cursor::MoveTo(0, line))?;
        out.queue(SetForegroundColor(Color::White))?;
        out.queue(Print(status_line(snapshot)))?;

        if let Some(message) = banner(snapshot) {
            line += 2;
            let color = if snapshot.won { Color::Green } else { Color::Red };
            out.queue(cursor::MoveTo(0, line))?;
            out.queue(SetForegroundColor(color))?;
            out.queue(Print(message))?;
        }

        out.queue(ResetColor)?;
        out.flush()
    }

    fn draw_json(&mut self, snapshot: &RenderSnapshot) -> io::Result<()> {
        match serde_json::to_string(snapshot) {
            Ok(json) => {
                writeln!(self.out, "{}", json)?;
                self.out.flush()
            }
            Err(e) => {
                warn!("[Renderer] Failed to serialize frame {}: {}", snapshot.frame, e);
                Ok(())
            }
        }
    }
}

impl Actor for Renderer {
    type Context = Context<Self>;

    fn started(&mut self, _: &mut Self::Context) {
        debug!("[Renderer] Started in {:?} mode", self.mode);
    }
}

impl Handler<StateUpdate> for Renderer {
    type Result = ();

    fn handle(&mut self, msg: StateUpdate, _: &mut Context<Self>) -> Self::Result {
        if let Err(e) = self.draw(&msg.snapshot) {
            warn!("[Renderer] Failed to draw frame {}: {}", msg.snapshot.frame, e);
        }
    }
}
