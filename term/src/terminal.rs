use std::io::{self, Stdout, Write};
use std::ops::ControlFlow;

use anyhow::Context;
use boomfield_core::GameSession;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::input::{self, Command};
use crate::render;

/// Raw mode on the alternate screen for as long as it lives.
pub struct TerminalGuard {
    out: Stdout,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        if let Err(err) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        Ok(Self { out })
    }

    pub fn out(&mut self) -> &mut impl Write {
        &mut self.out
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = execute!(self.out, Show, LeaveAlternateScreen) {
            log::error!("Could not leave alternate screen: {}", err);
        }
        if let Err(err) = terminal::disable_raw_mode() {
            log::error!("Could not disable raw mode: {}", err);
        }
    }
}

/// Applies one command. Reveal and flag are dropped once the game is over.
pub fn apply(session: &mut GameSession, command: Command) -> boomfield_core::Result<ControlFlow<()>> {
    match command {
        Command::Quit => return Ok(ControlFlow::Break(())),
        Command::Move { rows, cols } => session.move_selection(rows, cols),
        Command::Reveal | Command::Flag if session.status().is_finished() => {
            log::debug!("Ignoring {:?}, game is {:?}", command, session.status());
        }
        Command::Reveal => {
            let outcome = session.reveal_selected()?;
            log::debug!(
                "Reveal at {} opened {} cells",
                session.selected(),
                outcome.opened().len()
            );
        }
        Command::Flag => {
            if session.flag_selected()?.has_update() {
                log::debug!(
                    "Flag at {} toggled, {} mines left",
                    session.selected(),
                    session.mines_left()
                );
            }
        }
    }
    Ok(ControlFlow::Continue(()))
}

/// Draws and dispatches key presses until the player quits.
pub fn run(session: &mut GameSession) -> anyhow::Result<()> {
    let mut guard = TerminalGuard::enter().context("Could not set up terminal")?;

    loop {
        let (_, rows) = terminal::size().context("Could not read terminal size")?;
        render::draw(guard.out(), session, rows).context("Could not draw board")?;

        // resizes and other events only trigger a redraw
        let Event::Key(key) = event::read().context("Could not read input")? else {
            continue;
        };
        let Some(command) = input::command_for(key) else {
            continue;
        };
        if apply(session, command)?.is_break() {
            log::info!("Quit with game {:?}", session.status());
            return Ok(());
        }
    }
}
