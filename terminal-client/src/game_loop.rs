use std::io::{self, Write};

use common::games::SessionRng;
use common::games::puzzle2048::{GameStatus, Puzzle2048GameState};
use common::log;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::{cursor, execute, terminal};

use crate::input::{Action, decode_key};
use crate::render::draw;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionEnd {
    Won,
    Lost,
    Quit,
}

pub trait ActionSource {
    /// Blocks until the player issues a game action.
    fn next_action(&mut self) -> io::Result<Action>;
    /// Blocks until any key is pressed.
    fn wait_for_key(&mut self) -> io::Result<()>;
}

pub struct KeyboardActionSource;

impl ActionSource for KeyboardActionSource {
    fn next_action(&mut self) -> io::Result<Action> {
        loop {
            if let Event::Key(key) = event::read()?
                && let Some(action) = decode_key(&key)
            {
                return Ok(action);
            }
        }
    }

    fn wait_for_key(&mut self) -> io::Result<()> {
        loop {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                return Ok(());
            }
        }
    }
}

/// Raw mode and the alternate screen for as long as the guard lives.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Runs turns until the game is won, lost or the player quits. A finished
/// board stays on screen until a key is pressed.
pub fn play<S, W>(
    state: &mut Puzzle2048GameState,
    rng: &mut SessionRng,
    source: &mut S,
    out: &mut W,
) -> io::Result<SessionEnd>
where
    S: ActionSource,
    W: Write,
{
    loop {
        draw(out, state)?;

        match state.status() {
            GameStatus::Won => {
                source.wait_for_key()?;
                return Ok(SessionEnd::Won);
            }
            GameStatus::Lost => {
                source.wait_for_key()?;
                return Ok(SessionEnd::Lost);
            }
            GameStatus::InProgress => {}
        }

        match source.next_action()? {
            Action::Quit => {
                log!("Player quit after {} moves", state.moves_made());
                return Ok(SessionEnd::Quit);
            }
            Action::Move(direction) => {
                state.apply_move(direction, rng);
            }
        }
    }
}
