#![cfg(feature = "std")]

//! Top-level game loop: board-size menu, guessing, victory and restart.

use anyhow::Context;
use rand::Rng;

use crate::{
    common::{GameError, GuessOutcome},
    config::{BoardSize, BOARD_SIZES, GUESS_PROMPT, SIZE_PROMPT},
    console::Console,
    coord::{format_coord, parse_coord},
    game::GameSession,
    render::{BoardView, VICTORY_BANNER},
};

/// Options controlling how the driver runs sessions.
#[derive(Debug, Clone, Default)]
pub struct DriverConfig {
    /// Skip the menu and always play on this size.
    pub board_size: Option<BoardSize>,
    /// Reveal ships on every rendered grid.
    pub debug: bool,
    /// Per-ship cap on placement samples; `None` retries forever.
    pub max_attempts: Option<usize>,
    /// Stop after this many won sessions; `None` restarts forever.
    pub max_sessions: Option<usize>,
}

/// Totals reported when the driver stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub sessions_won: usize,
    pub guesses: usize,
}

/// Driver state. `Won` always leads back to `SelectSize`.
#[derive(Debug)]
enum State {
    SelectSize,
    Playing(GameSession),
    Won(GameSession),
}

/// Runs sessions back to back over a [`Console`].
pub struct Driver<C, R> {
    console: C,
    rng: R,
    config: DriverConfig,
}

impl<C: Console, R: Rng> Driver<C, R> {
    pub fn new(console: C, rng: R, config: DriverConfig) -> Self {
        Self {
            console,
            rng,
            config,
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Play until input runs out or `max_sessions` sessions have been won.
    pub fn run(&mut self) -> anyhow::Result<RunSummary> {
        let mut summary = RunSummary::default();
        self.console.write_line("Welcome to Battleship 🚢")?;
        let mut state = State::SelectSize;
        loop {
            state = match state {
                State::SelectSize => {
                    if self
                        .config
                        .max_sessions
                        .is_some_and(|max| summary.sessions_won >= max)
                    {
                        return Ok(summary);
                    }
                    let Some(size) = self.select_size()? else {
                        return Ok(summary);
                    };
                    let session =
                        GameSession::new(size, &mut self.rng, self.config.max_attempts)
                            .map_err(GameError::from)
                            .with_context(|| format!("cannot set up a {} board", size))?;
                    State::Playing(session)
                }
                State::Playing(mut session) => {
                    self.render(&session)?;
                    let Some(outcome) = self.take_turn(&mut session)? else {
                        return Ok(summary);
                    };
                    if let GuessOutcome::HitAndAllSunk(_) = outcome {
                        summary.sessions_won += 1;
                        summary.guesses += session.guesses();
                        State::Won(session)
                    } else {
                        State::Playing(session)
                    }
                }
                State::Won(session) => {
                    self.console
                        .write_line("Congratulations! You have sunk all the ships!")?;
                    self.render(&session)?;
                    self.console.write_line(VICTORY_BANNER)?;
                    State::SelectSize
                }
            };
        }
    }

    fn render(&mut self, session: &GameSession) -> anyhow::Result<()> {
        let view = if self.config.debug {
            BoardView::debug(session.grid())
        } else {
            BoardView::new(session.grid())
        };
        self.console.write_line(&view.to_string())?;
        Ok(())
    }

    /// Ask for a board size until a valid choice is made.
    fn select_size(&mut self) -> anyhow::Result<Option<BoardSize>> {
        if let Some(size) = self.config.board_size {
            return Ok(Some(size));
        }
        let menu = BOARD_SIZES
            .iter()
            .enumerate()
            .map(|(i, size)| format!("[{}] {}", i + 1, size))
            .collect::<Vec<_>>()
            .join(" ");
        loop {
            self.console.write_line(&menu)?;
            let Some(line) = self.console.read_line(SIZE_PROMPT)? else {
                return Ok(None);
            };
            let choice = line
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(BoardSize::from_menu_index);
            match choice {
                Some(size) => return Ok(Some(size)),
                None => self.console.write_line("Invalid choice, try again.")?,
            }
        }
    }

    /// Collect one valid guess and resolve it. `None` when input is exhausted.
    fn take_turn(&mut self, session: &mut GameSession) -> anyhow::Result<Option<GuessOutcome>> {
        let side = session.grid().side();
        let (row, col) = loop {
            let Some(line) = self.console.read_line(GUESS_PROMPT)? else {
                return Ok(None);
            };
            match parse_coord(&line, side) {
                Ok(coord) => break coord,
                Err(e) => {
                    log::debug!("rejected guess {:?}: {}", line, e);
                    self.console
                        .write_line(&format!("Invalid guess, try again. ({})", e))?;
                }
            }
        };
        let outcome = session
            .resolve_guess(row, col)
            .map_err(GameError::from)?;
        log::debug!("{} -> {:?}", format_coord(row, col), outcome);
        let message = match outcome {
            GuessOutcome::AlreadyGuessed => "You already guessed that spot!".to_string(),
            GuessOutcome::Miss => "Miss!".to_string(),
            GuessOutcome::Hit(category) | GuessOutcome::HitAndAllSunk(category) => {
                format!("You hit a {} ship!", category)
            }
        };
        self.console.write_line(&message)?;
        Ok(Some(outcome))
    }
}
