//! Line-oriented driver: reads commands, applies them to a [`Session`], prints the board.
//!
//! One line is fully processed before the next is read.

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use tracing::{debug, info, warn};

use chessview_core::Square;
use chessview_core::movegen::movable_pieces;

use crate::command::{Command, parse_command};
use crate::config::{SessionConfig, SessionOption};
use crate::error::SessionError;
use crate::render::{render_board, square_list, status_line};
use crate::session::{ClickOutcome, Session};

const HELP: &str = "\
commands:
  click <sq>              click a square (e2 or row,col); a bare square also works
  board | show            print the board
  moves                   list destinations of the selected piece
  movable                 list pieces of the side to move that can move
  turn                    print the side to move
  new                     start over from the initial position
  load <placement> [w|b]  load a piece placement
  set <option> <on|off>   options: highlight, coordinates, autoshow, threats
  help                    this text
  quit | exit             leave";

/// Owns the session and display options for one run of the text front end.
pub struct Driver {
    session: Session,
    config: SessionConfig,
}

impl Driver {
    /// Create a driver over a fresh game with default options.
    pub fn new() -> Self {
        Self::with_session(Session::new(), SessionConfig::default())
    }

    pub fn with_session(session: Session, config: SessionConfig) -> Self {
        Self { session, config }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Rejected commands are reported on `output` and the loop continues;
    /// only I/O failures end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<(), SessionError> {
        self.show(output)?;

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed) {
                Ok(cmd) => {
                    if self.execute(cmd, output)?.is_break() {
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "command rejected");
                    writeln!(output, "error: {e}")?;
                }
            }
            output.flush()?;
        }

        info!(moves = self.session.moves_played(), "chessview shutting down");
        Ok(())
    }

    /// Apply one command. Returns `Break` when the loop should stop.
    pub fn execute<W: Write>(&mut self, cmd: Command, output: &mut W) -> Result<ControlFlow<()>, SessionError> {
        match cmd {
            Command::Click(sq) => self.handle_click(sq, output)?,
            Command::Show => self.show(output)?,
            Command::Moves => {
                writeln!(output, "{}", square_list(self.session.legal_moves_for_selection()))?;
            }
            Command::Movable => {
                let movable = movable_pieces(self.session.board(), self.session.current_turn());
                writeln!(output, "{}", square_list(movable))?;
            }
            Command::Turn => writeln!(output, "{}", self.session.current_turn())?,
            Command::New => {
                self.session.reset();
                self.show(output)?;
            }
            Command::Load { board, turn } => {
                self.session = Session::with_board(board, turn);
                info!(placement = %board, %turn, "position loaded");
                self.show(output)?;
            }
            Command::Set(option) => self.handle_set(option),
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => return Ok(ControlFlow::Break(())),
            Command::Unknown(word) => {
                if !word.is_empty() {
                    debug!(%word, "unknown command ignored");
                }
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn handle_click<W: Write>(&mut self, sq: Square, output: &mut W) -> Result<(), SessionError> {
        match self.session.handle_click(sq) {
            ClickOutcome::Moved {
                piece,
                from,
                to,
                captured,
            } => match captured {
                Some(victim) => writeln!(output, "{piece} {from} takes {victim} on {to}")?,
                None => writeln!(output, "{piece} {from} to {to}")?,
            },
            ClickOutcome::Selected { .. } | ClickOutcome::Deselected { .. } | ClickOutcome::Ignored => {}
        }
        if self.config.autoshow {
            self.show(output)?;
        }
        Ok(())
    }

    fn handle_set(&mut self, option: SessionOption) {
        debug!(?option, "option changed");
        self.config.apply(option);
    }

    fn show<W: Write>(&self, output: &mut W) -> Result<(), SessionError> {
        write!(output, "{}", render_board(&self.session, &self.config))?;
        writeln!(output, "{}", status_line(&self.session))?;
        Ok(())
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}
