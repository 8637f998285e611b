//! Text command parsing.

use chessview_core::{Board, Color, Square};

use crate::config::SessionOption;
use crate::error::SessionError;

/// A parsed driver command.
#[derive(Debug)]
pub enum Command {
    /// `click <square>` or a bare square: one click on the board.
    Click(Square),
    /// `board` / `show`: print the board.
    Show,
    /// `moves`: list the selected piece's destinations.
    Moves,
    /// `movable`: list the side to move's pieces that have a destination.
    Movable,
    /// `turn`: print the side to move.
    Turn,
    /// `new`: back to the starting position.
    New,
    /// `load <placement> [w|b]`: replace the position.
    Load { board: Board, turn: Color },
    /// `set <option> <value>`: change a display option.
    Set(SessionOption),
    /// `help`: list commands.
    Help,
    /// `quit` / `exit`: leave the loop.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single input line into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, SessionError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0].to_ascii_lowercase().as_str() {
        "click" => parse_click(&tokens[1..]),
        "board" | "show" => Ok(Command::Show),
        "moves" => Ok(Command::Moves),
        "movable" => Ok(Command::Movable),
        "turn" => Ok(Command::Turn),
        "new" => Ok(Command::New),
        "load" => parse_load(&tokens[1..]),
        "set" => parse_set(&tokens[1..]),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ if tokens.len() == 1 && looks_like_square(tokens[0]) => {
            Ok(Command::Click(parse_square(tokens[0])?))
        }
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Return `true` for tokens shaped like a square (`e2`, `i9`, `6,4`, `9,9`),
/// whether or not they name one on the board.
fn looks_like_square(token: &str) -> bool {
    if token.contains(',') {
        return true;
    }
    let mut chars = token.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && !chars.as_str().is_empty()
        && chars.as_str().chars().all(|c| c.is_ascii_digit())
}

/// Parse a square written as algebraic (`e2`) or as `row,col` (`6,4`).
pub fn parse_square(token: &str) -> Result<Square, SessionError> {
    let invalid = || SessionError::InvalidSquare {
        input: token.to_string(),
    };

    if let Some((row, col)) = token.split_once(',') {
        let row: u8 = row.trim().parse().map_err(|_| invalid())?;
        let col: u8 = col.trim().parse().map_err(|_| invalid())?;
        return Square::new(row, col).ok_or_else(invalid);
    }

    Square::from_algebraic(token).ok_or_else(invalid)
}

/// Parse the `click` arguments: one square token, or `row col` as two tokens.
fn parse_click(tokens: &[&str]) -> Result<Command, SessionError> {
    match tokens {
        [] => Err(SessionError::MissingArgument { command: "click" }),
        [token] => Ok(Command::Click(parse_square(token)?)),
        [row, col] => Ok(Command::Click(parse_square(&format!("{row},{col}"))?)),
        _ => Err(SessionError::InvalidSquare {
            input: tokens.join(" "),
        }),
    }
}

/// Parse the `load` arguments.
///
/// Tokens after the side to move (castling, counters of a full FEN record)
/// are ignored.
fn parse_load(tokens: &[&str]) -> Result<Command, SessionError> {
    let placement = tokens
        .first()
        .ok_or(SessionError::MissingArgument { command: "load" })?;
    let board = Board::from_placement(placement)?;
    let turn = match tokens.get(1) {
        None => Color::White,
        Some(token) => token.parse::<Color>()?,
    };
    Ok(Command::Load { board, turn })
}

/// Parse `set <option> <value>`.
fn parse_set(tokens: &[&str]) -> Result<Command, SessionError> {
    let name = tokens
        .first()
        .ok_or(SessionError::MissingArgument { command: "set" })?
        .to_ascii_lowercase();
    let value = tokens
        .get(1)
        .ok_or(SessionError::MissingArgument { command: "set" })?;

    let on = parse_bool(value).ok_or_else(|| SessionError::InvalidOptionValue {
        option: name.clone(),
        value: value.to_string(),
    })?;

    let option = match name.as_str() {
        "highlight" => SessionOption::Highlight(on),
        "coordinates" | "coords" => SessionOption::Coordinates(on),
        "autoshow" => SessionOption::Autoshow(on),
        "threats" => SessionOption::Threats(on),
        _ => return Err(SessionError::UnknownOption { name }),
    };
    Ok(Command::Set(option))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Some(true),
        "off" | "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
