//! Errors raised while reading driver commands.

use chessview_core::{ParseColorError, PlacementError};

use crate::config::SessionOption;

/// Errors that can occur when parsing or executing a text command.
///
/// None of these reach the [`Session`](crate::Session): a rejected command
/// leaves the game untouched.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A square argument is neither algebraic (`e2`) nor an on-board `row,col` pair.
    #[error("invalid square: {input}")]
    InvalidSquare {
        /// The text that failed to parse.
        input: String,
    },

    /// A command was given without its required argument.
    #[error("missing argument for {command}")]
    MissingArgument {
        /// The command keyword.
        command: &'static str,
    },

    /// `set` named an option that does not exist.
    #[error("unknown option: {name} (options: {})", SessionOption::NAMES.join(", "))]
    UnknownOption {
        /// The option name as typed.
        name: String,
    },

    /// `set` was given a value the option cannot take.
    #[error("invalid value for {option}: {value}")]
    InvalidOptionValue {
        /// The option name.
        option: String,
        /// The rejected value.
        value: String,
    },

    /// `load` was given a malformed piece placement.
    #[error("invalid placement: {source}")]
    InvalidPlacement {
        /// The underlying placement error.
        #[from]
        source: PlacementError,
    },

    /// `load` was given a side to move other than `w` or `b`.
    #[error("invalid side to move: {source}")]
    InvalidColor {
        /// The underlying color parse error.
        #[from]
        source: ParseColorError,
    },

    /// Reading commands or writing output failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use chessview_core::{Color, PlacementError};

    use super::SessionError;

    #[test]
    fn display() {
        let err = SessionError::InvalidSquare {
            input: "z9".to_string(),
        };
        assert_eq!(format!("{err}"), "invalid square: z9");

        let err = SessionError::MissingArgument { command: "click" };
        assert_eq!(format!("{err}"), "missing argument for click");
    }

    #[test]
    fn unknown_option_lists_known_names() {
        let err = SessionError::UnknownOption {
            name: "volume".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "unknown option: volume (options: highlight, coordinates, autoshow, threats)"
        );
    }

    #[test]
    fn wraps_color_error() {
        let err: SessionError = "x".parse::<Color>().unwrap_err().into();
        assert!(matches!(err, SessionError::InvalidColor { .. }));
        assert_eq!(
            format!("{err}"),
            "invalid side to move: expected w, b, white or black, found 'x'"
        );
    }

    #[test]
    fn wraps_placement_error() {
        let err: SessionError = PlacementError::WrongRowCount { found: 2 }.into();
        assert!(matches!(err, SessionError::InvalidPlacement { .. }));
        assert_eq!(
            format!("{err}"),
            "invalid placement: expected 8 rows in piece placement, found 2"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
