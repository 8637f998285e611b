//! Error types for piece-placement and color parsing.

use crate::color::Color;

/// Errors that occur when parsing a piece-placement string such as
/// `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The placement does not have exactly 8 `/`-separated rows.
    #[error("expected 8 rows in piece placement, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 8 squares.
    #[error("row {row} describes {length} squares, expected 8")]
    BadRowLength {
        /// Zero-based row index (0 = the top row).
        row: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in a row.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// One side has more pieces than a chess set provides.
    #[error("{color} has {found} pieces, at most 16 allowed")]
    TooManyPieces {
        /// The side over the limit.
        color: Color,
        /// Number of pieces of that side.
        found: u32,
    },
}

/// Error returned when a side to move is not `w`, `b`, `white` or `black`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected w, b, white or black, found '{found}'")]
pub struct ParseColorError {
    /// The rejected text.
    pub found: String,
}

#[cfg(test)]
mod tests {
    use super::{ParseColorError, PlacementError};
    use crate::color::Color;

    #[test]
    fn display() {
        let err = PlacementError::WrongRowCount { found: 7 };
        assert_eq!(format!("{err}"), "expected 8 rows in piece placement, found 7");

        let err = PlacementError::BadRowLength { row: 2, length: 9 };
        assert_eq!(format!("{err}"), "row 2 describes 9 squares, expected 8");

        let err = PlacementError::InvalidPieceChar { character: 'x' };
        assert_eq!(format!("{err}"), "invalid piece character: 'x'");

        let err = PlacementError::TooManyPieces {
            color: Color::Black,
            found: 17,
        };
        assert_eq!(format!("{err}"), "black has 17 pieces, at most 16 allowed");

        let err = ParseColorError {
            found: "red".to_string(),
        };
        assert_eq!(format!("{err}"), "expected w, b, white or black, found 'red'");
    }
}
