//! Piece-placement strings (the first field of a FEN record) for [`Board`].
//!
//! Rows are separated by `/` and listed from row 0 (Black's back rank) to
//! row 7. Digits are runs of empty squares; uppercase letters are White.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::error::PlacementError;
use crate::piece::Piece;
use crate::square::Square;

/// Placement of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

const MAX_PIECES_PER_SIDE: u32 = 16;

impl Board {
    /// Parse a piece-placement string.
    ///
    /// A side with more than 16 pieces is rejected, so a parsed board never
    /// holds more than 32.
    pub fn from_placement(placement: &str) -> Result<Board, PlacementError> {
        let rows: Vec<&str> = placement.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(PlacementError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row, row_str) in rows.iter().enumerate() {
            let mut col: usize = 0;

            for c in row_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(PlacementError::InvalidPieceChar { character: c });
                    }
                    col += digit as usize;
                } else {
                    let piece = Piece::from_letter(c)
                        .ok_or(PlacementError::InvalidPieceChar { character: c })?;
                    let sq = Square::new(row as u8, col as u8).ok_or(
                        PlacementError::BadRowLength {
                            row,
                            length: col + 1,
                        },
                    )?;
                    board.put(sq, piece);
                    col += 1;
                }
            }

            if col != 8 {
                return Err(PlacementError::BadRowLength { row, length: col });
            }
        }

        for color in Color::ALL {
            let found = board.pieces_of(color);
            if found > MAX_PIECES_PER_SIDE {
                return Err(PlacementError::TooManyPieces { color, found });
            }
        }

        Ok(board)
    }
}

impl FromStr for Board {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Board, PlacementError> {
        Board::from_placement(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            let mut empty_run = 0u8;
            for col in 0u8..8 {
                match Square::new(row, col).and_then(|sq| self.occupant_at(sq)) {
                    Some(piece) => {
                        if empty_run > 0 {
                            write!(f, "{empty_run}")?;
                            empty_run = 0;
                        }
                        write!(f, "{}", piece.letter())?;
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                write!(f, "{empty_run}")?;
            }
            if row < 7 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}
