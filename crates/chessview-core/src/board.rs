//! The board: one optional piece per square.

use std::fmt;

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

/// An 8×8 grid of squares, each empty or holding one piece.
///
/// The board does not know whose turn it is; turn bookkeeping lives with
/// whoever drives play.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Occupants indexed by [`Square::index()`].
    squares: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
        }
    }

    /// Return the standard starting layout: Black on rows 0-1, White on rows 6-7.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (col, kind) in PieceKind::BACK_RANK.into_iter().enumerate() {
                let col = col as u8;
                if let Some(sq) = Square::new(color.back_row(), col) {
                    board.put(sq, Piece::new(kind, color));
                }
                if let Some(sq) = Square::new(color.pawn_row(), col) {
                    board.put(sq, Piece::new(PieceKind::Pawn, color));
                }
            }
        }
        board
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn occupant_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Iterate over every square with its occupant, in row-major order.
    pub fn all_squares(&self) -> impl Iterator<Item = (Square, Option<Piece>)> + '_ {
        Square::all().map(|sq| (sq, self.squares[sq.index()]))
    }

    /// Return `true` if the given square holds a piece.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// Replace the occupant of a square.
    #[inline]
    pub fn set(&mut self, sq: Square, occupant: Option<Piece>) {
        self.squares[sq.index()] = occupant;
    }

    /// Place a piece, overwriting whatever was there.
    #[inline]
    pub fn put(&mut self, sq: Square, piece: Piece) {
        self.set(sq, Some(piece));
    }

    /// Empty a square, returning its former occupant.
    #[inline]
    pub fn clear(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Move the occupant of `from` onto `to` and empty `from`.
    ///
    /// Returns the piece previously on `to`, which is gone from the board.
    /// Moving from an empty square empties `to`.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.clear(from);
        let captured = self.squares[to.index()];
        self.set(to, moving);
        captured
    }

    /// Squares holding any piece.
    pub fn occupied(&self) -> SquareSet {
        self.all_squares()
            .filter_map(|(sq, occupant)| occupant.map(|_| sq))
            .collect()
    }

    /// Squares holding a piece of the given color.
    pub fn side(&self, color: Color) -> SquareSet {
        self.all_squares()
            .filter_map(|(sq, occupant)| match occupant {
                Some(piece) if piece.color() == color => Some(sq),
                _ => None,
            })
            .collect()
    }

    /// Total number of pieces on the board.
    pub fn piece_count(&self) -> u32 {
        self.squares.iter().filter(|occupant| occupant.is_some()).count() as u32
    }

    /// Number of pieces of the given color.
    pub fn pieces_of(&self, color: Color) -> u32 {
        self.side(color).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}
