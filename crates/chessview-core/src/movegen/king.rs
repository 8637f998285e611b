//! King move generation. No castling.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;
use crate::square_set::SquareSet;

use super::gen_leaper;

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Generate one-square king steps onto empty or enemy squares.
///
/// Destinations attacked by the opponent are included.
pub(super) fn gen_king(board: &Board, color: Color, origin: Square) -> SquareSet {
    gen_leaper(board, color, origin, &KING_OFFSETS)
}
