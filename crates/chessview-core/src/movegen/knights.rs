//! Knight move generation.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;
use crate::square_set::SquareSet;

use super::gen_leaper;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Generate knight jumps onto empty or enemy squares.
pub(super) fn gen_knight(board: &Board, color: Color, origin: Square) -> SquareSet {
    gen_leaper(board, color, origin, &KNIGHT_OFFSETS)
}

#[cfg(test)]
mod tests {
    use super::gen_knight;
    use crate::board::Board;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::square::Square;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn center_knight_has_eight() {
        assert_eq!(gen_knight(&Board::empty(), Color::White, sq(3, 3)).count(), 8);
    }

    #[test]
    fn jumps_over_pieces() {
        let board = Board::starting_position();
        let moves = gen_knight(&board, Color::White, sq(7, 1));
        assert_eq!(moves.iter().collect::<Vec<_>>(), vec![sq(5, 0), sq(5, 2)]);
    }

    #[test]
    fn own_pieces_block_landing() {
        let mut board = Board::empty();
        board.put(sq(2, 1), Piece::BLACK_PAWN);
        board.put(sq(1, 2), Piece::WHITE_PAWN);
        let black = gen_knight(&board, Color::Black, sq(0, 0));
        assert_eq!(black.iter().collect::<Vec<_>>(), vec![sq(1, 2)]);
    }
}
