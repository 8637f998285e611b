//! Sliding piece (bishop, rook, queen) move generation.

use crate::board::Board;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Generate slider moves by walking each ray of `kind` from `origin`.
///
/// Non-sliding kinds produce no moves.
pub(super) fn gen_slider(board: &Board, color: Color, kind: PieceKind, origin: Square) -> SquareSet {
    let (orthogonal, diagonal) = match kind {
        PieceKind::Rook => (true, false),
        PieceKind::Bishop => (false, true),
        PieceKind::Queen => (true, true),
        _ => (false, false),
    };

    let mut targets = SquareSet::EMPTY;
    if orthogonal {
        for dir in ORTHOGONAL {
            targets |= walk_ray(board, color, origin, dir);
        }
    }
    if diagonal {
        for dir in DIAGONAL {
            targets |= walk_ray(board, color, origin, dir);
        }
    }
    targets
}

/// Collect squares along one ray up to the first occupied square, which is
/// included only if it holds an enemy piece.
fn walk_ray(board: &Board, color: Color, origin: Square, (d_row, d_col): (i8, i8)) -> SquareSet {
    let mut targets = SquareSet::EMPTY;
    let mut current = origin;
    while let Some(next) = current.offset(d_row, d_col) {
        match board.occupant_at(next) {
            None => targets.insert(next),
            Some(blocker) => {
                if blocker.color() != color {
                    targets.insert(next);
                }
                break;
            }
        }
        current = next;
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::gen_slider;
    use crate::board::Board;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn bishop_in_corner_sees_long_diagonal() {
        let moves = gen_slider(&Board::empty(), Color::White, PieceKind::Bishop, sq(7, 0));
        assert_eq!(moves.count(), 7);
        assert!(moves.iter().all(|s| s.row() + s.col() == 7));
    }

    #[test]
    fn queen_in_center_of_empty_board() {
        let moves = gen_slider(&Board::empty(), Color::Black, PieceKind::Queen, sq(3, 3));
        assert_eq!(moves.count(), 27);
    }

    #[test]
    fn own_piece_blocks_without_capture() {
        let mut board = Board::empty();
        board.put(sq(3, 6), Piece::WHITE_PAWN);
        let moves = gen_slider(&board, Color::White, PieceKind::Rook, sq(3, 3));
        assert!(moves.contains(sq(3, 5)));
        assert!(!moves.contains(sq(3, 6)));
        assert!(!moves.contains(sq(3, 7)));
    }

    #[test]
    fn enemy_piece_is_captured_and_stops_ray() {
        let mut board = Board::empty();
        board.put(sq(1, 3), Piece::BLACK_KNIGHT);
        let moves = gen_slider(&board, Color::White, PieceKind::Rook, sq(3, 3));
        assert!(moves.contains(sq(2, 3)));
        assert!(moves.contains(sq(1, 3)));
        assert!(!moves.contains(sq(0, 3)));
    }

    #[test]
    fn never_passes_first_blocker() {
        let board: Board = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R"
            .parse()
            .unwrap();
        for kind in [PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen] {
            for origin in Square::all() {
                for target in gen_slider(&board, Color::White, kind, origin) {
                    let d_row = (target.row() as i8 - origin.row() as i8).signum();
                    let d_col = (target.col() as i8 - origin.col() as i8).signum();
                    let mut walk = origin.offset(d_row, d_col).unwrap();
                    while walk != target {
                        assert!(
                            !board.is_occupied(walk),
                            "{kind} from {origin:?} jumped over {walk:?}"
                        );
                        walk = walk.offset(d_row, d_col).unwrap();
                    }
                    if let Some(occupant) = board.occupant_at(target) {
                        assert_eq!(occupant.color(), Color::Black);
                    }
                }
            }
        }
    }

    #[test]
    fn surrounded_rook_has_no_moves() {
        let board = Board::starting_position();
        assert!(gen_slider(&board, Color::White, PieceKind::Rook, sq(7, 0)).is_empty());
        assert!(gen_slider(&board, Color::Black, PieceKind::Queen, sq(0, 3)).is_empty());
    }
}
