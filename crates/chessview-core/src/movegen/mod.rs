//! Pseudo-legal move generation.
//!
//! Destinations respect blocking pieces and capture rules but not king
//! safety: a move that leaves the mover's king attacked is still generated.
//! Castling, en passant and promotion are not modeled.

mod king;
mod knights;
mod pawns;
mod sliders;

use tracing::trace;

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_set::SquareSet;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::gen_slider;

/// Return the squares `piece` standing on `origin` may move to.
///
/// `origin` does not have to hold `piece`; the occupant of `origin` is never
/// consulted. The result is empty when the piece has nowhere to go.
pub fn destinations(board: &Board, piece: Piece, origin: Square) -> SquareSet {
    let targets = match piece.kind() {
        PieceKind::Pawn => gen_pawn(board, piece.color(), origin),
        PieceKind::Knight => gen_knight(board, piece.color(), origin),
        PieceKind::King => gen_king(board, piece.color(), origin),
        kind @ (PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen) => {
            gen_slider(board, piece.color(), kind, origin)
        }
    };
    trace!(%origin, %piece, count = targets.count(), "generated destinations");
    targets
}

/// Union of the destinations of every piece of `color`.
pub fn attacked_by(board: &Board, color: Color) -> SquareSet {
    let mut attacked = SquareSet::EMPTY;
    for origin in board.side(color) {
        if let Some(piece) = board.occupant_at(origin) {
            attacked |= destinations(board, piece, origin);
        }
    }
    attacked
}

/// Squares holding a piece of `color` with at least one destination.
pub fn movable_pieces(board: &Board, color: Color) -> SquareSet {
    board
        .side(color)
        .filter(|&origin| {
            board
                .occupant_at(origin)
                .is_some_and(|piece| !destinations(board, piece, origin).is_empty())
        })
        .collect()
}

/// Return `true` if a piece of `color` may finish its move on `sq`: the
/// square is empty or holds an opposing piece.
#[inline]
fn can_land(board: &Board, color: Color, sq: Square) -> bool {
    board.occupant_at(sq).is_none_or(|occupant| occupant.color() != color)
}

/// Single-step targets for pieces that jump by fixed offsets (knight, king).
fn gen_leaper(board: &Board, color: Color, origin: Square, offsets: &[(i8, i8)]) -> SquareSet {
    offsets
        .iter()
        .filter_map(|&(d_row, d_col)| origin.offset(d_row, d_col))
        .filter(|&sq| can_land(board, color, sq))
        .collect()
}
