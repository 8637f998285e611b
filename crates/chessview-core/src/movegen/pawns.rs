//! Pawn move generation.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;
use crate::square_set::SquareSet;

/// Generate pawn pushes and diagonal captures.
pub(super) fn gen_pawn(board: &Board, color: Color, origin: Square) -> SquareSet {
    let mut targets = SquareSet::EMPTY;
    let dir = color.forward();

    // Nothing ahead: a pawn on the far edge has no pushes and no captures.
    let Some(one_step) = origin.offset(dir, 0) else {
        return targets;
    };

    // --- Pushes ---
    if !board.is_occupied(one_step) {
        targets.insert(one_step);

        if origin.row() == color.pawn_row() {
            if let Some(two_step) = one_step.offset(dir, 0) {
                if !board.is_occupied(two_step) {
                    targets.insert(two_step);
                }
            }
        }
    }

    // --- Captures ---
    for d_col in [-1, 1] {
        let Some(target) = origin.offset(dir, d_col) else {
            continue;
        };
        if board
            .occupant_at(target)
            .is_some_and(|occupant| occupant.color() != color)
        {
            targets.insert(target);
        }
    }

    targets
}
