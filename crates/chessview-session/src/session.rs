//! Selection and turn state machine driven by square clicks.

use tracing::{debug, info};

use chessview_core::{Board, Color, Piece, Square, SquareSet, destinations};

/// What a single click did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece of the side to move was picked up.
    Selected { piece: Piece, square: Square },
    /// The selected piece moved; `captured` is the piece it replaced, if any.
    Moved {
        piece: Piece,
        from: Square,
        to: Square,
        captured: Option<Piece>,
    },
    /// The click was not a destination of the selected piece; the selection was dropped.
    Deselected { piece: Piece, square: Square },
    /// Nothing was selected and the click did not land on a piece of the side to move.
    Ignored,
}

/// Selection state. Destinations are computed once on selection and reused
/// until the selection is consumed.
#[derive(Debug, Clone, Copy)]
enum SelectionState {
    Idle,
    PieceSelected {
        piece: Piece,
        origin: Square,
        legal: SquareSet,
    },
}

/// The board, the side to move and the current selection of one game.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    turn: Color,
    state: SelectionState,
    moves_played: u32,
}

impl Session {
    /// Start a game from the standard position with White to move.
    pub fn new() -> Self {
        Self::with_board(Board::starting_position(), Color::White)
    }

    /// Start from an arbitrary position.
    pub fn with_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            state: SelectionState::Idle,
            moves_played: 0,
        }
    }

    /// Restore the starting position, White to move, nothing selected.
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("session reset to starting position");
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side whose piece may be selected next.
    #[inline]
    pub fn current_turn(&self) -> Color {
        self.turn
    }

    /// The selected piece and the square it was picked up from.
    pub fn current_selection(&self) -> Option<(Piece, Square)> {
        match self.state {
            SelectionState::Idle => None,
            SelectionState::PieceSelected { piece, origin, .. } => Some((piece, origin)),
        }
    }

    /// Destinations of the selected piece; empty when nothing is selected.
    pub fn legal_moves_for_selection(&self) -> SquareSet {
        match self.state {
            SelectionState::Idle => SquareSet::EMPTY,
            SelectionState::PieceSelected { legal, .. } => legal,
        }
    }

    /// Number of moves completed since the session started or was reset.
    #[inline]
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// Apply a click on `target`.
    ///
    /// With nothing selected, a click on a piece of the side to move selects
    /// it and anything else is ignored. With a piece selected, a click on one
    /// of its destinations moves it and passes the turn; any other click,
    /// including one on the selected piece itself, drops the selection.
    pub fn handle_click(&mut self, target: Square) -> ClickOutcome {
        match self.state {
            SelectionState::Idle => self.try_select(target),
            SelectionState::PieceSelected {
                piece,
                origin,
                legal,
            } => {
                self.state = SelectionState::Idle;
                if legal.contains(target) {
                    let captured = self.board.relocate(origin, target);
                    self.turn = self.turn.flip();
                    self.moves_played += 1;
                    info!(
                        %piece,
                        from = %origin,
                        to = %target,
                        captured = ?captured,
                        "move played"
                    );
                    ClickOutcome::Moved {
                        piece,
                        from: origin,
                        to: target,
                        captured,
                    }
                } else {
                    debug!(%piece, %origin, %target, "not a destination, selection dropped");
                    ClickOutcome::Deselected {
                        piece,
                        square: origin,
                    }
                }
            }
        }
    }

    fn try_select(&mut self, target: Square) -> ClickOutcome {
        match self.board.occupant_at(target) {
            Some(piece) if piece.color() == self.turn => {
                let legal = destinations(&self.board, piece, target);
                debug!(%piece, square = %target, moves = legal.count(), "piece selected");
                self.state = SelectionState::PieceSelected {
                    piece,
                    origin: target,
                    legal,
                };
                ClickOutcome::Selected {
                    piece,
                    square: target,
                }
            }
            _ => {
                debug!(square = %target, turn = %self.turn, "click ignored");
                ClickOutcome::Ignored
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
