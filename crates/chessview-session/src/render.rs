//! Text rendering of a session: the grid, highlights and a status line.

use chessview_core::movegen::attacked_by;
use chessview_core::{Board, Piece, Square, SquareSet};

use crate::config::SessionConfig;
use crate::session::Session;

/// Squares that get a marker instead of the plain piece or checker cell.
struct Marks {
    selected: Option<Square>,
    destinations: SquareSet,
    threatened: SquareSet,
}

/// Render the board with the selection and its destinations marked.
///
/// Each square is three characters wide:
/// - ` P ` a piece (uppercase White, lowercase Black)
/// - ` . ` / ` : ` an empty light / dark square
/// - `[P]` the selected piece
/// - ` * ` an empty destination, `(p)` a capture (only with `highlight` on)
/// - ` x ` an empty square, `<P>` a piece, attacked by the side not to move
///   (only with `threats` on)
pub fn render_board(session: &Session, config: &SessionConfig) -> String {
    let board = session.board();
    let marks = Marks {
        selected: session.current_selection().map(|(_, sq)| sq),
        destinations: if config.highlight {
            session.legal_moves_for_selection()
        } else {
            SquareSet::EMPTY
        },
        threatened: if config.threats {
            attacked_by(board, !session.current_turn())
        } else {
            SquareSet::EMPTY
        },
    };
    render_grid(board, &marks, config.coordinates)
}

/// One line describing the side to move and the selection.
pub fn status_line(session: &Session) -> String {
    let turn = session.current_turn();
    match session.current_selection() {
        None => format!("{turn} to move"),
        Some((piece, sq)) => {
            let count = session.legal_moves_for_selection().count();
            let noun = if count == 1 { "move" } else { "moves" };
            format!("{turn} to move, {piece} on {sq} selected ({count} {noun})")
        }
    }
}

/// List squares in row-major order, space separated (`-` when empty).
pub fn square_list(set: SquareSet) -> String {
    if set.is_empty() {
        return "-".to_string();
    }
    set.iter()
        .map(|sq| sq.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_grid(board: &Board, marks: &Marks, coordinates: bool) -> String {
    let mut out = String::new();
    for row in 0u8..8 {
        let mut line = if coordinates {
            format!("{} ", 8 - row)
        } else {
            String::new()
        };
        for col in 0u8..8 {
            let Some(sq) = Square::new(row, col) else {
                continue;
            };
            line.push_str(&cell(board.occupant_at(sq), sq, marks));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    if coordinates {
        let files: String = ('a'..='h').map(|file| format!(" {file} ")).collect();
        out.push_str("  ");
        out.push_str(files.trim_end());
        out.push('\n');
    }
    out
}

fn cell(occupant: Option<Piece>, sq: Square, marks: &Marks) -> String {
    let selected = marks.selected == Some(sq);
    let destination = marks.destinations.contains(sq);
    let threatened = marks.threatened.contains(sq);
    match occupant {
        Some(piece) if selected => format!("[{}]", piece.letter()),
        Some(piece) if destination => format!("({})", piece.letter()),
        Some(piece) if threatened => format!("<{}>", piece.letter()),
        Some(piece) => format!(" {} ", piece.letter()),
        None if destination => " * ".to_string(),
        None if threatened => " x ".to_string(),
        None if sq.is_light() => " . ".to_string(),
        None => " : ".to_string(),
    }
}
