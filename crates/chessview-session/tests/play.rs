//! End-to-end play through the public session API and the text driver.

use chessview_core::{Board, Color, Piece, Square, SquareSet, destinations};
use chessview_session::{ClickOutcome, Driver, Session, SessionConfig};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).unwrap()
}

// ── Session ───────────────────────────────────────────────────────────────────

#[test]
fn king_pawn_opening_then_no_second_double_step() {
    let mut session = Session::new();

    session.handle_click(sq(6, 4));
    session.handle_click(sq(4, 4));
    assert_eq!(session.board().occupant_at(sq(4, 4)), Some(Piece::WHITE_PAWN));
    assert_eq!(session.board().occupant_at(sq(6, 4)), None);
    assert_eq!(session.current_turn(), Color::Black);

    // Black replies so White is on move again.
    session.handle_click(sq(0, 6));
    session.handle_click(sq(2, 5));
    assert_eq!(session.current_turn(), Color::White);

    session.handle_click(sq(4, 4));
    assert_eq!(
        session.legal_moves_for_selection(),
        SquareSet::EMPTY.with(sq(3, 4))
    );
    let outcome = session.handle_click(sq(2, 4));
    assert!(matches!(outcome, ClickOutcome::Deselected { .. }));
    assert_eq!(session.board().occupant_at(sq(4, 4)), Some(Piece::WHITE_PAWN));
    assert_eq!(session.board().occupant_at(sq(2, 4)), None);
    assert_eq!(session.current_turn(), Color::White);
}

#[test]
fn illegal_target_leaves_board_untouched() {
    let mut session = Session::new();
    let before = *session.board();

    for target in Square::all() {
        session.handle_click(sq(7, 1));
        let legal = session.legal_moves_for_selection();
        if legal.contains(target) || target == sq(7, 1) {
            session.handle_click(sq(7, 1));
            continue;
        }
        let outcome = session.handle_click(target);
        assert!(matches!(outcome, ClickOutcome::Deselected { .. }));
        assert_eq!(*session.board(), before);
        assert_eq!(session.current_selection(), None);
        assert_eq!(session.current_turn(), Color::White);
    }
}

#[test]
fn highlighted_moves_match_generator() {
    let mut session = Session::new();
    let script = [
        (sq(6, 3), sq(4, 3)),
        (sq(1, 4), sq(3, 4)),
        (sq(7, 2), sq(3, 6)),
        (sq(0, 3), sq(3, 6)),
    ];
    for (from, to) in script {
        session.handle_click(from);
        let (piece, origin) = session.current_selection().unwrap();
        assert_eq!(
            session.legal_moves_for_selection(),
            destinations(session.board(), piece, origin)
        );
        assert!(matches!(
            session.handle_click(to),
            ClickOutcome::Moved { .. }
        ));
    }
    // The black queen took the white bishop on g5.
    assert_eq!(session.board().occupant_at(sq(3, 6)), Some(Piece::BLACK_QUEEN));
    assert_eq!(session.board().piece_count(), 31);
    assert_eq!(session.moves_played(), 4);
}

#[test]
fn piece_count_never_increases() {
    let mut session = Session::new();
    let mut count = session.board().piece_count();
    // Click every square twice over; whatever moves happen, pieces only disappear.
    for _ in 0..2 {
        for target in Square::all() {
            session.handle_click(target);
            let now = session.board().piece_count();
            assert!(now <= count);
            count = now;
        }
    }
}

#[test]
fn pinned_rook_may_expose_its_king() {
    let board: Board = "k3r3/8/8/8/8/8/4R3/4K3".parse().unwrap();
    let mut session = Session::with_board(board, Color::White);
    session.handle_click(sq(6, 4));
    assert!(session.legal_moves_for_selection().contains(sq(6, 0)));
    assert!(matches!(
        session.handle_click(sq(6, 0)),
        ClickOutcome::Moved { .. }
    ));
}

// ── Driver ────────────────────────────────────────────────────────────────────

#[test]
fn driver_plays_a_short_game() {
    let mut driver = Driver::new();
    let mut out = Vec::new();
    let script = "\
e2
e4
click 1,4
click 3,4
g1
f3
moves
quit
";
    driver.run(script.as_bytes(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("white pawn e2 to e4"));
    assert!(text.contains("black pawn e7 to e5"));
    assert!(text.contains("white knight g1 to f3"));
    assert_eq!(driver.session().current_turn(), Color::Black);
    assert_eq!(driver.session().moves_played(), 3);
    assert_eq!(
        format!("{}", driver.session().board()),
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R"
    );
}

#[test]
fn driver_new_resets_game() {
    let mut driver = Driver::with_session(Session::new(), SessionConfig::default());
    let mut out = Vec::new();
    driver
        .run("e2\ne4\nnew\n".as_bytes(), &mut out)
        .unwrap();
    assert_eq!(*driver.session().board(), Board::starting_position());
    assert_eq!(driver.session().current_turn(), Color::White);
}
