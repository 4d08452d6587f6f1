use playbook::{
    game::{Config, Transcript},
    position, rules,
    view::{Highlight, Highlights},
    Board, Color, Game, Square,
};

fn click_all(game: &mut Game, squares: &[&str]) -> (Highlights, Vec<String>) {
    let mut view = Highlights::default();
    let mut transcript = Transcript::default();
    for square in squares {
        let square: Square = square.parse().expect("valid square");
        game.click(square, &mut view, &mut transcript);
    }
    (view, transcript.into_lines())
}

#[test]
fn test_rook_on_empty_file() {
    let mut board = Board::empty();
    let rook = board.insert(Color::White.rook(), Square::A1).expect("empty square");
    assert!(rules::is_valid_move(&board, rook, Square::A8));

    board.insert(Color::Black.knight(), Square::A4).expect("empty square");
    assert!(!rules::is_valid_move(&board, rook, Square::A8));
    assert!(rules::is_valid_move(&board, rook, Square::A4));
}

#[test]
fn test_pawn_double_move_on_empty_board() {
    let mut board = Board::empty();
    let pawn = board.insert(Color::White.pawn(), Square::E2).expect("empty square");
    assert!(rules::is_valid_move(&board, pawn, Square::E4));
}

#[test]
fn test_rook_gives_check_on_open_file() {
    let mut board = Board::empty();
    board.insert(Color::White.king(), Square::E1).expect("empty square");
    board.insert(Color::Black.rook(), Square::E8).expect("empty square");
    assert!(position::is_check(&board, Color::White));
    assert!(!position::is_checkmate(&mut board, Color::White));
}

#[test]
fn test_back_rank_checkmate() {
    let mut board = Board::empty();
    board.insert(Color::White.king(), Square::E1).expect("empty square");
    for square in [Square::D2, Square::E2, Square::F2] {
        board.insert(Color::White.pawn(), square).expect("empty square");
    }
    board.insert(Color::Black.queen(), Square::A1).expect("empty square");
    board.insert(Color::Black.king(), Square::H8).expect("empty square");

    assert!(position::is_check(&board, Color::White));
    assert!(position::is_checkmate(&mut board, Color::White));
    assert!(!position::is_checkmate(&mut board, Color::Black));
}

#[test]
fn test_exposing_own_king_leaves_board_unchanged() {
    let setup = "4r2k/8/8/8/8/8/4B3/4K3 w".parse().expect("valid setup");
    let mut game = Game::new(Config { setup });
    let before = game.board().clone();

    let (_, lines) = click_all(&mut game, &["e2", "d3"]);

    assert_eq!(lines, ["White selects Be2", "Illegal move, King in check"]);
    assert_eq!(game.board(), &before);
    assert_eq!(game.board().len(), before.len());
    assert_eq!(game.turn(), Color::White);
}

#[test]
fn test_fools_mate() {
    let mut game = Game::default();
    let (view, lines) = click_all(&mut game, &["f2", "f3", "e7", "e5", "g2", "g4", "d8", "h4"]);

    assert_eq!(
        lines,
        [
            "White selects f2",
            "f3",
            "Black selects e7",
            "e5",
            "White selects g2",
            "g4",
            "Black selects Qd8",
            "Qh4+",
            "Black wins by checkmate.",
        ]
    );
    assert!(game.is_over());
    assert_eq!(game.winner(), Some(Color::Black));
    assert_eq!(view.get(Highlight::Checkmate), Some(Square::E1));
    assert_eq!(view.get(Highlight::Move), Some(Square::H4));
}

#[test]
fn test_scholars_mate() {
    let mut game = Game::default();
    let (view, lines) = click_all(
        &mut game,
        &[
            "e2", "e4", "e7", "e5", "f1", "c4", "b8", "c6", "d1", "h5", "g8", "f6", "h5", "f7",
        ],
    );

    assert_eq!(
        lines,
        [
            "White selects e2",
            "e4",
            "Black selects e7",
            "e5",
            "White selects Bf1",
            "Bc4",
            "Black selects Nb8",
            "Nc6",
            "White selects Qd1",
            "Qh5",
            "Black selects Ng8",
            "Nf6",
            "White selects Qh5",
            "Qxf7+",
            "White wins by checkmate.",
        ]
    );
    assert_eq!(game.winner(), Some(Color::White));
    assert_eq!(view.get(Highlight::Checkmate), Some(Square::E8));
    assert_eq!(game.board().len(), 31);

    // Nothing moves after the end.
    let (_, lines) = click_all(&mut game, &["e8", "f7"]);
    assert!(lines.is_empty());
}

#[test]
fn test_illegal_move_then_retry() {
    let mut game = Game::default();
    let (_, lines) = click_all(&mut game, &["b1", "b3", "b1", "c3", "d7", "d5"]);
    assert_eq!(
        lines,
        [
            "White selects Nb1",
            "Illegal move",
            "White selects Nb1",
            "Nc3",
            "Black selects d7",
            "d5",
        ]
    );
    assert_eq!(game.turn(), Color::White);
    assert_eq!(
        game.board().board_fen(),
        "rnbqkbnr/ppp1pppp/8/3p4/8/2N5/PPPPPPPP/R1BQKBNR"
    );
}
