use iai::black_box;
use playbook::{fen::Setup, game::Config, position, rules, Board, Color, Game, Square};

fn from_fen(fen: &str) -> Board {
    Board::from_board_fen(fen.as_bytes()).expect("valid fen")
}

fn bench_is_check() -> bool {
    let board = from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR");
    position::is_check(black_box(&board), Color::Black)
}

fn bench_checkmate() -> bool {
    let mut board = from_fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR");
    let mate = position::is_checkmate(black_box(&mut board), Color::Black);
    assert!(mate);
    mate
}

fn bench_escape_search() -> bool {
    // Only the knight can help, by blocking.
    let mut board = from_fen("7k/8/8/8/8/2N5/3PPP2/q3K3");
    position::is_checkmate(black_box(&mut board), Color::White)
}

fn bench_validate_all() -> usize {
    let board = Board::default();
    board
        .iter()
        .map(|(id, _, _)| {
            Square::ALL
                .into_iter()
                .filter(|&to| rules::is_valid_move(black_box(&board), id, to))
                .count()
        })
        .sum()
}

fn bench_play_clicks() -> Game {
    let clicks = [
        "e2", "e4", "e7", "e5", "f1", "c4", "b8", "c6", "d1", "h5", "g8", "f6", "h5", "f7",
    ];

    let mut game = Game::new(Config {
        setup: black_box(Setup::default()),
    });
    for click in black_box(clicks) {
        let square: Square = click.parse().expect("valid square");
        game.click(square, &mut (), &mut ());
    }
    assert!(game.is_over());
    game
}

iai::main!(
    bench_is_check,
    bench_checkmate,
    bench_escape_search,
    bench_validate_all,
    bench_play_clicks,
);
