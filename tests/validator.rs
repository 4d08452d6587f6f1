use playbook::{fen::Setup, position, rules, Square};
use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};

#[serde_as]
#[derive(Deserialize)]
struct Record {
    #[serde_as(as = "DisplayFromStr")]
    setup: Setup,
    #[serde_as(as = "DisplayFromStr")]
    from: Square,
    #[serde_as(as = "DisplayFromStr")]
    to: Square,
    valid: bool,
    legal: bool,
}

#[test]
fn test_moves_reference() {
    let mut reader = csv::Reader::from_path("tests/moves.csv").expect("reader");

    let mut records = 0;

    for (i, record) in reader.deserialize().enumerate() {
        let record: Record = record.expect("record");
        let mut board = record.setup.board;
        let before = board.clone();

        let (valid, legal) = match board.id_at(record.from) {
            Some(id) => (
                rules::is_valid_move(&board, id, record.to),
                position::is_legal(&mut board, id, record.to),
            ),
            None => (false, false),
        };

        assert_eq!(
            (valid, legal),
            (record.valid, record.legal),
            "line {}: {} to {}",
            i + 2,
            record.from,
            record.to
        );
        assert_eq!(board, before, "line {}", i + 2);

        records += 1;
    }

    assert!(records > 0);
}
