//! Board tests - gravity placement, clearing and queries

use trix::core::{Board, Piece};

fn tee() -> Piece {
    Piece::new('1', &[&[0, 1, 0], &[1, 1, 1]]).unwrap()
}

fn ell() -> Piece {
    Piece::new('2', &[&[1, 0], &[1, 0], &[1, 1]]).unwrap()
}

fn bar() -> Piece {
    Piece::new('3', &[&[1, 1, 1, 1]]).unwrap()
}

#[test]
fn test_board_width() {
    assert_eq!(Board::new(11).width(), 11);
    assert_eq!(Board::new(10).width(), 10);
    assert_eq!(Board::new(5).width(), 5);
}

#[test]
#[should_panic]
fn test_board_rejects_zero_width() {
    Board::new(0);
}

#[test]
fn test_board_render() {
    let mut board = Board::new(11);
    assert_eq!(board.render(), "+-----------+\n+-----------+");
    board.place(&bar(), 0);
    assert_eq!(board.render(), "+-----------+\n|3333       |\n+-----------+");
    board.place(&bar(), 1);
    assert_eq!(
        board.render(),
        "+-----------+\n| 3333      |\n|3333       |\n+-----------+"
    );
    assert_eq!(board.to_string(), board.render());
}

#[test]
fn test_clearing_rows_on_placement() {
    let mut board = Board::new(11);
    assert_eq!(board.place(&bar(), 0), 0);
    assert_eq!((board.height(), board.cleared()), (1, 0));
    assert_eq!(board.place(&bar(), 4), 0);
    assert_eq!((board.height(), board.cleared()), (1, 0));
    assert_eq!(board.place(&tee(), 8), 1);
    assert_eq!((board.height(), board.cleared()), (1, 1));
}

#[test]
fn test_clearing_multiple_rows() {
    let mut board = Board::new(11);
    let upright = bar().rotate();
    for i in 0..5 {
        assert_eq!(board.height(), i);
        board.place(&bar(), 0);
        board.place(&bar(), 4);
        assert_eq!(board.height(), i + 1);
        assert_eq!(board.cleared(), 0);
    }
    for column in 8..11 {
        assert_eq!(board.height(), 5);
        assert_eq!(board.cleared(), 0);
        board.place(&upright, column);
    }
    assert_eq!(board.height(), 1);
    assert_eq!(board.cleared(), 4);
    assert_eq!(board.maximum_height(), 5);
}

#[test]
fn test_clearing_keeps_partial_rows() {
    let mut board = Board::new(11);
    let upright = bar().rotate();
    board.place(&bar(), 2);
    for i in 0..5 {
        assert_eq!(board.height(), i + 1);
        board.place(&bar(), 0);
        board.place(&bar(), 4);
        assert_eq!(board.height(), i + 2);
        assert_eq!(board.cleared(), 0);
    }
    for column in 8..11 {
        assert_eq!(board.height(), 6);
        board.place(&upright, column);
    }
    assert_eq!(board.height(), 3);
    assert_eq!(board.cleared(), 3);
}

#[test]
fn test_placing_on_full_below() {
    let mut board = Board::new(11);
    board.place(&bar(), 0);
    board.place(&bar(), 4);
    assert_eq!(board.height(), 1);
    board.place(&tee(), 0);
    assert_eq!(board.height(), 3);
}

#[test]
fn test_depth_for_column() {
    let mut board = Board::new(5);
    board.place(&bar(), 0);
    board.place(&ell(), 0);
    let depths: Vec<usize> = (0..5).map(|column| board.depth_for_column(column)).collect();
    assert_eq!(depths, vec![0, 2, 3, 3, 4]);
}

#[test]
fn test_placing_on_top_of_each_other() {
    let mut board = Board::new(11);
    let expected = [(bar(), 0, 1), (bar(), 0, 2), (bar(), 4, 2), (bar(), 2, 3), (tee(), 0, 5), (bar(), 0, 6)];
    for (piece, left_offset, height) in expected {
        board.place(&piece, left_offset);
        assert_eq!(board.height(), height, "{} at {left_offset}", piece.name());
    }
}

#[test]
fn test_copy_is_independent() {
    let mut board = Board::new(11);
    board.place(&bar(), 0);
    let original = board.render();
    let copy = board.clone();
    assert_eq!(copy.render(), original);
    assert_eq!(copy, board);

    board.place(&bar(), 4);
    board.place(&bar(), 0);
    assert_eq!(copy.render(), original);
    assert_ne!(board.render(), original);
    assert_ne!(board.height(), copy.height());
    assert_ne!(board.maximum_height(), copy.maximum_height());
    assert_eq!(board.width(), copy.width());
}

#[test]
fn test_tiles_follow_occupancy() {
    let mut board = Board::new(6);
    board.place(&tee(), 1);
    for row in board.rows() {
        for column in 0..row.width() {
            assert_eq!(row.is_occupied(column), row.tile(column).is_some());
        }
    }
    assert_eq!(board.row(0).and_then(|row| row.tile(2)).map(Piece::name), Some('1'));
}
