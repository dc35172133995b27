//! Property tests for piece geometry and board placement
//!
//! Invariants covered:
//! - four quarter turns give back the original shape and counter
//! - `rotations()` holds 1, 2 or 4 members, self first, each a transpose of self
//! - placements never leave a full row behind and keep tiles in step with occupancy

use proptest::prelude::*;
use trix::core::{pieces, Board, Piece};

fn arbitrary_piece() -> impl Strategy<Value = Piece> {
    (1usize..=4, 1usize..=4, prop::collection::vec(0u8..=1, 16)).prop_filter_map(
        "shape needs at least one cell",
        |(width, height, cells)| {
            let rows: Vec<&[u8]> = cells.chunks(4).take(height).map(|row| &row[..width]).collect();
            Piece::new('x', &rows).ok()
        },
    )
}

proptest! {
    #[test]
    fn test_four_rotations_are_the_identity(piece in arbitrary_piece()) {
        let turned = piece.rotate().rotate().rotate().rotate();
        prop_assert_eq!(turned.shape(), piece.shape());
        prop_assert_eq!(turned.rotation(), piece.rotation());
        prop_assert_eq!(turned, piece);
    }

    #[test]
    fn test_rotations_are_distinct_transposes(piece in arbitrary_piece()) {
        let rotations = piece.rotations();
        prop_assert!(matches!(rotations.len(), 1 | 2 | 4));
        prop_assert_eq!(rotations[0], piece);
        for (i, rotation) in rotations.iter().enumerate() {
            let dims = (rotation.width(), rotation.height());
            prop_assert!(dims == (piece.width(), piece.height()) || dims == (piece.height(), piece.width()));
            prop_assert!(!rotations[..i].contains(rotation));
        }
    }

    #[test]
    fn test_placements_keep_the_board_consistent(
        drops in prop::collection::vec((0usize..7, 0usize..4, 0usize..16), 1..40),
        width in 4usize..12,
    ) {
        let mut board = Board::new(width);
        let mut stacked = 0;
        for (index, turns, offset) in drops {
            let mut piece = pieces::all()[index];
            for _ in 0..turns {
                piece = piece.rotate();
            }
            let left_offset = offset % (width - piece.width() + 1);
            let before = board.cleared();
            let cleared = board.place(&piece, left_offset);
            stacked += piece.height();

            prop_assert_eq!(board.cleared(), before + cleared);
            prop_assert!(board.height() <= stacked);
            prop_assert!(board.maximum_height() >= board.height());
            for row in board.rows() {
                prop_assert!(!row.full());
                for column in 0..width {
                    prop_assert_eq!(row.is_occupied(column), row.tile(column).is_some());
                }
            }
        }
    }
}
