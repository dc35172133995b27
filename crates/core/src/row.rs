//! Row module - one horizontal slice of the board
//!
//! Occupancy lives in a single `u64` bit field (column 0 is the most
//! significant of the `width` bits). A parallel tile array remembers which
//! piece covers each cell, purely for rendering; collision logic never reads it.

use crate::Piece;

/// Fixed-width occupancy bit field plus the pieces covering each cell
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    width: usize,
    /// Bit pattern of a completely filled row
    maximum: u64,
    content: u64,
    tiles: Vec<Option<Piece>>,
}

impl Row {
    /// Create an empty row.
    ///
    /// # Panics
    ///
    /// Panics if `width` is 0 or wider than 64 columns.
    pub fn new(width: usize) -> Self {
        assert!(
            (1..=64).contains(&width),
            "row width {width} must be within 1..=64"
        );
        Self {
            width,
            maximum: u64::MAX >> (64 - width),
            content: 0,
            tiles: vec![None; width],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn maximum(&self) -> u64 {
        self.maximum
    }

    pub fn content(&self) -> u64 {
        self.content
    }

    pub fn tiles(&self) -> &[Option<Piece>] {
        &self.tiles
    }

    /// Piece covering `column`, if any
    pub fn tile(&self, column: usize) -> Option<&Piece> {
        self.tiles.get(column).and_then(Option::as_ref)
    }

    pub fn full(&self) -> bool {
        self.content == self.maximum
    }

    pub fn empty(&self) -> bool {
        self.content == 0
    }

    /// Whether the cell at `column` is occupied
    pub fn is_occupied(&self, column: usize) -> bool {
        column < self.width && (self.content >> (self.width - 1 - column)) & 1 == 1
    }

    /// Whether row `piece_row` of `piece` fits at `left_offset` without overlap
    pub fn can_place(&self, piece: &Piece, piece_row: usize, left_offset: usize) -> bool {
        if left_offset + piece.width() > self.width {
            return false;
        }
        let mask = self.aligned_mask(piece, piece_row, left_offset);
        // Disjoint exactly when xor and or agree.
        (mask ^ self.content) == (mask | self.content)
    }

    /// Stamp row `piece_row` of `piece` at `left_offset`.
    ///
    /// Callers check [`Row::can_place`] first; overlapping cells are not re-validated.
    pub fn place(&mut self, piece: &Piece, piece_row: usize, left_offset: usize) {
        self.content ^= self.aligned_mask(piece, piece_row, left_offset);
        for x in 0..piece.width() {
            if piece.cell(x, piece_row) {
                self.tiles[left_offset + x] = Some(*piece);
            }
        }
    }

    /// One character per column: the covering piece's name, or a space
    pub fn render(&self) -> String {
        self.tiles
            .iter()
            .map(|tile| tile.map_or(' ', |piece| piece.name()))
            .collect()
    }

    fn aligned_mask(&self, piece: &Piece, piece_row: usize, left_offset: usize) -> u64 {
        let shift = self.width - left_offset - piece.width();
        (piece.bit_masks()[piece_row] as u64) << shift
    }
}
