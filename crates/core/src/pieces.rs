//! Pieces module - the standard piece set and piece-stream parsing
//!
//! Seven pieces named `'1'`..`'7'`, each a four-cell shape in a 1- or 2-wide
//! grid. The set is a process-wide constant; the per-rotation frequency table
//! is derived from it lazily on first use and never changes afterwards.
//!
//! | Name | Shape (top row first) | Distinct rotations |
//! |------|-----------------------|--------------------|
//! | `1` | `1 / 1 / 1 / 1` | 2 |
//! | `2` | `11 / 11` | 1 |
//! | `3` | `10 / 11 / 10` | 4 |
//! | `4` | `11 / 10 / 10` | 4 |
//! | `5` | `11 / 01 / 01` | 4 |
//! | `6` | `10 / 11 / 01` | 2 |
//! | `7` | `01 / 11 / 10` | 2 |

use std::sync::LazyLock;

use crate::Piece;

/// The standard piece set in registry order
pub static STANDARD: [Piece; 7] = [
    Piece::from_masks('1', 1, 4, [0b1, 0b1, 0b1, 0b1]),
    Piece::from_masks('2', 2, 2, [0b11, 0b11, 0, 0]),
    Piece::from_masks('3', 2, 3, [0b10, 0b11, 0b10, 0]),
    Piece::from_masks('4', 2, 3, [0b11, 0b10, 0b10, 0]),
    Piece::from_masks('5', 2, 3, [0b11, 0b01, 0b01, 0]),
    Piece::from_masks('6', 2, 3, [0b10, 0b11, 0b01, 0]),
    Piece::from_masks('7', 2, 3, [0b01, 0b11, 0b10, 0]),
];

/// Every distinct rotation of every standard piece with its draw probability
static FREQUENCIES: LazyLock<Vec<(Piece, f64)>> = LazyLock::new(|| {
    let piece_frequency = 1.0 / STANDARD.len() as f64;
    STANDARD
        .iter()
        .flat_map(|piece| {
            let rotations = piece.rotations();
            let share = piece_frequency / rotations.len() as f64;
            rotations.into_iter().map(move |rotation| (rotation, share))
        })
        .collect()
});

/// The standard piece set
pub fn all() -> &'static [Piece] {
    &STANDARD
}

/// Look up a standard piece by its glyph
pub fn by_name(name: char) -> Option<Piece> {
    STANDARD.iter().copied().find(|piece| piece.name() == name)
}

/// Probability of drawing this exact shape when pieces are uniform and each
/// piece's rotations are equally likely. Unknown shapes have frequency 0.
pub fn frequency(piece: &Piece) -> f64 {
    FREQUENCIES
        .iter()
        .find(|(candidate, _)| candidate == piece)
        .map_or(0.0, |&(_, frequency)| frequency)
}

/// Scan `text` for piece glyphs, in order; every other character is skipped.
///
/// # Examples
///
/// ```
/// use trix_core::pieces;
///
/// let stream = pieces::parse_pieces("1 2\n3x7");
/// let names: String = stream.iter().map(|piece| piece.name()).collect();
/// assert_eq!(names, "1237");
/// ```
pub fn parse_pieces(text: &str) -> Vec<Piece> {
    text.chars().filter_map(by_name).collect()
}
