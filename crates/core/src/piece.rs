//! Piece module - immutable block geometry
//!
//! A piece is a small occupancy grid (at most 4x4) stored as one bit mask per
//! row. The leftmost cell of a row is the most significant bit at the piece's
//! width, so a row mask can be shifted straight into a board row.
//!
//! Equality is by shape only: two pieces with different names or rotation
//! counters but the same occupancy compare equal.

use std::fmt;
use std::hash::{Hash, Hasher};

use arrayvec::ArrayVec;

use crate::types::MAX_PIECE_SIZE;
use crate::PieceError;

/// One piece row as cells (0/1), leftmost first
pub type ShapeRow = ArrayVec<u8, MAX_PIECE_SIZE>;

/// Full occupancy grid, top row first
pub type Shape = ArrayVec<ShapeRow, MAX_PIECE_SIZE>;

/// Immutable piece geometry with its render glyph
#[derive(Clone, Copy)]
pub struct Piece {
    name: char,
    width: u8,
    height: u8,
    /// Cumulative 90° rotations applied since the registered shape (0-3)
    rotation: u8,
    /// One mask per row; rows past `height` stay zero
    bit_masks: [u8; MAX_PIECE_SIZE],
}

impl Piece {
    /// Build a piece from a row-major grid of 0/1 cells.
    ///
    /// Rows shorter than the widest row are padded with empty cells on the right.
    ///
    /// # Examples
    ///
    /// ```
    /// use trix_core::Piece;
    ///
    /// let t = Piece::new('1', &[&[0, 1, 0], &[1, 1, 1]]).unwrap();
    /// assert_eq!(t.width(), 3);
    /// assert_eq!(t.height(), 2);
    /// assert_eq!(t.bit_masks(), &[0b010, 0b111]);
    /// ```
    pub fn new(name: char, shape: &[&[u8]]) -> Result<Self, PieceError> {
        let height = shape.len();
        let width = shape.iter().map(|row| row.len()).max().unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(PieceError::EmptyShape);
        }
        if height > MAX_PIECE_SIZE || width > MAX_PIECE_SIZE {
            return Err(PieceError::TooLarge { width, height });
        }

        let mut bit_masks = [0u8; MAX_PIECE_SIZE];
        for (mask, row) in bit_masks.iter_mut().zip(shape) {
            for &cell in row.iter() {
                if cell > 1 {
                    return Err(PieceError::InvalidCell { value: cell });
                }
                *mask = (*mask << 1) | cell;
            }
            *mask <<= width - row.len();
        }
        if bit_masks.iter().all(|&mask| mask == 0) {
            return Err(PieceError::EmptyShape);
        }

        Ok(Self::from_masks(name, width as u8, height as u8, bit_masks))
    }

    /// Build a piece directly from already-validated row masks
    pub(crate) const fn from_masks(
        name: char,
        width: u8,
        height: u8,
        bit_masks: [u8; MAX_PIECE_SIZE],
    ) -> Self {
        Self {
            name,
            width,
            height,
            rotation: 0,
            bit_masks,
        }
    }

    pub fn name(&self) -> char {
        self.name
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    /// Row masks, top row first
    pub fn bit_masks(&self) -> &[u8] {
        &self.bit_masks[..self.height()]
    }

    /// Whether the cell at column `x`, row `y` is occupied
    pub fn cell(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height() && (self.bit_masks[y] >> (self.width() - 1 - x)) & 1 == 1
    }

    /// The occupancy grid as rows of 0/1 cells
    pub fn shape(&self) -> Shape {
        (0..self.height())
            .map(|y| (0..self.width()).map(|x| self.cell(x, y) as u8).collect())
            .collect()
    }

    /// Rotate a quarter turn, returning a new piece.
    ///
    /// The new grid is `old.height()` wide and `old.width()` tall, with
    /// `new[x][h - 1 - y] = old[y][x]`.
    pub fn rotate(&self) -> Self {
        let (w, h) = (self.width(), self.height());
        let mut bit_masks = [0u8; MAX_PIECE_SIZE];
        for y in 0..h {
            for x in 0..w {
                if self.cell(x, y) {
                    // new row `x`, new column `h - 1 - y`, new width `h`
                    bit_masks[x] |= 1 << y;
                }
            }
        }
        Self {
            name: self.name,
            width: self.height,
            height: self.width,
            rotation: (self.rotation + 1) % 4,
            bit_masks,
        }
    }

    /// The piece and its successive rotations with duplicate shapes removed.
    ///
    /// Always contains `self` first; holds 1, 2 or 4 members depending on symmetry.
    pub fn rotations(&self) -> ArrayVec<Piece, 4> {
        let mut rotations = ArrayVec::new();
        let mut current = *self;
        for _ in 0..4 {
            if !rotations.contains(&current) {
                rotations.push(current);
            }
            current = current.rotate();
        }
        rotations
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.bit_masks == other.bit_masks
    }
}

impl Eq for Piece {}

// Must agree with `PartialEq`, so the name stays out of the hash.
impl Hash for Piece {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.hash(state);
        self.height.hash(state);
        self.bit_masks.hash(state);
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Piece")
            .field("name", &self.name)
            .field("rotation", &self.rotation)
            .field("shape", &self.shape())
            .finish()
    }
}

/// Renders the grid with the piece glyph for occupied cells and `.` otherwise
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width() {
                let glyph = if self.cell(x, y) { self.name } else { '.' };
                write!(f, "{glyph}")?;
            }
        }
        Ok(())
    }
}
