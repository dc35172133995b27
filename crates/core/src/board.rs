//! Board module - a growable stack of rows
//!
//! Rows are kept newest-first: index 0 is the top of the stack and
//! `height() - 1` the bottom. The board only grows by prepending empty rows
//! during a placement and only shrinks by removing full rows.
//!
//! Placement is a discrete gravity drop. The piece's bottom row starts just
//! above the stack and moves down one row at a time while every piece row
//! still fits; it settles at the last index that fit. Piece rows that end up
//! above the stack fit vacuously, which is what makes the board grow.

use std::collections::VecDeque;
use std::fmt;

use arrayvec::ArrayVec;

use crate::types::MAX_PIECE_SIZE;
use crate::{Piece, Row};

/// The game board - fixed width, unbounded height
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: usize,
    /// Rows, top first
    rows: VecDeque<Row>,
    /// Rows removed over the board's lifetime
    cleared: usize,
    /// Highest row count ever reached after clearing
    maximum_height: usize,
}

impl Board {
    /// Create an empty board
    ///
    /// # Panics
    ///
    /// Panics if `width` is 0 or wider than 64 columns.
    pub fn new(width: usize) -> Self {
        assert!(
            (1..=64).contains(&width),
            "board width {width} must be within 1..=64"
        );
        Self {
            width,
            rows: VecDeque::new(),
            cleared: 0,
            maximum_height: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows currently in the stack
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn cleared(&self) -> usize {
        self.cleared
    }

    pub fn maximum_height(&self) -> usize {
        self.maximum_height
    }

    /// Rows from the top of the stack down
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Drop `piece` at `left_offset` and clear any rows it completes.
    ///
    /// Returns the number of rows cleared by this placement. `left_offset`
    /// must lie within `0..=width - piece.width()`; see
    /// `Environment::possible_left_offsets_for`.
    pub fn place(&mut self, piece: &Piece, left_offset: usize) -> usize {
        debug_assert!(left_offset + piece.width() <= self.width);

        let mut bottom: isize = -1;
        while bottom + 1 < self.height() as isize && self.fits(piece, left_offset, bottom + 1) {
            bottom += 1;
        }

        let top = bottom - (piece.height() as isize - 1);
        let top = if top < 0 {
            for _ in 0..top.unsigned_abs() {
                self.rows.push_front(Row::new(self.width));
            }
            0
        } else {
            top as usize
        };

        for piece_row in 0..piece.height() {
            self.rows[top + piece_row].place(piece, piece_row, left_offset);
        }

        let cleared = self.clear_full_rows();
        if !cleared.is_empty() {
            tracing::trace!(rows = ?cleared, total = self.cleared, "cleared full rows");
        }
        self.maximum_height = self.maximum_height.max(self.height());
        cleared.len()
    }

    /// Remove every full row, keeping the others in order.
    ///
    /// Returns the removed indices, top first. Only rows touched by one
    /// placement can fill up, so there are never more than `MAX_PIECE_SIZE`.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, MAX_PIECE_SIZE> {
        let cleared: ArrayVec<usize, MAX_PIECE_SIZE> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.full())
            .map(|(index, _)| index)
            .take(MAX_PIECE_SIZE)
            .collect();
        if !cleared.is_empty() {
            self.rows.retain(|row| !row.full());
            self.cleared += cleared.len();
        }
        cleared
    }

    /// Index of the first occupied cell in `column` scanning down from the
    /// top, or `height()` when the column is empty.
    pub fn depth_for_column(&self, column: usize) -> usize {
        self.rows
            .iter()
            .position(|row| row.is_occupied(column))
            .unwrap_or(self.height())
    }

    /// Empty cells that have an occupied cell somewhere above them
    pub fn holes(&self) -> usize {
        (0..self.width)
            .map(|column| {
                let depth = self.depth_for_column(column);
                self.rows
                    .iter()
                    .skip(depth)
                    .filter(|row| !row.is_occupied(column))
                    .count()
            })
            .sum()
    }

    /// Framed text picture of the stack, top row first
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn fits(&self, piece: &Piece, left_offset: usize, bottom: isize) -> bool {
        let last = piece.height() - 1;
        (0..piece.height()).all(|piece_row| {
            let index = bottom - (last - piece_row) as isize;
            index < 0 || self.rows[index as usize].can_place(piece, piece_row, left_offset)
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = format!("+{}+", "-".repeat(self.width));
        writeln!(f, "{border}")?;
        for row in &self.rows {
            writeln!(f, "|{}|", row.render())?;
        }
        write!(f, "{border}")
    }
}
