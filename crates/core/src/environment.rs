//! Environment module - the mutable game state
//!
//! An environment owns a board, a bounded buffer of held pieces, the pending
//! piece stream and the history of committed actions. Speculative play never
//! touches it directly: [`Environment::fork`] copies first and applies the
//! action to the copy.
//!
//! The piece stream itself is immutable and shared between forks; each fork
//! only carries its own cursor into it.

use std::ops::Range;
use std::sync::Arc;

use crate::types::Configuration;
use crate::{Action, Board, EnvironmentError, Piece};

/// What the agent sees before choosing: the next piece and everything pending
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percept<'a> {
    /// Front of the pending queue
    pub piece: Piece,
    /// The whole pending queue, front first (includes `piece`)
    pub pieces: &'a [Piece],
}

/// Complete game state: board, buffer, pending items and history
#[derive(Debug, Clone)]
pub struct Environment {
    configuration: Arc<Configuration>,
    board: Board,
    buffer: Vec<Piece>,
    items: Arc<[Piece]>,
    /// Index of the next pending item in `items`
    cursor: usize,
    history: Vec<Action>,
}

impl Environment {
    /// Create an environment with an empty board and buffer.
    ///
    /// # Panics
    ///
    /// Panics if the configured width is outside `1..=64`; run
    /// [`Configuration::validate`] first.
    pub fn new(configuration: Arc<Configuration>, items: Vec<Piece>) -> Self {
        let board = Board::new(configuration.width);
        Self {
            configuration,
            board,
            buffer: Vec::new(),
            items: items.into(),
            cursor: 0,
            history: Vec::new(),
        }
    }

    pub fn configuration(&self) -> &Arc<Configuration> {
        &self.configuration
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn buffer(&self) -> &[Piece] {
        &self.buffer
    }

    /// Pending pieces, front first
    pub fn items(&self) -> &[Piece] {
        &self.items[self.cursor..]
    }

    /// Number of pending pieces
    pub fn remaining(&self) -> usize {
        self.items.len() - self.cursor
    }

    pub fn history(&self) -> &[Action] {
        &self.history
    }

    /// The next piece and the pending queue, or `None` once the stream is exhausted
    pub fn perceive(&self) -> Option<Percept<'_>> {
        let pieces = self.items();
        pieces.first().map(|&piece| Percept { piece, pieces })
    }

    /// Drop the front pending item; does nothing on an empty queue
    pub fn consume(&mut self) {
        if self.cursor < self.items.len() {
            self.cursor += 1;
        }
    }

    pub fn buffer_is_full(&self) -> bool {
        self.buffer.len() >= self.configuration.buffer
    }

    /// Hold `piece` in the buffer
    pub fn add_to_buffer(&mut self, piece: Piece) -> Result<(), EnvironmentError> {
        if self.buffer_is_full() {
            return Err(EnvironmentError::FullBuffer {
                capacity: self.configuration.buffer,
            });
        }
        self.buffer.push(piece);
        Ok(())
    }

    /// Remove the first buffered piece with the same shape as `piece`
    pub fn remove_from_buffer(&mut self, piece: &Piece) -> Result<Piece, EnvironmentError> {
        let index = self.buffer_position(piece)?;
        Ok(self.buffer.remove(index))
    }

    /// Drop `piece` onto the board; returns rows cleared
    pub fn place_piece_at(&mut self, piece: &Piece, left_offset: usize) -> usize {
        self.board.place(piece, left_offset)
    }

    /// Every left offset at which `piece` fits inside the board's width
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use trix_core::{Environment, Piece};
    /// use trix_core::types::Configuration;
    ///
    /// let config = Configuration { width: 10, ..Configuration::default() };
    /// let env = Environment::new(Arc::new(config), Vec::new());
    /// let tee = Piece::new('1', &[&[0, 1, 0], &[1, 1, 1]]).unwrap();
    /// assert_eq!(env.possible_left_offsets_for(&tee), 0..8);
    /// ```
    pub fn possible_left_offsets_for(&self, piece: &Piece) -> Range<usize> {
        0..(self.board.width() + 1).saturating_sub(piece.width())
    }

    /// Record `action` in the history, then apply it to this environment
    pub fn update(&mut self, action: Action) -> Result<(), EnvironmentError> {
        self.history.push(action);
        action.apply(self)
    }

    /// A copy of this environment with `action` applied; `self` is untouched
    pub fn fork(&self, action: Action) -> Result<Environment, EnvironmentError> {
        let mut copy = self.clone();
        copy.update(action)?;
        Ok(copy)
    }

    /// A copy with an empty history, for speculative play that records its
    /// own action sequence
    pub fn detached(&self) -> Environment {
        Environment {
            configuration: Arc::clone(&self.configuration),
            board: self.board.clone(),
            buffer: self.buffer.clone(),
            items: Arc::clone(&self.items),
            cursor: self.cursor,
            history: Vec::new(),
        }
    }

    pub(crate) fn buffer_position(&self, piece: &Piece) -> Result<usize, EnvironmentError> {
        self.buffer
            .iter()
            .position(|held| held == piece)
            .ok_or(EnvironmentError::NotInBuffer { name: piece.name() })
    }
}
