//! Actions - the commands an agent commits to an environment
//!
//! Each variant carries only what it needs. Placements carry the piece in the
//! orientation being dropped; placing from the buffer additionally names the
//! buffered piece to give up, since the rotated piece may not be the stored one.

use crate::{Environment, EnvironmentError, Piece};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// No effect
    DoNothing,
    /// Take the next pending item and hold `piece` in the buffer
    AddToBuffer { piece: Piece },
    /// Drop `piece` (the next pending item, possibly rotated), then take that item
    PlaceNextPiece { piece: Piece, left_offset: usize },
    /// Drop `piece` (a rotation of `original`), then release `original` from the buffer
    PlaceFromBuffer {
        piece: Piece,
        left_offset: usize,
        original: Piece,
    },
}

impl Action {
    /// Apply this action's effect to `environment`.
    ///
    /// Preconditions are checked before anything is mutated, so a failed
    /// action leaves the board, buffer and queue as they were.
    pub fn apply(&self, environment: &mut Environment) -> Result<(), EnvironmentError> {
        match *self {
            Action::DoNothing => {}
            Action::AddToBuffer { piece } => {
                if environment.buffer_is_full() {
                    return Err(EnvironmentError::FullBuffer {
                        capacity: environment.configuration().buffer,
                    });
                }
                environment.consume();
                environment.add_to_buffer(piece)?;
            }
            Action::PlaceNextPiece { piece, left_offset } => {
                environment.place_piece_at(&piece, left_offset);
                environment.consume();
            }
            Action::PlaceFromBuffer {
                piece,
                left_offset,
                original,
            } => {
                environment.buffer_position(&original)?;
                environment.place_piece_at(&piece, left_offset);
                environment.remove_from_buffer(&original)?;
            }
        }
        Ok(())
    }

    /// The piece dropped and where, for placement actions
    pub fn placement(&self) -> Option<(&Piece, usize)> {
        match self {
            Action::PlaceNextPiece { piece, left_offset }
            | Action::PlaceFromBuffer {
                piece, left_offset, ..
            } => Some((piece, *left_offset)),
            Action::DoNothing | Action::AddToBuffer { .. } => None,
        }
    }

    /// Replay line `"<name> <rotation> <left-offset>"` for placements.
    ///
    /// The rotation is reported counter-clockwise: an internal counter `r`
    /// becomes `4 - r`, with 0 staying 0.
    pub fn render(&self) -> Option<String> {
        self.placement().map(|(piece, left_offset)| {
            let rotation = match piece.rotation() {
                0 => 0,
                r => 4 - r,
            };
            format!("{} {} {}", piece.name(), rotation, left_offset)
        })
    }
}
