//! Error types for piece construction and environment mutation.

/// Failures raised while mutating an [`Environment`](crate::Environment)
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EnvironmentError {
    /// Buffering a piece when the buffer is at capacity
    #[error("buffer already holds {capacity} piece(s)")]
    FullBuffer { capacity: usize },
    /// Taking a piece out of the buffer that it does not hold
    #[error("piece {name} is not in the buffer")]
    NotInBuffer { name: char },
}

impl EnvironmentError {
    /// Stable machine-readable code for logs and reports
    pub fn code(self) -> &'static str {
        match self {
            EnvironmentError::FullBuffer { .. } => "full_buffer",
            EnvironmentError::NotInBuffer { .. } => "not_in_buffer",
        }
    }
}

/// Failures raised by [`Piece::new`](crate::Piece::new)
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PieceError {
    #[error("piece shape has no cells")]
    EmptyShape,
    #[error("piece shape {width}x{height} exceeds {max}x{max}", max = trix_types::MAX_PIECE_SIZE)]
    TooLarge { width: usize, height: usize },
    #[error("piece cell {value} is not 0 or 1")]
    InvalidCell { value: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(EnvironmentError::FullBuffer { capacity: 1 }.code(), "full_buffer");
        assert_eq!(EnvironmentError::NotInBuffer { name: '3' }.code(), "not_in_buffer");
    }

    #[test]
    fn test_messages_name_the_offender() {
        let err = EnvironmentError::NotInBuffer { name: '5' };
        assert_eq!(err.to_string(), "piece 5 is not in the buffer");
        let err = PieceError::TooLarge { width: 5, height: 1 };
        assert_eq!(err.to_string(), "piece shape 5x1 exceeds 4x4");
    }
}
