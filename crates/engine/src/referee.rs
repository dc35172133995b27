//! Referee - board scoring
//!
//! A weighted sum of board features where lower is better. Rewards carry
//! negative weights, penalties positive ones.
//!
//! | Feature | Default weight | Measures |
//! |---------|----------------|----------|
//! | `valleys` | -0.5 | always 0 for now |
//! | `holes` | 2.0 | covered empty cells |
//! | `cleared` | -2.5 | rows cleared over the board's lifetime |
//! | `maximum_height` | 2.0 | tallest the stack has been |

use trix_core::types::RefereeWeights;
use trix_core::Board;

/// A scored board feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Valleys,
    Holes,
    Cleared,
    MaximumHeight,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::Valleys,
        Feature::Holes,
        Feature::Cleared,
        Feature::MaximumHeight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Valleys => "valleys",
            Feature::Holes => "holes",
            Feature::Cleared => "cleared",
            Feature::MaximumHeight => "maximum_height",
        }
    }
}

/// Scores one board under one set of weights
#[derive(Debug, Clone, Copy)]
pub struct Referee<'a> {
    board: &'a Board,
    weights: RefereeWeights,
}

impl<'a> Referee<'a> {
    pub fn new(board: &'a Board, weights: RefereeWeights) -> Self {
        Self { board, weights }
    }

    /// Score `board` under the default weights
    pub fn calculate(board: &Board) -> f64 {
        Referee::new(board, RefereeWeights::default()).score()
    }

    /// Weighted sum over every feature
    pub fn score(&self) -> f64 {
        Feature::ALL.iter().map(|&feature| self.factor(feature)).sum()
    }

    /// One feature's weighted contribution
    pub fn factor(&self, feature: Feature) -> f64 {
        self.weight(feature) * self.feature(feature)
    }

    /// Raw feature value
    pub fn feature(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Valleys => 0.0,
            Feature::Holes => self.board.holes() as f64,
            Feature::Cleared => self.board.cleared() as f64,
            Feature::MaximumHeight => self.board.maximum_height() as f64,
        }
    }

    pub fn weight(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Valleys => self.weights.valleys,
            Feature::Holes => self.weights.holes,
            Feature::Cleared => self.weights.cleared,
            Feature::MaximumHeight => self.weights.maximum_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trix_core::Piece;

    #[test]
    fn test_empty_board_scores_zero() {
        assert_eq!(Referee::calculate(&Board::new(6)), 0.0);
    }

    #[test]
    fn test_score_is_the_sum_of_factors() {
        let mut board = Board::new(4);
        let overhang = Piece::new('5', &[&[1, 1], &[0, 1], &[0, 1]]).unwrap();
        board.place(&overhang, 0);
        let referee = Referee::new(&board, RefereeWeights::default());
        assert_eq!(referee.feature(Feature::Holes), 2.0);
        assert_eq!(referee.feature(Feature::MaximumHeight), 3.0);
        assert_eq!(referee.factor(Feature::Valleys), 0.0);
        // 2.0 * 2 holes + 2.0 * height 3
        assert_eq!(referee.score(), 10.0);
    }

    #[test]
    fn test_clearing_rows_lowers_the_score() {
        let bar = Piece::new('1', &[&[1, 1, 1, 1]]).unwrap();
        let mut board = Board::new(4);
        board.place(&bar, 0);
        assert_eq!(board.cleared(), 1);
        // the high-water mark is taken after clearing, so only the clear counts
        assert_eq!(board.maximum_height(), 0);
        assert_eq!(Referee::calculate(&board), -2.5);
    }

    #[test]
    fn test_custom_weights_apply() {
        let board = Board::new(3);
        let weights = RefereeWeights {
            holes: 10.0,
            ..RefereeWeights::default()
        };
        let referee = Referee::new(&board, weights);
        assert_eq!(referee.weight(Feature::Holes), 10.0);
        assert_eq!(referee.weight(Feature::Cleared), -2.5);
        assert_eq!(Feature::MaximumHeight.as_str(), "maximum_height");
    }
}
