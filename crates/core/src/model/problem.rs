use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::game_type::{GameType, ProblemKind};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProblemError {
    #[error("operands {left} and {right} do not fit {game_type} in either order")]
    OperandsOutOfRange {
        game_type: GameType,
        left: u32,
        right: u32,
    },

    #[error("complement operands {left} and {right} do not sum to 10")]
    BrokenComplement { left: u32, right: u32 },
}

/// A single quiz round: two operands and the expected answer.
///
/// Immutable once built; each round replaces the problem wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    game_type: GameType,
    left: u32,
    right: u32,
    answer: u32,
}

impl Problem {
    /// Validates the operands against the game type and computes the answer.
    ///
    /// Operand order is free: generation may swap the pair, so `(left, right)`
    /// is accepted when either orientation fits the configured ranges.
    ///
    /// # Errors
    ///
    /// Returns `ProblemError::BrokenComplement` for a complement pair that
    /// does not sum to 10, and `ProblemError::OperandsOutOfRange` when the
    /// operands fit the game type's ranges in neither orientation.
    pub fn new(game_type: GameType, left: u32, right: u32) -> Result<Self, ProblemError> {
        match game_type.kind() {
            ProblemKind::ComplementToTen => {
                if left == 0 || right == 0 || left + right != 10 {
                    return Err(ProblemError::BrokenComplement { left, right });
                }
            }
            ProblemKind::Addition | ProblemKind::Multiplication => {
                let fits = |a: &u32, b: &u32| {
                    game_type.left_range().contains(a) && game_type.right_range().contains(b)
                };
                if !fits(&left, &right) && !fits(&right, &left) {
                    return Err(ProblemError::OperandsOutOfRange {
                        game_type,
                        left,
                        right,
                    });
                }
            }
        }

        let answer = match game_type.kind() {
            ProblemKind::Multiplication => left * right,
            ProblemKind::Addition | ProblemKind::ComplementToTen => left + right,
        };

        Ok(Self {
            game_type,
            left,
            right,
            answer,
        })
    }

    #[must_use]
    pub fn game_type(&self) -> GameType {
        self.game_type
    }

    #[must_use]
    pub fn kind(&self) -> ProblemKind {
        self.game_type.kind()
    }

    #[must_use]
    pub fn left(&self) -> u32 {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> u32 {
        self.right
    }

    #[must_use]
    pub fn answer(&self) -> u32 {
        self.answer
    }

    /// The value the player has to pick: the hidden right operand for
    /// complement games, the result otherwise.
    #[must_use]
    pub fn solution(&self) -> u32 {
        match self.kind() {
            ProblemKind::ComplementToTen => self.right,
            ProblemKind::Addition | ProblemKind::Multiplication => self.answer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_answer_is_sum() {
        let problem = Problem::new(GameType::Addition1To5, 2, 3).unwrap();
        assert_eq!(problem.answer(), 5);
        assert_eq!(problem.solution(), 5);
    }

    #[test]
    fn multiplication_answer_is_product() {
        let problem = Problem::new(GameType::Multiplication6To9, 7, 8).unwrap();
        assert_eq!(problem.answer(), 56);
        assert_eq!(problem.solution(), 56);
    }

    #[test]
    fn complement_solution_is_hidden_operand() {
        let problem = Problem::new(GameType::ComplementToTen, 3, 7).unwrap();
        assert_eq!(problem.answer(), 10);
        assert_eq!(problem.solution(), 7);
    }

    #[test]
    fn swapped_orientation_is_accepted() {
        // 6-10 games draw left from 1..=9 and right from 6..=10; the swapped
        // pair must validate as well.
        assert!(Problem::new(GameType::Addition6To10, 10, 4).is_ok());
        assert!(Problem::new(GameType::Addition6To10, 4, 10).is_ok());
    }

    #[test]
    fn out_of_range_operands_are_rejected() {
        let result = Problem::new(GameType::Addition1To5, 6, 6);
        assert!(matches!(
            result,
            Err(ProblemError::OperandsOutOfRange { .. })
        ));
    }

    #[test]
    fn broken_complement_is_rejected() {
        let result = Problem::new(GameType::ComplementToTen, 4, 7);
        assert!(matches!(result, Err(ProblemError::BrokenComplement { .. })));

        let result = Problem::new(GameType::ComplementToTen, 0, 10);
        assert!(matches!(result, Err(ProblemError::BrokenComplement { .. })));
    }
}
