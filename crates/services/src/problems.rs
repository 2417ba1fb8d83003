use rand::Rng;
use rand::rng;

use mathdash_core::model::{GameType, Problem, ProblemError, ProblemKind};

/// Produces randomized problems for a game type.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProblemGenerator;

impl ProblemGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Generate the next problem using the thread-local RNG.
    ///
    /// # Errors
    ///
    /// Returns `ProblemError` if the drawn operands fail validation; the
    /// per-game-type ranges make this unreachable in practice.
    pub fn generate(&self, game_type: GameType) -> Result<Problem, ProblemError> {
        let mut rng = rng();
        self.generate_with(game_type, &mut rng)
    }

    /// Generate with a caller-provided RNG, for deterministic tests.
    ///
    /// # Errors
    ///
    /// Same as [`ProblemGenerator::generate`].
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        game_type: GameType,
        rng: &mut R,
    ) -> Result<Problem, ProblemError> {
        let left = rng.random_range(game_type.left_range());
        let right = match game_type.kind() {
            ProblemKind::ComplementToTen => 10 - left,
            ProblemKind::Addition | ProblemKind::Multiplication => {
                rng.random_range(game_type.right_range())
            }
        };

        // Operand order is random; Problem::new accepts either orientation.
        let (left, right) = if rng.random_bool(0.5) {
            (right, left)
        } else {
            (left, right)
        };

        Problem::new(game_type, left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generated_operands_fit_their_ranges() {
        let generator = ProblemGenerator::new();
        let mut rng = StdRng::seed_from_u64(7);

        for game_type in GameType::ALL {
            for _ in 0..200 {
                let problem = generator.generate_with(game_type, &mut rng).unwrap();
                let (a, b) = (problem.left(), problem.right());
                let fits = |x: &u32, y: &u32| {
                    game_type.left_range().contains(x) && game_type.right_range().contains(y)
                };
                assert!(
                    fits(&a, &b) || fits(&b, &a),
                    "{game_type}: {a} and {b} out of range"
                );
            }
        }
    }

    #[test]
    fn complement_problems_always_sum_to_ten() {
        let generator = ProblemGenerator::new();
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..200 {
            let problem = generator
                .generate_with(GameType::ComplementToTen, &mut rng)
                .unwrap();
            assert_eq!(problem.left() + problem.right(), 10);
            assert_eq!(problem.answer(), 10);
        }
    }

    #[test]
    fn operand_order_is_swapped_sometimes() {
        let generator = ProblemGenerator::new();
        let mut rng = StdRng::seed_from_u64(3);

        // For 6-10 additions the ranges differ, so a swapped draw is
        // detectable by a left operand above 5.
        let mut swapped = false;
        let mut straight = false;
        for _ in 0..200 {
            let problem = generator
                .generate_with(GameType::Addition6To10, &mut rng)
                .unwrap();
            if problem.left() >= 6 && problem.right() <= 5 {
                swapped = true;
            }
            if problem.right() >= 6 {
                straight = true;
            }
        }
        assert!(swapped);
        assert!(straight);
    }

    #[test]
    fn multiplication_answers_are_products() {
        let generator = ProblemGenerator::new();
        let mut rng = StdRng::seed_from_u64(19);

        for _ in 0..100 {
            let problem = generator
                .generate_with(GameType::Multiplication6To9, &mut rng)
                .unwrap();
            assert_eq!(problem.answer(), problem.left() * problem.right());
        }
    }
}
