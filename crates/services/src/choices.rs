use rand::Rng;
use rand::rng;
use rand::seq::SliceRandom;

use mathdash_core::model::{Choice, Problem, ProblemKind};

/// Decoy offsets for addition and complement choices.
const DECOY_OFFSETS: [u32; 3] = [7, 5, 2];

/// Decoy values wrap at this modulus, keeping them in the 0..=15 band.
const DECOY_MODULUS: u32 = 16;

/// Build the four shuffled choices for a problem.
#[must_use]
pub fn build_choices(problem: &Problem) -> Vec<Choice> {
    let mut rng = rng();
    build_choices_with(problem, &mut rng)
}

/// Build choices with a caller-provided RNG, for deterministic tests.
pub fn build_choices_with<R: Rng + ?Sized>(problem: &Problem, rng: &mut R) -> Vec<Choice> {
    let solution = problem.solution();
    let mut choices = vec![Choice::new(solution, true)];

    match problem.kind() {
        ProblemKind::Addition | ProblemKind::ComplementToTen => {
            for offset in DECOY_OFFSETS {
                choices.push(Choice::new((solution + offset) % DECOY_MODULUS, false));
            }
        }
        ProblemKind::Multiplication => {
            for _ in 0..DECOY_OFFSETS.len() {
                let left = rng.random_range(1..=9);
                let right = rng.random_range(problem.game_type().right_range());
                let value = left * right;
                // A decoy can land on the real product; it then counts as
                // a correct pick.
                choices.push(Choice::new(value, value == solution));
            }
        }
    }

    choices.shuffle(rng);
    choices
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathdash_core::model::GameType;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn addition_choices_use_fixed_offsets() {
        let problem = Problem::new(GameType::Addition1To5, 4, 5).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let choices = build_choices_with(&problem, &mut rng);

        assert_eq!(choices.len(), 4);
        // Solution 9 wraps its +7 decoy around the modulus to 0.
        let values: Vec<u32> = choices.iter().map(Choice::value).collect();
        for expected in [9, 0, 14, 11] {
            assert!(values.contains(&expected), "missing {expected} in {values:?}");
        }
        assert_eq!(choices.iter().filter(|c| c.is_correct()).count(), 1);
        assert!(choices.iter().all(Choice::is_unrevealed));
    }

    #[test]
    fn addition_decoys_never_collide_with_solution() {
        let mut rng = StdRng::seed_from_u64(2);
        for left in 1..=5 {
            for right in 1..=5 {
                let problem = Problem::new(GameType::Addition1To5, left, right).unwrap();
                let choices = build_choices_with(&problem, &mut rng);
                for choice in &choices {
                    assert_eq!(choice.is_correct(), choice.value() == problem.solution());
                }
            }
        }
    }

    #[test]
    fn complement_choices_target_hidden_operand() {
        let problem = Problem::new(GameType::ComplementToTen, 3, 7).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let choices = build_choices_with(&problem, &mut rng);

        let correct: Vec<&Choice> = choices.iter().filter(|c| c.is_correct()).collect();
        assert_eq!(correct.len(), 1);
        assert_eq!(correct[0].value(), 7);
    }

    #[test]
    fn multiplication_collisions_count_as_correct() {
        let problem = Problem::new(GameType::Multiplication2To5, 6, 4).unwrap();
        let mut rng = StdRng::seed_from_u64(23);

        // Whatever the RNG produces, the correctness flag must track value
        // equality with the real product.
        for _ in 0..200 {
            let choices = build_choices_with(&problem, &mut rng);
            assert_eq!(choices.len(), 4);
            for choice in &choices {
                assert_eq!(choice.is_correct(), choice.value() == problem.solution());
            }
            assert!(choices.iter().any(|c| c.is_correct()));
        }
    }

    #[test]
    fn multiplication_decoys_stay_in_band() {
        let problem = Problem::new(GameType::Multiplication6To9, 9, 8).unwrap();
        let mut rng = StdRng::seed_from_u64(31);

        for _ in 0..100 {
            let choices = build_choices_with(&problem, &mut rng);
            for choice in choices.iter().filter(|c| !c.is_correct()) {
                assert!(choice.value() >= 6);
                assert!(choice.value() <= 81);
            }
        }
    }
}
