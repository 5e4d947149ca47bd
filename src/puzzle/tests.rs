use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::puzzle::{FALLBACK_PUZZLE, PuzzleError, PuzzleGenerator};
use crate::solver::Solver24;
use crate::utils::{MAX_EXACT_INTEGER, UtilsError};

#[test]
fn test_generated_puzzle_is_solvable_and_in_range() {
    let solver = Solver24::new();
    let generator = PuzzleGenerator::new();
    let mut rng = StdRng::seed_from_u64(24);

    for _ in 0..20 {
        let result = generator.generate(&solver, &mut rng);
        assert!(result.is_ok());
        if let Ok(puzzle) = result {
            assert!(!puzzle.used_fallback);
            assert!(puzzle.attempts >= 1 && puzzle.attempts <= 100);
            assert!(
                puzzle
                    .numbers
                    .iter()
                    .all(|&n| (1.0..=9.0).contains(&n) && n.fract() == 0.0)
            );
            assert_eq!(solver.has_solution(&puzzle.numbers), Ok(true));
        }
    }
}

#[test]
fn test_same_seed_same_puzzles() {
    let solver = Solver24::new();
    let generator = PuzzleGenerator::new();
    let mut first = StdRng::seed_from_u64(7);
    let mut second = StdRng::seed_from_u64(7);

    for _ in 0..5 {
        assert_eq!(
            generator.generate(&solver, &mut first),
            generator.generate(&solver, &mut second)
        );
    }
}

#[test]
fn test_falls_back_after_max_attempts() {
    let solver = Solver24::new();
    // only [1, 1, 1, 1] can be drawn, and it has no solution
    let generator = PuzzleGenerator::new()
        .with_range(1, 1)
        .with_max_attempts(5);
    let mut rng = StdRng::seed_from_u64(0);

    let result = generator.generate(&solver, &mut rng);
    assert!(result.is_ok());
    if let Ok(puzzle) = result {
        assert!(puzzle.used_fallback);
        assert_eq!(puzzle.attempts, 5);
        assert_eq!(puzzle.numbers, FALLBACK_PUZZLE);
        assert_eq!(puzzle.to_string(), "4 6 8 1");
    }
}

#[test]
fn test_first_attempt_when_always_solvable() {
    let solver = Solver24::new();
    let generator = PuzzleGenerator::new().with_range(6, 6);
    let mut rng = StdRng::seed_from_u64(0);

    let result = generator.generate(&solver, &mut rng);
    assert!(result.is_ok());
    if let Ok(puzzle) = result {
        assert_eq!(puzzle.numbers, [6.0, 6.0, 6.0, 6.0]);
        assert_eq!(puzzle.attempts, 1);
        assert!(!puzzle.used_fallback);
    }
}

#[test]
fn test_invalid_configuration() {
    let solver = Solver24::new();
    let mut rng = StdRng::seed_from_u64(0);

    let generator = PuzzleGenerator::new().with_range(9, 1);
    assert_eq!(
        generator.generate(&solver, &mut rng),
        Err(PuzzleError::InvalidRange { min: 9, max: 1 })
    );

    let generator = PuzzleGenerator::new().with_max_attempts(0);
    assert_eq!(
        generator.generate(&solver, &mut rng),
        Err(PuzzleError::NoAttempts)
    );
}

#[test]
fn test_rejects_bounds_beyond_exact_floats() {
    let solver = Solver24::new();
    let mut rng = StdRng::seed_from_u64(0);
    let beyond = MAX_EXACT_INTEGER + 1;

    let generator = PuzzleGenerator::new().with_range(beyond, beyond);
    assert_eq!(
        generator.generate(&solver, &mut rng),
        Err(PuzzleError::Range(UtilsError::InexactInteger(beyond)))
    );

    let generator = PuzzleGenerator::new().with_range(-beyond, 9);
    assert!(matches!(
        generator.validate(),
        Err(PuzzleError::Range(UtilsError::InexactInteger(_)))
    ));

    let generator = PuzzleGenerator::new().with_range(MAX_EXACT_INTEGER, MAX_EXACT_INTEGER);
    assert!(generator.validate().is_ok());
}
