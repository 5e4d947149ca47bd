use std::fmt;

use log::{debug, info, warn};
use rand::Rng;

use crate::puzzle::errors::PuzzleError;
use crate::solver::Solver24;
use crate::utils::{OPERAND_COUNT, validate_exact_range};

pub const DEFAULT_MIN: i64 = 1;
pub const DEFAULT_MAX: i64 = 9;
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;
/// Known solvable: (1 − 4 + 6) × 8
pub const FALLBACK_PUZZLE: [f64; OPERAND_COUNT] = [4.0, 6.0, 8.0, 1.0];

/// Four numbers dealt to the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Puzzle {
    pub numbers: [f64; OPERAND_COUNT],
    /// Random draws made before settling on `numbers`
    pub attempts: usize,
    pub used_fallback: bool,
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for n in &self.numbers {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", n)?;
            first = false;
        }
        Ok(())
    }
}

/// Draws random integer quadruples until one is solvable
#[derive(Debug, Clone, PartialEq)]
pub struct PuzzleGenerator {
    pub min: i64,
    pub max: i64,
    pub max_attempts: usize,
    pub fallback: [f64; OPERAND_COUNT],
}

impl PuzzleGenerator {
    pub fn new() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            fallback: FALLBACK_PUZZLE,
        }
    }

    pub fn with_range(mut self, min: i64, max: i64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_fallback(mut self, fallback: [f64; OPERAND_COUNT]) -> Self {
        self.fallback = fallback;
        self
    }

    /// # Errors
    ///
    /// Returns an error if `min > max`, either bound is too large to be dealt
    /// as an exact `f64`, or `max_attempts` is zero.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if self.min > self.max {
            return Err(PuzzleError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        validate_exact_range(self.min, self.max)?;
        if self.max_attempts == 0 {
            return Err(PuzzleError::NoAttempts);
        }
        Ok(())
    }

    /// Draw up to `max_attempts` quadruples from `min..=max` and return the
    /// first one `solver` can solve, or the fallback puzzle.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid generator configuration.
    pub fn generate<R: Rng>(
        &self,
        solver: &Solver24,
        rng: &mut R,
    ) -> Result<Puzzle, PuzzleError> {
        self.validate()?;

        for attempt in 1..=self.max_attempts {
            let numbers: [f64; OPERAND_COUNT] =
                std::array::from_fn(|_| rng.gen_range(self.min..=self.max) as f64);

            if solver.has_solution(&numbers)? {
                info!("Generated puzzle {:?} after {} attempts", numbers, attempt);
                return Ok(Puzzle {
                    numbers,
                    attempts: attempt,
                    used_fallback: false,
                });
            }
            debug!("Attempt {}: {:?} has no solution", attempt, numbers);
        }

        warn!(
            "No solvable puzzle in {} attempts, using fallback {:?}",
            self.max_attempts, self.fallback
        );
        if !solver.has_solution(&self.fallback)? {
            warn!("Fallback puzzle {:?} has no solution either", self.fallback);
        }

        Ok(Puzzle {
            numbers: self.fallback,
            attempts: self.max_attempts,
            used_fallback: true,
        })
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}
