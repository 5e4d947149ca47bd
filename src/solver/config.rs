use crate::solver::constants::{DIVISION_EPSILON, TARGET, TOLERANCE};

/// Numeric parameters of a search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Value the four numbers must reach
    pub target: f64,
    /// Largest `|value - target|` still accepted as a match
    pub tolerance: f64,
    /// Divisors smaller than this in magnitude prune the branch
    pub division_epsilon: f64,
}

impl SolverConfig {
    pub fn new() -> Self {
        Self {
            target: TARGET,
            tolerance: TOLERANCE,
            division_epsilon: DIVISION_EPSILON,
        }
    }

    pub fn with_target(mut self, target: f64) -> Self {
        self.target = target;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_division_epsilon(mut self, division_epsilon: f64) -> Self {
        self.division_epsilon = division_epsilon;
        self
    }

    #[inline]
    pub fn is_match(&self, value: f64) -> bool {
        (value - self.target).abs() < self.tolerance
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}
