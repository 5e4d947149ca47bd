use std::ops::ControlFlow;

use log::{debug, info};

use crate::expression::Expression;
use crate::solver::cache::SolutionCache;
use crate::solver::config::SolverConfig;
use crate::solver::errors::SolverError;
use crate::solver::search::{Operand, search};
use crate::utils::{OPERAND_COUNT, validate_operands};

/// Outcome of checking a player's expression against a puzzle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnswerVerdict {
    Correct,
    /// The expression does not use each puzzle number exactly once
    WrongNumbers,
    /// Uses the right numbers but evaluates to something else
    WrongValue(f64),
}

/// Solver for the 24 puzzle
///
/// Queries are pure: the same four numbers always give the same answer, in
/// any order. Results are memoized per input multiset unless the solver was
/// built with [`Solver24::uncached`].
#[derive(Debug)]
pub struct Solver24 {
    config: SolverConfig,
    cache: Option<SolutionCache>,
}

impl Solver24 {
    /// Create a solver for the target 24 with the default tolerances
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            config,
            cache: Some(SolutionCache::new()),
        }
    }

    /// Create a solver that searches on every query
    pub fn uncached() -> Self {
        Self::new().without_cache()
    }

    pub fn without_cache(mut self) -> Self {
        self.cache = None;
        self
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn cache(&self) -> Option<&SolutionCache> {
        self.cache.as_ref()
    }

    /// Whether the four numbers can reach the target
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidInput`] unless given exactly four finite numbers.
    pub fn has_solution(&self, numbers: &[f64]) -> Result<bool, SolverError> {
        Ok(self.get_solution(numbers)?.is_some())
    }

    /// One fully parenthesized expression reaching the target, or `None`
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidInput`] unless given exactly four finite numbers.
    pub fn get_solution(&self, numbers: &[f64]) -> Result<Option<Expression>, SolverError> {
        let numbers = validate_operands(numbers)?;

        if let Some(cache) = &self.cache
            && let Some(cached) = cache.get(&numbers)
        {
            debug!("Cache hit for {:?}", numbers);
            return Ok(cached);
        }

        let witness = self.find_witness(&numbers);
        match &witness {
            Some(expr) => info!("Found {} = {} for {:?}", expr, self.config.target, numbers),
            None => info!("No solution for {:?}", numbers),
        }

        if let Some(cache) = &self.cache {
            cache.insert(&numbers, witness.clone());
        }
        Ok(witness)
    }

    /// Every distinct final value the four numbers can reach, ascending,
    /// with one witness each. Values closer than the tolerance count as one.
    /// Non-finite results are left out.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidInput`] unless given exactly four finite numbers.
    pub fn reachable_values(&self, numbers: &[f64]) -> Result<Vec<Operand>, SolverError> {
        let numbers = validate_operands(numbers)?;

        let mut reached: Vec<Operand> = Vec::new();
        let _ = search(
            Self::canonical_operands(&numbers),
            &self.config,
            &mut |operand| {
                if operand.value.is_finite() {
                    reached.push(operand.clone());
                }
                ControlFlow::Continue(())
            },
        );

        debug!("Search produced {} finite terminals", reached.len());
        reached.sort_by(|a, b| a.value.total_cmp(&b.value));
        let tolerance = self.config.tolerance;
        reached.dedup_by(|later, kept| (later.value - kept.value).abs() < tolerance);

        info!(
            "{} distinct values reachable from {:?}",
            reached.len(),
            numbers
        );
        Ok(reached)
    }

    /// Check a player's expression against the puzzle numbers
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidInput`] for bad puzzle numbers and
    /// [`SolverError::Expression`] when the answer cannot be parsed or divides
    /// by zero.
    pub fn check_answer(
        &self,
        numbers: &[f64],
        answer: &str,
    ) -> Result<AnswerVerdict, SolverError> {
        let numbers = validate_operands(numbers)?;
        let expr = Expression::parse(answer)?;

        if !expr.uses_exactly(&numbers) {
            debug!("Answer {} does not use {:?} exactly once", expr, numbers);
            return Ok(AnswerVerdict::WrongNumbers);
        }

        let value = expr.evaluate()?;
        if self.config.is_match(value) {
            Ok(AnswerVerdict::Correct)
        } else {
            debug!("Answer {} evaluates to {}", expr, value);
            Ok(AnswerVerdict::WrongValue(value))
        }
    }

    /// Leaves in ascending order, so every permutation of the same numbers
    /// searches identically
    fn canonical_operands(numbers: &[f64; OPERAND_COUNT]) -> Vec<Operand> {
        let mut sorted = *numbers;
        sorted.sort_by(f64::total_cmp);
        sorted.iter().map(|&n| Operand::leaf(n)).collect()
    }

    fn find_witness(&self, numbers: &[f64; OPERAND_COUNT]) -> Option<Expression> {
        let mut witness = None;
        let _ = search(
            Self::canonical_operands(numbers),
            &self.config,
            &mut |operand| {
                if self.config.is_match(operand.value) {
                    witness = Some(operand.expression.clone());
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            },
        );
        witness
    }
}

impl Default for Solver24 {
    fn default() -> Self {
        Self::new()
    }
}
