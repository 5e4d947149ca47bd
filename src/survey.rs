//! Classify every puzzle in a number range as solvable or not

use log::info;
use rayon::prelude::*;

use crate::expression::Expression;
use crate::solver::{Solver24, SolverError};
use crate::utils::non_decreasing_quadruples;

/// One quadruple and its witness, if any
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyEntry {
    pub numbers: [i64; 4],
    pub witness: Option<Expression>,
}

impl SurveyEntry {
    pub fn is_solvable(&self) -> bool {
        self.witness.is_some()
    }
}

/// Solve every quadruple `a <= b <= c <= d` in `min..=max`, in parallel.
///
/// Entries come back in lexicographic order of their numbers.
///
/// # Errors
///
/// Returns an error if `min > max`, if a bound is not exactly representable
/// as `f64`, or if the range holds more than `MAX_QUADRUPLES` quadruples.
pub fn survey(solver: &Solver24, min: i64, max: i64) -> Result<Vec<SurveyEntry>, SolverError> {
    let quadruples = non_decreasing_quadruples(min, max)?;
    info!(
        "Surveying {} quadruples over {}..={}",
        quadruples.len(),
        min,
        max
    );

    let entries = quadruples
        .into_par_iter()
        .map(|numbers| {
            let witness = solver.get_solution(&numbers.map(|n| n as f64))?;
            Ok(SurveyEntry { numbers, witness })
        })
        .collect::<Result<Vec<_>, SolverError>>()?;

    let solvable = entries.iter().filter(|e| e.is_solvable()).count();
    info!(
        "{} of {} quadruples are solvable",
        solvable,
        entries.len()
    );
    Ok(entries)
}
