use thiserror::Error;

use crate::solver::SolverError;
use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PuzzleError {
    #[error("Invalid number range: min={min}, max={max}")]
    InvalidRange { min: i64, max: i64 },
    #[error("Invalid number range: {0}")]
    Range(#[from] UtilsError),
    #[error("At least one attempt is required")]
    NoAttempts,
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),
}
