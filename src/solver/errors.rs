use thiserror::Error;

use crate::expression::ExpressionError;
use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Expression error: {0}")]
    Expression(#[from] ExpressionError),
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] UtilsError),
}
