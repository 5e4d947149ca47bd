//! solver24 - A library for solving the 24 puzzle
//!
//! Given four numbers, decide whether some ordering and parenthesization of
//! `+ − × ÷` turns them into 24, and produce a witnessing expression.

pub mod expression;
pub mod puzzle;
pub mod solver;
pub mod survey;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator};
pub use puzzle::{Puzzle, PuzzleError, PuzzleGenerator};
pub use solver::{AnswerVerdict, Operand, Solver24, SolverConfig, SolverError};
pub use utils::{UtilsError, validate_operands};

/// Whether the four numbers can make 24
///
/// This is a convenience function that creates an uncached default solver.
///
/// # Errors
///
/// This function will return an error unless `numbers` holds exactly four
/// finite values.
///
/// # Examples
///
/// ```
/// assert_eq!(solver24::has_solution(&[3.0, 3.0, 8.0, 8.0]), Ok(true));
/// assert_eq!(solver24::has_solution(&[1.0, 1.0, 1.0, 1.0]), Ok(false));
/// ```
pub fn has_solution(numbers: &[f64]) -> Result<bool, SolverError> {
    Solver24::uncached().has_solution(numbers)
}

/// One fully parenthesized expression over the four numbers that makes 24
///
/// # Arguments
///
/// * `numbers` - Exactly four finite numbers, each used once in the result
///
/// # Returns
///
/// * `Ok(Some(Expression))` - If a matching expression is found
/// * `Ok(None)` - If no expression reaches 24
/// * `Err(SolverError)` - If the input is not four finite numbers
///
/// # Errors
///
/// This function will return an error if:
/// * `numbers` does not hold exactly four values
/// * any of the values is NaN or infinite
///
/// # Examples
///
/// ```
/// use solver24::get_solution;
///
/// match get_solution(&[4.0, 6.0, 8.0, 1.0]) {
///     Ok(Some(expr)) => println!("Found: {}", expr),
///     Ok(None) => println!("No solution found"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn get_solution(numbers: &[f64]) -> Result<Option<Expression>, SolverError> {
    Solver24::uncached().get_solution(numbers)
}
