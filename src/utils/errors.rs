use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Expected exactly {expected} numbers, got {actual}")]
    WrongOperandCount { expected: usize, actual: usize },
    #[error("Number must be finite: {0}")]
    NonFiniteOperand(f64),
    #[error("Number cannot be empty")]
    EmptyNumber,
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Invalid range: min={min}, max={max}")]
    InvalidRange { min: i64, max: i64 },
    #[error("Integer {0} cannot be represented exactly")]
    InexactInteger(i64),
    #[error("Range holds more than {limit} quadruples")]
    TooManyQuadruples { limit: usize },
}
