use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Expression is empty")]
    EmptyExpression,
    #[error("Unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Unexpected {token} at position {position}")]
    UnexpectedToken { token: String, position: usize },
    #[error("Unbalanced parentheses")]
    UnbalancedParentheses,
    #[error("Operator is missing an operand")]
    MissingOperand,
}
