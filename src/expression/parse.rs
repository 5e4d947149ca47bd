use std::str::FromStr;

use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Operator(Operator),
    LeftParen,
    RightParen,
}

/// Entries waiting on the shunting-yard operator stack
#[derive(Debug, Clone, Copy)]
enum Pending {
    Operator(Operator),
    LeftParen,
}

#[inline]
fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

fn unexpected(token: impl Into<String>, position: usize) -> ExpressionError {
    ExpressionError::UnexpectedToken {
        token: token.into(),
        position,
    }
}

/// Split the input into tokens. A minus sign directly in front of a number,
/// where an operand is expected, is read as part of that number.
///
/// Error positions count characters, not bytes.
fn tokenize(input: &str) -> Result<Vec<Token>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().enumerate().peekable();
    let mut expect_operand = true;

    while let Some((position, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }

        let negative_literal = expect_operand
            && matches!(c, '-' | '\u{2212}')
            && chars.peek().is_some_and(|&(_, next)| is_number_char(next));

        if is_number_char(c) || negative_literal {
            let mut literal = String::from(if negative_literal { '-' } else { c });
            while let Some(&(_, next)) = chars.peek() {
                if !is_number_char(next) {
                    break;
                }
                literal.push(next);
                chars.next();
            }

            if !expect_operand {
                return Err(unexpected(format!("number '{}'", literal), position));
            }
            let value = literal
                .parse::<f64>()
                .map_err(|_| ExpressionError::InvalidNumber(literal.clone()))?;
            tokens.push(Token::Number(value));
            expect_operand = false;
        } else if c == '(' {
            if !expect_operand {
                return Err(unexpected("'('", position));
            }
            tokens.push(Token::LeftParen);
        } else if c == ')' {
            if expect_operand {
                return Err(unexpected("')'", position));
            }
            tokens.push(Token::RightParen);
        } else if let Some(op) = Operator::from_symbol(c) {
            if expect_operand {
                return Err(unexpected(format!("operator '{}'", c), position));
            }
            tokens.push(Token::Operator(op));
            expect_operand = true;
        } else {
            return Err(ExpressionError::UnexpectedCharacter {
                character: c,
                position,
            });
        }
    }

    if tokens.is_empty() {
        return Err(ExpressionError::EmptyExpression);
    }
    if expect_operand {
        return Err(ExpressionError::MissingOperand);
    }

    Ok(tokens)
}

fn reduce(output: &mut Vec<Expression>, op: Operator) -> Result<(), ExpressionError> {
    let right = output.pop().ok_or(ExpressionError::MissingOperand)?;
    let left = output.pop().ok_or(ExpressionError::MissingOperand)?;
    output.push(op.build(left, right));
    Ok(())
}

impl Expression {
    /// Parse an infix expression such as `(8 − 6) × (4 ÷ 1)` or `(8-6)*(4/1)`.
    ///
    /// Standard precedence applies and operators are left associative.
    ///
    /// # Errors
    ///
    /// Returns an error for empty input, unknown characters, malformed numbers,
    /// misplaced tokens and unbalanced parentheses.
    pub fn parse(input: &str) -> Result<Expression, ExpressionError> {
        debug!("Parsing expression: '{}'", input);

        let tokens = tokenize(input)?;
        let mut output: Vec<Expression> = Vec::with_capacity(tokens.len());
        let mut pending: Vec<Pending> = Vec::new();

        for token in tokens {
            match token {
                Token::Number(n) => output.push(Expression::Number(n)),
                Token::Operator(op) => {
                    while let Some(&Pending::Operator(top)) = pending.last() {
                        if top.precedence() < op.precedence() {
                            break;
                        }
                        pending.pop();
                        reduce(&mut output, top)?;
                    }
                    pending.push(Pending::Operator(op));
                }
                Token::LeftParen => pending.push(Pending::LeftParen),
                Token::RightParen => loop {
                    match pending.pop() {
                        Some(Pending::Operator(top)) => reduce(&mut output, top)?,
                        Some(Pending::LeftParen) => break,
                        None => return Err(ExpressionError::UnbalancedParentheses),
                    }
                },
            }
        }

        while let Some(entry) = pending.pop() {
            match entry {
                Pending::Operator(op) => reduce(&mut output, op)?,
                Pending::LeftParen => return Err(ExpressionError::UnbalancedParentheses),
            }
        }

        let expr = output.pop().ok_or(ExpressionError::EmptyExpression)?;
        if !output.is_empty() {
            return Err(ExpressionError::MissingOperand);
        }

        debug!("Parsed expression: {}", expr);
        Ok(expr)
    }
}

impl FromStr for Expression {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expression::parse(s)
    }
}
