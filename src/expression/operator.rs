use std::fmt;

use crate::expression::ast::Expression;

/// One of the four binary operators a puzzle may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// Symbol used when rendering expressions
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '\u{2212}',
            Operator::Mul => '\u{00d7}',
            Operator::Div => '\u{00f7}',
        }
    }

    /// Accepts both the display symbols and their ASCII spellings
    pub fn from_symbol(symbol: char) -> Option<Operator> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' | '\u{2212}' => Some(Operator::Sub),
            '*' | '\u{00d7}' | 'x' => Some(Operator::Mul),
            '/' | '\u{00f7}' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn is_commutative(self) -> bool {
        matches!(self, Operator::Add | Operator::Mul)
    }

    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }

    /// Apply the operator, or `None` when dividing by a value whose
    /// magnitude is below `division_epsilon`.
    #[inline]
    pub fn apply(self, left: f64, right: f64, division_epsilon: f64) -> Option<f64> {
        match self {
            Operator::Add => Some(left + right),
            Operator::Sub => Some(left - right),
            Operator::Mul => Some(left * right),
            Operator::Div => {
                if right.abs() < division_epsilon {
                    None
                } else {
                    Some(left / right)
                }
            }
        }
    }

    /// Build the expression node `left op right`
    pub fn build(self, left: Expression, right: Expression) -> Expression {
        let (l, r) = (Box::new(left), Box::new(right));
        match self {
            Operator::Add => Expression::Add(l, r),
            Operator::Sub => Expression::Sub(l, r),
            Operator::Mul => Expression::Mul(l, r),
            Operator::Div => Expression::Div(l, r),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
