use std::fmt;

use crate::expression::ast::Expression;

impl fmt::Display for Expression {
    /// Every binary node is wrapped in parentheses, e.g. `((8 − 6) × (4 ÷ 1))`.
    /// Integral leaves print without a decimal point.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Number(n) if *n == 0.0 => write!(f, "0"),
            Expression::Number(n) => write!(f, "{}", n),
            Expression::Add(l, r)
            | Expression::Sub(l, r)
            | Expression::Mul(l, r)
            | Expression::Div(l, r) => {
                let symbol = self.operator().map_or('?', |op| op.symbol());
                write!(f, "({} {} {})", l, symbol, r)
            }
        }
    }
}
