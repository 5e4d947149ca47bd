use crate::expression::operator::Operator;

/// Arithmetic expression over the four basic operators
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(f64),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
}

impl Expression {
    /// The operator at the root of this expression, `None` for a number
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Expression::Number(_) => None,
            Expression::Add(_, _) => Some(Operator::Add),
            Expression::Sub(_, _) => Some(Operator::Sub),
            Expression::Mul(_, _) => Some(Operator::Mul),
            Expression::Div(_, _) => Some(Operator::Div),
        }
    }

    /// Leaf numbers in left-to-right order
    pub fn leaves(&self) -> Vec<f64> {
        fn collect(expr: &Expression, out: &mut Vec<f64>) {
            match expr {
                Expression::Number(n) => out.push(*n),
                Expression::Add(l, r)
                | Expression::Sub(l, r)
                | Expression::Mul(l, r)
                | Expression::Div(l, r) => {
                    collect(l, out);
                    collect(r, out);
                }
            }
        }

        let mut out = Vec::new();
        collect(self, &mut out);
        out
    }

    /// Whether the leaves are exactly `numbers`, as a multiset
    pub fn uses_exactly(&self, numbers: &[f64]) -> bool {
        let mut leaves = self.leaves();
        if leaves.len() != numbers.len() {
            return false;
        }

        let mut expected = numbers.to_vec();
        leaves.sort_by(f64::total_cmp);
        expected.sort_by(f64::total_cmp);
        leaves.iter().zip(&expected).all(|(a, b)| a == b)
    }
}
