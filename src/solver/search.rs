use std::iter;
use std::ops::ControlFlow;

use log::trace;

use crate::expression::{Expression, Operator};
use crate::solver::config::SolverConfig;

/// A value reached so far, together with the expression that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    pub value: f64,
    pub expression: Expression,
}

impl Operand {
    /// One of the starting numbers
    pub fn leaf(value: f64) -> Self {
        Self {
            value,
            expression: Expression::Number(value),
        }
    }
}

/// Exhaustively combine `operands` pairwise until one remains, calling
/// `visit` for every terminal operand.
///
/// At each step every pair of positions `i < j` is tried with all four
/// operators, in both orders for `−` and `÷`. The combined operand takes
/// position `i` and the others keep their relative order, so the visit order
/// depends only on the input order. Divisions by a value smaller than
/// `config.division_epsilon` are skipped.
///
/// The search stops as soon as `visit` returns [`ControlFlow::Break`].
pub fn search<F>(operands: Vec<Operand>, config: &SolverConfig, visit: &mut F) -> ControlFlow<()>
where
    F: FnMut(&Operand) -> ControlFlow<()>,
{
    if operands.len() <= 1 {
        return match operands.first() {
            Some(last) => visit(last),
            None => ControlFlow::Continue(()),
        };
    }

    for (i, a) in operands.iter().enumerate() {
        for (j, b) in operands.iter().enumerate().skip(i + 1) {
            for op in Operator::ALL {
                let swapped = (!op.is_commutative()).then_some((b, a));
                for (left, right) in iter::once((a, b)).chain(swapped) {
                    let Some(value) = op.apply(left.value, right.value, config.division_epsilon)
                    else {
                        trace!("Pruned {} {} {}", left.expression, op, right.expression);
                        continue;
                    };

                    let combined = Operand {
                        value,
                        expression: op.build(left.expression.clone(), right.expression.clone()),
                    };
                    search(reduce(&operands, i, j, combined), config, visit)?;
                }
            }
        }
    }

    ControlFlow::Continue(())
}

/// Replace positions `i` and `j` (`i < j`) with `combined`, placed at `i`
fn reduce(operands: &[Operand], i: usize, j: usize, combined: Operand) -> Vec<Operand> {
    let mut combined = Some(combined);
    operands
        .iter()
        .enumerate()
        .filter_map(|(k, operand)| {
            if k == i {
                combined.take()
            } else if k == j {
                None
            } else {
                Some(operand.clone())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests_search {
    use std::ops::ControlFlow;

    use super::{Operand, reduce, search};
    use crate::solver::config::SolverConfig;

    fn leaves(values: &[f64]) -> Vec<Operand> {
        values.iter().map(|&v| Operand::leaf(v)).collect()
    }

    fn count_terminals(values: &[f64]) -> usize {
        let mut count = 0;
        let _ = search(leaves(values), &SolverConfig::default(), &mut |_| {
            count += 1;
            ControlFlow::Continue(())
        });
        count
    }

    #[test]
    fn test_reduce_places_combined_first() {
        let operands = leaves(&[1.0, 2.0, 3.0, 4.0]);
        let reduced = reduce(&operands, 1, 3, Operand::leaf(6.0));
        let values: Vec<f64> = reduced.iter().map(|o| o.value).collect();
        assert_eq!(values, vec![1.0, 6.0, 3.0]);
    }

    #[test]
    fn test_terminal_counts() {
        // Per pair: 2 commutative + 2 * 2 non-commutative = 6 combinations.
        assert_eq!(count_terminals(&[5.0]), 1);
        assert_eq!(count_terminals(&[1.0, 2.0]), 6);
        assert_eq!(count_terminals(&[1.0, 2.0, 3.0]), 3 * 6 * 6);
        assert_eq!(count_terminals(&[1.0, 2.0, 3.0, 4.0]), 6 * 6 * 3 * 6 * 6);
    }

    #[test]
    fn test_zero_divisors_are_pruned() {
        // 0 ÷ 0 is pruned in both orders
        assert_eq!(count_terminals(&[0.0, 0.0]), 4);
        // only 1 ÷ 0 is pruned
        assert_eq!(count_terminals(&[0.0, 1.0]), 5);
    }

    #[test]
    fn test_break_stops_search() {
        let mut seen = 0;
        let flow = search(
            leaves(&[1.0, 2.0, 3.0, 4.0]),
            &SolverConfig::default(),
            &mut |_| {
                seen += 1;
                if seen == 10 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            },
        );
        assert_eq!(flow, ControlFlow::Break(()));
        assert_eq!(seen, 10);
    }

    #[test]
    fn test_empty_input_visits_nothing() {
        assert_eq!(count_terminals(&[]), 0);
    }
}
