//! Utils module split into submodules

mod errors;
mod multisets;
mod numbers;
mod validation;

pub use errors::UtilsError;
pub use multisets::{
    MAX_EXACT_INTEGER, MAX_QUADRUPLES, non_decreasing_quadruples, quadruple_count,
    validate_exact_range,
};
pub use numbers::parse_operand;
pub use validation::{OPERAND_COUNT, validate_operands};

#[cfg(test)]
mod tests;
