use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Every puzzle is played with exactly this many numbers
pub const OPERAND_COUNT: usize = 4;

/// # Errors
///
/// Returns an error unless `numbers` holds exactly four finite values.
pub fn validate_operands(numbers: &[f64]) -> Result<[f64; OPERAND_COUNT], UtilsError> {
    debug!("Validating operands: {:?}", numbers);

    let operands: [f64; OPERAND_COUNT] = numbers.try_into().map_err(|_| {
        warn!(
            "Expected {} operands, got {}",
            OPERAND_COUNT,
            numbers.len()
        );
        UtilsError::WrongOperandCount {
            expected: OPERAND_COUNT,
            actual: numbers.len(),
        }
    })?;

    if let Some(&bad) = operands.iter().find(|n| !n.is_finite()) {
        warn!("Operand is not finite: {}", bad);
        return Err(UtilsError::NonFiniteOperand(bad));
    }

    Ok(operands)
}
