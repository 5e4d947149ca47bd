use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Parse one puzzle number as typed on the command line.
///
/// Integers with leading zeros (`"07"`) are rejected so that every number has
/// one canonical spelling.
///
/// # Errors
///
/// Returns an error if the text is empty, has a leading zero, or is not a
/// finite decimal number.
pub fn parse_operand(text: &str) -> Result<f64, UtilsError> {
    let trimmed = text.trim();
    debug!("Parsing operand '{}'", trimmed);

    if trimmed.is_empty() {
        warn!("Operand is empty");
        return Err(UtilsError::EmptyNumber);
    }

    let unsigned = trimmed.strip_prefix('-').unwrap_or(trimmed);
    if unsigned.is_empty() || !unsigned.chars().all(|c| c.is_ascii_digit() || c == '.') {
        warn!("Operand contains invalid characters: '{}'", trimmed);
        return Err(UtilsError::InvalidNumber(trimmed.to_string()));
    }

    if unsigned.len() > 1 && unsigned.starts_with('0') && !unsigned.starts_with("0.") {
        debug!("Rejecting number with leading zero: '{}'", trimmed);
        return Err(UtilsError::InvalidNumber(trimmed.to_string()));
    }

    let value = trimmed
        .parse::<f64>()
        .map_err(|_| UtilsError::InvalidNumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(UtilsError::NonFiniteOperand(value));
    }

    debug!("Parsed '{}' as {}", trimmed, value);
    Ok(value)
}
