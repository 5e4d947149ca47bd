use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Largest magnitude an integer may have and still convert to `f64` exactly
pub const MAX_EXACT_INTEGER: i64 = 1 << 53;
/// Upper bound on the number of quadruples a single survey may enumerate
pub const MAX_QUADRUPLES: usize = 1_000_000;

/// # Errors
///
/// Returns an error if `min > max` or either bound lies outside
/// `±MAX_EXACT_INTEGER`.
pub fn validate_exact_range(min: i64, max: i64) -> Result<(), UtilsError> {
    if min > max {
        warn!("Invalid range: min={}, max={}", min, max);
        return Err(UtilsError::InvalidRange { min, max });
    }

    if let Some(&value) = [min, max]
        .iter()
        .find(|v| !(-MAX_EXACT_INTEGER..=MAX_EXACT_INTEGER).contains(*v))
    {
        warn!("{} cannot be represented exactly as a float", value);
        return Err(UtilsError::InexactInteger(value));
    }

    Ok(())
}

/// Number of multisets of four values drawn from `min..=max`, `C(n + 3, 4)`.
///
/// # Errors
///
/// Returns an error for an invalid range, or when the count exceeds
/// [`MAX_QUADRUPLES`].
pub fn quadruple_count(min: i64, max: i64) -> Result<usize, UtilsError> {
    validate_exact_range(min, max)?;

    let n = (i128::from(max) - i128::from(min) + 1) as u128;
    let count = (0..4u128)
        .try_fold(1u128, |acc, k| acc.checked_mul(n + k))
        .map(|product| product / 24)
        .unwrap_or(u128::MAX);

    match usize::try_from(count) {
        Ok(count) if count <= MAX_QUADRUPLES => Ok(count),
        _ => {
            warn!("Range {}..={} yields too many quadruples", min, max);
            Err(UtilsError::TooManyQuadruples {
                limit: MAX_QUADRUPLES,
            })
        }
    }
}

/// Every quadruple `a <= b <= c <= d` drawn from `min..=max`, in lexicographic order.
///
/// Each multiset of four values appears exactly once.
///
/// # Errors
///
/// Returns an error if `min > max`, a bound is not exactly representable as
/// `f64`, or the range holds more than [`MAX_QUADRUPLES`] quadruples.
pub fn non_decreasing_quadruples(min: i64, max: i64) -> Result<Vec<[i64; 4]>, UtilsError> {
    debug!("Generating quadruples over {}..={}", min, max);

    let mut quadruples = Vec::with_capacity(quadruple_count(min, max)?);
    for a in min..=max {
        for b in a..=max {
            for c in b..=max {
                for d in c..=max {
                    quadruples.push([a, b, c, d]);
                }
            }
        }
    }

    debug!("Generated {} quadruples", quadruples.len());
    Ok(quadruples)
}
