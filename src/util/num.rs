use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_I64_INT` in absolute
/// value.
///
/// ## Example
/// ```
/// use convo::util::num::{MAX_SAFE_I64_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(42, "too big!").unwrap(), 42.0);
/// assert!(i64_to_f64_checked(MAX_SAFE_I64_INT + 1, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_I64_INT.unsigned_abs() {
        return Err(error);
    }
    Ok(value as f64)
}

/// Safely converts a whole-valued `f64` to `i64`.
///
/// ## Errors
/// Returns `RuntimeError::LiteralTooLarge` when the value is not finite,
/// outside the exactly-representable integer range, or fractional.
///
/// ## Example
/// ```
/// use convo::util::num::f64_to_i64_checked;
///
/// assert_eq!(f64_to_i64_checked(10.0, 1).unwrap(), 10);
/// assert!(f64_to_i64_checked(1.5, 1).is_err());
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn f64_to_i64_checked(value: f64, line: usize) -> EvalResult<i64> {
    if !value.is_finite()
       || value.fract() != 0.0
       || value.abs() > MAX_SAFE_I64_INT as f64
    {
        return Err(RuntimeError::LiteralTooLarge { line });
    }
    Ok(value as i64)
}
