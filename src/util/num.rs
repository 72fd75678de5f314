/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Converts an `f64` to `u64` if it lies within `tolerance` of a non-negative
/// integer that is exactly representable.
///
/// Returns `None` for non-finite, negative, fractional or too large values.
/// Pass a tolerance of `0.0` to demand an exact integer.
///
/// # Example
/// ```
/// use calcengine::util::num::f64_to_u64_checked;
///
/// assert_eq!(f64_to_u64_checked(7.0, 0.0), Some(7));
/// assert_eq!(f64_to_u64_checked(3.000_000_000_1, 1e-9), Some(3));
/// assert_eq!(f64_to_u64_checked(1.5, 1e-9), None);
/// assert_eq!(f64_to_u64_checked(-2.0, 0.0), None);
/// assert_eq!(f64_to_u64_checked(f64::NAN, 0.0), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_u64_checked(value: f64, tolerance: f64) -> Option<u64> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    let rounded = value.round();
    if (value - rounded).abs() > tolerance || rounded > MAX_SAFE_U64_INT as f64 {
        return None;
    }
    Some(rounded as u64)
}

/// Converts a `u64` to `f64`.
///
/// Values above [`MAX_SAFE_U64_INT`] lose precision; callers only pass
/// counters that were checked on the way in.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn u64_to_f64(value: u64) -> f64 {
    value as f64
}

/// Converts a `usize` length to `f64`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn usize_to_f64(value: usize) -> f64 {
    value as f64
}
