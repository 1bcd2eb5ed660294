#[cfg(test)]
#[path = "../../tests/unit/utils/comparison_test.rs"]
mod comparison_test;

use crate::utils::Float;

/// Returns the largest of two timestamps. NaN loses to any number, so a broken travel time cannot
/// leak into a schedule through this function.
#[inline]
pub fn max_float(a: Float, b: Float) -> Float {
    match (a.is_nan(), b.is_nan()) {
        (true, _) => b,
        (_, true) => a,
        _ if a < b => b,
        _ => a,
    }
}

/// Returns the smallest of two timestamps. NaN loses to any number.
#[inline]
pub fn min_float(a: Float, b: Float) -> Float {
    match (a.is_nan(), b.is_nan()) {
        (true, _) => b,
        (_, true) => a,
        _ if a > b => b,
        _ => a,
    }
}
