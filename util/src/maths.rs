//! Utility maths functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use num_traits::Float;

/// Apply a deadband to an input, returning zero when `value` lies within
/// `threshold` of zero and `value` unchanged otherwise.
///
/// The comparison is inclusive, an input of exactly `threshold` is zeroed.
pub fn deadband<T>(value: T, threshold: T) -> T
where
    T: Float
{
    if value.abs() <= threshold.abs() {
        T::zero()
    }
    else {
        value
    }
}
