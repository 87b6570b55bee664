use num_traits::Bounded;

/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Converts an `f64` to `i64` by truncating toward zero.
///
/// Relies on the saturating float-to-integer conversion rule: values beyond
/// the `i64` range pin to the nearer bound, and NaN becomes `0`. The result
/// never rounds; `3.7` becomes `3` and `-3.7` becomes `-3`.
///
/// # Parameters
/// - `value`: The floating-point value to convert.
///
/// # Returns
/// The truncated integer value.
///
/// # Example
/// ```
/// use numcast::util::num::f64_to_i64_trunc;
///
/// assert_eq!(f64_to_i64_trunc(3.7), 3);
/// assert_eq!(f64_to_i64_trunc(-3.7), -3);
/// assert_eq!(f64_to_i64_trunc(f64::NAN), 0);
/// assert_eq!(f64_to_i64_trunc(1e300), i64::MAX);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub const fn f64_to_i64_trunc(value: f64) -> i64 {
    value as i64
}

/// Converts an `i64` to a bounded integer type, pinning out-of-range values
/// to the nearer bound.
///
/// # Parameters
/// - `v`: The integer to convert.
///
/// # Returns
/// The value unchanged when it fits, otherwise the destination type's
/// minimum or maximum.
///
/// # Example
/// ```
/// use numcast::util::num::saturate_i64;
///
/// assert_eq!(saturate_i64::<i8>(100), 100);
/// assert_eq!(saturate_i64::<i8>(1_000), i8::MAX);
/// assert_eq!(saturate_i64::<u16>(-4), 0);
/// ```
pub fn saturate_i64<T>(v: i64) -> T
    where T: TryFrom<i64> + Bounded
{
    T::try_from(v).unwrap_or_else(|_| if v < 0 { T::min_value() } else { T::max_value() })
}
