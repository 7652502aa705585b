/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;
/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Widens a signed integer of any width to `f64`.
///
/// Values whose magnitude is at most [`MAX_SAFE_I64_INT`] convert exactly.
/// Larger values round to the nearest representable `f64`; the lost precision
/// is accepted and never reported as an error.
///
/// ## Example
/// ```
/// use floatconv::util::num::{MAX_SAFE_I64_INT, signed_to_f64};
///
/// assert_eq!(signed_to_f64(-42), -42.0);
/// assert_eq!(signed_to_f64(i128::from(MAX_SAFE_I64_INT)), 9_007_199_254_740_991.0);
///
/// // Past 2^53 neighbouring integers collapse onto the same float.
/// let big = 1_i128 << 53;
/// assert_eq!(signed_to_f64(big + 1), signed_to_f64(big));
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn signed_to_f64(value: i128) -> f64 {
    value as f64
}

/// Widens an unsigned integer of any width to `f64`.
///
/// Same precision policy as [`signed_to_f64`]: exact up to
/// [`MAX_SAFE_U64_INT`], round-to-nearest beyond it.
///
/// ## Example
/// ```
/// use floatconv::util::num::unsigned_to_f64;
///
/// assert_eq!(unsigned_to_f64(10), 10.0);
/// assert_eq!(unsigned_to_f64(u128::from(u64::MAX)), 18_446_744_073_709_551_615.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn unsigned_to_f64(value: u128) -> f64 {
    value as f64
}

/// Converts a container length to `f64`.
///
/// ## Example
/// ```
/// use floatconv::util::num::usize_to_f64;
///
/// assert_eq!(usize_to_f64(2), 2.0);
/// ```
#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    unsigned_to_f64(value as u128)
}

/// Returns `true` if the signed integer lies within the contiguous range of
/// integers `f64` represents exactly, `|v| <= 2^53 - 1`.
///
/// Some integers beyond that range (such as `2^53` itself) still convert
/// exactly; this only answers whether every neighbour does too.
///
/// ## Example
/// ```
/// use floatconv::util::num::{MAX_SAFE_I64_INT, is_exact_signed};
///
/// assert!(is_exact_signed(i128::from(MAX_SAFE_I64_INT)));
/// assert!(is_exact_signed(-i128::from(MAX_SAFE_I64_INT)));
/// assert!(!is_exact_signed(i128::from(i64::MAX)));
/// ```
#[must_use]
pub const fn is_exact_signed(value: i128) -> bool {
    value.unsigned_abs() <= MAX_SAFE_U64_INT as u128
}

/// Returns `true` if the unsigned integer lies within the contiguous range of
/// integers `f64` represents exactly, `v <= 2^53 - 1`.
///
/// ## Example
/// ```
/// use floatconv::util::num::{MAX_SAFE_U64_INT, is_exact_unsigned};
///
/// assert!(is_exact_unsigned(u128::from(MAX_SAFE_U64_INT)));
/// assert!(!is_exact_unsigned(u128::from(MAX_SAFE_U64_INT) + 1));
/// ```
#[must_use]
pub const fn is_exact_unsigned(value: u128) -> bool {
    value <= MAX_SAFE_U64_INT as u128
}
