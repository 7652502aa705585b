use crate::{
    convert::{narrow::FloatTarget, rules::coerce},
    error::{ConvResult, ConversionError},
    value::Value,
};

/// Converts a value to the float type `T`.
///
/// The value is classified, coerced to an `f64` by its category's rule, then
/// narrowed to `T`. Overflow during narrowing yields an infinity, not an
/// error.
///
/// # Errors
/// Returns a [`ConversionError`] when no rule applies to the value, when text
/// does not parse, or when a capability implementation fails.
///
/// # Example
/// ```
/// use floatconv::{Value, float};
///
/// assert_eq!(float::<f32>(&Value::from(f64::MAX)).unwrap(), f32::INFINITY);
/// assert_eq!(float::<f64>(&Value::from("3.5")).unwrap(), 3.5);
/// ```
pub fn float<T: FloatTarget>(value: &Value) -> ConvResult<T> {
    coerce(value, T::NAME).map(T::narrow)
}

/// Converts a value to `T`, pairing the result with the error instead of
/// choosing between them.
///
/// On failure the number is `T`'s zero value.
///
/// # Example
/// ```
/// use floatconv::{Value, float_or_zero};
///
/// let (n, err) = float_or_zero::<f64>(&Value::Nil);
/// assert_eq!(n, 0.0);
/// assert_eq!(err.unwrap().to_string(), "cannot convert <nil> (type <nil>) to f64");
///
/// let (n, err) = float_or_zero::<f32>(&Value::from(true));
/// assert_eq!((n, err), (1.0, None));
/// ```
#[must_use]
pub fn float_or_zero<T: FloatTarget>(value: &Value) -> (T, Option<ConversionError>) {
    match float(value) {
        Ok(n) => (n, None),
        Err(e) => (T::default(), Some(e)),
    }
}

/// Converts any value to `f32`.
///
/// The value is taken by ownership. A `&Value` is accepted too but is cloned
/// first; use [`float`] or [`Conv::float32`] to convert a borrowed value
/// without copying it.
///
/// # Errors
/// See [`float`].
///
/// # Example
/// ```
/// use floatconv::float32;
///
/// assert_eq!(float32(10_u64).unwrap(), 10.0);
/// assert_eq!(float32(vec![1, 2, 3]).unwrap(), 3.0);
/// assert!(float32("foo").is_err());
/// ```
pub fn float32(value: impl Into<Value>) -> ConvResult<f32> {
    float(&value.into())
}

/// Converts any value to `f64`.
///
/// The value is taken by ownership. A `&Value` is accepted too but is cloned
/// first; use [`float`] or [`Conv::float64`] to convert a borrowed value
/// without copying it.
///
/// # Errors
/// See [`float`].
///
/// # Example
/// ```
/// use floatconv::float64;
///
/// assert_eq!(float64(-7_i8).unwrap(), -7.0);
/// assert_eq!(float64(2.5_f32).unwrap(), 2.5);
/// assert_eq!(float64(false).unwrap(), 0.0);
/// ```
pub fn float64(value: impl Into<Value>) -> ConvResult<f64> {
    float(&value.into())
}

/// A reusable converter.
///
/// `Conv` holds no state. Its methods produce exactly the same results as the
/// free functions for every input, so the two calling styles are
/// interchangeable; the object form exists for callers that want to pass a
/// converter around or store one in a struct.
///
/// # Example
/// ```
/// use floatconv::{Conv, Value, float32};
///
/// let conv = Conv::new();
/// let value = Value::from("1.5");
/// assert_eq!(conv.float32(&value), float32("1.5"));
/// assert_eq!(conv.float64(&Value::from([1, 2])).unwrap(), 2.0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Conv;

impl Conv {
    /// Creates a converter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Converts a value to `f32`. Same result as [`float32`], without taking
    /// ownership of the value.
    ///
    /// # Errors
    /// See [`float`].
    pub fn float32(&self, value: &Value) -> ConvResult<f32> {
        float(value)
    }

    /// Converts a value to `f64`. Same result as [`float64`], without taking
    /// ownership of the value.
    ///
    /// # Errors
    /// See [`float`].
    pub fn float64(&self, value: &Value) -> ConvResult<f64> {
        float(value)
    }

    /// Converts a value to `T`. Identical to [`float`].
    ///
    /// # Errors
    /// See [`float`].
    pub fn float<T: FloatTarget>(&self, value: &Value) -> ConvResult<T> {
        float(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_yields_zero_of_each_width() {
        assert_eq!(float32("nope").unwrap_or_default(), 0.0);
        assert_eq!(float64(()).unwrap_or_default(), 0.0);
    }

    #[test]
    fn target_name_appears_in_error() {
        let err32 = float32(()).unwrap_err().to_string();
        let err64 = float64(()).unwrap_err().to_string();
        assert!(err32.ends_with(" to f32"), "{err32}");
        assert!(err64.ends_with(" to f64"), "{err64}");
    }

    #[test]
    fn float64_results_are_fixed_points() {
        for input in [Value::from("0.1"), Value::from(u64::MAX), Value::from(-0.0_f32)] {
            let once = float64(&input).unwrap();
            let twice = float64(once).unwrap();
            assert_eq!(once.to_bits(), twice.to_bits());
        }
    }
}
