use std::fmt::Debug;

use crate::error::ConvResult;

/// A type that knows how to turn itself into an `f64`.
///
/// Wrapping an implementor with [`Value::custom`] makes the converter call
/// [`float64`](Self::float64) instead of applying any built-in rule, whatever
/// the implementor's underlying representation is. Both the number and the
/// error are returned to the caller exactly as produced.
///
/// # Example
/// ```
/// use floatconv::{ConvResult, Value, float64, value::Float64Convertible};
///
/// /// Celsius reading reported in Kelvin.
/// #[derive(Debug)]
/// struct Celsius(f64);
///
/// impl Float64Convertible for Celsius {
///     fn float64(&self) -> ConvResult<f64> {
///         Ok(self.0 + 273.15)
///     }
/// }
///
/// assert_eq!(float64(Value::custom(Celsius(0.0))).unwrap(), 273.15);
/// ```
///
/// [`Value::custom`]: crate::Value::custom
pub trait Float64Convertible: Debug + Send + Sync {
    /// Produces the value's `f64` form, or the reason it has none.
    fn float64(&self) -> ConvResult<f64>;

    /// The type name shown when the value appears in diagnostics.
    fn type_name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
