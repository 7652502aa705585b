use std::{error::Error, sync::Arc};

use crate::{convert::render, value::Value};

/// Result type returned by every conversion.
pub type ConvResult<T> = Result<T, ConversionError>;

/// The error returned when a value cannot be converted to a float.
///
/// There is a single semantic failure, an unsupported conversion. It arises
/// either when the classifier reaches its fallback (or a string does not
/// parse), or when a [`Float64Convertible`] implementation refuses to produce
/// a number.
///
/// [`Float64Convertible`]: crate::value::Float64Convertible
#[derive(Debug, Clone)]
pub enum ConversionError {
    /// No coercion rule applies to the value.
    Unsupported {
        /// Canonical rendering of the rejected value.
        value:     String,
        /// Dynamic type name of the rejected value.
        type_name: String,
        /// Name of the requested float type.
        target:    &'static str,
    },
    /// A capability implementation reported its own failure. The
    /// implementation's error is kept as is and exposed through
    /// [`source`](Error::source).
    Custom(Arc<dyn Error + Send + Sync>),
}

impl ConversionError {
    /// Builds the unsupported-conversion error for `value`.
    ///
    /// This is the only place conversion error text is produced from a value,
    /// so the message shape is the same for every category.
    ///
    /// # Example
    /// ```
    /// use floatconv::{ConversionError, Value};
    ///
    /// let err = ConversionError::unsupported(&Value::from("foo"), "f64");
    /// assert_eq!(err.to_string(), r#"cannot convert "foo" (type string) to f64"#);
    ///
    /// let err = ConversionError::unsupported(&Value::Nil, "f32");
    /// assert_eq!(err.to_string(), "cannot convert <nil> (type <nil>) to f32");
    /// ```
    #[must_use]
    pub fn unsupported(value: &Value, target: &'static str) -> Self {
        Self::Unsupported { value: render::render(value),
                            type_name: render::type_name(value),
                            target }
    }

    /// Builds an error for use inside a capability implementation.
    ///
    /// Accepts a message or any error type; the error stays reachable through
    /// [`source`](Error::source) so callers can downcast it.
    ///
    /// # Example
    /// ```
    /// use std::{error::Error, num::ParseFloatError};
    ///
    /// use floatconv::ConversionError;
    ///
    /// let err = ConversionError::custom("sensor offline");
    /// assert_eq!(err.to_string(), "sensor offline");
    ///
    /// let err = ConversionError::custom("x".parse::<f64>().unwrap_err());
    /// assert!(err.source().unwrap().is::<ParseFloatError>());
    /// ```
    #[must_use]
    pub fn custom(error: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self::Custom(Arc::from(error.into()))
    }
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported { value,
                                type_name,
                                target, } => {
                write!(f, "cannot convert {value} (type {type_name}) to {target}")
            },
            Self::Custom(inner) => write!(f, "{inner}"),
        }
    }
}

impl Error for ConversionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unsupported { .. } => None,
            Self::Custom(inner) => Some(inner.as_ref()),
        }
    }
}

impl PartialEq for ConversionError {
    /// Capability errors compare by message, as the wrapped error types need
    /// not implement `PartialEq`.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Unsupported { value: v1,
                                 type_name: t1,
                                 target: g1, },
             Self::Unsupported { value: v2,
                                 type_name: t2,
                                 target: g2, }) => v1 == v2 && t1 == t2 && g1 == g2,
            (Self::Custom(a), Self::Custom(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

impl Eq for ConversionError {}
