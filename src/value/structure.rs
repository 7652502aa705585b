use crate::value::core::Value;

/// A record-like value with ordered, named fields.
///
/// Structs have no coercion rule; they exist so that callers can hand the
/// converter record-shaped input and get a faithful diagnostic back.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct StructValue {
    /// The struct's name, or `None` for an anonymous struct.
    pub name:   Option<String>,
    /// Field names and values in declaration order.
    pub fields: Vec<(String, Value)>,
}

impl StructValue {
    /// An anonymous struct without fields, the equivalent of `struct {}`.
    #[must_use]
    pub const fn empty() -> Self {
        Self { name:   None,
               fields: Vec::new(), }
    }

    /// An anonymous struct with the given fields.
    ///
    /// # Example
    /// ```
    /// use floatconv::{Value, value::StructValue};
    ///
    /// let s = StructValue::anonymous([("x", Value::from(1_i64))]);
    /// assert_eq!(s.fields.len(), 1);
    /// assert!(s.name.is_none());
    /// ```
    #[must_use]
    pub fn anonymous<K, I>(fields: I) -> Self
        where K: Into<String>,
              I: IntoIterator<Item = (K, Value)>
    {
        Self { name:   None,
               fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(), }
    }

    /// A named struct with the given fields.
    #[must_use]
    pub fn named<N, K, I>(name: N, fields: I) -> Self
        where N: Into<String>,
              K: Into<String>,
              I: IntoIterator<Item = (K, Value)>
    {
        Self { name: Some(name.into()),
               ..Self::anonymous(fields) }
    }
}
