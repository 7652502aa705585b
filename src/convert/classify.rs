use crate::value::{Float64Convertible, Value};

/// The conversion rule that applies to a value, with the payload that rule
/// needs already extracted.
///
/// Every [`Value`] maps to exactly one category. Integer payloads are widened
/// to 128 bits so that a single rule covers every width; float payloads are
/// widened to `f64`, which is exact for `f32`.
#[derive(Debug, Clone, Copy)]
pub enum Category<'a> {
    /// The value brings its own conversion.
    Capability(&'a dyn Float64Convertible),
    /// A boolean.
    Bool(bool),
    /// A signed integer of any width.
    Signed(i128),
    /// An unsigned integer of any width.
    Unsigned(u128),
    /// A float of any width.
    Float(f64),
    /// The real component of a complex number.
    Complex(f64),
    /// Text to be parsed as a number.
    String(&'a str),
    /// A list, map or set; the payload is its element count.
    Length(usize),
    /// Nothing applies.
    Unsupported,
}

impl Category<'_> {
    /// A short human-readable name for the category.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Capability(_) => "capability",
            Self::Bool(_) => "boolean",
            Self::Signed(_) => "signed integer",
            Self::Unsigned(_) => "unsigned integer",
            Self::Float(_) => "float",
            Self::Complex(_) => "complex",
            Self::String(_) => "string",
            Self::Length(_) => "length",
            Self::Unsupported => "unsupported",
        }
    }
}

/// Classifies a value.
///
/// The arms are checked in a fixed priority order: capability, boolean,
/// signed integer, unsigned integer, float, complex, string, length-bearing
/// container, and finally the unsupported fallback. A capability implementor
/// is always classified as [`Category::Capability`], whatever it wraps.
///
/// Classification never fails.
///
/// # Example
/// ```
/// use floatconv::{
///     Value,
///     convert::classify::{Category, classify},
/// };
///
/// assert!(matches!(classify(&Value::from(-3_i8)), Category::Signed(-3)));
/// assert!(matches!(classify(&Value::from(vec![1, 2])), Category::Length(2)));
/// assert!(matches!(classify(&Value::Nil), Category::Unsupported));
/// ```
#[must_use]
pub fn classify(value: &Value) -> Category<'_> {
    match value {
        Value::Custom(convertible) => Category::Capability(convertible.as_ref()),
        Value::Bool(b) => Category::Bool(*b),
        Value::I8(v) => Category::Signed(i128::from(*v)),
        Value::I16(v) => Category::Signed(i128::from(*v)),
        Value::I32(v) => Category::Signed(i128::from(*v)),
        Value::I64(v) => Category::Signed(i128::from(*v)),
        Value::I128(v) => Category::Signed(*v),
        Value::Isize(v) => Category::Signed(*v as i128),
        Value::U8(v) => Category::Unsigned(u128::from(*v)),
        Value::U16(v) => Category::Unsigned(u128::from(*v)),
        Value::U32(v) => Category::Unsigned(u128::from(*v)),
        Value::U64(v) => Category::Unsigned(u128::from(*v)),
        Value::U128(v) => Category::Unsigned(*v),
        Value::Usize(v) => Category::Unsigned(*v as u128),
        Value::F32(v) => Category::Float(f64::from(*v)),
        Value::F64(v) => Category::Float(*v),
        Value::Complex64(c) => Category::Complex(c.real_f64()),
        Value::Complex128(c) => Category::Complex(c.real_f64()),
        Value::Str(s) => Category::String(s),
        Value::List(items) => Category::Length(items.len()),
        Value::Map(entries) => Category::Length(entries.len()),
        Value::Set(items) => Category::Length(items.len()),
        Value::Nil | Value::Struct(_) => Category::Unsupported,
    }
}
