use crate::{
    convert::classify::{Category, classify},
    error::{ConvResult, ConversionError},
    util::num::{signed_to_f64, unsigned_to_f64, usize_to_f64},
    value::Value,
};

/// Applies the coercion rule for the value's category and returns the `f64`
/// intermediate.
///
/// `target` names the requested float type and only appears in error text.
///
/// # Errors
/// Returns [`ConversionError::Unsupported`] for nil, records and text that is
/// not a number, and whatever a capability implementation returns for
/// [`Category::Capability`].
///
/// # Example
/// ```
/// use floatconv::{Value, convert::rules::coerce};
///
/// assert_eq!(coerce(&Value::from(true), "f64").unwrap(), 1.0);
/// assert_eq!(coerce(&Value::from("3.5"), "f64").unwrap(), 3.5);
/// assert_eq!(coerce(&Value::from(vec!["one", "two"]), "f64").unwrap(), 2.0);
/// assert!(coerce(&Value::Nil, "f64").is_err());
/// ```
pub fn coerce(value: &Value, target: &'static str) -> ConvResult<f64> {
    match classify(value) {
        Category::Capability(convertible) => convertible.float64(),
        Category::Bool(b) => Ok(bool_to_f64(b)),
        Category::Signed(v) => Ok(signed_to_f64(v)),
        Category::Unsigned(v) => Ok(unsigned_to_f64(v)),
        Category::Float(v) | Category::Complex(v) => Ok(v),
        Category::String(text) => {
            parse_text(text).ok_or_else(|| ConversionError::unsupported(value, target))
        },
        Category::Length(len) => Ok(usize_to_f64(len)),
        Category::Unsupported => Err(ConversionError::unsupported(value, target)),
    }
}

/// Parses text as a float, falling back to boolean words.
///
/// The text must be a complete Rust float literal as accepted by
/// `str::parse::<f64>` (`"3.5"`, `"-1e10"`, `"inf"`, `"NaN"`). Surrounding
/// whitespace is not trimmed. When numeric parsing fails the boolean words of
/// [`parse_bool_word`] are tried.
///
/// # Example
/// ```
/// use floatconv::convert::rules::parse_text;
///
/// assert_eq!(parse_text("-2.5"), Some(-2.5));
/// assert_eq!(parse_text("True"), Some(1.0));
/// assert_eq!(parse_text(" 1"), None);
/// assert_eq!(parse_text(""), None);
/// ```
#[must_use]
pub fn parse_text(text: &str) -> Option<f64> {
    text.parse::<f64>()
        .ok()
        .or_else(|| parse_bool_word(text).map(bool_to_f64))
}

/// Recognizes the boolean spellings accepted in numeric text.
///
/// # Example
/// ```
/// use floatconv::convert::rules::parse_bool_word;
///
/// assert_eq!(parse_bool_word("t"), Some(true));
/// assert_eq!(parse_bool_word("FALSE"), Some(false));
/// assert_eq!(parse_bool_word("yes"), None);
/// ```
#[must_use]
pub fn parse_bool_word(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

const fn bool_to_f64(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}
