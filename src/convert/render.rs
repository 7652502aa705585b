use std::fmt::{self, Display, Formatter};

use crate::value::{StructValue, Value};

/// Renders a value in its canonical diagnostic form.
///
/// | Value            | Rendered                    |
/// |------------------|-----------------------------|
/// | nil              | `<nil>`                     |
/// | string           | `"foo"`                     |
/// | float            | `3.5`, `1.0`, `inf`         |
/// | complex          | `(1.5+2.0i)`                |
/// | list             | `[]string{"one", "two"}`    |
/// | map              | `map[i64]string{1: "one"}`  |
/// | set              | `set[i64]{1, 2}`            |
/// | anonymous struct | `struct {}{}`               |
/// | named struct     | `Point{x: 1}`               |
///
/// # Example
/// ```
/// use floatconv::{Value, convert::render::render, value::StructValue};
///
/// assert_eq!(render(&Value::Nil), "<nil>");
/// assert_eq!(render(&Value::from(StructValue::empty())), "struct {}{}");
/// assert_eq!(render(&Value::from(vec!["one", "two"])), r#"[]string{"one", "two"}"#);
/// ```
#[must_use]
pub fn render(value: &Value) -> String {
    Rendered(value).to_string()
}

/// Returns the dynamic type name of a value.
///
/// Scalars use Rust's primitive names, text is `string`, complex numbers are
/// `complex64`/`complex128` by total width. Containers name their element
/// type, or `any` when they are empty or mixed.
///
/// # Example
/// ```
/// use floatconv::{Value, convert::render::type_name, value::StructValue};
///
/// assert_eq!(type_name(&Value::from(1.5_f32)), "f32");
/// assert_eq!(type_name(&Value::from(StructValue::empty())), "struct {}");
/// assert_eq!(type_name(&Value::List(Vec::new())), "[]any");
/// ```
#[must_use]
pub fn type_name(value: &Value) -> String {
    match value {
        Value::Nil => "<nil>".to_string(),
        Value::Bool(_) => "bool".to_string(),
        Value::I8(_) => "i8".to_string(),
        Value::I16(_) => "i16".to_string(),
        Value::I32(_) => "i32".to_string(),
        Value::I64(_) => "i64".to_string(),
        Value::I128(_) => "i128".to_string(),
        Value::Isize(_) => "isize".to_string(),
        Value::U8(_) => "u8".to_string(),
        Value::U16(_) => "u16".to_string(),
        Value::U32(_) => "u32".to_string(),
        Value::U64(_) => "u64".to_string(),
        Value::U128(_) => "u128".to_string(),
        Value::Usize(_) => "usize".to_string(),
        Value::F32(_) => "f32".to_string(),
        Value::F64(_) => "f64".to_string(),
        Value::Complex64(_) => "complex64".to_string(),
        Value::Complex128(_) => "complex128".to_string(),
        Value::Str(_) => "string".to_string(),
        Value::List(items) => format!("[]{}", common_type(items.iter())),
        Value::Map(entries) => {
            format!("map[{}]{}",
                    common_type(entries.keys()),
                    common_type(entries.values()))
        },
        Value::Set(items) => format!("set[{}]", common_type(items.iter())),
        Value::Struct(s) => struct_type_name(s),
        Value::Custom(convertible) => convertible.type_name().to_string(),
    }
}

fn common_type<'a>(mut values: impl Iterator<Item = &'a Value>) -> String {
    let Some(first) = values.next().map(type_name) else {
        return "any".to_string();
    };

    if values.all(|v| type_name(v) == first) {
        first
    } else {
        "any".to_string()
    }
}

fn struct_type_name(s: &StructValue) -> String {
    if let Some(name) = &s.name {
        return name.clone();
    }
    if s.fields.is_empty() {
        return "struct {}".to_string();
    }

    let fields = s.fields
                  .iter()
                  .map(|(name, value)| format!("{name} {}", type_name(value)))
                  .collect::<Vec<_>>()
                  .join("; ");
    format!("struct {{ {fields} }}")
}

struct Rendered<'a>(&'a Value);

impl Rendered<'_> {
    fn write_items<'v>(f: &mut Formatter<'_>, items: impl Iterator<Item = &'v Value>) -> fmt::Result {
        for (index, item) in items.enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", Rendered(item))?;
        }
        Ok(())
    }
}

impl Display for Rendered<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let value = self.0;
        match value {
            Value::Nil => write!(f, "<nil>"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::I8(n) => write!(f, "{n}"),
            Value::I16(n) => write!(f, "{n}"),
            Value::I32(n) => write!(f, "{n}"),
            Value::I64(n) => write!(f, "{n}"),
            Value::I128(n) => write!(f, "{n}"),
            Value::Isize(n) => write!(f, "{n}"),
            Value::U8(n) => write!(f, "{n}"),
            Value::U16(n) => write!(f, "{n}"),
            Value::U32(n) => write!(f, "{n}"),
            Value::U64(n) => write!(f, "{n}"),
            Value::U128(n) => write!(f, "{n}"),
            Value::Usize(n) => write!(f, "{n}"),
            Value::F32(r) => write!(f, "{r:?}"),
            Value::F64(r) => write!(f, "{r:?}"),
            Value::Complex64(c) => write!(f, "{c}"),
            Value::Complex128(c) => write!(f, "{c}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::List(items) => {
                write!(f, "{}{{", type_name(value))?;
                Self::write_items(f, items.iter())?;
                write!(f, "}}")
            },
            Value::Set(items) => {
                write!(f, "{}{{", type_name(value))?;
                Self::write_items(f, items.iter())?;
                write!(f, "}}")
            },
            Value::Map(entries) => {
                write!(f, "{}{{", type_name(value))?;
                for (index, (key, item)) in entries.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", Rendered(key), Rendered(item))?;
                }
                write!(f, "}}")
            },
            Value::Struct(s) => {
                write!(f, "{}{{", struct_type_name(s))?;
                for (index, (name, field)) in s.fields.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}: {}", Rendered(field))?;
                }
                write!(f, "}}")
            },
            Value::Custom(convertible) => write!(f, "{convertible:?}"),
        }
    }
}
