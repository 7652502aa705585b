use std::{
    cmp::Ordering,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet},
    hash::BuildHasher,
    sync::Arc,
};

use ordered_float::OrderedFloat;

use crate::{
    convert::render,
    value::{capability::Float64Convertible, complex::ComplexNumber, structure::StructValue},
};

/// A dynamically-typed input value.
///
/// This enum models every kind of value the converter can be handed: scalars
/// of each Rust width, strings, containers, records, user types carrying their
/// own conversion, and the absence of a value.
///
/// Values are built with `From` (`Value::from(3_u8)`, `Value::from("3.5")`,
/// `Value::from(vec![1, 2])`) or directly through the variants.
#[derive(Debug, Clone)]
pub enum Value {
    /// No value at all. Also produced from `None` and `()`.
    Nil,
    /// A boolean such as `true`.
    Bool(bool),
    /// An 8-bit signed integer.
    I8(i8),
    /// A 16-bit signed integer.
    I16(i16),
    /// A 32-bit signed integer.
    I32(i32),
    /// A 64-bit signed integer.
    I64(i64),
    /// A 128-bit signed integer.
    I128(i128),
    /// A pointer-sized signed integer.
    Isize(isize),
    /// An 8-bit unsigned integer.
    U8(u8),
    /// A 16-bit unsigned integer.
    U16(u16),
    /// A 32-bit unsigned integer.
    U32(u32),
    /// A 64-bit unsigned integer.
    U64(u64),
    /// A 128-bit unsigned integer.
    U128(u128),
    /// A pointer-sized unsigned integer.
    Usize(usize),
    /// A single precision float.
    F32(f32),
    /// A double precision float.
    F64(f64),
    /// A complex number with `f32` components.
    Complex64(ComplexNumber<f32>),
    /// A complex number with `f64` components.
    Complex128(ComplexNumber<f64>),
    /// A string such as `"3.5"`.
    Str(String),
    /// An ordered sequence, the stand-in for arrays, slices and vectors.
    List(Vec<Self>),
    /// A mapping with ordered keys.
    Map(BTreeMap<Self, Self>),
    /// A set of unique values.
    Set(BTreeSet<Self>),
    /// A record with named fields.
    Struct(StructValue),
    /// A user type implementing [`Float64Convertible`].
    Custom(Arc<dyn Float64Convertible>),
}

impl Value {
    /// Wraps a capability implementor so that its own conversion is used.
    ///
    /// # Example
    /// ```
    /// use floatconv::{ConvResult, Value, value::Float64Convertible};
    ///
    /// #[derive(Debug)]
    /// struct Always(f64);
    ///
    /// impl Float64Convertible for Always {
    ///     fn float64(&self) -> ConvResult<f64> {
    ///         Ok(self.0)
    ///     }
    /// }
    ///
    /// assert!(matches!(Value::custom(Always(1.0)), Value::Custom(_)));
    /// ```
    #[must_use]
    pub fn custom<C: Float64Convertible + 'static>(convertible: C) -> Self {
        Self::Custom(Arc::new(convertible))
    }

    /// Returns the dynamic type name used in diagnostics.
    ///
    /// # Example
    /// ```
    /// use floatconv::Value;
    ///
    /// assert_eq!(Value::from(1_u16).type_name(), "u16");
    /// assert_eq!(Value::from(vec!["a", "b"]).type_name(), "[]string");
    /// assert_eq!(Value::Nil.type_name(), "<nil>");
    /// ```
    #[must_use]
    pub fn type_name(&self) -> String {
        render::type_name(self)
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Nil => 0,
            Self::Bool(_) => 1,
            Self::I8(_) => 2,
            Self::I16(_) => 3,
            Self::I32(_) => 4,
            Self::I64(_) => 5,
            Self::I128(_) => 6,
            Self::Isize(_) => 7,
            Self::U8(_) => 8,
            Self::U16(_) => 9,
            Self::U32(_) => 10,
            Self::U64(_) => 11,
            Self::U128(_) => 12,
            Self::Usize(_) => 13,
            Self::F32(_) => 14,
            Self::F64(_) => 15,
            Self::Complex64(_) => 16,
            Self::Complex128(_) => 17,
            Self::Str(_) => 18,
            Self::List(_) => 19,
            Self::Map(_) => 20,
            Self::Set(_) => 21,
            Self::Struct(_) => 22,
            Self::Custom(_) => 23,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", render::render(self))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    /// Orders values first by kind, then by payload. Floats use a total
    /// order in which `NaN` equals itself, so values can key maps and sets.
    fn cmp(&self, other: &Self) -> Ordering {
        use Value::{
            Bool, Complex64, Complex128, Custom, F32, F64, I8, I16, I32, I64, I128, Isize, List,
            Map, Set, Str, Struct, U8, U16, U32, U64, U128, Usize,
        };

        match (self, other) {
            (Bool(a), Bool(b)) => a.cmp(b),
            (I8(a), I8(b)) => a.cmp(b),
            (I16(a), I16(b)) => a.cmp(b),
            (I32(a), I32(b)) => a.cmp(b),
            (I64(a), I64(b)) => a.cmp(b),
            (I128(a), I128(b)) => a.cmp(b),
            (Isize(a), Isize(b)) => a.cmp(b),
            (U8(a), U8(b)) => a.cmp(b),
            (U16(a), U16(b)) => a.cmp(b),
            (U32(a), U32(b)) => a.cmp(b),
            (U64(a), U64(b)) => a.cmp(b),
            (U128(a), U128(b)) => a.cmp(b),
            (Usize(a), Usize(b)) => a.cmp(b),
            (F32(a), F32(b)) => OrderedFloat(*a).cmp(&OrderedFloat(*b)),
            (F64(a), F64(b)) => OrderedFloat(*a).cmp(&OrderedFloat(*b)),
            (Complex64(a), Complex64(b)) => a.cmp(b),
            (Complex128(a), Complex128(b)) => a.cmp(b),
            (Str(a), Str(b)) => a.cmp(b),
            (List(a), List(b)) => a.cmp(b),
            (Map(a), Map(b)) => a.cmp(b),
            (Set(a), Set(b)) => a.cmp(b),
            (Struct(a), Struct(b)) => a.cmp(b),
            (Custom(a), Custom(b)) => {
                a.type_name()
                 .cmp(b.type_name())
                 .then_with(|| format!("{a:?}").cmp(&format!("{b:?}")))
            },
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

macro_rules! from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

from_scalar! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    ComplexNumber<f32> => Complex64,
    ComplexNumber<f64> => Complex128,
    String => Str,
    StructValue => Struct,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Nil
    }
}

impl From<Arc<dyn Float64Convertible>> for Value {
    fn from(v: Arc<dyn Float64Convertible>) -> Self {
        Self::Custom(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Nil, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(v: [T; N]) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<Value>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(v: BTreeMap<K, V>) -> Self {
        Self::Map(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<Value>, V: Into<Value>, S: BuildHasher> From<HashMap<K, V, S>> for Value {
    fn from(v: HashMap<K, V, S>) -> Self {
        Self::Map(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<T: Into<Value>> From<BTreeSet<T>> for Value {
    fn from(v: BTreeSet<T>) -> Self {
        Self::Set(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, S: BuildHasher> From<HashSet<T, S>> for Value {
    fn from(v: HashSet<T, S>) -> Self {
        Self::Set(v.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_and_unit_become_nil() {
        assert_eq!(Value::from(None::<i32>), Value::Nil);
        assert_eq!(Value::from(()), Value::Nil);
        assert_eq!(Value::from(Some(3_i32)), Value::I32(3));
    }

    #[test]
    fn hash_collections_are_normalized_to_ordered_ones() {
        let map: HashMap<i64, &str> = [(2, "two"), (1, "one")].into_iter().collect();
        let Value::Map(entries) = Value::from(map) else {
            panic!("expected a map");
        };
        let keys: Vec<_> = entries.keys().cloned().collect();
        assert_eq!(keys, vec![Value::I64(1), Value::I64(2)]);
    }

    #[test]
    fn equal_payloads_of_different_kinds_differ() {
        assert_ne!(Value::I32(1), Value::I64(1));
        assert_ne!(Value::F32(1.0), Value::F64(1.0));
        assert!(Value::Nil < Value::Bool(false));
    }

    #[test]
    fn nan_is_usable_as_a_set_element() {
        let set: BTreeSet<Value> = [Value::F64(f64::NAN), Value::F64(f64::NAN)].into_iter()
                                                                                .collect();
        assert_eq!(set.len(), 1);
    }
}
