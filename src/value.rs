/// The capability contract for self-converting types.
///
/// Declares the `Float64Convertible` trait. Any type implementing it can be
/// wrapped in a `Value` and takes over its own conversion, ahead of every
/// built-in rule.
pub mod capability;
/// Complex number support.
///
/// Defines the `ComplexNumber` type with `f32` or `f64` components. Only the
/// real part takes part in conversion; the imaginary part is kept for
/// rendering and ordering.
pub mod complex;
/// Record values.
///
/// Defines `StructValue`, a named or anonymous record. Records have no numeric
/// interpretation and always convert to an error.
pub mod structure;

pub mod core;

pub use self::{
    capability::Float64Convertible, complex::ComplexNumber, core::Value, structure::StructValue,
};
