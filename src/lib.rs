//! # floatconv
//!
//! floatconv converts values of unknown static type into `f32` or `f64`.
//! A value is classified into one category (capability, boolean, integer,
//! float, complex, string, container, unsupported) and the category's rule
//! decides the number, so loosely-typed input such as command arguments or
//! parsed configuration coerces the same way everywhere.
//!
//! ```
//! use floatconv::{Value, float32, float64};
//!
//! assert_eq!(float64("3.5").unwrap(), 3.5);
//! assert_eq!(float32(f64::MAX).unwrap(), f32::INFINITY);
//! assert_eq!(float64(vec!["one", "two"]).unwrap(), 2.0);
//! assert_eq!(float64(Value::Nil).unwrap_err().to_string(),
//!            "cannot convert <nil> (type <nil>) to f64");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Orchestrates the conversion of a value into a float.
///
/// This module ties together classification, the per-category coercion rules,
/// narrowing to the target width and error rendering. It exposes the public
/// entry points `float32`, `float64`, the generic `float`, and the reusable
/// `Conv` object.
///
/// # Responsibilities
/// - Classifies input values into exactly one category.
/// - Applies the category's rule to produce an `f64`.
/// - Narrows to the requested width with a defined overflow policy.
/// - Renders uniform error messages for unsupported input.
pub mod convert;
/// Provides the error types for conversion and literal parsing.
///
/// Conversion has a single failure kind, the unsupported conversion, whose
/// message always has the shape
/// `cannot convert <value> (type <type>) to <target>`. Literal parsing errors
/// carry line numbers.
pub mod error;
/// Reads the textual value notation.
///
/// This module lexes and parses literals such as `10u64`, `"3.5"`,
/// `{1: "one"}`, `struct {}` or `f64::MAX` into `Value`s. It is used by the
/// command-line tool and by fixture-driven tests; the converter itself never
/// needs it.
pub mod literal;
/// Converts batches of literals and collects the outcomes.
///
/// This module backs the command-line tool. It is the only part of the crate
/// that emits `tracing` events; the converter itself stays silent.
pub mod report;
/// General utilities for numeric widening.
///
/// # Responsibilities
/// - Widen integers of every width to `f64`.
/// - Report whether an integer is inside the range `f64` represents exactly.
pub mod util;
/// Defines the dynamically-typed input value.
///
/// This module declares the `Value` enum with one variant per supported kind,
/// the `ComplexNumber` and `StructValue` payload types, and the
/// `Float64Convertible` trait through which user types take over their own
/// conversion.
///
/// # Responsibilities
/// - Models every kind of input the converter accepts or rejects.
/// - Provides `From` conversions from Rust primitives and collections.
/// - Gives values a total order so they can key maps and sets.
pub mod value;

pub use convert::{Conv, float, float_or_zero, float32, float64};
pub use error::{ConvResult, ConversionError, ParseError};
pub use report::{Report, Width, get_report};
pub use value::Value;
