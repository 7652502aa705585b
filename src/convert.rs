/// Category classification.
///
/// Maps a `Value` to the single `Category` whose rule applies, checked in a
/// fixed priority order that puts capability implementors first.
pub mod classify;
/// Narrowing from the `f64` intermediate.
///
/// Declares the `FloatTarget` trait implemented by each target width, and the
/// overflow policy used when the target is narrower than `f64`: magnitudes
/// past the target's largest finite value become infinities.
pub mod narrow;
/// Canonical rendering for diagnostics.
///
/// Produces the textual form and type name of any value. Conversion error
/// messages are built from these two functions and nothing else.
pub mod render;
/// Per-category coercion rules.
///
/// Turns a classified value into an `f64`, or into the error describing why it
/// cannot be one.
pub mod rules;

pub mod core;

pub use self::core::{Conv, float, float_or_zero, float32, float64};
