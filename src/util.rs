/// Numeric widening helpers.
///
/// This module provides the integer-to-float widening used by the coercion
/// rules, together with predicates reporting whether a given integer is inside
/// the range that `f64` represents exactly (`|v| <= 2^53 - 1`).
///
/// Widening never fails: precision loss past `2^53` is accepted behavior, and
/// the predicates exist so that callers who care can detect it.
pub mod num;
