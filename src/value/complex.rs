use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
};

use ordered_float::OrderedFloat;

/// A floating-point type usable as a complex component.
///
/// Implemented for `f32` and `f64`, which give the `complex64` and
/// `complex128` value kinds respectively.
pub trait Component: Copy + Debug + Default + Into<f64> {
    /// The absolute value, used when rendering the imaginary part.
    fn magnitude(self) -> Self;
}

impl Component for f32 {
    fn magnitude(self) -> Self {
        self.abs()
    }
}

impl Component for f64 {
    fn magnitude(self) -> Self {
        self.abs()
    }
}

/// Represents a complex number with real and imaginary parts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexNumber<T = f64> {
    /// The real part of the number.
    pub real:      T,
    /// The imaginary part of the number.
    pub imaginary: T,
}

impl<T: Component> ComplexNumber<T> {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Example
    /// ```
    /// use floatconv::value::ComplexNumber;
    /// let c = ComplexNumber::new(5.0_f32, -1.0);
    /// assert_eq!(c.real, 5.0);
    /// assert_eq!(c.imaginary, -1.0);
    /// ```
    #[must_use]
    pub const fn new(real: T, imaginary: T) -> Self {
        Self { real, imaginary }
    }

    /// Returns the real component widened to `f64`. The imaginary component
    /// is discarded.
    ///
    /// # Example
    /// ```
    /// use floatconv::value::ComplexNumber;
    /// let c = ComplexNumber::new(-2.5_f32, 7.0);
    /// assert_eq!(c.real_f64(), -2.5);
    /// ```
    #[must_use]
    pub fn real_f64(&self) -> f64 {
        self.real.into()
    }

    fn key(&self) -> (OrderedFloat<f64>, OrderedFloat<f64>) {
        (OrderedFloat(self.real.into()), OrderedFloat(self.imaginary.into()))
    }
}

impl<T: Component> Display for ComplexNumber<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let imaginary: f64 = self.imaginary.into();
        if imaginary.is_sign_negative() {
            write!(f, "({:?}-{:?}i)", self.real, self.imaginary.magnitude())
        } else {
            write!(f, "({:?}+{:?}i)", self.real, self.imaginary)
        }
    }
}

impl<T: Component> PartialEq for ComplexNumber<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T: Component> Eq for ComplexNumber<T> {}

impl<T: Component> PartialOrd for ComplexNumber<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Component> Ord for ComplexNumber<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}
