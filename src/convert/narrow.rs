use std::fmt::Debug;

/// A float type a conversion can target.
///
/// Every conversion first produces an `f64`; the target then narrows it with
/// [`narrow`](Self::narrow). `Default` supplies the zero value callers fall
/// back to on failure.
pub trait FloatTarget: Copy + Default + PartialEq + Debug + Send + Sync + 'static {
    /// Type name used in error messages.
    const NAME: &'static str;

    /// Narrows the `f64` intermediate to this width. Never fails.
    fn narrow(value: f64) -> Self;
}

impl FloatTarget for f64 {
    const NAME: &'static str = "f64";

    fn narrow(value: f64) -> Self {
        value
    }
}

impl FloatTarget for f32 {
    const NAME: &'static str = "f32";

    /// Magnitudes above `f32::MAX` become the infinity of the same sign;
    /// everything else rounds to the nearest `f32`. `NaN` stays `NaN`.
    ///
    /// # Example
    /// ```
    /// use floatconv::convert::narrow::FloatTarget;
    ///
    /// assert_eq!(f32::narrow(f64::MAX), f32::INFINITY);
    /// assert_eq!(f32::narrow(-f64::MAX), f32::NEG_INFINITY);
    /// assert_eq!(f32::narrow(f64::from(f32::MAX)), f32::MAX);
    /// assert_eq!(f32::narrow(0.1), 0.1_f32);
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    fn narrow(value: f64) -> Self {
        if value.abs() > f64::from(Self::MAX) {
            Self::INFINITY.copysign(value as Self)
        } else {
            value as Self
        }
    }
}

#[cfg(feature = "f16")]
impl FloatTarget for half::f16 {
    const NAME: &'static str = "f16";

    /// Same policy as `f32`, against `f16::MAX`.
    fn narrow(value: f64) -> Self {
        if value.abs() > f64::from(Self::MAX) {
            if value.is_sign_negative() {
                Self::NEG_INFINITY
            } else {
                Self::INFINITY
            }
        } else {
            Self::from_f64(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_just_past_f32_max_overflow() {
        let past = f64::from(f32::MAX) * (1.0 + f64::EPSILON);
        assert_eq!(f32::narrow(past), f32::INFINITY);
        assert_eq!(f32::narrow(-past), f32::NEG_INFINITY);
    }

    #[test]
    fn infinities_and_nan_pass_through() {
        assert_eq!(f32::narrow(f64::INFINITY), f32::INFINITY);
        assert_eq!(f32::narrow(f64::NEG_INFINITY), f32::NEG_INFINITY);
        assert!(f32::narrow(f64::NAN).is_nan());
    }

    #[test]
    fn subnormal_results_round_to_nearest() {
        assert_eq!(f32::narrow(1e-50), 0.0);
        assert_eq!(f32::narrow(-1e-50).to_bits(), (-0.0_f32).to_bits());
        assert_eq!(f32::narrow(f64::from(f32::MIN_POSITIVE)), f32::MIN_POSITIVE);
    }

    #[test]
    fn wide_target_is_identity() {
        for v in [0.0, -0.0, f64::MAX, f64::MIN_POSITIVE, 1.0 / 3.0] {
            assert_eq!(f64::narrow(v).to_bits(), v.to_bits());
        }
    }

    #[cfg(feature = "f16")]
    #[test]
    fn half_width_saturates_like_f32() {
        use half::f16;

        assert_eq!(f16::narrow(1e6), f16::INFINITY);
        assert_eq!(f16::narrow(-1e6), f16::NEG_INFINITY);
        assert_eq!(f16::narrow(1.5), f16::from_f32(1.5));
    }
}
